use std::collections::HashMap;

use crate::multigraph::Multigraph;

/// Decides whether `g` is a forest: no self-loops, and no cycles among
/// its non-loop edges.
///
/// Implemented as leaf pruning: repeatedly strip vertices with exactly
/// one incident edge-record (and that edge), until no leaves remain.
/// `g` is a forest iff the residual edge set is then empty. Self-loops
/// are excluded up front since a vertex cannot be reduced away through
/// its own loop.
pub fn is_forest(g: &Multigraph) -> bool {
    if g.edges().iter().any(|&(a, b)| a == b) {
        return false;
    }
    if g.edge_count() > g.vertex_count() {
        return false;
    }
    if g.edge_count() == 1 {
        return true;
    }

    let mut degree: HashMap<usize, usize> = HashMap::new();
    for &(a, b) in g.edges() {
        *degree.entry(a).or_insert(0) += 1;
        *degree.entry(b).or_insert(0) += 1;
    }

    let mut residual: Vec<(usize, usize)> = g.edges().to_vec();
    loop {
        let leaves: Vec<usize> = degree
            .iter()
            .filter(|&(_, &count)| count == 1)
            .map(|(&v, _)| v)
            .collect();
        if leaves.is_empty() {
            break;
        }
        for leaf in leaves {
            if degree.get(&leaf).copied() != Some(1) {
                continue; // already consumed as the other endpoint of a prior leaf's edge
            }
            let Some(pos) = residual
                .iter()
                .position(|&(a, b)| a == leaf || b == leaf)
            else {
                continue;
            };
            let (a, b) = residual.remove(pos);
            let other = if a == leaf { b } else { a };
            decrement(&mut degree, leaf);
            decrement(&mut degree, other);
        }
    }

    residual.is_empty()
}

fn decrement(degree: &mut HashMap<usize, usize>, v: usize) {
    if let Some(count) = degree.get_mut(&v) {
        *count -= 1;
        if *count == 0 {
            degree.remove(&v);
        }
    }
}
