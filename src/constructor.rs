//! The library of named multigraph builders behind the CLI's `--type`
//! flag. Each constructor is specified only by its topology; they are
//! peripheral to the solver and never consult it.

use itertools::Itertools;

use crate::multigraph::{Edge, Multigraph};

/// `complete_graph(n)`: every pair of `n` vertices joined by one edge.
pub fn complete_graph(n: usize) -> Multigraph {
    Multigraph::from_edges((0..n).tuple_combinations())
}

/// `wheel_graph(n)`: a hub vertex `0` connected to `n` outer vertices
/// `1..=n`, which themselves form a cycle.
pub fn wheel_graph(n_spokes: usize) -> Multigraph {
    let mut edges = Vec::new();
    for spoke in 1..=n_spokes {
        edges.push((0, spoke));
    }
    for spoke in 1..n_spokes {
        edges.push((spoke, spoke + 1));
    }
    if n_spokes >= 2 {
        edges.push((n_spokes, 1));
    }
    Multigraph::from_edges(edges)
}

/// `friendship_graph(n, k)`: `n` cycles of length `k`, all sharing one
/// central vertex `0`. `k` must be at least 3 for each cycle to be a
/// genuine cycle; `k < 3` degenerates to a hanging edge/loop per cycle.
pub fn friendship_graph(n_cycles: usize, k: usize) -> Multigraph {
    let mut edges = Vec::new();
    let mut next_id = 1usize;
    for _ in 0..n_cycles {
        if k == 0 {
            continue;
        }
        if k == 1 {
            edges.push((0, 0));
            continue;
        }
        let mut prev = 0usize;
        for _ in 1..k {
            edges.push((prev, next_id));
            prev = next_id;
            next_id += 1;
        }
        edges.push((prev, 0));
    }
    Multigraph::from_edges(edges)
}

/// One balloon: a `neck` vertex joined by an edge to a `knot` vertex
/// carrying a self-loop.
fn balloon_unit(neck: usize, knot: usize, edges: &mut Vec<Edge>) {
    edges.push((neck, knot));
    edges.push((knot, knot));
}

/// `balloon_path(count)`: `count` backbone vertices `0..count` joined
/// in a path, each carrying its own pendant balloon (a knotted,
/// self-looped vertex hanging off it).
pub fn balloon_path(count: usize) -> Multigraph {
    let mut edges = Vec::new();
    for i in 0..count.saturating_sub(1) {
        edges.push((i, i + 1));
    }
    for i in 0..count {
        balloon_unit(i, count + i, &mut edges);
    }
    Multigraph::from_edges(edges)
}

/// `balloon_cycle(count)`: as [`balloon_path`], but the backbone closes
/// into a cycle instead of running as a path.
pub fn balloon_cycle(count: usize) -> Multigraph {
    let mut g = balloon_path(count);
    if count >= 2 {
        let mut edges = g.edges().to_vec();
        edges.push((count - 1, 0));
        g = Multigraph::from_edges(edges);
    }
    g
}

/// `balloon_family(count)`: `count` disjoint balloons, sharing no
/// vertex -- a family of separate components rather than a single
/// connected backbone.
pub fn balloon_family(count: usize) -> Multigraph {
    let mut edges = Vec::new();
    for i in 0..count {
        balloon_unit(2 * i, 2 * i + 1, &mut edges);
    }
    Multigraph::from_edges(edges)
}

/// `hanging_tree(n_leaves)`: a central vertex `0` connected to `n`
/// leaves `1..=n`, each leaf also carrying a self-loop.
pub fn hanging_tree(n_leaves: usize) -> Multigraph {
    let mut edges = Vec::new();
    for leaf in 1..=n_leaves {
        edges.push((0, leaf));
        edges.push((leaf, leaf));
    }
    Multigraph::from_edges(edges)
}

/// `loopy_star(n, k)`: a star with `n` spokes (hub `0`, outer vertices
/// `1..=n`), each outer vertex carrying `k` self-loops.
pub fn loopy_star(n_spokes: usize, k: usize) -> Multigraph {
    let mut edges = Vec::new();
    for spoke in 1..=n_spokes {
        edges.push((0, spoke));
        for _ in 0..k {
            edges.push((spoke, spoke));
        }
    }
    Multigraph::from_edges(edges)
}

/// `hypercube(d)`: vertices `0..2^d`, edges joining any pair of
/// vertices whose binary representations differ in exactly one bit.
pub fn hypercube(dim: u32) -> Multigraph {
    let n = 1usize << dim;
    let mut edges = Vec::new();
    for v in 0..n {
        for bit in 0..dim {
            let neighbor = v ^ (1 << bit);
            if neighbor > v {
                edges.push((v, neighbor));
            }
        }
    }
    Multigraph::from_edges(edges)
}

/// `double_ngon(n)`: two disjoint `n`-cycles (`0..n` and `n..2n`) with
/// corresponding vertices joined by a matching.
pub fn double_ngon(n: usize) -> Multigraph {
    let mut edges = Vec::new();
    if n >= 3 {
        for i in 0..n {
            edges.push((i, (i + 1) % n));
            edges.push((n + i, n + (i + 1) % n));
        }
    }
    for i in 0..n {
        edges.push((i, n + i));
    }
    Multigraph::from_edges(edges)
}

/// `m_by_n_grid(m, n)`: a grid of `m * n` vertices in row-major order,
/// each joined to its right and down neighbors; boundary vertices that
/// lack a neighbor on a side instead carry a self-loop on that side,
/// per the convention the original grid constructor used.
pub fn m_by_n_grid(m: usize, n: usize) -> Multigraph {
    let mut edges = Vec::new();
    for i in 0..m {
        for j in 0..n {
            let vertex = i * n + j;
            if i == 0 {
                edges.push((vertex, vertex));
            }
            if i == m - 1 {
                edges.push((vertex, vertex));
            } else {
                edges.push((vertex, vertex + n));
            }
            if j == 0 {
                edges.push((vertex, vertex));
            }
            if j == n - 1 {
                edges.push((vertex, vertex));
            } else {
                edges.push((vertex, vertex + 1));
            }
        }
    }
    Multigraph::from_edges(edges)
}

/// `petersen()`: the standard 10-vertex, 3-regular Kneser graph
/// KG(5,2) -- an outer 5-cycle `0..5`, an inner pentagram `5..10`, and
/// spokes joining corresponding outer/inner vertices.
pub fn petersen() -> Multigraph {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((5 + i, 5 + (i + 2) % 5));
        edges.push((i, 5 + i));
    }
    Multigraph::from_edges(edges)
}

/// `cycle_with_loops(n)`: an `n`-cycle `0..n` with one self-loop added
/// at every vertex.
pub fn cycle_with_loops(n: usize) -> Multigraph {
    let mut edges = Vec::new();
    if n >= 3 {
        for i in 0..n {
            edges.push((i, (i + 1) % n));
        }
    }
    for i in 0..n {
        edges.push((i, i));
    }
    Multigraph::from_edges(edges)
}
