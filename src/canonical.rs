use std::collections::{BTreeMap, BTreeSet};

use crate::multigraph::Multigraph;

/// Per-vertex bookkeeping for the refinement pass. Mirrors the vertex
/// record in `spec.md` §3: raw id, neighbor multiset (a self-loop
/// contributes the vertex's own id once), and self-loop count. Category
/// bookkeeping lives in the `BTreeMap<usize, usize>` maps threaded
/// through [`categorize`] rather than on the record itself, since each
/// refinement round needs the *previous* round's categories alongside
/// the new ones.
#[derive(Clone, Debug)]
struct VertexRecord {
    neighbors: Vec<usize>,
    num_self_loops: usize,
}

fn init_vertices(g: &Multigraph) -> BTreeMap<usize, VertexRecord> {
    let mut vertices: BTreeMap<usize, VertexRecord> = g
        .vertices()
        .into_iter()
        .map(|v| {
            (
                v,
                VertexRecord {
                    neighbors: Vec::new(),
                    num_self_loops: 0,
                },
            )
        })
        .collect();

    for &(a, b) in g.edges() {
        if a == b {
            let rec = vertices.get_mut(&a).expect("vertex present for its own edge");
            rec.neighbors.push(a);
            rec.num_self_loops += 1;
        } else {
            vertices.get_mut(&a).expect("vertex present for its own edge").neighbors.push(b);
            vertices.get_mut(&b).expect("vertex present for its own edge").neighbors.push(a);
        }
    }
    vertices
}

/// Assigns dense 0-based ranks to a keyed map, ordering distinct keys
/// ascending and mapping every entry to its key's rank.
fn assign_ranks<K: Ord + Clone>(keyed: &BTreeMap<usize, K>) -> BTreeMap<usize, usize> {
    let mut distinct: Vec<K> = keyed.values().cloned().collect();
    distinct.sort();
    distinct.dedup();
    keyed
        .iter()
        .map(|(&id, key)| {
            let rank = distinct
                .binary_search(key)
                .expect("key was drawn from this same map");
            (id, rank)
        })
        .collect()
}

fn initial_categories(vertices: &BTreeMap<usize, VertexRecord>) -> BTreeMap<usize, usize> {
    let keyed: BTreeMap<usize, (usize, i64)> = vertices
        .iter()
        .map(|(&id, v)| (id, (v.neighbors.len(), -(v.num_self_loops as i64))))
        .collect();
    assign_ranks(&keyed)
}

/// One refinement round: each vertex's new key is
/// `(current_category, n_0, ..., n_{k-1})` with the per-category
/// neighbor-occurrence counts emitted in reverse category order, per
/// `spec.md` §4.3 step 2.
fn refine(
    vertices: &BTreeMap<usize, VertexRecord>,
    category: &BTreeMap<usize, usize>,
    num_categories: usize,
) -> BTreeMap<usize, usize> {
    let keyed: BTreeMap<usize, Vec<usize>> = vertices
        .iter()
        .map(|(&id, v)| {
            let mut counts = vec![0usize; num_categories];
            for &nb in &v.neighbors {
                counts[category[&nb]] += 1;
            }
            let mut key = vec![category[&id]];
            key.extend(counts.into_iter().rev());
            (id, key)
        })
        .collect();
    assign_ranks(&keyed)
}

fn distinct_count(category: &BTreeMap<usize, usize>) -> usize {
    category.values().copied().collect::<BTreeSet<_>>().len()
}

/// Iterated color refinement, terminating per `spec.md` §4.3 step 3:
/// every vertex its own singleton category, all vertices sharing one
/// category, categories unchanged from the previous round, or a safety
/// cap of `|V|` rounds.
fn categorize(vertices: &BTreeMap<usize, VertexRecord>) -> (BTreeMap<usize, usize>, usize) {
    let n = vertices.len();
    let mut category = initial_categories(vertices);
    // Sentinel prior state that cannot equal any real category assignment,
    // forcing at least one refinement round to run.
    let mut prior_category: BTreeMap<usize, usize> =
        vertices.keys().map(|&id| (id, usize::MAX)).collect();
    let mut iterations = 1usize;

    loop {
        let num_categories = distinct_count(&category);
        let done = num_categories == 1
            || num_categories == n
            || iterations >= n
            || category == prior_category;
        if done {
            return (category, num_categories);
        }
        prior_category = category.clone();
        category = refine(vertices, &category, num_categories);
        iterations += 1;
    }
}

/// Picks the next category member to receive a canonical id, applying
/// the preference rule from `spec.md` §4.3 step 4: prefer a member
/// already adjacent to some labeled vertex, breaking ties by the
/// minimum canonical id among labeled neighbors and then by raw id;
/// otherwise fall back to the smallest raw id in the category.
fn pick_next(
    vertices: &BTreeMap<usize, VertexRecord>,
    canonical: &BTreeMap<usize, usize>,
    members: &[usize],
) -> usize {
    let mut best_connected: Option<(usize, usize)> = None;
    let mut smallest_unconnected: Option<usize> = None;

    for &id in members {
        let min_labeled_neighbor = vertices[&id]
            .neighbors
            .iter()
            .filter_map(|nb| canonical.get(nb).copied())
            .min();
        match min_labeled_neighbor {
            Some(min_c) => {
                let key = (min_c, id);
                if best_connected.is_none_or(|cur| key < cur) {
                    best_connected = Some(key);
                }
            }
            None => {
                smallest_unconnected = Some(match smallest_unconnected {
                    Some(cur) => cur.min(id),
                    None => id,
                });
            }
        }
    }

    best_connected
        .map(|(_, id)| id)
        .or(smallest_unconnected)
        .expect("members is non-empty")
}

fn assign_canonical_ids(
    vertices: &BTreeMap<usize, VertexRecord>,
    category: &BTreeMap<usize, usize>,
    num_categories: usize,
) -> BTreeMap<usize, usize> {
    if num_categories == vertices.len() {
        return category.clone();
    }

    let mut members_by_category: Vec<Vec<usize>> = vec![Vec::new(); num_categories];
    for (&id, &cat) in category {
        members_by_category[cat].push(id);
    }

    let mut canonical: BTreeMap<usize, usize> = BTreeMap::new();
    let mut next_id = 0usize;
    for members in &mut members_by_category {
        while !members.is_empty() {
            let chosen = pick_next(vertices, &canonical, members);
            canonical.insert(chosen, next_id);
            next_id += 1;
            members.retain(|&id| id != chosen);
        }
    }
    canonical
}

/// Computes the canonical labeling `c: raw vertex id -> canonical id`
/// for `g`, invariant under graph isomorphism.
pub fn canonicalize(g: &Multigraph) -> BTreeMap<usize, usize> {
    let vertices = init_vertices(g);
    if vertices.is_empty() {
        return BTreeMap::new();
    }
    let (category, num_categories) = categorize(&vertices);
    assign_canonical_ids(&vertices, &category, num_categories)
}

/// Computes the canonical fingerprint of `g`: the sorted list of
/// `(min(c(u),c(v)), max(c(u),c(v)))` pairs for every edge-record
/// (including self-loops), serialized as a stable `-`/`|`-delimited
/// string. Two multigraphs are isomorphic iff their fingerprints match.
pub fn canonical_fingerprint(g: &Multigraph) -> String {
    let canonical = canonicalize(g);
    let mut pairs: Vec<(usize, usize)> = g
        .edges()
        .iter()
        .map(|&(u, v)| {
            let cu = canonical[&u];
            let cv = canonical[&v];
            if cu <= cv { (cu, cv) } else { (cv, cu) }
        })
        .collect();
    pairs.sort_unstable();

    let mut out = String::new();
    for (i, (a, b)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(&a.to_string());
        out.push('-');
        out.push_str(&b.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relabel(g: &Multigraph, perm: impl Fn(usize) -> usize) -> Multigraph {
        Multigraph::from_edges(g.edges().iter().map(|&(u, v)| (perm(u), perm(v))))
    }

    #[test]
    fn empty_graph_fingerprint_is_empty_string() {
        assert_eq!(canonical_fingerprint(&Multigraph::from_edges(vec![])), "");
    }

    #[test]
    fn isomorphic_triangles_share_a_fingerprint() {
        let g1 = Multigraph::from_edges(vec![(0, 1), (1, 2), (0, 2)]);
        let g2 = relabel(&g1, |v| (v + 7) * 3 % 11);
        assert_eq!(canonical_fingerprint(&g1), canonical_fingerprint(&g2));
    }

    #[test]
    fn path_and_star_differ() {
        let path = Multigraph::from_edges(vec![(0, 1), (1, 2)]);
        let star = Multigraph::from_edges(vec![(0, 1), (0, 2)]);
        // Both are paths of length 2 once canonicalized -- isomorphic.
        assert_eq!(canonical_fingerprint(&path), canonical_fingerprint(&star));
    }

    #[test]
    fn self_loop_distinguishes_graphs() {
        let with_loop = Multigraph::from_edges(vec![(0, 0), (0, 1)]);
        let without_loop = Multigraph::from_edges(vec![(0, 1), (1, 2)]);
        assert_ne!(
            canonical_fingerprint(&with_loop),
            canonical_fingerprint(&without_loop)
        );
    }

    #[test]
    fn singleton_categories_assign_ids_by_rank() {
        // A path of 4 distinguishes every vertex by (degree, position);
        // refinement should fully separate them into singletons.
        let g = Multigraph::from_edges(vec![(0, 1), (1, 2), (2, 3)]);
        let canonical = canonicalize(&g);
        let ids: BTreeSet<usize> = canonical.values().copied().collect();
        assert_eq!(ids, (0..4).collect());
    }

    #[test]
    fn complete_graph_on_4_has_a_deterministic_fingerprint() {
        let g = Multigraph::from_edges(vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let fp1 = canonical_fingerprint(&g);
        let fp2 = canonical_fingerprint(&relabel(&g, |v| 3 - v));
        assert_eq!(fp1, fp2);
    }
}
