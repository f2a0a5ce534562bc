use crate::multigraph::{Edge, Multigraph};

/// Removes one occurrence of `edge` from `g` and reports how many of
/// its endpoints were captured (became isolated) by the removal.
///
/// For a self-loop, at most one point is awarded (iff the loop was the
/// vertex's sole incidence). For a non-loop edge, 0, 1 or 2 points are
/// awarded depending on how many endpoints have zero remaining
/// incidences after removal.
pub fn cut_edge(g: &Multigraph, edge: Edge) -> (Multigraph, u32) {
    let successor = g.remove_edge(edge);
    let (u, v) = edge;
    if u == v {
        let points = u32::from(!successor.contains_vertex(u));
        (successor, points)
    } else {
        let mut points = 0;
        if !successor.contains_vertex(u) {
            points += 1;
        }
        if !successor.contains_vertex(v) {
            points += 1;
        }
        (successor, points)
    }
}
