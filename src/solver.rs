use std::time::Instant;

use tracing::trace;

use crate::canonical::canonical_fingerprint;
use crate::cutter::cut_edge;
use crate::memo::Memo;
use crate::multigraph::{Edge, Multigraph};
use crate::tree::is_forest;

/// Tracks per-depth node counts and elapsed time for the deepest level
/// currently being solved, the way the original driver's console
/// progress report does -- but owned per [`Solver`] instance (passed
/// explicitly by the caller) rather than held in module-level global
/// state, and emitted through `tracing` instead of bare `println!`.
pub struct Progress {
    top_level: usize,
    count: usize,
    start: Instant,
}

impl Progress {
    /// `top_level` should be the initial edge count: the recursion's
    /// shallowest depth is 0, and depth counts up from there as edges
    /// are cut, so the "top" solved depth starts at the bottom of the
    /// search.
    pub fn new(top_level: usize) -> Self {
        Progress {
            top_level,
            count: 0,
            start: Instant::now(),
        }
    }

    fn record(&mut self, depth: usize) {
        if depth > self.top_level {
            return;
        }
        if depth == self.top_level {
            self.count += 1;
        } else {
            self.top_level = depth;
            self.count = 1;
        }
        trace!(
            depth,
            count = self.count,
            elapsed_secs = self.start.elapsed().as_secs_f64(),
            "solved a node at the current top depth"
        );
    }
}

/// Negamax solver over edge-deletion capture games, with a
/// transposition table keyed by canonical fingerprint (§3/§4.5).
///
/// The memo stores only net scores, never move sequences: a canonical
/// fingerprint can be shared by subgames built from different raw
/// vertex ids, so a cached *sequence* from one occurrence would not
/// generally be a valid edge list for another. Principal variations are
/// instead reconstructed in a second, non-memoizing pass that replays
/// the same move ordering and tie-break rule against the now-fully-populated
/// score memo -- see [`Solver::solve`].
#[derive(Default)]
pub struct Solver {
    memo: Memo,
}

impl Solver {
    pub fn new() -> Self {
        Solver { memo: Memo::new() }
    }

    pub fn with_memo(memo: Memo) -> Self {
        Solver { memo }
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    pub fn into_memo(self) -> Memo {
        self.memo
    }

    /// Computes the net score of `g` under optimal play, along with a
    /// representative winning move sequence (spec.md §4.5's `sequence`
    /// output stops once the residual graph becomes a forest; the
    /// remaining captures are imputed by the forest-concession rule
    /// rather than listed move by move).
    ///
    /// Recursion depth equals `g`'s initial edge count: this
    /// implementation recurses natively rather than converting to an
    /// explicit work stack, so callers solving graphs with more than a
    /// few thousand edges should raise their stack limit accordingly.
    pub fn solve(&mut self, g: &Multigraph) -> (i64, Vec<Edge>) {
        self.solve_with_progress(g, None)
    }

    /// As [`Solver::solve`], but reports per-depth progress through an
    /// optional caller-owned [`Progress`] context.
    pub fn solve_with_progress(
        &mut self,
        g: &Multigraph,
        mut progress: Option<&mut Progress>,
    ) -> (i64, Vec<Edge>) {
        let score = self.net_score(g, 0, progress.as_deref_mut());
        let sequence = self.reconstruct_sequence(g);
        (score, sequence)
    }

    fn net_score(&mut self, g: &Multigraph, depth: usize, mut progress: Option<&mut Progress>) -> i64 {
        let fingerprint = canonical_fingerprint(g);
        if let Some(score) = self.memo.get(&fingerprint) {
            return score;
        }
        if is_forest(g) {
            let score = g.vertex_count() as i64;
            self.memo.insert(fingerprint, score);
            return score;
        }

        let n = g.vertex_count() as i64;
        let mut best = -n;
        let mut tried: Vec<Edge> = Vec::new();

        for &edge in g.edges() {
            if tried.contains(&edge) {
                continue;
            }
            tried.push(edge);

            let (successor, points) = cut_edge(g, edge);
            let mult: i64 = if points > 0 { 1 } else { -1 };
            let child_score = self.net_score(&successor, depth + 1, progress.as_deref_mut());
            let value = i64::from(points) + mult * child_score;
            if value > best {
                best = value;
            }
            if best == n {
                break;
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.record(depth);
        }
        self.memo.insert(fingerprint, best);
        best
    }

    /// Replays the same move ordering, de-duplication and early-exit
    /// tie-break as [`Solver::net_score`], but reads child scores
    /// straight out of the (now fully populated, by a prior call)
    /// memo instead of recursing -- so the edge chosen at every depth
    /// is always valid for the concrete graph at hand.
    fn reconstruct_sequence(&self, g: &Multigraph) -> Vec<Edge> {
        if is_forest(g) {
            return Vec::new();
        }

        let n = g.vertex_count() as i64;
        let mut tried: Vec<Edge> = Vec::new();
        let mut best = i64::MIN;
        let mut best_edge: Option<Edge> = None;
        let mut best_successor: Option<Multigraph> = None;

        for &edge in g.edges() {
            if tried.contains(&edge) {
                continue;
            }
            tried.push(edge);

            let (successor, points) = cut_edge(g, edge);
            let mult: i64 = if points > 0 { 1 } else { -1 };
            let child_fingerprint = canonical_fingerprint(&successor);
            let child_score = self
                .memo
                .get(&child_fingerprint)
                .expect("reconstruct_sequence called after a prior solve() populated the memo");
            let value = i64::from(points) + mult * child_score;
            if value > best {
                best = value;
                best_edge = Some(edge);
                best_successor = Some(successor);
            }
            if best == n {
                break;
            }
        }

        let edge = best_edge.expect("a non-forest graph has at least one edge");
        let successor = best_successor.expect("set alongside best_edge");
        let mut sequence = vec![edge];
        sequence.extend(self.reconstruct_sequence(&successor));
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(edges: Vec<Edge>) -> i64 {
        let g = Multigraph::from_edges(edges);
        Solver::new().solve(&g).0
    }

    #[test]
    fn s1_single_edge() {
        assert_eq!(net(vec![(0, 1)]), 2);
    }

    #[test]
    fn s2_triangle() {
        // Every first move in a triangle leaves a 3-vertex tree with
        // no captured vertex, so the turn passes; the forest-concession
        // rule then sweeps all 3 remaining vertices to whichever side
        // is to move on that tree -- the opponent, not the mover who
        // just played. Net score is therefore negative for the root.
        assert_eq!(net(vec![(0, 1), (1, 2), (0, 2)]), -3);
    }

    #[test]
    fn s3_path_of_three() {
        assert_eq!(net(vec![(0, 1), (1, 2)]), 3);
    }

    #[test]
    fn s4_complete_graph_k4() {
        let edges = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        assert_eq!(net(edges), 0);
    }

    #[test]
    fn s5_wheel_with_3_spokes_is_k4() {
        let edges = vec![(0, 1), (0, 2), (0, 3), (1, 2), (2, 3), (3, 1)];
        assert_eq!(net(edges), 0);
    }

    #[test]
    fn s6_single_self_loop() {
        assert_eq!(net(vec![(0, 0)]), 1);
    }

    #[test]
    fn empty_graph_nets_zero() {
        assert_eq!(net(vec![]), 0);
    }

    #[test]
    fn sequence_replays_to_the_reported_score() {
        let g = Multigraph::from_edges(vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let (score, sequence) = Solver::new().solve(&g);

        // Replay the sequence, scoring alternately with the extra-turn rule,
        // then impute the forest-concession bonus for whatever mover is to
        // move once the residual graph becomes a forest.
        let mut current = g.clone();
        let mut mover_score = 0i64;
        let mut opponent_score = 0i64;
        for edge in &sequence {
            let (successor, points) = cut_edge(&current, *edge);
            mover_score += i64::from(points);
            if points == 0 {
                std::mem::swap(&mut mover_score, &mut opponent_score);
            }
            current = successor;
        }
        assert!(is_forest(&current) || current.edge_count() == 0);
        mover_score += current.vertex_count() as i64;

        assert_eq!(mover_score - opponent_score, score);
    }

    #[test]
    fn reusing_a_solver_across_calls_is_safe() {
        let mut solver = Solver::new();
        let g1 = Multigraph::from_edges(vec![(0, 1)]);
        let g2 = Multigraph::from_edges(vec![(0, 1), (1, 2)]);
        assert_eq!(solver.solve(&g1).0, 2);
        assert_eq!(solver.solve(&g2).0, 3);
    }
}
