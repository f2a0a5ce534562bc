use thiserror::Error;

/// Errors surfaced at the library boundary.
///
/// The solver itself never fails on a well-formed [`crate::Multigraph`]:
/// these variants are raised by the driver/CLI layer before the solver
/// is ever invoked, or reserved for resource limits the pure functions
/// cannot hit on their own.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Malformed CLI arguments, an unknown graph type, or an edge file
    /// that does not parse as `u,v` integer pairs.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Reserved for stack overflow / memo exhaustion on pathologically
    /// large inputs. Not raised by this implementation today; see
    /// `Solver::solve`'s doc comment for the recursion-depth bound.
    #[error("resource exhausted: {reason}")]
    ResourceExhaustion { reason: String },
}
