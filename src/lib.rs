//! A solver for edge-deletion capture games: two players alternately
//! remove edges from a shared multigraph, scoring a point for every
//! vertex their removal isolates and an extra turn whenever they
//! score, until nothing but a forest remains.

pub mod canonical;
pub mod constructor;
pub mod cutter;
pub mod error;
pub mod memo;
pub mod multigraph;
pub mod solver;
pub mod tree;

pub use error::SolverError;
pub use multigraph::{Edge, Multigraph};
pub use solver::{Progress, Solver};
