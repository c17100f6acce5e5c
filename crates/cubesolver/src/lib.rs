//! Layer-by-layer solver for the cube in [`cubepuzzle`].
//!
//! The solver works through five [`Stage`]s in order. Whenever the step queue
//! is empty, the first incomplete stage plans a short sequence of face turns
//! that fixes one more piece, written as a [`Trigger`] in standard notation
//! and applied through a [`Frame`].

mod frame;
pub mod notation;
mod solver;
pub mod stages;

pub use frame::Frame;
pub use notation::{RelFace, RelMove, Trigger};
pub use solver::{SolveReport, SolveTick, Solver, SolverError, SolverStats};
pub use stages::{Stage, current_stage};
