use thiserror::Error;

use crate::Step;

/// Error returned when a caller passes invalid input to the cube model.
#[allow(missing_docs)]
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("invalid face index {0}; expected 0 through 5")]
    InvalidFace(i32),
    #[error("invalid rotation direction {0}; expected 1 or -1")]
    InvalidDirection(i32),
    #[error("cannot begin {requested} while {active} is still rotating")]
    RotationInProgress { requested: Step, active: Step },
}
