//! Model of a 3x3x3 Rubik's Cube as 27 cubelets, each with a slot and a
//! quaternion orientation, plus an animated face-turn controller.

mod controller;
mod cube;
mod cubelet;
mod error;
mod face;
mod facelets;
mod step;
pub mod topology;

pub use controller::{ActiveTurn, RotationController, interpolate};
pub use cube::Cube;
pub use cubelet::Cubelet;
pub use error::PuzzleError;
pub use face::{Color, Direction, Face};
pub use facelets::{FaceletError, NUM_STICKERS};
pub use step::{ParseStepError, Step, StepQueue};
pub use topology::PieceKind;
