//! The five stages of the layer-by-layer method.
//!
//! Each stage has a check, which reports whether the stage is complete, and a
//! solve step, which enqueues a short sequence of steps that makes progress on
//! it. A solve step assumes every earlier stage is complete, and the steps it
//! enqueues restore every earlier stage by the time they have all been
//! applied.

use cubepuzzle::{Cube, Direction, Face, Step, StepQueue};
use strum::EnumIter;

mod down_face;
mod final_layer;
mod middle_layer;
mod white_corners;
mod white_cross;

pub use down_face::check_down_face;
pub use final_layer::{LAST_LAYER_IDS, check_final_layer};
pub use middle_layer::{MIDDLE_IDS, check_middle_layer};
pub use white_corners::{CORNER_IDS, check_white_corners};
pub use white_cross::{CROSS_IDS, check_white_cross};

/// Stage of the solve, in the order they are solved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Stage {
    /// Up edges placed and oriented.
    WhiteCross,
    /// Up corners placed and oriented.
    WhiteCorners,
    /// Middle-layer edges placed and oriented.
    MiddleLayer,
    /// Every Down sticker facing down.
    DownFace,
    /// Down pieces permuted.
    FinalLayer,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Stage {
    /// All stages in solving order.
    pub const ALL: [Stage; 5] = [
        Stage::WhiteCross,
        Stage::WhiteCorners,
        Stage::MiddleLayer,
        Stage::DownFace,
        Stage::FinalLayer,
    ];

    /// Returns the position of the stage in solving order.
    pub fn index(self) -> usize {
        self as usize
    }
    /// Returns a human-readable name for the stage.
    pub fn name(self) -> &'static str {
        match self {
            Stage::WhiteCross => "white cross",
            Stage::WhiteCorners => "white corners",
            Stage::MiddleLayer => "middle layer",
            Stage::DownFace => "down face",
            Stage::FinalLayer => "final layer",
        }
    }

    /// Returns whether the stage is complete.
    pub fn check(self, cube: &Cube) -> bool {
        match self {
            Stage::WhiteCross => check_white_cross(cube),
            Stage::WhiteCorners => check_white_corners(cube),
            Stage::MiddleLayer => check_middle_layer(cube),
            Stage::DownFace => check_down_face(cube),
            Stage::FinalLayer => check_final_layer(cube),
        }
    }

    /// Enqueues steps that make progress on the stage and returns how many
    /// were enqueued. Does nothing if the stage is already complete.
    ///
    /// # Panics
    ///
    /// Panics if an earlier stage is not complete and the cube is in a state
    /// that the stage does not handle.
    pub fn solve_step(self, cube: &Cube, queue: &mut StepQueue) -> usize {
        if self.check(cube) {
            return 0;
        }
        let len_before = queue.len();
        match self {
            Stage::WhiteCross => white_cross::solve_step(cube, queue),
            Stage::WhiteCorners => white_corners::solve_step(cube, queue),
            Stage::MiddleLayer => middle_layer::solve_step(cube, queue),
            Stage::DownFace => down_face::solve_step(cube, queue),
            Stage::FinalLayer => final_layer::solve_step(cube, queue),
        }
        let count = queue.len() - len_before;
        log::debug!("{self}: enqueued {count} steps");
        count
    }
}

/// Returns the first incomplete stage, or `None` if the cube is solved.
pub fn current_stage(cube: &Cube) -> Option<Stage> {
    Stage::ALL.into_iter().find(|stage| !stage.check(cube))
}

/// Returns whether every cubelet in `ids` is home and unrotated.
fn all_solved(cube: &Cube, ids: &[usize]) -> bool {
    ids.iter().all(|&id| cube.cube_by_id(id).is_solved())
}

/// Enqueues `count` clockwise quarter turns of `face`, using a single
/// counterclockwise turn for three.
fn enqueue_turns(queue: &mut StepQueue, face: Face, count: usize) {
    match count % 4 {
        0 => (),
        3 => queue.enqueue(Step::new(face, Direction::CounterClockwise)),
        n => queue.enqueue_repeated(Step::cw(face), n),
    }
}

/// Returns the face in `faces` that is not `face`.
fn other_face(faces: &[Face], face: Face) -> Face {
    faces
        .iter()
        .copied()
        .find(|&f| f != face)
        .unwrap_or_else(|| panic!("no face other than {face} in {faces:?}"))
}
