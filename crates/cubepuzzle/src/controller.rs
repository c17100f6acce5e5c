//! Cube wrapper that animates face turns and holds the queue of pending
//! steps.

use cgmath::SquareMatrix;
use web_time::Duration;

use crate::{Cube, Direction, Face, PuzzleError, Step, StepQueue};

/// If at least this much of a turn would be animated in one frame, just
/// complete the turn instantly.
const MAX_TWIST_DELTA: f32 = 1.0;

/// Interpolation functions.
pub mod interpolate {
    use std::f32::consts::PI;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    pub type InterpolateFn = fn(f32) -> f32;

    /// Interpolate using cosine from 0.0 to PI.
    pub const COSINE: InterpolateFn = |x| (1.0 - (x * PI).cos()) / 2.0;
}

use interpolate::InterpolateFn;

const TWIST_INTERPOLATION_FN: InterpolateFn = interpolate::COSINE;

/// Face turn that is currently being animated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ActiveTurn {
    /// Turn being animated.
    pub step: Step,
    /// Progress of the animation, from 0.0 to 1.0.
    pub progress: f32,
}

/// Cube wrapper that animates one face turn at a time.
///
/// The cube state changes only when a turn completes, so [`Self::cube()`]
/// always reflects whole turns.
#[derive(Debug, Default, Clone)]
pub struct RotationController {
    /// State of the cube, not including the turn being animated.
    cube: Cube,
    /// Steps waiting to be started.
    queue: StepQueue,
    /// Turn being animated right now.
    active: Option<ActiveTurn>,
    /// Number of turns applied to the cube.
    turns_completed: usize,
}

impl RotationController {
    /// Constructs a controller for a cube.
    pub fn new(cube: Cube) -> Self {
        Self {
            cube,
            ..Default::default()
        }
    }

    /// Returns the cube, not including any turn in progress.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Replaces the cube, cancelling any turn in progress and clearing the
    /// queue.
    pub fn set_cube(&mut self, cube: Cube) {
        self.cube = cube;
        self.active = None;
        self.queue.clear();
    }
    /// Returns the queue of pending steps.
    pub fn queue(&self) -> &StepQueue {
        &self.queue
    }
    /// Returns the queue of pending steps.
    pub fn queue_mut(&mut self) -> &mut StepQueue {
        &mut self.queue
    }
    /// Returns the cube and the queue, so that a planner can read one while
    /// appending to the other.
    pub fn cube_and_queue_mut(&mut self) -> (&Cube, &mut StepQueue) {
        (&self.cube, &mut self.queue)
    }
    /// Returns the number of turns applied to the cube.
    pub fn turns_completed(&self) -> usize {
        self.turns_completed
    }

    /// Begins turning a face. If `instant` is true, the turn is applied
    /// immediately; otherwise it is animated by [`Self::update()`].
    ///
    /// Returns an error if another turn is still in progress.
    pub fn begin_face_rotation(
        &mut self,
        face: Face,
        direction: Direction,
        instant: bool,
    ) -> Result<(), PuzzleError> {
        let step = Step::new(face, direction);
        if let Some(active) = self.active {
            let e = PuzzleError::RotationInProgress {
                requested: step,
                active: active.step,
            };
            log::warn!("{e}");
            return Err(e);
        }
        log::debug!("begin {step}");
        self.active = Some(ActiveTurn {
            step,
            progress: 0.0,
        });
        if instant {
            self.finish_turn();
        }
        Ok(())
    }
    /// Begins a step. See [`Self::begin_face_rotation()`].
    pub fn begin_step(&mut self, step: Step, instant: bool) -> Result<(), PuzzleError> {
        self.begin_face_rotation(step.face, step.direction, instant)
    }
    /// Begins turning a face given by raw face index and direction sign.
    /// Invalid input is logged and ignored.
    pub fn begin_face_rotation_raw(
        &mut self,
        face: i32,
        direction: i32,
        instant: bool,
    ) -> Result<(), PuzzleError> {
        let parsed = Face::from_index(face)
            .and_then(|face| Ok(Step::new(face, Direction::from_sign(direction)?)));
        match parsed {
            Ok(step) => self.begin_step(step, instant),
            Err(e) => {
                log::warn!("{e}");
                Err(e)
            }
        }
    }

    /// Advances the animation by `delta`. `twist_duration` is the number of
    /// seconds for one quarter turn.
    pub fn update(&mut self, delta: Duration, twist_duration: f32) {
        let Some(active) = &mut self.active else {
            return;
        };
        let mut twist_delta = delta.as_secs_f32() / twist_duration;
        // Cap the twist delta at 1.0, and also handle the case where something
        // went wrong with the calculation (e.g., division by zero).
        if !(0.0..MAX_TWIST_DELTA).contains(&twist_delta) {
            twist_delta = 1.0; // Instantly complete the twist.
        }
        active.progress += twist_delta;
        if active.progress >= 1.0 {
            self.finish_turn();
        }
    }
    fn finish_turn(&mut self) {
        if let Some(ActiveTurn { step, .. }) = self.active.take() {
            self.cube.apply(step);
            self.turns_completed += 1;
            log::debug!("completed {step}");
        }
    }
    /// Completes the turn in progress and then applies every queued step
    /// instantly.
    pub fn catch_up(&mut self) {
        self.finish_turn();
        while let Some(step) = self.queue.dequeue() {
            self.cube.apply(step);
            self.turns_completed += 1;
        }
    }

    /// Returns whether a turn is in progress.
    pub fn is_rotating(&self) -> bool {
        self.active.is_some()
    }
    /// Returns whether `face` is being turned right now.
    pub fn face_is_rotating(&self, face: Face) -> bool {
        self.active.is_some_and(|a| a.step.face == face)
    }
    /// Returns the turn currently being animated, along with a float between
    /// 0.0 and 1.0 indicating the interpolated progress on that animation.
    pub fn current_turn(&self) -> Option<(Step, f32)> {
        self.active
            .map(|a| (a.step, TWIST_INTERPOLATION_FN(a.progress.clamp(0.0, 1.0))))
    }
    /// Returns the signed angle in degrees that `face` has been turned so far,
    /// or 0.0 if it is not turning. Clockwise is positive.
    pub fn face_rotation_degrees(&self, face: Face) -> f32 {
        match self.current_turn() {
            Some((step, t)) if step.face == face => step.direction.sign() as f32 * 90.0 * t,
            _ => 0.0,
        }
    }
    /// Returns the transformation to apply to the cubelets in `face` while it
    /// is being turned.
    pub fn turn_matrix(&self, face: Face) -> cgmath::Matrix4<f32> {
        match self.current_turn() {
            Some((step, t)) if step.face == face => face
                .partial_rotation(step.direction, t as cubemath::Float)
                .to_matrix(),
            _ => cgmath::Matrix4::identity(),
        }
    }
}
