//! Tick-driven solver that plans one correction at a time and feeds the
//! queued steps to a [`RotationController`].

use std::fmt;

use cubepuzzle::{Cube, RotationController, Step};
use thiserror::Error;

use crate::stages::{self, Stage};

/// Result of one solver tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveTick {
    /// A turn is still in progress, so nothing happened.
    Busy,
    /// A queued step was started.
    Rotating(Step),
    /// The queue was empty, so a stage planned more steps.
    Enqueued {
        /// Stage that planned the steps.
        stage: Stage,
        /// Number of steps enqueued.
        steps: usize,
    },
    /// The cube is solved.
    Solved,
}

/// Error returned by [`Solver::solve_to_completion()`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The cube was not solved within the tick limit.
    #[error("cube not solved after {ticks} ticks (stuck at {stage})")]
    TickLimit {
        /// Number of ticks run.
        ticks: usize,
        /// Stage that was still incomplete.
        stage: Stage,
    },
}

/// Counters kept by a [`Solver`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SolverStats {
    /// Number of calls to [`Solver::solve()`].
    pub ticks: usize,
    /// Number of queued steps started.
    pub steps_started: usize,
    /// Number of steps enqueued by stages.
    pub steps_enqueued: usize,
    /// Number of solve steps run for each stage, indexed by
    /// [`Stage::index()`].
    pub stage_attempts: [usize; 5],
}

/// Summary of a headless solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Counters at the end of the solve.
    pub stats: SolverStats,
    /// Every step applied, in order.
    pub steps: Vec<Step>,
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "solved in {} turns over {} ticks",
            self.steps.len(),
            self.stats.ticks,
        )?;
        for stage in Stage::ALL {
            writeln!(
                f,
                "  {:<14} {} solve steps",
                stage.name(),
                self.stats.stage_attempts[stage.index()],
            )?;
        }
        Ok(())
    }
}

/// Layer-by-layer solver.
///
/// Call [`Self::solve()`] once per tick. Each tick either waits for a turn in
/// progress, starts the next queued step, or (once the queue has drained)
/// asks the first incomplete stage to plan more steps.
#[derive(Debug, Default, Clone)]
pub struct Solver {
    stats: SolverStats,
    /// Stage found incomplete the last time the queue drained.
    stage: Option<Stage>,
}

impl Solver {
    /// Constructs a solver with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the cube is solved, including orientation.
    pub fn check_solved(&self, cube: &Cube) -> bool {
        stages::current_stage(cube).is_none()
    }

    /// Returns the counters.
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }
    /// Returns the stage being worked on, as of the last time the queue
    /// drained.
    pub fn current_stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Runs one tick of the solver.
    ///
    /// If `animations_on` is false, started steps are applied instantly.
    pub fn solve(
        &mut self,
        controller: &mut RotationController,
        animations_on: bool,
    ) -> SolveTick {
        self.stats.ticks += 1;
        if controller.is_rotating() {
            return SolveTick::Busy;
        }

        if let Some(step) = controller.queue_mut().dequeue() {
            log::debug!("dequeued {step}");
            controller
                .begin_step(step, !animations_on)
                .expect("no turn is in progress");
            self.stats.steps_started += 1;
            return SolveTick::Rotating(step);
        }

        let (cube, queue) = controller.cube_and_queue_mut();
        let stage = stages::current_stage(cube);
        if stage != self.stage {
            if let Some(previous) = self.stage {
                let next = stage.map_or(Stage::ALL.len(), Stage::index);
                for s in Stage::ALL.get(previous.index()..next).unwrap_or_default() {
                    log::info!("{s} solved");
                }
            }
            self.stage = stage;
        }
        let Some(stage) = stage else {
            log::info!("cube solved after {} turns", self.stats.steps_started);
            return SolveTick::Solved;
        };

        let steps = stage.solve_step(cube, queue);
        self.stats.stage_attempts[stage.index()] += 1;
        self.stats.steps_enqueued += steps;
        SolveTick::Enqueued { stage, steps }
    }

    /// Solves the cube without animation, running at most `max_ticks` ticks.
    pub fn solve_to_completion(
        &mut self,
        controller: &mut RotationController,
        max_ticks: usize,
    ) -> Result<SolveReport, SolverError> {
        let mut steps = vec![];
        for _ in 0..max_ticks {
            match self.solve(controller, false) {
                SolveTick::Solved => {
                    return Ok(SolveReport {
                        stats: self.stats,
                        steps,
                    });
                }
                SolveTick::Rotating(step) => steps.push(step),
                SolveTick::Busy | SolveTick::Enqueued { .. } => (),
            }
        }
        let stage = stages::current_stage(controller.cube()).unwrap_or(Stage::FinalLayer);
        log::warn!("gave up at {stage} after {max_ticks} ticks");
        Err(SolverError::TickLimit {
            ticks: max_ticks,
            stage,
        })
    }
}

#[cfg(test)]
mod tests {
    use cubepuzzle::Face;
    use pretty_assertions::assert_eq;
    use web_time::Duration;

    use super::*;

    #[test]
    fn test_solved_cube() {
        let mut solver = Solver::new();
        let mut controller = RotationController::default();
        assert!(solver.check_solved(controller.cube()));
        assert_eq!(solver.solve(&mut controller, false), SolveTick::Solved);
        assert_eq!(solver.current_stage(), None);
    }

    #[test]
    fn test_tick_sequence() {
        let mut cube = Cube::new();
        cube.apply(Step::cw(Face::Down));
        let mut controller = RotationController::new(cube);
        let mut solver = Solver::new();

        assert_eq!(
            solver.solve(&mut controller, false),
            SolveTick::Enqueued {
                stage: Stage::FinalLayer,
                steps: 1,
            },
        );
        assert_eq!(solver.current_stage(), Some(Stage::FinalLayer));
        assert_eq!(
            solver.solve(&mut controller, false),
            SolveTick::Rotating(Step::ccw(Face::Down)),
        );
        assert_eq!(solver.solve(&mut controller, false), SolveTick::Solved);
        assert_eq!(solver.stats().steps_started, 1);
        assert_eq!(solver.stats().stage_attempts, [0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_waits_for_animation() {
        let mut cube = Cube::new();
        cube.apply(Step::cw(Face::Down));
        let mut controller = RotationController::new(cube);
        let mut solver = Solver::new();

        solver.solve(&mut controller, true);
        assert_eq!(
            solver.solve(&mut controller, true),
            SolveTick::Rotating(Step::ccw(Face::Down)),
        );
        assert_eq!(solver.solve(&mut controller, true), SolveTick::Busy);
        controller.update(Duration::from_millis(100), 0.2);
        assert_eq!(solver.solve(&mut controller, true), SolveTick::Busy);
        controller.update(Duration::from_millis(100), 0.2);
        assert_eq!(solver.solve(&mut controller, true), SolveTick::Solved);
    }

    #[test]
    fn test_tick_limit() {
        let mut cube = Cube::new();
        cube.apply_all(&Step::parse_sequence("R U F").unwrap());
        let mut controller = RotationController::new(cube);
        let result = Solver::new().solve_to_completion(&mut controller, 1);
        assert_eq!(
            result,
            Err(SolverError::TickLimit {
                ticks: 1,
                stage: Stage::WhiteCross,
            }),
        );
    }
}
