//! Headless tick loop that stands in for a frame loop.

use cubepuzzle::{Cube, RotationController, Step};
use cubesolver::{SolveReport, SolveTick, Solver, SolverError};
use web_time::Duration;

use crate::prefs::Preferences;

/// Runs the solver one tick at a time until the cube is solved, calling
/// `on_step` whenever a turn starts.
///
/// When `animate` is true, each tick first advances the turn in progress by
/// one tick's worth of time.
pub fn run(
    cube: Cube,
    prefs: &Preferences,
    animate: bool,
    mut on_step: impl FnMut(Step),
) -> Result<SolveReport, SolverError> {
    let mut controller = RotationController::new(cube);
    let mut solver = Solver::new();
    let tick_duration = Duration::from_secs_f32(1.0 / prefs.animation.tick_rate.max(1.0));
    let max_ticks = prefs.solver.max_ticks;

    let mut steps = vec![];
    for _ in 0..max_ticks {
        if animate {
            controller.update(tick_duration, prefs.animation.twist_duration);
        }
        match solver.solve(&mut controller, animate) {
            SolveTick::Solved => {
                return Ok(SolveReport {
                    stats: *solver.stats(),
                    steps,
                });
            }
            SolveTick::Rotating(step) => {
                on_step(step);
                steps.push(step);
            }
            SolveTick::Busy | SolveTick::Enqueued { .. } => (),
        }
    }

    let stage = solver
        .current_stage()
        .unwrap_or(cubesolver::Stage::FinalLayer);
    log::warn!("gave up at {stage} after {max_ticks} ticks");
    Err(SolverError::TickLimit {
        ticks: max_ticks,
        stage,
    })
}
