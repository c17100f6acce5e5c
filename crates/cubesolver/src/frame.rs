use cubepuzzle::topology::{neighbor_index, neighbors_of};
use cubepuzzle::{Face, Step, StepQueue};

use crate::notation::{RelFace, RelMove, Trigger};

/// Viewing frame that maps relative face names to physical faces.
///
/// The frame is defined by which physical face is on top and which is in
/// front. Left, right, and back follow from the neighbor order of the top
/// face, so a trigger applied through a frame turns the same way relative to
/// that view no matter which faces it lands on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Frame {
    top: Face,
    front: Face,
}

impl Frame {
    /// Constructs a frame.
    ///
    /// # Panics
    ///
    /// Panics if `front` is not adjacent to `top`.
    pub fn new(top: Face, front: Face) -> Self {
        neighbor_index(top, front);
        Self { top, front }
    }

    fn side(self, offset: usize) -> Face {
        let i = neighbor_index(self.top, self.front);
        neighbors_of(self.top)[(i + offset) % 4]
    }

    /// Returns the physical face on top.
    pub fn top(self) -> Face {
        self.top
    }
    /// Returns the physical face on the bottom.
    pub fn down(self) -> Face {
        self.top.opposite()
    }
    /// Returns the physical face in front.
    pub fn front(self) -> Face {
        self.front
    }
    /// Returns the physical face in back.
    pub fn back(self) -> Face {
        self.side(2)
    }
    /// Returns the physical face on the left.
    pub fn left(self) -> Face {
        self.side(1)
    }
    /// Returns the physical face on the right.
    pub fn right(self) -> Face {
        self.side(3)
    }

    /// Returns the physical face named by `rel`.
    pub fn resolve(self, rel: RelFace) -> Face {
        match rel {
            RelFace::U => self.top(),
            RelFace::D => self.down(),
            RelFace::F => self.front(),
            RelFace::B => self.back(),
            RelFace::L => self.left(),
            RelFace::R => self.right(),
        }
    }

    /// Returns the physical steps for a sequence of relative moves.
    pub fn steps(self, moves: &[RelMove]) -> Vec<Step> {
        let mut steps = vec![];
        for m in moves {
            let face = self.resolve(m.face);
            match m.quarter_turns {
                2 => steps.extend([Step::cw(face), Step::cw(face)]),
                3 => steps.push(Step::ccw(face)),
                _ => steps.push(Step::cw(face)),
            }
        }
        steps
    }

    /// Enqueues the steps of `trigger` as seen from this frame.
    pub fn apply(self, trigger: &Trigger, queue: &mut StepQueue) {
        log::debug!(
            "applying {} with {} on top and {} in front",
            trigger.name,
            self.top,
            self.front,
        );
        queue.enqueue_all(self.steps(&trigger.moves()));
    }
}
