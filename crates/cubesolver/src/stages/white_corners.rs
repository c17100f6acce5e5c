use cubepuzzle::topology::{face_contains, side_faces_of_slot, slot_after_turns};
use cubepuzzle::{Cube, Face, StepQueue};
use smallvec::SmallVec;

use super::{all_solved, enqueue_turns};
use crate::Frame;
use crate::notation::CORNER_TRIGGER;

/// IDs of the Up corners.
pub const CORNER_IDS: [usize; 4] = [0, 2, 6, 8];

/// Returns whether every Up corner is home and unrotated.
pub fn check_white_corners(cube: &Cube) -> bool {
    all_solved(cube, &CORNER_IDS)
}

/// Returns the side faces of a corner slot, ignoring order.
fn side_set(slot: usize) -> SmallVec<[Face; 3]> {
    let mut faces = side_faces_of_slot(slot);
    faces.sort();
    faces
}

pub(super) fn solve_step(cube: &Cube, queue: &mut StepQueue) {
    let Some(cubelet) = CORNER_IDS
        .iter()
        .map(|&id| cube.cube_by_id(id))
        .find(|c| !c.is_solved())
    else {
        return;
    };

    let pos = cubelet.position();
    let target_sides = side_set(cubelet.id());
    let current_sides = side_set(pos);

    if face_contains(Face::Up, pos) || current_sides == target_sides {
        // Either pop it out of the wrong Up slot, or insert it from directly
        // below its home. Both are the same trigger, with the corner on the
        // front right.
        let (a, b) = (current_sides[0], current_sides[1]);
        let front = if Frame::new(Face::Up, a).right() == b {
            a
        } else {
            b
        };
        Frame::new(Face::Up, front).apply(&CORNER_TRIGGER, queue);
        return;
    }

    // Move it under its home.
    let k = (1..4)
        .find(|&k| side_set(slot_after_turns(Face::Down, pos, k)) == target_sides)
        .unwrap_or_else(|| panic!("corner {} cannot reach its column", cubelet.id()));
    enqueue_turns(queue, Face::Down, k);
}
