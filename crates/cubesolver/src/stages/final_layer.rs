use cubepuzzle::topology::{
    neighbors_of, side_faces_of_slot, slot_after_turns, slot_at, slots_of,
};
use cubepuzzle::{Cube, Face, PieceKind, StepQueue};
use itertools::Itertools;
use smallvec::SmallVec;

use super::{all_solved, enqueue_turns};
use crate::Frame;
use crate::notation::{T_PERM, UA_PERM, UB_PERM, Y_PERM};

/// IDs of the Down edges and corners.
pub const LAST_LAYER_IDS: [usize; 8] = [18, 19, 20, 21, 23, 24, 25, 26];

/// Returns whether every Down edge and corner is home and unrotated.
pub fn check_final_layer(cube: &Cube) -> bool {
    all_solved(cube, &LAST_LAYER_IDS)
}

/// Returns the Down slots holding pieces of `kind`, in face order.
fn down_slots(kind: PieceKind) -> SmallVec<[usize; 4]> {
    slots_of(Face::Down)
        .iter()
        .copied()
        .filter(|&s| PieceKind::of_slot(s) == kind)
        .collect()
}

pub(super) fn solve_step(cube: &Cube, queue: &mut StepQueue) {
    let is_home = |slot: usize| cube.cube_at(slot).id() == slot;

    let corner_slots = down_slots(PieceKind::Corner);
    let good_corners = corner_slots.iter().copied().filter(|&s| is_home(s)).collect_vec();
    if good_corners.len() < 2 {
        // Turn Down until at least two corners line up.
        let home_after = |k: usize| {
            corner_slots
                .iter()
                .filter(|&&s| slot_after_turns(Face::Down, s, k) == cube.cube_at(s).id())
                .count()
        };
        let k = [1, 3, 2]
            .into_iter()
            .find(|&k| home_after(k) >= 2)
            .unwrap_or_else(|| panic!("no Down turn lines up two corners"));
        enqueue_turns(queue, Face::Down, k);
        return;
    }
    if good_corners.len() < 4 {
        let first = side_faces_of_slot(good_corners[0]);
        let second = side_faces_of_slot(good_corners[1]);
        if let Some(&shared) = first.iter().find(|&&f| second.contains(&f)) {
            // Adjacent pair; keep it on the left and swap the right corners.
            let frame = frame_where(|frame| frame.left() == shared);
            frame.apply(&T_PERM, queue);
        } else {
            // Diagonal pair; keep it and swap the other diagonal.
            let frame = frame_where(|frame| {
                let kept = [
                    slot_at(&[Face::Down, frame.front(), frame.left()]),
                    slot_at(&[Face::Down, frame.back(), frame.right()]),
                ];
                good_corners.iter().all(|s| kept.contains(s))
            });
            frame.apply(&Y_PERM, queue);
        }
        return;
    }

    let good_edges = down_slots(PieceKind::Edge)
        .into_iter()
        .filter(|&s| is_home(s))
        .collect_vec();
    let Some(&kept) = good_edges.first() else {
        Frame::new(Face::Down, Face::Front).apply(&UA_PERM, queue);
        return;
    };
    // Keep the solved edge in back and cycle the other three in whichever
    // direction sends the front edge home.
    let side = side_faces_of_slot(kept)[0];
    let frame = frame_where(|frame| frame.back() == side);
    let piece = cube.cube_at(slot_at(&[Face::Down, frame.front()]));
    if side_faces_of_slot(piece.id())[0] == frame.right() {
        frame.apply(&UA_PERM, queue);
    } else {
        frame.apply(&UB_PERM, queue);
    }
}

/// Returns the first frame with Down on top that satisfies `predicate`.
fn frame_where(predicate: impl Fn(Frame) -> bool) -> Frame {
    neighbors_of(Face::Down)
        .iter()
        .map(|&front| Frame::new(Face::Down, front))
        .find(|&frame| predicate(frame))
        .unwrap_or_else(|| panic!("no frame matches the Down layer"))
}
