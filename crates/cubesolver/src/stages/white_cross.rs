use cubepuzzle::topology::{faces_of_slot, turns_between};
use cubepuzzle::{Cube, Face, StepQueue};

use super::{all_solved, enqueue_turns, other_face};
use crate::Frame;
use crate::notation::EDGE_FLIP;

/// IDs of the Up edges.
pub const CROSS_IDS: [usize; 4] = [1, 3, 5, 7];

/// Returns whether every Up edge is home and unrotated.
pub fn check_white_cross(cube: &Cube) -> bool {
    all_solved(cube, &CROSS_IDS)
}

pub(super) fn solve_step(cube: &Cube, queue: &mut StepQueue) {
    let Some(cubelet) = CROSS_IDS
        .iter()
        .map(|&id| cube.cube_by_id(id))
        .find(|c| !c.is_solved())
    else {
        return;
    };

    let id = cubelet.id();
    let pos = cubelet.position();
    let target = other_face(&faces_of_slot(id), Face::Up);
    let faces = faces_of_slot(pos);

    if pos == id {
        // Home but flipped.
        Frame::new(Face::Up, target).apply(&EDGE_FLIP, queue);
    } else if faces.contains(&target) {
        // On the target face; turn it straight up.
        let other = other_face(&faces, target);
        enqueue_turns(queue, target, turns_between(target, other, Face::Up));
    } else if faces.contains(&Face::Down) {
        // Bring it under the target face.
        let other = other_face(&faces, Face::Down);
        enqueue_turns(queue, Face::Down, turns_between(Face::Down, other, target));
    } else if faces.contains(&Face::Up) {
        // In the wrong Up slot; drop it to Down, move it under the target, and
        // restore the slot it came from.
        let side = other_face(&faces, Face::Up);
        enqueue_turns(queue, side, 2);
        enqueue_turns(queue, Face::Down, turns_between(Face::Down, side, target));
        enqueue_turns(queue, side, 2);
    } else {
        // In the middle layer; drop it to Down and undo the drop afterward.
        let (x, y) = (faces[0], faces[1]);
        let k = turns_between(x, y, Face::Down);
        enqueue_turns(queue, x, k);
        enqueue_turns(queue, Face::Down, turns_between(Face::Down, x, target));
        enqueue_turns(queue, x, (4 - k) % 4);
    }
}

#[cfg(test)]
mod tests {
    use cubepuzzle::Step;
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan(setup: &str) -> (Cube, StepQueue) {
        let mut cube = Cube::new();
        cube.apply_all(&Step::parse_sequence(setup).unwrap());
        let mut queue = StepQueue::new();
        solve_step(&cube, &mut queue);
        (cube, queue)
    }

    fn run_until_solved(mut cube: Cube) -> usize {
        let mut ticks = 0;
        while !check_white_cross(&cube) {
            let mut queue = StepQueue::new();
            solve_step(&cube, &mut queue);
            assert!(!queue.is_empty());
            cube.apply_all(queue.iter());
            ticks += 1;
            assert!(ticks < 50, "white cross did not converge");
        }
        ticks
    }

    #[test]
    fn test_flipped_edge_uses_edge_flip() {
        // The edge flip trigger is its own fix: it flips the front edge in
        // place, and applying it again flips it back.
        let (mut cube, queue) = plan("F U' R U");
        assert!(!check_white_cross(&cube));
        assert_eq!(queue.to_string(), "F U' R U");
        cube.apply_all(queue.iter());
        assert!(check_white_cross(&cube));
    }

    #[test]
    fn test_edge_on_target_face_turns_up() {
        // After F, the front cross edge sits on the Front face at the right.
        let (_, queue) = plan("F");
        assert_eq!(queue.to_string(), "F'");
    }

    #[test]
    fn test_edge_in_down_layer() {
        let (cube, queue) = plan("F F D");
        // Moving the edge under Front takes one Down turn back.
        assert_eq!(queue.to_string(), "D'");
        assert_eq!(run_until_solved(cube), 2);
    }

    #[test]
    fn test_edge_in_wrong_up_slot() {
        // After U, the back edge sits in the Up-Right slot. It drops under
        // Right, moves under Back, and Right goes back up.
        let (cube, queue) = plan("U");
        assert_eq!(queue.to_string(), "R R D R R");
        assert_eq!(run_until_solved(cube), 6);
    }

    #[test]
    fn test_edge_in_middle_layer() {
        // The back edge sits in the Front-Right slot.
        let (cube, queue) = plan("U R'");
        assert_eq!(cube.cube_by_id(1).position(), 17);
        assert_eq!(queue.to_string(), "R' D R");
        assert_eq!(run_until_solved(cube), 6);
    }

    #[test]
    fn test_scrambles_converge() {
        for setup in ["R U F' L D B", "U U R' F D' L L B", "B' D R R U' F L'"] {
            let mut cube = Cube::new();
            cube.apply_all(&Step::parse_sequence(setup).unwrap());
            run_until_solved(cube);
        }
    }
}
