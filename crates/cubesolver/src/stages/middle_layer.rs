use cubepuzzle::topology::{faces_of_slot, side_faces_of_slot, turns_between};
use cubepuzzle::{Cube, Face, StepQueue};

use super::{all_solved, enqueue_turns, other_face};
use crate::Frame;
use crate::notation::{LEFT_INSERT, RIGHT_INSERT};

/// IDs of the middle-layer edges.
pub const MIDDLE_IDS: [usize; 4] = [9, 11, 15, 17];

/// Returns whether every middle-layer edge is home and unrotated.
pub fn check_middle_layer(cube: &Cube) -> bool {
    all_solved(cube, &MIDDLE_IDS)
}

pub(super) fn solve_step(cube: &Cube, queue: &mut StepQueue) {
    let Some(cubelet) = MIDDLE_IDS
        .iter()
        .map(|&id| cube.cube_by_id(id))
        .find(|c| !c.is_solved())
    else {
        return;
    };

    let faces = faces_of_slot(cubelet.position());

    if faces.contains(&Face::Down) {
        let side = other_face(&faces, Face::Down);
        // The sticker on the side must end up over its own center.
        let shown = cubelet.shown_face(side);
        let k = turns_between(Face::Down, side, shown);
        if k > 0 {
            enqueue_turns(queue, Face::Down, k);
            return;
        }

        let other = other_face(&side_faces_of_slot(cubelet.id()), shown);
        let frame = Frame::new(Face::Down, shown);
        if frame.right() == other {
            frame.apply(&RIGHT_INSERT, queue);
        } else if frame.left() == other {
            frame.apply(&LEFT_INSERT, queue);
        } else {
            log::error!("middle edge {} has no slot beside {shown}", cubelet.id());
            panic!("middle edge {} has no slot beside {shown}", cubelet.id());
        }
        return;
    }

    // Stuck in the wrong middle slot or flipped; kick it out to Down.
    let (a, b) = (faces[0], faces[1]);
    let front = if Frame::new(Face::Down, a).right() == b {
        a
    } else {
        b
    };
    Frame::new(Face::Down, front).apply(&RIGHT_INSERT, queue);
}

#[cfg(test)]
mod tests {
    use cubepuzzle::Step;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::stages::{check_white_corners, check_white_cross};

    fn scrambled(setup: &str) -> Cube {
        let mut cube = Cube::new();
        cube.apply_all(&Step::parse_sequence(setup).unwrap());
        assert!(check_white_cross(&cube));
        assert!(check_white_corners(&cube));
        cube
    }

    fn plan(cube: &Cube) -> String {
        let mut queue = StepQueue::new();
        solve_step(cube, &mut queue);
        queue.to_string()
    }

    fn run_until_solved(mut cube: Cube) -> usize {
        let mut ticks = 0;
        while !check_middle_layer(&cube) {
            let mut queue = StepQueue::new();
            solve_step(&cube, &mut queue);
            cube.apply_all(queue.iter());
            assert!(check_white_cross(&cube) && check_white_corners(&cube));
            ticks += 1;
            assert!(ticks < 50, "middle layer did not converge");
        }
        ticks
    }

    #[test]
    fn test_right_insertion() {
        let cube = scrambled("F' D' F D L D L' D'");
        assert_eq!(plan(&cube), "D L D' L' D' F' D F");
        assert_eq!(run_until_solved(cube), 1);
    }

    #[test]
    fn test_left_insertion() {
        let cube = scrambled("D L D' L' D' F' D F D");
        assert_eq!(plan(&cube), "D' F' D F D L D' L'");
        assert_eq!(run_until_solved(cube), 1);
    }

    #[test]
    fn test_edge_in_down_layer_lines_up_first() {
        let cube = scrambled("D L D' L' D' F' D F");
        assert_eq!(plan(&cube), "D");
        assert_eq!(run_until_solved(cube), 2);
    }

    #[test]
    fn test_flipped_edge_is_kicked_out() {
        let cube = scrambled("D B D' B' D' L' D L D' B D' B' D' L' D L");
        let edge = cube.cube_by_id(9);
        assert!(edge.is_at_home() && !edge.is_solved());
        assert_eq!(plan(&cube), "D B D' B' D' L' D L");
        assert_eq!(run_until_solved(cube), 3);
    }

    #[test]
    fn test_edge_in_other_middle_slot_is_kicked_out() {
        // The back-left edge sits in the front-right slot.
        let cube = scrambled("D B D' B' D' L' D L D F D' F' D' R' D R");
        assert_eq!(cube.cube_by_id(9).position(), 17);
        assert_eq!(plan(&cube), "D F D' F' D' R' D R");
        assert_eq!(run_until_solved(cube), 4);
    }

    #[test]
    fn test_two_edges() {
        let cube = scrambled("D F D' F' D' R' D R D L D' L' D' F' D F");
        assert_eq!(run_until_solved(cube), 4);
    }
}
