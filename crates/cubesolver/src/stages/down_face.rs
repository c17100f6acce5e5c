use cubepuzzle::topology::{neighbor_index, neighbors_of, slot_at, slots_of};
use cubepuzzle::{Cube, Face, StepQueue};

use super::enqueue_turns;
use crate::Frame;
use crate::notation::{DOWN_CROSS, RelFace, SUNE};

/// Returns whether every Down sticker faces down.
pub fn check_down_face(cube: &Cube) -> bool {
    slots_of(Face::Down)
        .iter()
        .all(|&slot| cube.cube_at(slot).shown_face(Face::Down) == Face::Down)
}

pub(super) fn solve_step(cube: &Cube, queue: &mut StepQueue) {
    let frame = Frame::new(Face::Down, Face::Front);
    let sides = neighbors_of(Face::Down);

    // Edges, in neighbor order.
    let edge_ok = sides.map(|side| {
        let slot = slot_at(&[Face::Down, side]);
        cube.cube_at(slot).shown_face(Face::Down) == Face::Down
    });
    let oriented_edges = edge_ok.iter().filter(|&&ok| ok).count();
    match oriented_edges {
        4 => (),
        0 => {
            frame.apply(&DOWN_CROSS, queue);
            return;
        }
        2 => {
            for k in 0..4 {
                // Which sides hold an oriented edge after `k` Down turns.
                let ok_after =
                    |face: Face| edge_ok[(neighbor_index(Face::Down, face) + 4 - k) % 4];
                let line = ok_after(frame.left()) && ok_after(frame.right());
                let corner = ok_after(frame.back()) && ok_after(frame.left());
                if line || corner {
                    enqueue_turns(queue, Face::Down, k);
                    frame.apply(&DOWN_CROSS, queue);
                    return;
                }
            }
            unreachable!("two oriented edges always form a line or a corner");
        }
        n => {
            log::error!("{n} oriented Down edges is not reachable");
            panic!("{n} oriented Down edges is not reachable");
        }
    }

    // Corners. Count how many already face down, then turn Down until the
    // front-left corner is in the right state for a sune.
    let oriented_corners = CORNER_POSITIONS
        .iter()
        .filter(|&&rel| corner_sticker_direction(cube, frame, rel, 0) == RelFace::U)
        .count();
    for k in 0..4 {
        let front_left = corner_sticker_direction(cube, frame, (RelFace::F, RelFace::L), k);
        let ready = match oriented_corners {
            0 => front_left == RelFace::L,
            1 => front_left == RelFace::U,
            2 => front_left == RelFace::F,
            _ => false,
        };
        if ready {
            enqueue_turns(queue, Face::Down, k);
            frame.apply(&SUNE, queue);
            return;
        }
    }
    log::error!("no sune setup for {oriented_corners} oriented Down corners");
    panic!("no sune setup for {oriented_corners} oriented Down corners");
}

/// Corner positions of the top layer, relative to the frame.
const CORNER_POSITIONS: [(RelFace, RelFace); 4] = [
    (RelFace::F, RelFace::L),
    (RelFace::F, RelFace::R),
    (RelFace::B, RelFace::L),
    (RelFace::B, RelFace::R),
];

/// Returns which way the Down sticker of a corner would point, relative to
/// `frame`, once Down has been turned `k` times. `rel` is the position of the
/// corner after those turns.
fn corner_sticker_direction(
    cube: &Cube,
    frame: Frame,
    rel: (RelFace, RelFace),
    k: usize,
) -> RelFace {
    let sides = neighbors_of(Face::Down);
    let before_turns = |face: Face| sides[(neighbor_index(Face::Down, face) + 4 - k % 4) % 4];
    let a = before_turns(frame.resolve(rel.0));
    let b = before_turns(frame.resolve(rel.1));
    let cubelet = cube.cube_at(slot_at(&[Face::Down, a, b]));
    if cubelet.shown_face(a) == Face::Down {
        rel.0
    } else if cubelet.shown_face(b) == Face::Down {
        rel.1
    } else {
        RelFace::U
    }
}
