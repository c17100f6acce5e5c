//! Static topology of the 3x3x3 cube: which slots belong to which face, how a
//! face turn permutes them, and which faces border each other.
//!
//! Slots are numbered `0..27` in layers from top to bottom. Within a layer,
//! rows run from back to front and columns from left to right, so slot `s`
//! has layer `s / 9`, row `s % 9 / 3`, and column `s % 3`.

use smallvec::SmallVec;

use crate::{Direction, Face};

/// Number of slots (and cubelets) in the cube.
pub const NUM_SLOTS: usize = 27;
/// Number of slots in a face layer.
pub const FACE_SIZE: usize = 9;
/// Slot at the center of the cube.
pub const CORE_SLOT: usize = 13;

/// Slots in each face, in the order in which the face's stickers are read
/// when looking at the face from outside the cube.
pub const FACE_SLOTS: [[usize; FACE_SIZE]; 6] = [
    [0, 3, 6, 9, 12, 15, 18, 21, 24],  // Left
    [8, 5, 2, 17, 14, 11, 26, 23, 20], // Right
    [24, 25, 26, 21, 22, 23, 18, 19, 20], // Down
    [0, 1, 2, 3, 4, 5, 6, 7, 8],       // Up
    [6, 7, 8, 15, 16, 17, 24, 25, 26], // Front
    [2, 1, 0, 11, 10, 9, 20, 19, 18],  // Back
];

/// Face-index permutation of a clockwise turn: the cubelet at face index `i`
/// moves to face index `j` where `TURN_PATTERN[j] == i`.
pub const TURN_PATTERN: [usize; FACE_SIZE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Side faces adjacent to each face, in the order in which a piece travels
/// between them under a clockwise turn.
pub const NEIGHBORS: [[Face; 4]; 6] = {
    use Face::*;
    [
        [Down, Back, Up, Front],   // Left
        [Down, Front, Up, Back],   // Right
        [Left, Front, Right, Back], // Down
        [Left, Back, Right, Front], // Up
        [Left, Up, Right, Down],   // Front
        [Left, Down, Right, Up],   // Back
    ]
};

/// Kind of piece that occupies a slot when the cube is solved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Hidden piece at the center of the cube.
    Core,
    /// Piece with one visible sticker.
    Center,
    /// Piece with two visible stickers.
    Edge,
    /// Piece with three visible stickers.
    Corner,
}

impl PieceKind {
    /// Returns the kind of piece at a slot.
    pub fn of_slot(slot: usize) -> Self {
        match slot_coords(slot).iter().filter(|&&c| c != 0).count() {
            0 => PieceKind::Core,
            1 => PieceKind::Center,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        }
    }
}

/// Returns the slots of a face.
pub fn slots_of(face: Face) -> &'static [usize; FACE_SIZE] {
    &FACE_SLOTS[face.index()]
}

/// Returns the position of `slot` within `face`, or `None` if the slot is not
/// part of that face.
pub fn face_index_of_slot(face: Face, slot: usize) -> Option<usize> {
    slots_of(face).iter().position(|&s| s == slot)
}

/// Returns whether `slot` is part of `face`.
pub fn face_contains(face: Face, slot: usize) -> bool {
    face_index_of_slot(face, slot).is_some()
}

/// Returns the faces that contain `slot`, in index order.
pub fn faces_of_slot(slot: usize) -> SmallVec<[Face; 3]> {
    Face::ALL
        .into_iter()
        .filter(|&f| face_contains(f, slot))
        .collect()
}

/// Returns the faces that contain `slot`, excluding [`Face::Up`] and
/// [`Face::Down`].
pub fn side_faces_of_slot(slot: usize) -> SmallVec<[Face; 3]> {
    faces_of_slot(slot)
        .into_iter()
        .filter(|f| !f.is_horizontal())
        .collect()
}

/// Returns the integer coordinates of a slot, each from -1 to 1.
///
/// X runs from left to right, Y from down to up, and Z from front to back.
///
/// # Panics
///
/// Panics if `slot` is out of range.
pub fn slot_coords(slot: usize) -> [i8; 3] {
    assert!(slot < NUM_SLOTS, "slot {slot} out of range");
    let slot = slot as i8;
    [slot % 3 - 1, 1 - slot / 9, 1 - slot % 9 / 3]
}

/// Returns the slot at the given integer coordinates.
///
/// # Panics
///
/// Panics if any coordinate is outside -1 to 1.
pub fn slot_from_coords([x, y, z]: [i8; 3]) -> usize {
    assert!(
        [x, y, z].iter().all(|c| (-1..=1).contains(c)),
        "coordinates {:?} out of range",
        [x, y, z],
    );
    ((1 - y) * 9 + (1 - z) * 3 + (x + 1)) as usize
}

/// Returns the unique slot that touches exactly `faces`.
///
/// # Panics
///
/// Panics if `faces` contains two faces on the same axis.
pub fn slot_at(faces: &[Face]) -> usize {
    let mut coords = [0_i8; 3];
    for &face in faces {
        let n = face.normal();
        let (axis, sign) = if n.x != 0.0 {
            (0, n.x)
        } else if n.y != 0.0 {
            (1, n.y)
        } else {
            (2, n.z)
        };
        assert!(coords[axis] == 0, "no slot touches all of {faces:?}");
        coords[axis] = sign as i8;
    }
    slot_from_coords(coords)
}

/// Returns the slot that a cubelet at `slot` moves to when `face` is turned in
/// `direction`, or `None` if the slot is not part of the face.
pub fn turn_destination(face: Face, direction: Direction, slot: usize) -> Option<usize> {
    let i = face_index_of_slot(face, slot)?;
    let j = match direction {
        Direction::Clockwise => TURN_PATTERN.iter().position(|&p| p == i)?,
        Direction::CounterClockwise => TURN_PATTERN[i],
    };
    Some(slots_of(face)[j])
}

/// Returns the slot that a cubelet at `slot` moves to after `count` clockwise
/// turns of `face`. Slots outside the face are unchanged.
pub fn slot_after_turns(face: Face, slot: usize, count: usize) -> usize {
    (0..count % 4).fold(slot, |s, _| {
        turn_destination(face, Direction::Clockwise, s).unwrap_or(s)
    })
}

/// Returns the four faces adjacent to `face`, in clockwise travel order.
pub fn neighbors_of(face: Face) -> &'static [Face; 4] {
    &NEIGHBORS[face.index()]
}

/// Returns the position of `neighbor` in the neighbor list of `face`, or
/// `None` if the faces are not adjacent.
pub fn index_in_neighbors(face: Face, neighbor: Face) -> Option<usize> {
    neighbors_of(face).iter().position(|&f| f == neighbor)
}

/// Returns the position of `neighbor` in the neighbor list of `face`.
///
/// # Panics
///
/// Panics if the faces are not adjacent.
pub fn neighbor_index(face: Face, neighbor: Face) -> usize {
    match index_in_neighbors(face, neighbor) {
        Some(i) => i,
        None => {
            log::error!("{neighbor} is not a neighbor of {face}");
            panic!("{neighbor} is not a neighbor of {face}");
        }
    }
}

/// Returns the number of clockwise quarter turns of `face` (0 to 3) that carry
/// a piece adjacent to `from` to be adjacent to `to`.
///
/// # Panics
///
/// Panics if `from` or `to` is not adjacent to `face`.
pub fn turns_between(face: Face, from: Face, to: Face) -> usize {
    (neighbor_index(face, to) + 4 - neighbor_index(face, from)) % 4
}

#[cfg(test)]
mod tests {
    use cubemath::Vector3;
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_slot_coords_match_face_membership() {
        for slot in 0..NUM_SLOTS {
            let coords = slot_coords(slot);
            assert_eq!(slot_from_coords(coords), slot);
            for face in Face::iter() {
                let along = Vector3::from(coords).dot(face.normal());
                assert_eq!(face_contains(face, slot), along == 1.0, "{face} {slot}");
            }
        }
    }

    #[test]
    fn test_slot_at() {
        assert_eq!(slot_at(&[Face::Up, Face::Front, Face::Left]), 6);
        assert_eq!(slot_at(&[Face::Down, Face::Back, Face::Right]), 20);
        assert_eq!(slot_at(&[Face::Front, Face::Right]), 17);
        assert_eq!(slot_at(&[Face::Down]), 22);
        assert_eq!(slot_at(&[]), CORE_SLOT);
        for slot in 0..NUM_SLOTS {
            assert_eq!(slot_at(&faces_of_slot(slot)), slot);
        }
    }

    #[test]
    #[should_panic]
    fn test_slot_at_opposite_faces() {
        slot_at(&[Face::Up, Face::Down]);
    }

    #[test]
    fn test_piece_kinds() {
        let counts = (0..NUM_SLOTS).map(PieceKind::of_slot).counts();
        assert_eq!(counts[&PieceKind::Core], 1);
        assert_eq!(counts[&PieceKind::Center], 6);
        assert_eq!(counts[&PieceKind::Edge], 12);
        assert_eq!(counts[&PieceKind::Corner], 8);
        for face in Face::iter() {
            assert_eq!(PieceKind::of_slot(slots_of(face)[4]), PieceKind::Center);
        }
    }

    #[test]
    fn test_turn_fixes_center_and_is_bijection() {
        for face in Face::iter() {
            for direction in Direction::iter() {
                let center = slots_of(face)[4];
                assert_eq!(turn_destination(face, direction, center), Some(center));
                let dests = slots_of(face)
                    .iter()
                    .map(|&s| turn_destination(face, direction, s).unwrap())
                    .sorted()
                    .collect_vec();
                assert_eq!(dests, slots_of(face).iter().copied().sorted().collect_vec());
            }
        }
    }

    #[test]
    fn test_turn_moves_pieces_between_neighbors() {
        // A clockwise turn carries the piece bordering neighbor `k` to border
        // neighbor `k + 1`.
        for face in Face::iter() {
            let nbrs = neighbors_of(face);
            for k in 0..4 {
                let slot = slot_at(&[face, nbrs[k]]);
                let dest = turn_destination(face, Direction::Clockwise, slot).unwrap();
                assert_eq!(dest, slot_at(&[face, nbrs[(k + 1) % 4]]), "{face}");
                let back = turn_destination(face, Direction::CounterClockwise, dest).unwrap();
                assert_eq!(back, slot);
            }
        }
    }

    #[test]
    fn test_clockwise_matches_rotation() {
        // The slot permutation agrees with the quaternion each cubelet receives.
        for face in Face::iter() {
            let q = face.rotation(Direction::Clockwise);
            for &slot in slots_of(face) {
                let dest = turn_destination(face, Direction::Clockwise, slot).unwrap();
                let moved = q.rotate_vector(slot_coords(slot).into());
                assert!(moved.approx_eq(slot_coords(dest).into()), "{face} {slot}");
            }
        }
    }

    #[test]
    fn test_turns_between() {
        assert_eq!(turns_between(Face::Down, Face::Left, Face::Front), 1);
        assert_eq!(turns_between(Face::Down, Face::Front, Face::Left), 3);
        assert_eq!(turns_between(Face::Up, Face::Left, Face::Right), 2);
        assert_eq!(turns_between(Face::Front, Face::Up, Face::Up), 0);
        assert_eq!(index_in_neighbors(Face::Up, Face::Down), None);
    }

    #[test]
    #[should_panic]
    fn test_neighbor_index_of_opposite_face() {
        neighbor_index(Face::Front, Face::Back);
    }
}
