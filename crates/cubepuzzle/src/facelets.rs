//! Restoring a cube from its 54-sticker text form.
//!
//! The text form is the output of [`Cube::serialize()`]: one color character
//! per sticker, faces in index order, each face in
//! [`FACE_SLOTS`](crate::topology::FACE_SLOTS) order. Whitespace is ignored,
//! so the [`Display`](std::fmt::Display) dump with face names removed also
//! loads.

use cubemath::Quaternion;
use itertools::Itertools;
use smallvec::SmallVec;
use thiserror::Error;

use crate::topology::{self, NUM_SLOTS, PieceKind};
use crate::{Color, Cube, Cubelet, Direction, Face};

/// Number of stickers on the cube.
pub const NUM_STICKERS: usize = 54;

lazy_static::lazy_static! {
    /// The 24 orientations of a cube, starting with the identity.
    static ref CUBE_ROTATIONS: Vec<Quaternion> = {
        let generators = [Face::Left, Face::Down, Face::Front]
            .map(|f| f.rotation(Direction::Clockwise));
        let mut rotations = vec![Quaternion::IDENTITY];
        let mut i = 0;
        while i < rotations.len() {
            for g in generators {
                let q = rotations[i] * g;
                if !rotations.iter().any(|r| r.nearly_equal(q)) {
                    rotations.push(q);
                }
            }
            i += 1;
        }
        rotations
    };
}

/// Error returned when facelet text does not describe a valid cube.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletError {
    #[error("expected {NUM_STICKERS} stickers, found {0}")]
    WrongLength(usize),
    #[error("unknown color {color:?} at sticker {index}")]
    UnknownColor { color: char, index: usize },
    #[error("center of {face} is {found}, expected {expected}")]
    WrongCenter {
        face: Face,
        found: Color,
        expected: Color,
    },
    #[error("no cubelet has the stickers {stickers} found at slot {slot}")]
    NoSuchCubelet { slot: usize, stickers: String },
    #[error("cubelet {id} appears at both slot {first} and slot {second}")]
    DuplicateCubelet {
        id: usize,
        first: usize,
        second: usize,
    },
    #[error("no rotation of cubelet {id} shows the stickers found at slot {slot}")]
    ImpossibleOrientation { id: usize, slot: usize },
    #[error("state cannot be reached by turning faces: {0}")]
    Unreachable(&'static str),
}

impl Cube {
    /// Restores a cube from its sticker text.
    ///
    /// Centers, which have no visible orientation, are restored unrotated.
    pub fn from_facelets(s: &str) -> Result<Self, FaceletError> {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect_vec();
        if chars.len() != NUM_STICKERS {
            return Err(FaceletError::WrongLength(chars.len()));
        }
        let colors: Vec<Color> = chars
            .iter()
            .enumerate()
            .map(|(index, &color)| {
                Color::from_char(color).ok_or(FaceletError::UnknownColor { color, index })
            })
            .collect::<Result<_, _>>()?;
        let sticker = |face: Face, slot: usize| -> Option<Color> {
            let i = topology::face_index_of_slot(face, slot)?;
            Some(colors[face.index() * topology::FACE_SIZE + i])
        };

        for face in Face::ALL {
            let found = colors[face.index() * topology::FACE_SIZE + 4];
            if found != face.color() {
                return Err(FaceletError::WrongCenter {
                    face,
                    found,
                    expected: face.color(),
                });
            }
        }

        let mut placed: Vec<Option<Cubelet>> = vec![None; NUM_SLOTS];
        for slot in 0..NUM_SLOTS {
            let shown: SmallVec<[(Face, Color); 3]> = topology::faces_of_slot(slot)
                .into_iter()
                .filter_map(|face| Some((face, sticker(face, slot)?)))
                .collect();

            let id = identify(slot, &shown)?;
            if let Some(other) = &placed[id] {
                return Err(FaceletError::DuplicateCubelet {
                    id,
                    first: other.position(),
                    second: slot,
                });
            }

            let mut cubelet = Cubelet::new(id);
            cubelet.set_position(slot);
            let orientation = CUBE_ROTATIONS
                .iter()
                .copied()
                .find(|&q| {
                    cubelet.set_orientation(q);
                    shown
                        .iter()
                        .all(|&(face, color)| cubelet.shown_color(face) == color)
                })
                .ok_or(FaceletError::ImpossibleOrientation { id, slot })?;
            cubelet.set_orientation(orientation);
            placed[id] = Some(cubelet);
        }

        // Every slot received a distinct cubelet, so every ID is present.
        let cube = Cube::from_parts(placed.into_iter().flatten().collect());
        check_reachable(&cube)?;
        Ok(cube)
    }
}

/// Returns the ID of the cubelet whose home stickers are `shown`.
fn identify(slot: usize, shown: &[(Face, Color)]) -> Result<usize, FaceletError> {
    let home_faces = shown.iter().map(|(_, c)| c.home_face()).collect_vec();
    let same_axis = home_faces
        .iter()
        .tuple_combinations()
        .any(|(a, b)| a == b || a.opposite() == *b);
    if same_axis {
        return Err(FaceletError::NoSuchCubelet {
            slot,
            stickers: shown.iter().map(|(_, c)| c.to_char()).collect(),
        });
    }
    Ok(topology::slot_at(&home_faces))
}

/// Checks the three invariants preserved by face turns: total corner twist,
/// total edge flip, and matching corner and edge permutation parity.
fn check_reachable(cube: &Cube) -> Result<(), FaceletError> {
    let corners = cube
        .cubelets()
        .iter()
        .filter(|c| c.kind() == PieceKind::Corner);
    let edges = cube
        .cubelets()
        .iter()
        .filter(|c| c.kind() == PieceKind::Edge);

    if corners.clone().map(corner_twist).sum::<usize>() % 3 != 0 {
        return Err(FaceletError::Unreachable("a corner is twisted"));
    }
    if edges.clone().filter(|&c| is_edge_flipped(c)).count() % 2 != 0 {
        return Err(FaceletError::Unreachable("an edge is flipped"));
    }
    if permutation_parity(cube, corners) != permutation_parity(cube, edges) {
        return Err(FaceletError::Unreachable("two pieces are swapped"));
    }
    Ok(())
}

/// Returns how far a corner's Up/Down sticker is twisted from pointing along
/// the Y axis, counting with a fixed handedness.
fn corner_twist(corner: &Cubelet) -> usize {
    let horizontal = |faces: &[Face]| faces.iter().copied().find(|f| f.is_horizontal());
    let Some(home_ud) = horizontal(&corner.home_faces()) else {
        return 0;
    };
    let facing = corner.facing(home_ud);

    let slot_faces = topology::faces_of_slot(corner.position());
    let Some(slot_ud) = horizontal(&slot_faces) else {
        return 0;
    };
    let Some((a, b)) = slot_faces
        .iter()
        .copied()
        .filter(|&f| f != slot_ud)
        .collect_tuple()
    else {
        return 0;
    };
    let order = match slot_ud.normal().cross(a.normal()).dot(b.normal()) > 0.0 {
        true => [slot_ud, a, b],
        false => [slot_ud, b, a],
    };
    order.iter().position(|&f| f == facing).unwrap_or(0)
}

/// Returns whether an edge's primary sticker is off its slot's primary face.
/// The primary face is Up or Down if present, otherwise Front or Back.
fn is_edge_flipped(edge: &Cubelet) -> bool {
    fn primary(faces: &[Face]) -> Option<Face> {
        faces
            .iter()
            .copied()
            .find(|f| f.is_horizontal())
            .or_else(|| faces.iter().copied().find(|f| matches!(f, Face::Front | Face::Back)))
    }
    match (
        primary(&edge.home_faces()),
        primary(&topology::faces_of_slot(edge.position())),
    ) {
        (Some(home), Some(slot)) => edge.facing(home) != slot,
        _ => false,
    }
}

/// Returns the parity of the permutation of `pieces`: `true` if odd.
fn permutation_parity<'a>(cube: &Cube, pieces: impl Iterator<Item = &'a Cubelet>) -> bool {
    let mut seen = [false; NUM_SLOTS];
    let mut transpositions: usize = 0;
    for piece in pieces {
        let mut id = piece.id();
        let mut cycle_len: usize = 0;
        while !seen[id] {
            seen[id] = true;
            id = cube.cube_by_id(id).position();
            cycle_len += 1;
        }
        transpositions += cycle_len.saturating_sub(1);
    }
    transpositions % 2 == 1
}
