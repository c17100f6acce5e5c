use std::fmt;

use itertools::Itertools;
use rand::Rng;

use crate::topology::{self, FACE_SIZE, NUM_SLOTS, PieceKind};
use crate::{Color, Cubelet, Direction, Face, PuzzleError, Step};

/// State of a 3x3x3 cube: the position and orientation of each cubelet.
///
/// Every slot is occupied by exactly one cubelet at all times.
#[derive(Debug, Clone)]
pub struct Cube {
    /// Cubelets indexed by ID.
    cubelets: Vec<Cubelet>,
    /// ID of the cubelet in each slot.
    occupants: [usize; NUM_SLOTS],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.occupants == other.occupants
            && std::iter::zip(&self.cubelets, &other.cubelets)
                .all(|(a, b)| a.orientation().nearly_equal(b.orientation()))
    }
}

impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            cubelets: (0..NUM_SLOTS).map(Cubelet::new).collect(),
            occupants: std::array::from_fn(|i| i),
        }
    }

    /// Returns every cubelet to its home slot with no rotation.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns all cubelets, indexed by ID.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }
    /// Returns the cubelet with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn cube_by_id(&self, id: usize) -> &Cubelet {
        &self.cubelets[id]
    }
    /// Returns the cubelet currently in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn cube_at(&self, slot: usize) -> &Cubelet {
        &self.cubelets[self.occupants[slot]]
    }
    /// Returns whether `cubelet` is currently in `face`.
    pub fn in_face(cubelet: &Cubelet, face: Face) -> bool {
        topology::face_contains(face, cubelet.position())
    }
    /// Returns the cubelets in `face`, in sticker order.
    pub fn face_cubelets(&self, face: Face) -> [&Cubelet; FACE_SIZE] {
        topology::slots_of(face).map(|slot| self.cube_at(slot))
    }

    /// Returns the integer coordinates of the slot that the cubelet `id`
    /// currently occupies.
    pub fn cubelet_coords(&self, id: usize) -> [i8; 3] {
        topology::slot_coords(self.cube_by_id(id).position())
    }

    /// Turns `face` a quarter turn in `direction`, moving and rotating the
    /// nine cubelets in that face.
    pub fn rotate_face(&mut self, face: Face, direction: Direction) {
        let turn = face.rotation(direction);
        let moved = topology::slots_of(face).map(|slot| {
            let dest = topology::turn_destination(face, direction, slot)
                .unwrap_or_else(|| panic!("slot {slot} is not in {face}"));
            (self.occupants[slot], dest)
        });
        for (id, dest) in moved {
            let cubelet = &mut self.cubelets[id];
            log::trace!("cubelet {id}: slot {} -> {dest}", cubelet.position());
            cubelet.set_position(dest);
            cubelet.rotate_by(turn);
            self.occupants[dest] = id;
        }
    }
    /// Turns a face given by raw face index and direction sign. Invalid input
    /// is logged and leaves the cube unchanged.
    pub fn rotate_face_raw(&mut self, face: i32, direction: i32) -> Result<(), PuzzleError> {
        let result = Face::from_index(face).and_then(|face| {
            let direction = Direction::from_sign(direction)?;
            self.rotate_face(face, direction);
            Ok(())
        });
        if let Err(e) = result {
            log::warn!("{e}");
        }
        result
    }
    /// Applies a single step.
    pub fn apply(&mut self, step: Step) {
        self.rotate_face(step.face, step.direction);
    }
    /// Applies a sequence of steps in order.
    pub fn apply_all<'a>(&mut self, steps: impl IntoIterator<Item = &'a Step>) {
        for &step in steps {
            self.apply(step);
        }
    }

    /// Returns the colors visible on `face`, in sticker order.
    pub fn face_colors(&self, face: Face) -> [Color; FACE_SIZE] {
        self.face_cubelets(face).map(|c| c.shown_color(face))
    }

    /// Returns whether every cubelet is in its home slot.
    ///
    /// Orientation is not considered; see [`Self::is_fully_solved()`].
    pub fn is_solved(&self) -> bool {
        self.cubelets.iter().all(Cubelet::is_at_home)
    }
    /// Returns whether every cubelet is in its home slot and every edge and
    /// corner is unrotated.
    ///
    /// Centers and the core have no visible orientation, so their rotation is
    /// ignored.
    pub fn is_fully_solved(&self) -> bool {
        self.cubelets.iter().all(|c| {
            c.is_at_home()
                && match c.kind() {
                    PieceKind::Core | PieceKind::Center => true,
                    PieceKind::Edge | PieceKind::Corner => c.is_unrotated(),
                }
        })
    }

    /// Applies `n` random steps and returns them.
    pub fn shuffle(&mut self, n: usize) -> Vec<Step> {
        self.shuffle_with_rng(n, &mut rand::rng())
    }
    /// Applies `n` random steps chosen using `rng` and returns them.
    pub fn shuffle_with_rng(&mut self, n: usize, rng: &mut impl Rng) -> Vec<Step> {
        let steps = (0..n)
            .map(|_| {
                let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
                let direction = match rng.random_bool(0.5) {
                    true => Direction::Clockwise,
                    false => Direction::CounterClockwise,
                };
                Step::new(face, direction)
            })
            .collect_vec();
        self.apply_all(&steps);
        log::debug!("shuffled with {}", Step::format_sequence(&steps));
        steps
    }

    /// Returns the 54 sticker colors as a string: each face in index order,
    /// and each face's stickers in [`topology::FACE_SLOTS`] order.
    pub fn serialize(&self) -> String {
        Face::ALL
            .into_iter()
            .flat_map(|face| self.face_colors(face))
            .map(Color::to_char)
            .collect()
    }

    pub(crate) fn from_parts(cubelets: Vec<Cubelet>) -> Self {
        let mut occupants = [0; NUM_SLOTS];
        for c in &cubelets {
            occupants[c.position()] = c.id();
        }
        Self {
            cubelets,
            occupants,
        }
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::ALL {
            writeln!(f, "{face}:")?;
            for row in self.face_colors(face).chunks(3) {
                writeln!(f, "  {}", row.iter().map(|c| c.to_char()).join(""))?;
            }
        }
        Ok(())
    }
}
