use cubemath::{Quaternion, Vector3};
use smallvec::SmallVec;

use crate::topology::{self, PieceKind};
use crate::{Color, Face};

/// One of the 27 unit cubes that make up the puzzle.
///
/// A cubelet is identified by the slot it occupies when the cube is solved.
/// It carries one sticker per original face; `orientation` records how those
/// faces have been rotated since then.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubelet {
    id: usize,
    position: usize,
    orientation: Quaternion,
}

impl Cubelet {
    /// Constructs a cubelet at its home slot with no rotation.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            position: id,
            orientation: Quaternion::IDENTITY,
        }
    }

    /// Returns the identifier of the cubelet, which is also its home slot.
    pub fn id(&self) -> usize {
        self.id
    }
    /// Returns the slot that the cubelet occupies when the cube is solved.
    pub fn initial_position(&self) -> usize {
        self.id
    }
    /// Returns the slot that the cubelet currently occupies.
    pub fn position(&self) -> usize {
        self.position
    }
    /// Returns the accumulated rotation of the cubelet.
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }
    /// Returns the kind of piece, based on its home slot.
    pub fn kind(&self) -> PieceKind {
        PieceKind::of_slot(self.id)
    }
    /// Returns the faces whose stickers are visible when the cubelet is at
    /// home.
    pub fn home_faces(&self) -> SmallVec<[Face; 3]> {
        topology::faces_of_slot(self.id)
    }

    pub(crate) fn set_position(&mut self, slot: usize) {
        self.position = slot;
    }
    pub(crate) fn set_orientation(&mut self, orientation: Quaternion) {
        self.orientation = orientation;
    }

    /// Composes `turn` after the current orientation.
    pub fn rotate_by(&mut self, turn: Quaternion) {
        self.orientation = self.orientation * turn;
    }
    /// Composes a rotation given by Euler angles in degrees after the current
    /// orientation.
    pub fn rotate(&mut self, [x, y, z]: [cubemath::Float; 3]) {
        self.rotate_by(Quaternion::from_euler(x, y, z));
    }

    /// Returns the cubelet to its home slot with no rotation.
    pub fn reset(&mut self) {
        self.reset_position();
        self.reset_rotation();
    }
    /// Moves the cubelet back to its home slot without changing its rotation.
    pub fn reset_position(&mut self) {
        self.position = self.id;
    }
    /// Clears the cubelet's rotation without moving it.
    pub fn reset_rotation(&mut self) {
        self.orientation = Quaternion::IDENTITY;
    }

    /// Returns whether the cubelet is in its home slot.
    pub fn is_at_home(&self) -> bool {
        self.position == self.id
    }
    /// Returns whether the cubelet has no net rotation.
    pub fn is_unrotated(&self) -> bool {
        self.orientation.is_identity()
    }
    /// Returns whether the cubelet is in its home slot with no net rotation.
    pub fn is_solved(&self) -> bool {
        self.is_at_home() && self.is_unrotated()
    }

    /// Returns the direction that the sticker of `original` now points.
    pub fn facing(&self, original: Face) -> Face {
        let v = self.orientation.rotate_vector(original.normal());
        nearest_face(v)
    }
    /// Returns the original face whose sticker now points toward `target`.
    pub fn shown_face(&self, target: Face) -> Face {
        let normal = target.normal();
        Face::ALL
            .into_iter()
            .find(|&f| self.orientation.rotate_vector(f.normal()).approx_eq(normal))
            .unwrap_or_else(|| {
                // Orientations only accumulate quarter turns, so some face
                // always lines up.
                log::error!(
                    "cubelet {} has orientation {} which is not axis-aligned",
                    self.id,
                    self.orientation,
                );
                panic!("cubelet {} is not axis-aligned", self.id)
            })
    }
    /// Returns the color of the sticker that points toward `target`.
    pub fn shown_color(&self, target: Face) -> Color {
        self.shown_face(target).color()
    }
}

/// Returns the face whose normal is closest to `v`.
fn nearest_face(v: Vector3) -> Face {
    Face::ALL
        .into_iter()
        .max_by(|a, b| a.normal().dot(v).total_cmp(&b.normal().dot(v)))
        .unwrap_or(Face::Up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_new_cubelet_is_solved() {
        let c = Cubelet::new(6);
        assert!(c.is_solved());
        assert_eq!(c.kind(), PieceKind::Corner);
        assert_eq!(c.home_faces().as_slice(), [Face::Left, Face::Up, Face::Front]);
        for face in Face::ALL {
            assert_eq!(c.shown_face(face), face);
            assert_eq!(c.facing(face), face);
        }
    }

    #[test]
    fn test_shown_face_after_up_turn() {
        let mut c = Cubelet::new(6);
        c.rotate_by(Face::Up.rotation(Direction::Clockwise));
        // A clockwise Up turn carries the front sticker to the left.
        assert_eq!(c.facing(Face::Front), Face::Left);
        assert_eq!(c.shown_face(Face::Left), Face::Front);
        assert_eq!(c.shown_color(Face::Left), Color::Blue);
        assert_eq!(c.shown_face(Face::Up), Face::Up);
        assert!(!c.is_unrotated());

        c.rotate([0.0, 90.0, 0.0]);
        assert!(c.is_unrotated());
    }

    #[test]
    fn test_reset() {
        let mut c = Cubelet::new(1);
        c.set_position(5);
        c.rotate_by(Face::Up.rotation(Direction::Clockwise));
        c.reset_position();
        assert!(c.is_at_home());
        assert!(!c.is_solved());
        c.reset();
        assert!(c.is_solved());
    }
}
