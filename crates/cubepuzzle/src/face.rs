//! Faces, sticker colors, and turn directions.

use std::fmt;

use cubemath::{Float, Quaternion, Vector3};
use strum::EnumIter;

use crate::PuzzleError;

/// Face of the cube.
///
/// The discriminants are the face indices used throughout the topology tables
/// and the facelet text format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, strum::Display)]
#[repr(u8)]
pub enum Face {
    /// Left face (-X).
    Left = 0,
    /// Right face (+X).
    Right = 1,
    /// Down face (-Y), yellow when solved.
    Down = 2,
    /// Up face (+Y), white when solved.
    Up = 3,
    /// Front face (-Z).
    Front = 4,
    /// Back face (+Z).
    Back = 5,
}

impl Face {
    /// All faces in index order.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Down,
        Face::Up,
        Face::Front,
        Face::Back,
    ];

    /// Returns the index of the face, from 0 to 5.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the face with index `i`.
    pub fn from_index(i: i32) -> Result<Self, PuzzleError> {
        usize::try_from(i)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(PuzzleError::InvalidFace(i))
    }

    /// Returns the face on the opposite side of the cube.
    pub const fn opposite(self) -> Self {
        match self {
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Down => Face::Up,
            Face::Up => Face::Down,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Returns whether the face is perpendicular to the Y axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Face::Up | Face::Down)
    }

    /// Returns the letter used for the face in standard notation.
    pub const fn name_char(self) -> char {
        match self {
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Down => 'D',
            Face::Up => 'U',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }
    /// Returns the face with the given notation letter (case-insensitive).
    pub fn from_name_char(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name_char() == c.to_ascii_uppercase())
    }

    /// Returns the color of the face when the cube is solved.
    pub const fn color(self) -> Color {
        match self {
            Face::Left => Color::Red,
            Face::Right => Color::Orange,
            Face::Down => Color::Yellow,
            Face::Up => Color::White,
            Face::Front => Color::Blue,
            Face::Back => Color::Green,
        }
    }

    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> Vector3 {
        match self {
            Face::Left => -Vector3::X,
            Face::Right => Vector3::X,
            Face::Down => -Vector3::Y,
            Face::Up => Vector3::Y,
            Face::Front => -Vector3::Z,
            Face::Back => Vector3::Z,
        }
    }

    /// Returns the Euler angles in degrees of a clockwise turn of this face.
    pub const fn euler_degrees(self) -> [Float; 3] {
        match self {
            Face::Left => [90.0, 0.0, 0.0],
            Face::Right => [-90.0, 0.0, 0.0],
            Face::Down => [0.0, 90.0, 0.0],
            Face::Up => [0.0, -90.0, 0.0],
            Face::Front => [0.0, 0.0, 90.0],
            Face::Back => [0.0, 0.0, -90.0],
        }
    }

    /// Returns the orientation change that a turn of this face applies to each
    /// of its cubelets.
    pub fn rotation(self, direction: Direction) -> Quaternion {
        let s = direction.sign() as Float;
        let [x, y, z] = self.euler_degrees();
        Quaternion::from_euler(x * s, y * s, z * s)
    }
    /// Returns the rotation after `progress` (from 0.0 to 1.0) of a turn of
    /// this face.
    pub fn partial_rotation(self, direction: Direction, progress: Float) -> Quaternion {
        let s = direction.sign() as Float * progress;
        let [x, y, z] = self.euler_degrees();
        Quaternion::from_euler(x * s, y * s, z * s)
    }
}

/// Sticker color.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    White,
    Blue,
    Green,
}

impl Color {
    /// Returns the single-character name of the color.
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }
    /// Returns the color with the given single-character name
    /// (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        Face::ALL
            .into_iter()
            .map(Face::color)
            .find(|color| color.to_char() == c.to_ascii_uppercase())
    }

    /// Returns the face that has this color when the cube is solved.
    pub const fn home_face(self) -> Face {
        match self {
            Color::Red => Face::Left,
            Color::Orange => Face::Right,
            Color::Yellow => Face::Down,
            Color::White => Face::Up,
            Color::Blue => Face::Front,
            Color::Green => Face::Back,
        }
    }

    /// Returns the display color as linear RGB components from 0.0 to 1.0.
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            Color::Red => [1.0, 0.0, 0.0],
            Color::Orange => [1.0, 0.65, 0.0],
            Color::Yellow => [1.0, 1.0, 0.0],
            Color::White => [1.0, 1.0, 1.0],
            Color::Blue => [0.0, 0.0, 1.0],
            Color::Green => [0.0, 1.0, 0.0],
        }
    }
}

/// Direction of a face turn, as seen looking at the face from outside the
/// cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    /// Clockwise quarter turn.
    #[default]
    Clockwise,
    /// Counterclockwise quarter turn.
    CounterClockwise,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => Ok(()),
            Direction::CounterClockwise => write!(f, "'"),
        }
    }
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
    /// Returns `1` for clockwise and `-1` for counterclockwise.
    pub const fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
    /// Returns the direction with the given sign.
    pub fn from_sign(sign: i32) -> Result<Self, PuzzleError> {
        match sign {
            1 => Ok(Direction::Clockwise),
            -1 => Ok(Direction::CounterClockwise),
            _ => Err(PuzzleError::InvalidDirection(sign)),
        }
    }
}

#[cfg(test)]
mod tests {
    use cubemath::assert_approx_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_index_roundtrip() {
        for face in Face::iter() {
            assert_eq!(Face::from_index(face.index() as i32), Ok(face));
        }
        assert_eq!(Face::from_index(6), Err(PuzzleError::InvalidFace(6)));
        assert_eq!(Face::from_index(-1), Err(PuzzleError::InvalidFace(-1)));
    }

    #[test]
    fn test_opposite_faces_have_opposite_normals() {
        for face in Face::iter() {
            assert_eq!(face.opposite().opposite(), face);
            assert_approx_eq!(face.opposite().normal(), -face.normal());
        }
    }

    #[test]
    fn test_color_chars() {
        for face in Face::iter() {
            let color = face.color();
            assert_eq!(Color::from_char(color.to_char()), Some(color));
            assert_eq!(color.home_face(), face);
        }
        assert_eq!(Color::from_char('w'), Some(Color::White));
        assert_eq!(Color::from_char('X'), None);
    }

    #[test]
    fn test_clockwise_turn_fixes_face_normal() {
        for face in Face::iter() {
            let q = face.rotation(Direction::Clockwise);
            assert_approx_eq!(q.rotate_vector(face.normal()), face.normal());
        }
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::from_sign(1), Ok(Direction::Clockwise));
        assert_eq!(Direction::from_sign(-1), Ok(Direction::CounterClockwise));
        assert_eq!(Direction::from_sign(0), Err(PuzzleError::InvalidDirection(0)));
        assert_eq!(Direction::Clockwise.rev(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.to_string(), "'");
    }
}
