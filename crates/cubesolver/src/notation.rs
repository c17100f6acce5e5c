//! Move sequences written relative to a viewing frame.
//!
//! Triggers are written once in standard notation (`R U R' U'`) and applied
//! through a [`Frame`](crate::Frame) that decides which physical face each
//! letter names.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

/// Face named relative to a frame.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
pub enum RelFace {
    U,
    D,
    F,
    B,
    L,
    R,
}

/// Turn of a relative face by one, two, or three clockwise quarter turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RelMove {
    /// Face to turn.
    pub face: RelFace,
    /// Number of clockwise quarter turns, from 1 to 3. Three quarter turns
    /// are performed as one counterclockwise turn.
    pub quarter_turns: u8,
}

impl fmt::Display for RelMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.quarter_turns {
            2 => "2",
            3 => "'",
            _ => "",
        };
        write!(f, "{}{suffix}", self.face)
    }
}

/// Error returned when parsing relative notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid move {0:?}")]
pub struct NotationError(pub String);

impl FromStr for RelMove {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || NotationError(s.to_owned());
        let (face, suffix) = s.split_at_checked(1).ok_or_else(err)?;
        let face = face.parse().map_err(|_| err())?;
        let quarter_turns = match suffix {
            "" => 1,
            "2" => 2,
            "'" => 3,
            _ => return Err(err()),
        };
        Ok(RelMove {
            face,
            quarter_turns,
        })
    }
}

/// Parses a whitespace-separated sequence of relative moves.
pub fn parse_moves(s: &str) -> Result<Vec<RelMove>, NotationError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Named move sequence in relative notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Trigger {
    /// Human-readable name.
    pub name: &'static str,
    /// Moves in standard notation.
    pub notation: &'static str,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.notation)
    }
}

impl Trigger {
    /// Returns the moves of the trigger.
    ///
    /// # Panics
    ///
    /// Panics if the notation is malformed.
    pub fn moves(&self) -> Vec<RelMove> {
        parse_moves(self.notation).unwrap_or_else(|e| {
            log::error!("bad notation in trigger {}: {e}", self.name);
            panic!("bad notation in trigger {}: {e}", self.name)
        })
    }
}

/// Flips a cross edge that sits in its home slot (frame top = Up).
pub const EDGE_FLIP: Trigger = Trigger {
    name: "edge flip",
    notation: "F U' R U",
};
/// Cycles the front-right Down corner into the front-right Up slot, or twists
/// a corner already there (frame top = Up).
pub const CORNER_TRIGGER: Trigger = Trigger {
    name: "corner trigger",
    notation: "R' D' R D",
};
/// Inserts the front Up edge into the front-right middle slot (frame top =
/// Down).
pub const RIGHT_INSERT: Trigger = Trigger {
    name: "right insertion",
    notation: "U R U' R' U' F' U F",
};
/// Inserts the front Up edge into the front-left middle slot (frame top =
/// Down).
pub const LEFT_INSERT: Trigger = Trigger {
    name: "left insertion",
    notation: "U' L' U L U F U' F'",
};
/// Orients Down edges toward a cross (frame top = Down).
pub const DOWN_CROSS: Trigger = Trigger {
    name: "down cross",
    notation: "F R U R' U' F'",
};
/// Orients Down corners (frame top = Down).
pub const SUNE: Trigger = Trigger {
    name: "sune",
    notation: "R U R' U R U2 R'",
};
/// Swaps the two right corners of the top layer, along with two edges,
/// keeping the left corners (frame top = Down).
pub const T_PERM: Trigger = Trigger {
    name: "T-perm",
    notation: "R U R' U' R' F R2 U' R' U' R U R' F'",
};
/// Swaps the front-right and back-left corners of the top layer, along with
/// two edges (frame top = Down).
pub const Y_PERM: Trigger = Trigger {
    name: "Y-perm",
    notation: "F R U' R' U' R U R' F' R U R' U' R' F R F'",
};
/// Cycles three top-layer edges front to right to left, keeping the back one
/// (frame top = Down).
pub const UA_PERM: Trigger = Trigger {
    name: "Ua-perm",
    notation: "R U' R U R U R U' R' U' R2",
};
/// Cycles three top-layer edges front to left to right, keeping the back one
/// (frame top = Down).
pub const UB_PERM: Trigger = Trigger {
    name: "Ub-perm",
    notation: "R2 U R U R' U' R' U' R' U R'",
};

/// Every trigger used by the solver.
pub const ALL_TRIGGERS: [Trigger; 10] = [
    EDGE_FLIP,
    CORNER_TRIGGER,
    RIGHT_INSERT,
    LEFT_INSERT,
    DOWN_CROSS,
    SUNE,
    T_PERM,
    Y_PERM,
    UA_PERM,
    UB_PERM,
];

/// Formats moves separated by spaces.
pub fn format_moves(moves: &[RelMove]) -> String {
    moves.iter().join(" ")
}
