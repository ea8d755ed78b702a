use serde::{Deserialize, Serialize};
use std::fmt;

/// A move known by a Pokemon: its title plus how many uses it has left.
///
/// Moves are immutable value records. A Pokemon that learns, forgets or
/// replaces a move swaps the whole record; nothing edits a `Move` in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMove")]
pub struct Move {
    title: String,
    remaining: u8,
    uses: u8,
}

// Stored form of a move; loading goes through the clamping constructor.
#[derive(Deserialize)]
struct RawMove {
    title: String,
    remaining: u8,
    uses: u8,
}

impl From<RawMove> for Move {
    fn from(raw: RawMove) -> Self {
        Move::with_remaining(raw.title, raw.remaining, raw.uses)
    }
}

impl Move {
    /// Create a move with all of its uses available
    pub fn new(title: impl Into<String>, uses: u8) -> Self {
        let uses = uses.max(1);
        Move {
            title: title.into(),
            remaining: uses,
            uses,
        }
    }

    /// Create a move that has already been partially used.
    /// `uses` is raised to at least 1 and `remaining` capped at `uses`.
    pub fn with_remaining(title: impl Into<String>, remaining: u8, uses: u8) -> Self {
        let uses = uses.max(1);
        Move {
            title: title.into(),
            remaining: remaining.min(uses),
            uses,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn uses(&self) -> u8 {
        self.uses
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} ({}/{})", self.title, self.remaining, self.uses)
        } else {
            write!(f, "{}", self.title)
        }
    }
}
