//! Fixed-capacity moveset owned by a Pokemon.
//!
//! Slots `0..len` are always occupied and slots `len..4` always empty, so the
//! moveset never has a gap. Every write goes through [`Moveset::check_assignment`],
//! which is the single place the bounds and duplicate rules live.

use crate::errors::{LearnResult, MoveLearnerError};
use schema::Move;
use serde::{Deserialize, Serialize};

/// Maximum number of moves a Pokemon can know at once
pub const MAX_MOVES: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Move>", into = "Vec<Move>")]
pub struct Moveset {
    slots: [Option<Move>; MAX_MOVES],
    len: usize,
}

impl Moveset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a moveset from an ordered list of moves, validating each one as if
    /// it were appended in turn.
    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> LearnResult<Self> {
        let mut moveset = Moveset::new();
        for move_ in moves {
            let next = moveset.len as i32;
            moveset.assign(move_, next)?;
        }
        Ok(moveset)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == MAX_MOVES
    }

    /// Index of the next empty slot, or None when all four slots are taken
    pub fn free_slot(&self) -> Option<usize> {
        (self.len < MAX_MOVES).then_some(self.len)
    }

    /// Get the move in a slot, None for an empty or out of range slot
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Iterate over the known moves in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.slots.iter().flatten()
    }

    pub fn titles(&self) -> Vec<String> {
        self.iter().map(|move_| move_.title().to_string()).collect()
    }

    /// Slot currently holding a move with this title
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.iter().position(|move_| move_.title() == title)
    }

    pub fn knows(&self, title: &str) -> bool {
        self.position_of(title).is_some()
    }

    /// Check whether `move_` may be written into slot `index` without touching
    /// the moveset. Returns the validated slot.
    ///
    /// Bounds are checked before duplicates: the index must be in `0..=3` and
    /// no greater than the current length, and the title must not be known in
    /// any other slot. Rewriting a slot with the move it already holds is fine.
    pub fn check_assignment(&self, move_: &Move, index: i32) -> LearnResult<usize> {
        let slot = usize::try_from(index)
            .ok()
            .filter(|&slot| slot < MAX_MOVES && slot <= self.len)
            .ok_or(MoveLearnerError::InvalidMoveParameters {
                index,
                known_moves: self.len,
            })?;

        match self.position_of(move_.title()) {
            Some(existing) if existing != slot => Err(MoveLearnerError::DuplicateMove {
                title: move_.title().to_string(),
                slot: existing,
            }),
            _ => Ok(slot),
        }
    }

    /// Write `move_` into slot `index`, returning the move it replaced.
    /// On error the moveset is left exactly as it was.
    pub fn assign(&mut self, move_: Move, index: i32) -> LearnResult<Option<Move>> {
        let slot = self.check_assignment(&move_, index)?;
        let replaced = self.slots[slot].replace(move_);
        if replaced.is_none() {
            self.len += 1;
        }
        Ok(replaced)
    }
}

impl TryFrom<Vec<Move>> for Moveset {
    type Error = MoveLearnerError;

    fn try_from(moves: Vec<Move>) -> Result<Self, Self::Error> {
        Moveset::from_moves(moves)
    }
}

impl From<Moveset> for Vec<Move> {
    fn from(moveset: Moveset) -> Self {
        moveset.slots.into_iter().flatten().collect()
    }
}

impl<'a> IntoIterator for &'a Moveset {
    type Item = &'a Move;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<Move>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}
