use crate::errors::LearnResult;
use crate::moveset::Moveset;
use schema::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,    // Species name if no nickname
    pub species: String, // Species title, e.g. "SQUIRTLE"
    pub level: u8,
    pub moves: Moveset, // Up to 4 moves
}

impl Pokemon {
    /// Create a Pokemon that already knows the given moves
    pub fn new(name: String, species: String, level: u8, moves: Moveset) -> Self {
        Pokemon {
            name,
            species,
            level,
            moves,
        }
    }

    /// Check whether this Pokemon knows a move with this title
    pub fn knows_move(&self, title: &str) -> bool {
        self.moves.knows(title)
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Lv. {})", self.name, self.level)?;
        if f.alternate() {
            for (i, move_) in self.moves.iter().enumerate() {
                write!(f, "\n  {}: {:#}", i + 1, move_)?;
            }
        }
        Ok(())
    }
}

/// Everything needed to create a new Pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPokemon {
    pub level: u8,
    pub title: String,
    pub moves: Option<Vec<Move>>,
}

impl NewPokemon {
    pub fn new(title: impl Into<String>, level: u8) -> Self {
        NewPokemon {
            level,
            title: title.into(),
            moves: None,
        }
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }
}

/// Source of Pokemon instances. The move learner only ever receives Pokemon
/// built elsewhere; it never constructs them itself.
pub trait PokemonFactory {
    fn new_pokemon(&self, request: NewPokemon) -> LearnResult<Pokemon>;
}

/// Factory that names the Pokemon after its species and installs the
/// requested starting moves in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPokemonFactory;

impl PokemonFactory for StandardPokemonFactory {
    fn new_pokemon(&self, request: NewPokemon) -> LearnResult<Pokemon> {
        // Starting moves go through the same slot rules as any later assignment
        let moves = Moveset::from_moves(request.moves.unwrap_or_default())?;
        let name = request.title.to_uppercase();

        tracing::debug!(
            species = %name,
            level = request.level,
            known_moves = moves.len(),
            "created pokemon"
        );

        Ok(Pokemon::new(name.clone(), name, request.level, moves))
    }
}
