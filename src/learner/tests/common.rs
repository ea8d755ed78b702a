use crate::learner::MoveLearner;
use crate::menu::MenuGrapher;
use crate::pokemon::{NewPokemon, Pokemon, PokemonFactory, StandardPokemonFactory};
use schema::Move;

/// A builder for creating test Pokemon with common defaults.
///
/// # Example
/// ```
/// let pokemon = TestPokemonBuilder::new("SQUIRTLE", 5)
///     .with_moves(&["Bide", "Bite"])
///     .build();
/// ```
pub struct TestPokemonBuilder {
    title: String,
    level: u8,
    moves: Option<Vec<Move>>,
}

impl TestPokemonBuilder {
    pub fn new(title: &str, level: u8) -> Self {
        Self {
            title: title.to_string(),
            level,
            moves: None,
        }
    }

    /// Sets the starting moves, each with 10 of 10 uses.
    pub fn with_moves(mut self, titles: &[&str]) -> Self {
        self.moves = Some(titles.iter().map(|title| test_move(title)).collect());
        self
    }

    pub fn build(self) -> Pokemon {
        let mut request = NewPokemon::new(self.title, self.level);
        if let Some(moves) = self.moves {
            request = request.with_moves(moves);
        }
        match StandardPokemonFactory.new_pokemon(request) {
            Ok(pokemon) => pokemon,
            Err(err) => panic!("Failed to build test pokemon: {}", err),
        }
    }
}

pub fn test_move(title: &str) -> Move {
    Move::with_remaining(title, 10, 10)
}

pub fn peck() -> Move {
    test_move("Peck")
}

pub fn bite() -> Move {
    test_move("Bite")
}

/// Squirtle knowing Bide, Bite, Bubble and Roar
pub fn full_squirtle() -> Pokemon {
    TestPokemonBuilder::new("SQUIRTLE", 5)
        .with_moves(&["Bide", "Bite", "Bubble", "Roar"])
        .build()
}

pub fn test_learner() -> MoveLearner<MenuGrapher> {
    MoveLearner::new(MenuGrapher::new())
}
