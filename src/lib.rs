// In: src/lib.rs

//! Pokemon Move Learner
//!
//! Rules for putting moves into a Pokemon's four move slots, and the dialog
//! flow shown when a Pokemon tries to learn a move it has no room for.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod errors;
pub mod learner;
pub mod menu;
pub mod moveset;
pub mod pokemon;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{MenuName, Move};

// --- From this crate's modules (`src/`) ---

// The learner and its parked dialog flow.
pub use learner::{MoveLearner, PlayerInput, TeachingEvent, TeachingSession, TeachingState};

// Pokemon and their movesets.
pub use moveset::{Moveset, MAX_MOVES};
pub use pokemon::{NewPokemon, Pokemon, PokemonFactory, StandardPokemonFactory};

// Menu collaborator.
pub use menu::{ActiveMenu, Dialog, MenuGrapher, MenuService};

// Configuration.
pub use config::LearnerConfig;

// Crate-specific error and result types.
pub use errors::{ConfigError, ConfigResult, LearnResult, MoveLearnerError};
