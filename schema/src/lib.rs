// Pokemon Move Learner Schema - Shared type definitions
// This crate contains the plain data records shared between the move learner
// library, its demo binary and any UI layer that renders the teaching dialogs.

// Re-export the main types
pub use menus::*;
pub use moves::*;

pub mod menus;
pub mod moves;
