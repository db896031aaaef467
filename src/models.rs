//! Models describing the static tables and how they are loaded.

pub mod moves;
pub mod pokemon;
pub mod pokemon_type;
