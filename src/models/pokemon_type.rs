//! The 18 Pokemon types.

// Unfortunately, strum's `EnumIs` generates undocumented methods
#![allow(missing_docs)]

use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::EnumCount;
use strum_macros::{AsRefStr, Display, EnumIs, EnumString};
use utoipa::ToSchema;

/// A Pokemon type, used both for Pokemon and for moves.
///
/// Variants are declared in canonical order; analyses that walk over every type (coverage gaps,
/// defensive gaps, etc.) report results in this order. Parsing is case-insensitive, so `"fire"`,
/// `"Fire"` and `"FIRE"` are all accepted; the type is always displayed capitalized.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumCount,
    EnumIs,
    EnumString,
    SerializeDisplay,
    DeserializeFromStr,
    ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Steel,
    Dark,
    Fairy,
}

impl PokemonType {
    /// All types, in canonical order.
    pub const ALL: [PokemonType; PokemonType::COUNT] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Steel,
        Self::Dark,
        Self::Fairy,
    ];

    /// Returns the position of this type in [`ALL`](PokemonType::ALL).
    ///
    /// Used to index the [`TypeChart`](crate::data::type_chart::TypeChart) table.
    pub const fn index(self) -> usize {
        self as usize
    }
}
