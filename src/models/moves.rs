//! Models used to load and expose moves, learnsets and type chart entries.

// Unfortunately, strum's `EnumIs` generates undocumented methods
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIs, EnumString};
use utoipa::{ToResponse, ToSchema};
use validator::Validate;

use crate::models::pokemon::validations::validate_type_chart_entry;
use crate::models::pokemon_type::PokemonType;

/// Damage category of a move.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIs,
    EnumString,
    SerializeDisplay,
    DeserializeFromStr,
    ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum MoveCategory {
    /// Damage based on the Attack stat
    Physical,

    /// Damage based on the Special Attack stat
    Special,

    /// No direct damage
    Status,
}

#[cfg_attr(
    doc,
    doc = r"
        A move that Pokemon can learn.

        A `power` of 0 means the move has no fixed base power; this is the case for every
        [`Status`](MoveCategory::Status) move, but also for a few damaging moves whose damage is
        computed some other way.
    "
)]
#[cfg_attr(not(doc), doc = "Information about a move")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, ToResponse)]
#[serde(deny_unknown_fields)]
#[response(
    description = "Move information",
    example = json!({
        "name": "Flamethrower",
        "type": "Fire",
        "power": 90,
        "accuracy": 100,
        "pp": 15,
        "category": "Special",
        "description": "A powerful fire attack that may burn the target."
    }),
)]
pub struct Move {
    /// Move name
    pub name: String,

    /// Move type
    #[serde(rename = "type")]
    #[schema(example = "Fire")]
    pub move_type: PokemonType,

    /// Base power (0 if the move has no fixed base power)
    pub power: u16,

    /// Accuracy, in percent
    pub accuracy: u8,

    /// Power points
    pub pp: u8,

    /// Damage category
    #[schema(example = "Special")]
    pub category: MoveCategory,

    /// Short description of the move's effect
    pub description: String,
}

impl Move {
    /// Whether this move deals direct damage (e.g. is not a [`Status`](MoveCategory::Status) move).
    pub fn is_damaging(&self) -> bool {
        !self.category.is_status()
    }
}

/// Model used to load moves from the `moves.csv` seed file.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct ImportMove {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "Type")]
    pub move_type: PokemonType,
    #[validate(range(max = 250))]
    pub power: u16,
    #[validate(range(min = 1, max = 100))]
    pub accuracy: u8,
    #[serde(rename = "PP")]
    #[validate(range(min = 1))]
    pub pp: u8,
    pub category: MoveCategory,
    pub description: String,
}

impl From<ImportMove> for Move {
    fn from(value: ImportMove) -> Self {
        Self {
            name: value.name.trim().into(),
            move_type: value.move_type,
            power: value.power,
            accuracy: value.accuracy,
            pp: value.pp,
            category: value.category,
            description: value.description,
        }
    }
}

/// Model used to load learnsets from the `learnsets.csv` seed file.
///
/// Each row links a Pokemon to one move it can learn; a Pokemon's learnset is the list of its
/// rows, in file order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ImportLearnset {
    #[serde(rename = "Pokemon")]
    #[validate(length(min = 1))]
    pub pokemon: String,
    #[serde(rename = "Move")]
    #[validate(length(min = 1))]
    pub move_name: String,
}

/// Model used to load the type chart from the `type_chart.csv` seed file.
///
/// Only non-neutral cells need to be listed.
#[derive(Debug, Copy, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
#[validate(schema(function = "validate_type_chart_entry"))]
pub struct ImportTypeChartEntry {
    pub attacking: PokemonType,
    pub defending: PokemonType,
    pub multiplier: f32,
}
