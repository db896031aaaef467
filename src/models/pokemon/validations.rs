//! Helpers to validate rows of the static tables.

use std::borrow::Cow;

use validator::ValidationError;

use crate::models::moves::ImportTypeChartEntry;
use crate::models::pokemon::ImportPokemon;

/// The valid type chart multipliers.
///
/// Effectiveness of one attacking type against one defending type is always one of these.
pub const MULTIPLIERS: [f32; 4] = [0.0, 0.5, 1.0, 2.0];

/// Validates a type chart multiplier.
///
/// A multiplier is only considered valid if it appears in [`MULTIPLIERS`].
pub fn validate_multiplier(multiplier: f32) -> Result<(), ValidationError> {
    if MULTIPLIERS.contains(&multiplier) {
        Ok(())
    } else {
        let error_message = format!(
            "multiplier must be one of {}, found {}",
            MULTIPLIERS
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            multiplier,
        );

        let mut validation_error = ValidationError::new("invalid_multiplier");
        validation_error.message = Some(Cow::from(error_message));

        Err(validation_error)
    }
}

/// Validates a [`ImportTypeChartEntry`] (see [`validate_multiplier`]).
pub fn validate_type_chart_entry(entry: &ImportTypeChartEntry) -> Result<(), ValidationError> {
    validate_multiplier(entry.multiplier)
}

/// Validates that a Pokemon's second type (if any) differs from its first type.
pub fn validate_distinct_types(pokemon: &ImportPokemon) -> Result<(), ValidationError> {
    match pokemon.type_2 {
        Some(type_2) if type_2 == pokemon.type_1 => {
            let mut validation_error = ValidationError::new("duplicate_type");
            validation_error.message =
                Some(Cow::from(format!("{} cannot have type {} twice", pokemon.name, type_2)));

            Err(validation_error)
        },
        _ => Ok(()),
    }
}
