//! Models used to load and expose Pokemon from the static tables.

pub mod validations;

use serde::{Deserialize, Serialize};
use utoipa::{ToResponse, ToSchema};
use validations::validate_distinct_types;
use validator::Validate;

use crate::models::pokemon_type::PokemonType;

#[cfg_attr(
    doc,
    doc = r"
        Base Pokemon model.

        A Pokemon is identified by its name (looked up case-insensitively by the
        [`Dex`](crate::data::dex::Dex)) and has one or two distinct types. The order of types
        is significant: the first one is the Pokemon's primary type.
    "
)]
#[cfg_attr(not(doc), doc = "Information about a Pokemon")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, ToResponse)]
#[serde(deny_unknown_fields)]
#[response(
    description = "Pokemon information",
    example = json!({
        "name": "Charizard",
        "types": ["Fire", "Flying"]
    }),
)]
pub struct Pokemon {
    /// Pokemon name
    pub name: String,

    /// Pokemon types (one or two)
    #[schema(example = json!(["Fire", "Flying"]))]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Returns the Pokemon's first type.
    ///
    /// Pokemon loaded via the [`Dex`](crate::data::dex::Dex) always have one.
    pub fn primary_type(&self) -> Option<PokemonType> {
        self.types.first().copied()
    }

    /// Returns the Pokemon's second type, if it has one.
    pub fn secondary_type(&self) -> Option<PokemonType> {
        self.types.get(1).copied()
    }

    /// Returns the Pokemon's types joined with `separator` (e.g. `Fire/Flying`).
    pub fn types_label(&self, separator: &str) -> String {
        self.types
            .iter()
            .map(AsRef::<str>::as_ref)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Model used to load Pokemon from the `pokemon.csv` seed file.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_distinct_types"))]
#[allow(missing_docs)]
pub struct ImportPokemon {
    #[serde(rename = "Name")]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "Type 1")]
    pub type_1: PokemonType,
    #[serde(rename = "Type 2")]
    pub type_2: Option<PokemonType>,
}

impl From<ImportPokemon> for Pokemon {
    fn from(value: ImportPokemon) -> Self {
        Self {
            name: value.name.trim().into(),
            types: std::iter::once(value.type_1).chain(value.type_2).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charizard() -> Pokemon {
        Pokemon { name: "Charizard".into(), types: vec![PokemonType::Fire, PokemonType::Flying] }
    }

    mod accessors {
        use super::*;

        #[test]
        fn test_dual_type() {
            let pokemon = charizard();

            assert_eq!(Some(PokemonType::Fire), pokemon.primary_type());
            assert_eq!(Some(PokemonType::Flying), pokemon.secondary_type());
            assert_eq!("Fire / Flying", pokemon.types_label(" / "));
        }

        #[test]
        fn test_single_type() {
            let pokemon = Pokemon { name: "Pikachu".into(), types: vec![PokemonType::Electric] };

            assert_eq!(Some(PokemonType::Electric), pokemon.primary_type());
            assert_eq!(None, pokemon.secondary_type());
            assert_eq!("Electric", pokemon.types_label("/"));
        }
    }

    mod from_import_pokemon_for_pokemon {
        use super::*;

        #[test]
        fn test_all() {
            let import = ImportPokemon {
                name: "Charizard ".into(),
                type_1: PokemonType::Fire,
                type_2: Some(PokemonType::Flying),
            };

            let pokemon: Pokemon = import.into();
            assert_eq!(charizard(), pokemon);
        }
    }

    mod import_pokemon {
        use super::*;

        fn read_rows(csv: &str) -> Vec<ImportPokemon> {
            csv::Reader::from_reader(csv.as_bytes())
                .deserialize()
                .collect::<Result<_, _>>()
                .unwrap()
        }

        #[test]
        fn test_deserialize_with_optional_type() {
            let rows = read_rows("Name,Type 1,Type 2\nCharmander,fire,\nGengar,Ghost,Poison\n");

            assert_eq!(2, rows.len());
            assert_eq!(PokemonType::Fire, rows[0].type_1);
            assert_eq!(None, rows[0].type_2);
            assert_eq!(Some(PokemonType::Poison), rows[1].type_2);
        }

        #[test]
        fn test_validate() {
            let rows = read_rows("Name,Type 1,Type 2\n,Fire,\nDitto,Normal,Normal\nMew,Psychic,\n");

            assert!(rows[0].validate().is_err());
            assert!(rows[1].validate().is_err());
            assert!(rows[2].validate().is_ok());
        }
    }
}
