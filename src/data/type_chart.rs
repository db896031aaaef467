//! The type effectiveness chart.

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use utoipa::ToSchema;

use crate::error::DataError;
use crate::models::pokemon_type::PokemonType;

/// Multiplier of a chart cell that is not listed explicitly.
pub const NEUTRAL: f32 = 1.0;

/// Type effectiveness chart: a total function from (attacking type, defending type) to a
/// damage multiplier.
///
/// Cells default to [`NEUTRAL`].
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    cells: [[f32; PokemonType::COUNT]; PokemonType::COUNT],
}

impl Default for TypeChart {
    fn default() -> Self {
        Self { cells: [[NEUTRAL; PokemonType::COUNT]; PokemonType::COUNT] }
    }
}

impl TypeChart {
    /// Creates a chart where every cell is [`NEUTRAL`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chart from a list of `(attacking, defending, multiplier)` cells.
    ///
    /// Cells not listed are [`NEUTRAL`]. Listing the same cell twice is an error, even if both
    /// entries agree.
    pub fn from_entries<I>(entries: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (PokemonType, PokemonType, f32)>,
    {
        let mut seen = [[false; PokemonType::COUNT]; PokemonType::COUNT];
        let mut chart = Self::new();

        for (attacking, defending, multiplier) in entries {
            let seen_cell = &mut seen[attacking.index()][defending.index()];
            if *seen_cell {
                return Err(DataError::Inconsistent(format!(
                    "duplicate type chart entry: {} -> {}",
                    attacking, defending
                )));
            }
            *seen_cell = true;

            chart.set(attacking, defending, multiplier);
        }

        Ok(chart)
    }

    /// Sets the multiplier of one cell.
    pub fn set(&mut self, attacking: PokemonType, defending: PokemonType, multiplier: f32) {
        self.cells[attacking.index()][defending.index()] = multiplier;
    }

    /// Returns the multiplier of one cell.
    pub fn multiplier(&self, attacking: PokemonType, defending: PokemonType) -> f32 {
        self.cells[attacking.index()][defending.index()]
    }

    /// Returns the combined effectiveness of `attacking` against a Pokemon with the given types.
    ///
    /// This is the product of the cells for every defending type; an empty slice yields
    /// [`NEUTRAL`].
    pub fn effectiveness(&self, attacking: PokemonType, defending: &[PokemonType]) -> f32 {
        defending
            .iter()
            .map(|&defending| self.multiplier(attacking, defending))
            .product()
    }

    /// Returns the chart row of an attacking type, as `(defending type, multiplier)` pairs in
    /// canonical order.
    pub fn row(&self, attacking: PokemonType) -> impl Iterator<Item = (PokemonType, f32)> + '_ {
        PokemonType::ALL
            .into_iter()
            .map(move |defending| (defending, self.multiplier(attacking, defending)))
    }

    /// Returns every row of the chart, in canonical order.
    pub fn rows(&self) -> Vec<TypeChartRow> {
        PokemonType::ALL
            .into_iter()
            .map(|attacking| {
                let mut row = TypeChartRow {
                    attacking,
                    multipliers: Vec::with_capacity(PokemonType::COUNT),
                    super_effective: Vec::new(),
                    not_very_effective: Vec::new(),
                    no_effect: Vec::new(),
                };

                for (defending, multiplier) in self.row(attacking) {
                    row.multipliers.push(multiplier);
                    match Effectiveness::of(multiplier) {
                        Effectiveness::NoEffect => row.no_effect.push(defending),
                        Effectiveness::NotVeryEffective => row.not_very_effective.push(defending),
                        Effectiveness::SuperEffective => row.super_effective.push(defending),
                        Effectiveness::Normal => (),
                    }
                }

                row
            })
            .collect()
    }
}

/// One row of the [`TypeChart`], as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TypeChartRow {
    /// Attacking type
    #[schema(example = "Ground")]
    pub attacking: PokemonType,

    /// Multiplier against each defending type, in canonical type order
    pub multipliers: Vec<f32>,

    /// Defending types taking 2x damage
    pub super_effective: Vec<PokemonType>,

    /// Defending types taking 0.5x damage
    pub not_very_effective: Vec<PokemonType>,

    /// Defending types taking no damage
    pub no_effect: Vec<PokemonType>,
}

/// Classification of an effectiveness multiplier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Effectiveness {
    /// Multiplier is 0
    NoEffect,

    /// Multiplier is below 1
    NotVeryEffective,

    /// Multiplier is exactly 1
    Normal,

    /// Multiplier is above 1
    SuperEffective,
}

impl Effectiveness {
    /// Classifies a multiplier.
    pub fn of(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Self::NoEffect
        } else if multiplier < NEUTRAL {
            Self::NotVeryEffective
        } else if multiplier > NEUTRAL {
            Self::SuperEffective
        } else {
            Self::Normal
        }
    }
}
