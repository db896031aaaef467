//! Service exposing the type chart. Used by the types REST API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::{ToResponse, ToSchema};

use crate::data::dex::Dex;
use crate::data::type_chart::{Effectiveness, TypeChartRow};
use crate::models::pokemon_type::PokemonType;
use crate::services::matchup::calculate_type_effectiveness;

/// Service implementation for the type chart.
#[derive(Debug, Clone)]
pub struct Service {
    dex: Arc<Dex>,
}

impl Service {
    /// Creates a new types service using the provided [`Dex`].
    pub fn new(dex: Arc<Dex>) -> Self {
        Self { dex }
    }

    /// Returns the 18 types, in canonical order.
    pub fn list_types(&self) -> Vec<PokemonType> {
        PokemonType::ALL.to_vec()
    }

    /// Returns every row of the type chart, in canonical order.
    pub fn type_chart(&self) -> Vec<TypeChartRow> {
        self.dex.type_chart().rows()
    }

    /// Computes the combined effectiveness of an attacking type against one or more defending types.
    pub fn effectiveness(&self, attacking: PokemonType, defending: &[PokemonType]) -> TypeMatchup {
        let multiplier = calculate_type_effectiveness(self.dex.type_chart(), attacking, defending);

        TypeMatchup {
            attacking,
            defending: defending.to_vec(),
            multiplier,
            effectiveness: Effectiveness::of(multiplier),
        }
    }
}

/// Combined effectiveness of an attacking type, as returned by [`Service::effectiveness`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ToResponse)]
#[response(example = json!({
    "attacking": "Rock",
    "defending": ["Fire", "Flying"],
    "multiplier": 4.0,
    "effectiveness": "super_effective"
}))]
pub struct TypeMatchup {
    /// Attacking type
    pub attacking: PokemonType,

    /// Defending types
    pub defending: Vec<PokemonType>,

    /// Product of the chart multipliers
    pub multiplier: f32,

    /// Classification of the multiplier
    pub effectiveness: Effectiveness,
}
