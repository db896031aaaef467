//! Service used to analyze type matchups between Pokemon. Used by the matchups REST API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::{ToResponse, ToSchema};

use crate::data::dex::Dex;
use crate::data::type_chart::{Effectiveness, TypeChart};
use crate::models::pokemon::Pokemon;
use crate::models::pokemon_type::PokemonType;

/// Default number of counters returned by [`Service::find_counters`].
pub const DEFAULT_COUNTERS_LIMIT: usize = 10;

/// Maximum number of counters returned by [`Service::find_counters`].
pub const MAX_COUNTERS_LIMIT: usize = 50;

/// Returns the combined effectiveness of an attacking type against a Pokemon with the given types.
///
/// The result is the product of the chart multipliers for each defending type, so it is always
/// one of 0, 0.25, 0.5, 1, 2 or 4 for Pokemon with one or two types.
pub fn calculate_type_effectiveness(
    chart: &TypeChart,
    attacking: PokemonType,
    defending: &[PokemonType],
) -> f32 {
    chart.effectiveness(attacking, defending)
}

/// Analyzes the matchup between two Pokemon.
///
/// Both Pokemon are assumed to attack using moves of their own types; the best multiplier each
/// side can achieve determines the [`MatchupVerdict`].
pub fn analyze(chart: &TypeChart, yours: &Pokemon, opponent: &Pokemon) -> MatchupAnalysis {
    let your_details: Vec<_> = yours
        .types
        .iter()
        .map(|&attacking| {
            let multiplier = calculate_type_effectiveness(chart, attacking, &opponent.types);
            TypeDetail::new(attacking, multiplier, offensive_description(multiplier, attacking, opponent))
        })
        .collect();
    let opponent_details: Vec<_> = opponent
        .types
        .iter()
        .map(|&attacking| {
            let multiplier = calculate_type_effectiveness(chart, attacking, &yours.types);
            TypeDetail::new(attacking, multiplier, defensive_description(multiplier, attacking, yours))
        })
        .collect();

    let your_multiplier = best_multiplier(&your_details);
    let opponent_multiplier = best_multiplier(&opponent_details);
    let verdict = MatchupVerdict::from_multipliers(your_multiplier, opponent_multiplier);

    MatchupAnalysis {
        your_pokemon: SideAnalysis {
            name: yours.name.clone(),
            types: yours.types.clone(),
            offensive_multiplier: your_multiplier,
            offensive_details: your_details,
        },
        opponent_pokemon: SideAnalysis {
            name: opponent.name.clone(),
            types: opponent.types.clone(),
            offensive_multiplier: opponent_multiplier,
            offensive_details: opponent_details,
        },
        verdict,
        matchup_summary: verdict.summary().into(),
    }
}

fn best_multiplier(details: &[TypeDetail]) -> f32 {
    details
        .iter()
        .map(|detail| detail.effectiveness)
        .fold(0.0, f32::max)
}

fn offensive_description(multiplier: f32, attacking: PokemonType, defender: &Pokemon) -> String {
    match Effectiveness::of(multiplier) {
        Effectiveness::NoEffect => {
            format!("NO EFFECT! ({} is immune to {}).", defender.name, attacking)
        },
        Effectiveness::NotVeryEffective => {
            format!("NOT VERY EFFECTIVE ({:.1}x damage).", multiplier)
        },
        Effectiveness::SuperEffective => format!("SUPER EFFECTIVE ({:.1}x damage)!", multiplier),
        Effectiveness::Normal => format!("Normal Effectiveness ({:.1}x damage).", multiplier),
    }
}

fn defensive_description(multiplier: f32, attacking: PokemonType, defender: &Pokemon) -> String {
    match Effectiveness::of(multiplier) {
        Effectiveness::NoEffect => {
            format!("You are IMMUNE! ({} takes 0x from {}).", defender.name, attacking)
        },
        Effectiveness::NotVeryEffective => {
            format!("You RESIST ({:.1}x damage taken).", multiplier)
        },
        Effectiveness::SuperEffective => {
            format!("You are VULNERABLE ({:.1}x damage taken)!", multiplier)
        },
        Effectiveness::Normal => format!("Normal damage taken ({:.1}x damage taken).", multiplier),
    }
}

/// Service implementation for type matchups.
///
/// This type contains the business logic to compare Pokemon using the static tables of a [`Dex`].
/// It will be used by the [matchups REST API endpoint implementations](crate::api::v1::matchups).
#[derive(Debug, Clone)]
pub struct Service {
    dex: Arc<Dex>,
}

impl Service {
    /// Creates a new matchup service using the provided [`Dex`].
    pub fn new(dex: Arc<Dex>) -> Self {
        Self { dex }
    }

    /// Analyzes the matchup between your Pokemon and an opponent (see [`analyze`]).
    ///
    /// Returns a [`NotFound`](crate::Error::NotFound) error if either Pokemon is unknown, or a
    /// [`SameMatchup`](crate::Error::SameMatchup) error if both names refer to the same Pokemon.
    pub fn analyze_matchup(&self, yours: &str, opponent: &str) -> crate::Result<MatchupAnalysis> {
        let yours = self.dex.pokemon(yours)?;
        let opponent = self.dex.pokemon(opponent)?;
        if yours.name == opponent.name {
            return Err(crate::Error::same_matchup(&yours.name));
        }

        Ok(analyze(self.dex.type_chart(), yours, opponent))
    }

    /// Finds the Pokemon that fare best against an opponent.
    ///
    /// Every other Pokemon is analyzed against the opponent. Picks are ranked by the damage they
    /// deal (best first), then by the damage they take (least first), then by name. `limit` is
    /// clamped to `1..=`[`MAX_COUNTERS_LIMIT`].
    pub fn find_counters(&self, opponent: &str, limit: usize) -> crate::Result<Counters> {
        let opponent = self.dex.pokemon(opponent)?;
        let chart = self.dex.type_chart();

        let mut counters: Vec<_> = self
            .dex
            .all_pokemon()
            .iter()
            .filter(|candidate| candidate.name != opponent.name)
            .map(|candidate| {
                let analysis = analyze(chart, candidate, opponent);
                CounterPick {
                    name: candidate.name.clone(),
                    types: candidate.types.clone(),
                    offensive_multiplier: analysis.your_pokemon.offensive_multiplier,
                    defensive_multiplier: analysis.opponent_pokemon.offensive_multiplier,
                    verdict: analysis.verdict,
                }
            })
            .collect();
        counters.sort_by(|a, b| {
            b.offensive_multiplier
                .total_cmp(&a.offensive_multiplier)
                .then_with(|| a.defensive_multiplier.total_cmp(&b.defensive_multiplier))
                .then_with(|| a.name.cmp(&b.name))
        });
        counters.truncate(limit.clamp(1, MAX_COUNTERS_LIMIT));

        Ok(Counters { opponent: opponent.clone(), counters })
    }

    /// Lists attacking types that are super-effective against a Pokemon.
    ///
    /// Types are sorted by effectiveness (best first); ties keep canonical type order.
    pub fn counter_types(&self, opponent: &str) -> crate::Result<CounterTypes> {
        let opponent = self.dex.pokemon(opponent)?;
        let chart = self.dex.type_chart();

        let mut types: Vec<_> = PokemonType::ALL
            .into_iter()
            .map(|attacking| {
                (attacking, calculate_type_effectiveness(chart, attacking, &opponent.types))
            })
            .filter(|&(_, multiplier)| Effectiveness::of(multiplier) == Effectiveness::SuperEffective)
            .map(|(attacking, multiplier)| TypeEffectiveness {
                attacking_type: attacking,
                effectiveness: multiplier,
                description: format!("{} moves are {:.1}x effective", attacking, multiplier),
            })
            .collect();
        types.sort_by(|a, b| b.effectiveness.total_cmp(&a.effectiveness));

        Ok(CounterTypes { opponent: opponent.clone(), types })
    }
}

/// Overall verdict of a matchup, from your point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchupVerdict {
    /// You hit hard, they hit weakly
    VeryFavorable,

    /// Both sides hit hard
    HighlyOffensive,

    /// You hit weakly, they hit hard
    VeryUnfavorable,

    /// None of your types can damage them
    CannotDamage,

    /// None of their types can damage you
    Immune,

    /// Anything else
    Balanced,
}

impl MatchupVerdict {
    /// Determines the verdict from the best multiplier each side can achieve.
    ///
    /// Rules are checked in declaration order; the first that applies wins.
    pub fn from_multipliers(yours: f32, theirs: f32) -> Self {
        if yours >= 2.0 && theirs <= 0.5 {
            Self::VeryFavorable
        } else if yours >= 2.0 && theirs >= 2.0 {
            Self::HighlyOffensive
        } else if yours <= 0.5 && theirs >= 2.0 {
            Self::VeryUnfavorable
        } else if yours == 0.0 {
            Self::CannotDamage
        } else if theirs == 0.0 {
            Self::Immune
        } else {
            Self::Balanced
        }
    }

    /// Returns a human-readable summary of the verdict.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::VeryFavorable => {
                "🌟 This is a VERY FAVORABLE matchup for you! You hit hard, they hit weakly."
            },
            Self::HighlyOffensive => {
                "🔥 This is a highly OFFENSIVE matchup. You hit hard, but they hit hard too! Be careful!"
            },
            Self::VeryUnfavorable => {
                "🚨 This is a VERY UNFAVORABLE matchup for you! You hit weakly, and they hit hard. Consider switching!"
            },
            Self::CannotDamage => {
                "🚫 You cannot damage them at all. This is a bad matchup offensively, retreat!"
            },
            Self::Immune => "✨ You are immune to their attacks, giving you a huge advantage!",
            Self::Balanced => {
                "🤝 This matchup is relatively balanced, or presents moderate advantages/disadvantages. Strategy is key!"
            },
        }
    }
}

/// Effectiveness of one attacking type in a matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TypeDetail {
    /// Attacking type
    #[serde(rename = "type")]
    #[schema(example = "Water")]
    pub attacking_type: PokemonType,

    /// Combined multiplier against the other Pokemon's types
    pub effectiveness: f32,

    /// Classification of the multiplier
    pub rating: Effectiveness,

    /// Human-readable description
    #[schema(example = "SUPER EFFECTIVE (2.0x damage)!")]
    pub description: String,
}

impl TypeDetail {
    fn new(attacking_type: PokemonType, effectiveness: f32, description: String) -> Self {
        Self { attacking_type, effectiveness, rating: Effectiveness::of(effectiveness), description }
    }
}

/// One side of a [`MatchupAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SideAnalysis {
    /// Pokemon name
    pub name: String,

    /// Pokemon types
    pub types: Vec<PokemonType>,

    /// Best multiplier this Pokemon achieves against the other
    pub offensive_multiplier: f32,

    /// Effectiveness of each of this Pokemon's types against the other
    pub offensive_details: Vec<TypeDetail>,
}

#[cfg_attr(
    doc,
    doc = r"
        Result of a matchup analysis, as returned by [`Service::analyze_matchup`].

        [`your_pokemon`](MatchupAnalysis::your_pokemon) describes what your Pokemon deals to the
        opponent; [`opponent_pokemon`](MatchupAnalysis::opponent_pokemon) describes the threat the
        opponent poses (its details use defensive wording).
    "
)]
#[cfg_attr(not(doc), doc = "Type matchup analysis")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ToResponse)]
pub struct MatchupAnalysis {
    /// Your Pokemon's offensive analysis
    pub your_pokemon: SideAnalysis,

    /// The opponent's offensive threat to your Pokemon
    pub opponent_pokemon: SideAnalysis,

    /// Overall verdict
    pub verdict: MatchupVerdict,

    /// Human-readable summary of the verdict
    pub matchup_summary: String,
}

/// A Pokemon suggested to face an opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CounterPick {
    /// Pokemon name
    pub name: String,

    /// Pokemon types
    pub types: Vec<PokemonType>,

    /// Best multiplier this Pokemon deals to the opponent
    pub offensive_multiplier: f32,

    /// Best multiplier the opponent deals to this Pokemon
    pub defensive_multiplier: f32,

    /// Matchup verdict from this Pokemon's point of view
    pub verdict: MatchupVerdict,
}

/// Ranked list of Pokemon to use against an opponent, as returned by [`Service::find_counters`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ToResponse)]
pub struct Counters {
    /// The opponent
    pub opponent: Pokemon,

    /// Best picks, best first
    pub counters: Vec<CounterPick>,
}

/// Effectiveness of an attacking type against a Pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TypeEffectiveness {
    /// Attacking type
    #[serde(rename = "type")]
    #[schema(example = "Rock")]
    pub attacking_type: PokemonType,

    /// Combined multiplier
    pub effectiveness: f32,

    /// Human-readable description
    #[schema(example = "Rock moves are 4.0x effective")]
    pub description: String,
}

/// Attacking types that are super-effective against a Pokemon, as returned by
/// [`Service::counter_types`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ToResponse)]
pub struct CounterTypes {
    /// The opponent
    pub opponent: Pokemon,

    /// Super-effective types, most effective first
    pub types: Vec<TypeEffectiveness>,
}
