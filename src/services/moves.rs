//! Service used to recommend moves and analyze move coverage. Used by the moves REST API.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::{ToResponse, ToSchema};

use crate::data::dex::Dex;
use crate::data::type_chart::{Effectiveness, TypeChart};
use crate::models::moves::{Move, MoveCategory};
use crate::models::pokemon::Pokemon;
use crate::models::pokemon_type::PokemonType;
use crate::services::matchup::calculate_type_effectiveness;

/// Number of moves kept as recommendations by [`Service::recommend_moves`].
pub const RECOMMENDED_MOVES: usize = 4;

/// Service implementation for [`Move`]s.
///
/// This type contains the business logic to pick moves for a matchup and to evaluate a Pokemon's
/// learnset. It will be used by the [moves REST API endpoint implementations](crate::api::v1::moves).
#[derive(Debug, Clone)]
pub struct Service {
    dex: Arc<Dex>,
}

impl Service {
    /// Creates a new moves service using the provided [`Dex`].
    pub fn new(dex: Arc<Dex>) -> Self {
        Self { dex }
    }

    /// Recommends moves for `attacker` to use against `defender`.
    ///
    /// Each known move in the attacker's learnset is scored as
    /// `effectiveness × power × accuracy / 100`; moves are sorted by score (best first, ties kept
    /// in learnset order) and the first [`RECOMMENDED_MOVES`] are recommended.
    ///
    /// If the attacker has no learnset data, the result contains no moves and a
    /// [`message`](MoveRecommendations::message) explaining why.
    pub fn recommend_moves(&self, attacker: &str, defender: &str) -> crate::Result<MoveRecommendations> {
        let attacker = self.dex.pokemon(attacker)?;
        let defender = self.dex.pokemon(defender)?;

        if self.dex.moves_for(attacker).is_empty() {
            return Ok(MoveRecommendations {
                pokemon: attacker.name.clone(),
                opponent: defender.name.clone(),
                message: Some(format!("No move data available for {}", attacker.name)),
                ..Default::default()
            });
        }

        let chart = self.dex.type_chart();
        let mut all_moves: Vec<_> = self
            .dex
            .known_moves_for(attacker)
            .map(|a_move| MoveAnalysis::new(chart, a_move, defender))
            .collect();
        all_moves.sort_by(|a, b| b.score.total_cmp(&a.score));

        let recommendations: Vec<_> = all_moves.iter().take(RECOMMENDED_MOVES).cloned().collect();
        let strategy_tips = strategy_tips(&all_moves, attacker);

        Ok(MoveRecommendations {
            pokemon: attacker.name.clone(),
            opponent: defender.name.clone(),
            best_move: recommendations.first().cloned(),
            recommendations,
            all_moves,
            strategy_tips,
            message: None,
        })
    }

    /// Analyzes the type coverage of a Pokemon's learnset.
    pub fn analyze_move_coverage(&self, pokemon: &str) -> crate::Result<MoveCoverage> {
        let pokemon = self.dex.pokemon(pokemon)?;

        Ok(move_coverage(&self.dex, pokemon))
    }

    /// Lists moves, optionally filtered by type and/or category. Moves are returned in seed file order.
    pub fn list_moves(
        &self,
        move_type: Option<PokemonType>,
        category: Option<MoveCategory>,
    ) -> Vec<Move> {
        self.dex
            .all_moves()
            .iter()
            .filter(|a_move| move_type.map_or(true, |move_type| a_move.move_type == move_type))
            .filter(|a_move| category.map_or(true, |category| a_move.category == category))
            .cloned()
            .collect()
    }

    /// Returns the [`Move`] with the given name (case-insensitive).
    pub fn get_move(&self, name: &str) -> crate::Result<Move> {
        self.dex.move_info(name).cloned()
    }
}

/// Analyzes the type coverage of a Pokemon's learnset (see [`MoveCoverage`]).
pub fn move_coverage(dex: &Dex, pokemon: &Pokemon) -> MoveCoverage {
    let total_moves = dex.moves_for(pokemon).len();
    if total_moves == 0 {
        return MoveCoverage {
            pokemon: pokemon.name.clone(),
            coverage_quality: CoverageQuality::Limited,
            message: Some(format!("No move data available for {}", pokemon.name)),
            ..Default::default()
        };
    }

    let known_moves: Vec<_> = dex.known_moves_for(pokemon).collect();
    let mut move_types: Vec<_> = known_moves
        .iter()
        .map(|a_move| a_move.move_type)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    move_types.sort();

    let count_category =
        |category| known_moves.iter().filter(|a_move| a_move.category == category).count();
    let physical_moves = count_category(MoveCategory::Physical);
    let special_moves = count_category(MoveCategory::Special);
    let status_moves = count_category(MoveCategory::Status);

    let coverage_score = move_types.len();
    let super_effective_types = super_effective_move_types(dex.type_chart(), &known_moves);

    MoveCoverage {
        pokemon: pokemon.name.clone(),
        total_moves,
        unique_types: move_types.len(),
        move_types,
        physical_moves,
        special_moves,
        status_moves,
        coverage_score,
        coverage_quality: CoverageQuality::from_score(coverage_score),
        super_effective_types,
        recommendations: coverage_recommendations(coverage_score, physical_moves, special_moves),
        message: None,
    }
}

/// Counts distinct damaging move types that are super-effective against at least one type.
fn super_effective_move_types(chart: &TypeChart, moves: &[&Move]) -> usize {
    moves
        .iter()
        .filter(|a_move| a_move.is_damaging())
        .map(|a_move| a_move.move_type)
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|&attacking| {
            chart
                .row(attacking)
                .any(|(_, multiplier)| Effectiveness::of(multiplier) == Effectiveness::SuperEffective)
        })
        .count()
}

fn coverage_recommendations(
    coverage_score: usize,
    physical_moves: usize,
    special_moves: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if coverage_score < 3 {
        recommendations.push("Consider adding more diverse move types for better coverage".into());
    }

    if physical_moves == 0 {
        recommendations.push("No physical moves - consider adding some for mixed attacking".into());
    } else if special_moves == 0 {
        recommendations.push("No special moves - consider adding some for mixed attacking".into());
    }

    if physical_moves >= 3 && special_moves >= 3 {
        recommendations.push("Good mix of physical and special moves - versatile attacker".into());
    }

    recommendations
}

fn recommendation(effectiveness: f32, move_type: PokemonType, defender: &Pokemon) -> String {
    match Effectiveness::of(effectiveness) {
        Effectiveness::NoEffect => format!(
            "❌ AVOID: {} moves have NO EFFECT against {}!",
            move_type, defender.name
        ),
        Effectiveness::NotVeryEffective => format!(
            "⚠️ WEAK: {} moves are NOT VERY EFFECTIVE against {}",
            move_type, defender.name
        ),
        Effectiveness::SuperEffective => format!(
            "✅ EXCELLENT: {} moves are SUPER EFFECTIVE against {}!",
            move_type, defender.name
        ),
        Effectiveness::Normal => format!(
            "🟡 NEUTRAL: {} moves have normal effectiveness against {}",
            move_type, defender.name
        ),
    }
}

fn strategy_tips(moves: &[MoveAnalysis], attacker: &Pokemon) -> Vec<String> {
    let mut tips = Vec::new();

    let count_rated = |rating| moves.iter().filter(|analysis| analysis.rating == rating).count();
    let super_effective: Vec<_> = moves
        .iter()
        .filter(|analysis| analysis.rating == Effectiveness::SuperEffective)
        .collect();
    // Moves with no effect are also counted as not very effective.
    let no_effect = count_rated(Effectiveness::NoEffect);
    let not_very_effective = count_rated(Effectiveness::NotVeryEffective) + no_effect;

    if let Some(best) = super_effective.first() {
        tips.push(format!(
            "🎯 BEST CHOICE: Use {} ({}) - {} power, {}% accuracy",
            best.name, best.move_type, best.power, best.accuracy
        ));
    }
    if super_effective.len() > 1 {
        tips.push(format!(
            "💪 BACKUP OPTIONS: You have {} super-effective moves available",
            super_effective.len()
        ));
    }
    if not_very_effective > 0 {
        tips.push(format!("⚠️ AVOID: {} moves are not very effective", not_very_effective));
    }
    if no_effect > 0 {
        tips.push(format!("❌ USELESS: {} moves have no effect - don't use them!", no_effect));
    }

    let move_types: HashSet<_> = moves.iter().map(|analysis| analysis.move_type).collect();
    if move_types.len() >= 3 {
        tips.push(format!(
            "🌈 GOOD COVERAGE: Your {} has {} different move types",
            attacker.name,
            move_types.len()
        ));
    }

    if moves
        .iter()
        .any(|analysis| analysis.power >= 100 && analysis.accuracy < 85)
    {
        tips.push(
            "🎲 HIGH RISK: Consider accuracy vs power trade-offs for maximum damage moves".into(),
        );
    }

    tips
}

/// Analysis of one move against a defender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoveAnalysis {
    /// Move name
    pub name: String,

    /// Move type
    #[serde(rename = "type")]
    #[schema(example = "Electric")]
    pub move_type: PokemonType,

    /// Base power
    pub power: u16,

    /// Accuracy, in percent
    pub accuracy: u8,

    /// Damage category
    pub category: MoveCategory,

    /// Move description
    pub description: String,

    /// Combined multiplier against the defender's types
    pub effectiveness: f32,

    /// Classification of the multiplier
    pub rating: Effectiveness,

    /// `effectiveness × power × accuracy / 100`
    pub score: f32,

    /// Human-readable recommendation
    pub recommendation: String,
}

impl MoveAnalysis {
    fn new(chart: &TypeChart, a_move: &Move, defender: &Pokemon) -> Self {
        let effectiveness = calculate_type_effectiveness(chart, a_move.move_type, &defender.types);
        let score =
            effectiveness * f32::from(a_move.power) * (f32::from(a_move.accuracy) / 100.0);

        Self {
            name: a_move.name.clone(),
            move_type: a_move.move_type,
            power: a_move.power,
            accuracy: a_move.accuracy,
            category: a_move.category,
            description: a_move.description.clone(),
            effectiveness,
            rating: Effectiveness::of(effectiveness),
            score,
            recommendation: recommendation(effectiveness, a_move.move_type, defender),
        }
    }
}

#[cfg_attr(
    doc,
    doc = r"
        Move recommendations for a matchup, as returned by [`Service::recommend_moves`].

        [`all_moves`](MoveRecommendations::all_moves) contains every known move of the attacker,
        sorted by score; [`recommendations`](MoveRecommendations::recommendations) contains the
        first few.
    "
)]
#[cfg_attr(not(doc), doc = "Move recommendations for a matchup")]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, ToResponse)]
pub struct MoveRecommendations {
    /// Attacking Pokemon
    pub pokemon: String,

    /// Defending Pokemon
    pub opponent: String,

    /// Best moves, best first
    pub recommendations: Vec<MoveAnalysis>,

    /// All known moves of the attacker, best first
    pub all_moves: Vec<MoveAnalysis>,

    /// Strategic advice for the matchup
    pub strategy_tips: Vec<String>,

    /// The best move, if the attacker knows any
    pub best_move: Option<MoveAnalysis>,

    /// Set when no recommendation can be made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Quality of a Pokemon's move coverage.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
pub enum CoverageQuality {
    /// 4 move types or more
    Excellent,

    /// 3 move types
    Good,

    /// Fewer than 3 move types
    #[default]
    Limited,
}

impl CoverageQuality {
    /// Rates a coverage score (number of distinct move types).
    pub fn from_score(coverage_score: usize) -> Self {
        match coverage_score {
            score if score >= 4 => Self::Excellent,
            3 => Self::Good,
            _ => Self::Limited,
        }
    }
}

/// Type coverage of a Pokemon's learnset, as returned by [`Service::analyze_move_coverage`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, ToResponse)]
pub struct MoveCoverage {
    /// Pokemon name
    pub pokemon: String,

    /// Number of moves in the learnset (including moves without data)
    pub total_moves: usize,

    /// Number of distinct move types
    pub unique_types: usize,

    /// Distinct move types, in canonical order
    pub move_types: Vec<PokemonType>,

    /// Number of physical moves
    pub physical_moves: usize,

    /// Number of special moves
    pub special_moves: usize,

    /// Number of status moves
    pub status_moves: usize,

    /// Coverage score (number of distinct move types)
    pub coverage_score: usize,

    /// Coverage rating
    pub coverage_quality: CoverageQuality,

    /// Number of distinct damaging move types that are super-effective against at least one type
    pub super_effective_types: usize,

    /// Suggestions to improve the learnset
    pub recommendations: Vec<String>,

    /// Set when the Pokemon has no learnset data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
