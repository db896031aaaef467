//! Plain-text reports, as printed by the `advise` command-line tool.
//!
//! Each report wraps a borrowed analysis and renders it through [`Display`].

use std::fmt::{Display, Formatter};

use crate::models::pokemon::Pokemon;
use crate::models::pokemon_type::PokemonType;
use crate::services::matchup::{Counters, MatchupAnalysis, TypeDetail};
use crate::services::moves::{MoveCoverage, MoveRecommendations};
use crate::services::team::{PairSynergy, TeamAnalysis, MAX_TEAM_SIZE};

/// Number of synergy pairs of each kind shown in a [`TeamReport`].
const SHOWN_PAIRS: usize = 3;

/// Number of gap types shown in a [`TeamReport`].
const SHOWN_GAPS: usize = 5;

fn join_types(types: &[PokemonType], separator: &str) -> String {
    types
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Report of a [`MatchupAnalysis`].
#[derive(Debug, Copy, Clone)]
pub struct MatchupReport<'a>(pub &'a MatchupAnalysis);

impl Display for MatchupReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let yours = &self.0.your_pokemon;
        let opponent = &self.0.opponent_pokemon;

        writeln!(f, "--- Matchup Analysis: {} vs. {} ---", yours.name, opponent.name)?;
        writeln!(f)?;
        writeln!(f, "Your Pokémon: {} ({})", yours.name, join_types(&yours.types, " / "))?;
        writeln!(f, "Opponent Pokémon: {} ({})", opponent.name, join_types(&opponent.types, " / "))?;
        writeln!(f)?;

        writeln!(f, "--- 📊 {}'s Offensive Analysis ---", yours.name)?;
        write_type_details(f, &yours.name, &yours.offensive_details)?;
        writeln!(f)?;
        writeln!(
            f,
            "Overall, {} will deal {:.1}x damage (best case).",
            yours.name, yours.offensive_multiplier
        )?;
        writeln!(f)?;

        writeln!(f, "--- 🚨 {}'s Offensive Threat (to {}) ---", opponent.name, yours.name)?;
        write_type_details(f, &opponent.name, &opponent.offensive_details)?;
        writeln!(f)?;
        writeln!(
            f,
            "Overall, {} will take {:.1}x damage (worst case).",
            yours.name, opponent.offensive_multiplier
        )?;
        writeln!(f)?;

        writeln!(f, "--- ⭐ Overall Matchup Summary ⭐ ---")?;
        writeln!(f, "{}", self.0.matchup_summary)
    }
}

fn write_type_details(f: &mut Formatter<'_>, attacker: &str, details: &[TypeDetail]) -> std::fmt::Result {
    for detail in details {
        writeln!(
            f,
            "  • If {} uses a {}-type attack: {}",
            attacker, detail.attacking_type, detail.description
        )?;
    }

    Ok(())
}

/// Report of the best [`Counters`] to an opponent.
#[derive(Debug, Copy, Clone)]
pub struct CountersReport<'a>(pub &'a Counters);

impl Display for CountersReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let opponent = &self.0.opponent;

        writeln!(f, "--- 🎯 Best Counters to {} ({}) ---", opponent.name, opponent.types_label(" / "))?;
        writeln!(f)?;
        for (i, counter) in self.0.counters.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({}): deals {:.1}x, takes {:.1}x",
                i + 1,
                counter.name,
                join_types(&counter.types, " / "),
                counter.offensive_multiplier,
                counter.defensive_multiplier
            )?;
        }

        Ok(())
    }
}

/// Report of [`MoveRecommendations`] for a matchup.
#[derive(Debug, Copy, Clone)]
pub struct MoveRecommendationsReport<'a>(pub &'a MoveRecommendations);

impl Display for MoveRecommendationsReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let recommendations = self.0;
        if let Some(message) = &recommendations.message {
            return writeln!(f, "{}", message);
        }

        writeln!(
            f,
            "--- 🎯 Move Recommendations: {} vs. {} ---",
            recommendations.pokemon, recommendations.opponent
        )?;
        writeln!(f)?;
        for (i, analysis) in recommendations.recommendations.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({}, {}, Power {}, Accuracy {}%): score {:.1}",
                i + 1,
                analysis.name,
                analysis.move_type,
                analysis.category,
                analysis.power,
                analysis.accuracy,
                analysis.score
            )?;
            writeln!(f, "   {}", analysis.recommendation)?;
        }

        if let Some(best_move) = &recommendations.best_move {
            writeln!(f)?;
            writeln!(f, "Best move: {}", best_move.name)?;
        }

        if !recommendations.strategy_tips.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- 💡 Strategy Tips ---")?;
            for tip in &recommendations.strategy_tips {
                writeln!(f, "  • {}", tip)?;
            }
        }

        Ok(())
    }
}

/// Report of a Pokemon's [`MoveCoverage`].
#[derive(Debug, Copy, Clone)]
pub struct MoveCoverageReport<'a>(pub &'a MoveCoverage);

impl Display for MoveCoverageReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let coverage = self.0;
        if let Some(message) = &coverage.message {
            return writeln!(f, "{}", message);
        }

        writeln!(f, "--- 🗺️ Move Coverage: {} ---", coverage.pokemon)?;
        writeln!(f)?;
        writeln!(f, "Total Moves: {}", coverage.total_moves)?;
        writeln!(
            f,
            "Move Types: {} ({})",
            coverage.unique_types,
            join_types(&coverage.move_types, ", ")
        )?;
        writeln!(
            f,
            "Physical: {}, Special: {}, Status: {}",
            coverage.physical_moves, coverage.special_moves, coverage.status_moves
        )?;
        writeln!(f, "Coverage Quality: {}", coverage.coverage_quality)?;
        writeln!(f, "Super-Effective Move Types: {}", coverage.super_effective_types)?;

        if !coverage.recommendations.is_empty() {
            writeln!(f)?;
            for recommendation in &coverage.recommendations {
                writeln!(f, "  • {}", recommendation)?;
            }
        }

        Ok(())
    }
}

/// Listing of the members of a team, with the number of free slots.
#[derive(Debug, Copy, Clone)]
pub struct TeamListing<'a>(pub &'a [&'a Pokemon]);

impl Display for TeamListing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, member) in self.0.iter().enumerate() {
            writeln!(f, "{}. {} ({})", i + 1, member.name, member.types_label(" / "))?;
        }

        writeln!(f)?;
        if self.0.len() >= MAX_TEAM_SIZE {
            writeln!(f, "✅ Team Complete!")
        } else {
            writeln!(f, "📝 {} Pokémon needed", MAX_TEAM_SIZE - self.0.len())
        }
    }
}

/// Report of Pokemon suggested for a team.
#[derive(Debug, Copy, Clone)]
pub struct SuggestionsReport<'a>(pub &'a [Pokemon]);

impl Display for SuggestionsReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No suggestions available.");
        }

        writeln!(f, "Suggested Pokémon to add:")?;
        writeln!(f)?;
        for (i, suggestion) in self.0.iter().enumerate() {
            writeln!(f, "{}. {} ({})", i + 1, suggestion.name, suggestion.types_label(" / "))?;
        }

        Ok(())
    }
}

/// Report of a [`TeamAnalysis`].
#[derive(Debug, Copy, Clone)]
pub struct TeamReport<'a>(pub &'a TeamAnalysis);

impl Display for TeamReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let analysis = self.0;

        writeln!(f, "=== TEAM ANALYSIS ===")?;
        writeln!(f)?;
        writeln!(f, "Team Size: {}/{} Pokémon", analysis.team_size, MAX_TEAM_SIZE)?;
        writeln!(f, "Team Members: {}", analysis.pokemon_list.join(", "))?;
        writeln!(f)?;

        let type_analysis = &analysis.type_analysis;
        writeln!(f, "=== TYPE ANALYSIS ===")?;
        writeln!(f, "Diversity Rating: {}", type_analysis.diversity_rating)?;
        writeln!(f, "Unique Types: {}/{}", type_analysis.unique_types, PokemonType::ALL.len())?;
        writeln!(f, "Diversity Score: {:.2}", type_analysis.diversity_score)?;
        writeln!(f)?;
        writeln!(f, "Type Distribution:")?;
        for type_count in &type_analysis.type_distribution {
            writeln!(f, "  {}: {}", type_count.pokemon_type, type_count.count)?;
        }
        writeln!(f)?;
        writeln!(f, "Type Combinations:")?;
        for combination in &type_analysis.type_combinations {
            writeln!(f, "  {}", combination)?;
        }
        writeln!(f)?;

        let coverage_analysis = &analysis.coverage_analysis;
        writeln!(f, "=== COVERAGE ANALYSIS ===")?;
        writeln!(f, "Coverage Score: {:.2}", coverage_analysis.coverage_score)?;
        writeln!(f, "Excellent Coverage: {} types", coverage_analysis.excellent_coverage.len())?;
        if !coverage_analysis.excellent_coverage.is_empty() {
            writeln!(f, "  Types: {}", join_types(&coverage_analysis.excellent_coverage, ", "))?;
        }
        if !coverage_analysis.coverage_gaps.is_empty() {
            let gaps = &coverage_analysis.coverage_gaps;
            writeln!(f, "Coverage Gaps: {} types", gaps.len())?;
            writeln!(f, "  Types: {}", join_types(&gaps[..gaps.len().min(SHOWN_GAPS)], ", "))?;
        }
        writeln!(f)?;

        let weakness_analysis = &analysis.weakness_analysis;
        writeln!(f, "=== WEAKNESS ANALYSIS ===")?;
        writeln!(f, "Weakness Score: {:.2}", weakness_analysis.weakness_score)?;
        if !weakness_analysis.critical_weaknesses.is_empty() {
            writeln!(f, "Critical Weaknesses:")?;
            for weakness in &weakness_analysis.critical_weaknesses {
                writeln!(f, "  {}: {}", weakness.pokemon_type, weakness.members.join(", "))?;
            }
        }
        if !weakness_analysis.defensive_gaps.is_empty() {
            let gaps = &weakness_analysis.defensive_gaps;
            writeln!(
                f,
                "Defensive Gaps: {}",
                join_types(&gaps[..gaps.len().min(SHOWN_GAPS)], ", ")
            )?;
        }
        writeln!(f)?;

        let synergy_analysis = &analysis.synergy_analysis;
        writeln!(f, "=== SYNERGY ANALYSIS ===")?;
        writeln!(f, "Overall Synergy: {}", synergy_analysis.overall_synergy)?;
        writeln!(f)?;
        if !synergy_analysis.synergy_pairs.is_empty() {
            writeln!(f, "Strong Synergy Pairs:")?;
            write_pairs(f, &synergy_analysis.synergy_pairs)?;
        }
        if !synergy_analysis.anti_synergy_pairs.is_empty() {
            writeln!(f)?;
            writeln!(f, "Weak Synergy Pairs:")?;
            write_pairs(f, &synergy_analysis.anti_synergy_pairs)?;
        }
        writeln!(f)?;

        writeln!(f, "=== RECOMMENDATIONS ===")?;
        for (i, recommendation) in analysis.recommendations.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, recommendation)?;
        }

        Ok(())
    }
}

fn write_pairs(f: &mut Formatter<'_>, pairs: &[PairSynergy]) -> std::fmt::Result {
    for pair in pairs.iter().take(SHOWN_PAIRS) {
        writeln!(f, "  {} + {} (Score: {:.2})", pair.pokemon1, pair.pokemon2, pair.score)?;
        writeln!(f, "    Reason: {}", pair.reason)?;
    }

    Ok(())
}
