//! Team builder: team composition and analysis. Used by the teams REST API.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::Display;
use utoipa::{ToResponse, ToSchema};

use crate::data::dex::Dex;
use crate::data::type_chart::{Effectiveness, TypeChart};
use crate::error::TeamError;
use crate::models::pokemon::Pokemon;
use crate::models::pokemon_type::PokemonType;

/// Maximum number of Pokemon in a [`Team`].
pub const MAX_TEAM_SIZE: usize = 6;

/// Pokemon suggested when the team is empty.
pub const BALANCED_STARTERS: [&str; 6] =
    ["Charizard", "Blastoise", "Venusaur", "Pikachu", "Machamp", "Gengar"];

/// Message shown in place of an analysis when the team is empty.
pub const EMPTY_TEAM_MESSAGE: &str = "No Pokémon in team to analyze.";

/// Maximum number of Pokemon returned by [`Team::suggest_pokemon`].
pub const MAX_SUGGESTIONS: usize = 5;

const SYNERGY_THRESHOLD: f32 = 0.7;
const ANTI_SYNERGY_THRESHOLD: f32 = 0.3;

/// A team of up to [`MAX_TEAM_SIZE`] distinct Pokemon.
///
/// Members are borrowed from a [`Dex`]; teams are not persisted.
#[derive(Debug, Clone)]
pub struct Team<'a> {
    dex: &'a Dex,
    members: Vec<&'a Pokemon>,
}

impl<'a> Team<'a> {
    /// Creates an empty team.
    pub fn new(dex: &'a Dex) -> Self {
        Self { dex, members: Vec::with_capacity(MAX_TEAM_SIZE) }
    }

    /// Creates a team by [adding](Team::add) each Pokemon in turn.
    pub fn from_names<I, S>(dex: &'a Dex, names: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut team = Self::new(dex);
        for name in names {
            team.add(name.as_ref())?;
        }

        Ok(team)
    }

    /// Adds a Pokemon to the team.
    ///
    /// # Errors
    ///
    /// - [`NotFound`](crate::Error::NotFound): Pokemon is not in the [`Dex`]
    /// - [`TeamError::Full`]: team already has [`MAX_TEAM_SIZE`] members
    /// - [`TeamError::Duplicate`]: Pokemon is already in the team
    pub fn add(&mut self, name: &str) -> crate::Result<&'a Pokemon> {
        let pokemon = self.dex.pokemon(name)?;
        if self.members.len() >= MAX_TEAM_SIZE {
            return Err(TeamError::Full { max: MAX_TEAM_SIZE }.into());
        }
        if self.contains(pokemon) {
            return Err(TeamError::Duplicate(pokemon.name.clone()).into());
        }

        self.members.push(pokemon);
        Ok(pokemon)
    }

    /// Removes a Pokemon from the team, returning it.
    pub fn remove(&mut self, name: &str) -> crate::Result<&'a Pokemon> {
        let position = self
            .dex
            .find_pokemon(name)
            .and_then(|pokemon| self.members.iter().position(|member| member.name == pokemon.name))
            .ok_or_else(|| TeamError::NotInTeam(name.into()))?;

        Ok(self.members.remove(position))
    }

    /// Removes every Pokemon from the team.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Returns the team members, in the order they were added.
    pub fn members(&self) -> &[&'a Pokemon] {
        &self.members
    }

    /// Returns the number of team members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the team has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `pokemon` is a member of the team.
    pub fn contains(&self, pokemon: &Pokemon) -> bool {
        self.members.iter().any(|member| member.name == pokemon.name)
    }

    /// Analyzes the team's types, offensive coverage, defensive weaknesses and internal synergy.
    ///
    /// Returns `None` if the team is empty.
    pub fn analyze(&self) -> Option<TeamAnalysis> {
        if self.is_empty() {
            return None;
        }

        let type_analysis = self.type_analysis();
        let coverage_analysis = self.coverage_analysis();
        let weakness_analysis = self.weakness_analysis();
        let synergy_analysis = self.synergy_analysis();
        let recommendations =
            self.recommendations(&type_analysis, &coverage_analysis, &weakness_analysis);

        Some(TeamAnalysis {
            team_size: self.len(),
            pokemon_list: self.members.iter().map(|member| member.name.clone()).collect(),
            type_analysis,
            coverage_analysis,
            weakness_analysis,
            synergy_analysis,
            recommendations,
        })
    }

    /// Suggests Pokemon to add to the team.
    ///
    /// An empty team gets the [balanced starters](BALANCED_STARTERS). Otherwise, suggestions
    /// are Pokemon whose types hit the first two coverage gaps super-effectively, followed by
    /// Pokemon resisting the first two critical weaknesses (three of each, in [`Dex`] order).
    /// Current members are never suggested and at most [`MAX_SUGGESTIONS`] are returned.
    pub fn suggest_pokemon(&self) -> Vec<&'a Pokemon> {
        if self.is_empty() {
            return BALANCED_STARTERS
                .iter()
                .filter_map(|name| self.dex.find_pokemon(name))
                .collect();
        }

        let chart = self.chart();
        let all_pokemon = self.dex.all_pokemon();
        let mut candidates: Vec<&'a Pokemon> = Vec::new();

        for &gap in self.coverage_analysis().coverage_gaps.iter().take(2) {
            candidates.extend(
                all_pokemon
                    .iter()
                    .filter(|pokemon| {
                        pokemon
                            .types
                            .iter()
                            .any(|&attacking| chart.multiplier(attacking, gap) > 1.0)
                    })
                    .take(3),
            );
        }
        for weakness in self.weakness_analysis().critical_weaknesses.iter().take(2) {
            candidates.extend(
                all_pokemon
                    .iter()
                    .filter(|pokemon| chart.effectiveness(weakness.pokemon_type, &pokemon.types) < 1.0)
                    .take(3),
            );
        }

        let mut suggestions: Vec<&'a Pokemon> = Vec::new();
        for candidate in candidates {
            if !self.contains(candidate)
                && !suggestions
                    .iter()
                    .any(|suggestion| suggestion.name == candidate.name)
            {
                suggestions.push(candidate);
            }
        }
        suggestions.truncate(MAX_SUGGESTIONS);

        suggestions
    }

    fn chart(&self) -> &'a TypeChart {
        self.dex.type_chart()
    }

    fn type_analysis(&self) -> TypeAnalysis {
        let mut type_distribution: Vec<TypeCount> = Vec::new();
        for &pokemon_type in self.members.iter().flat_map(|member| member.types.iter()) {
            match type_distribution
                .iter_mut()
                .find(|type_count| type_count.pokemon_type == pokemon_type)
            {
                Some(type_count) => type_count.count += 1,
                None => type_distribution.push(TypeCount { pokemon_type, count: 1 }),
            }
        }

        let mut most_common_types = type_distribution.clone();
        most_common_types.sort_by(|a, b| b.count.cmp(&a.count));
        most_common_types.truncate(3);

        let least_common_types = type_distribution
            .iter()
            .filter(|type_count| type_count.count == 1)
            .map(|type_count| type_count.pokemon_type)
            .collect();

        let unique_types = type_distribution.len();
        let diversity_score = ratio(unique_types);

        TypeAnalysis {
            type_combinations: self
                .members
                .iter()
                .map(|member| format!("{}: {}", member.name, member.types_label("/")))
                .collect(),
            type_distribution,
            most_common_types,
            least_common_types,
            unique_types,
            diversity_score,
            diversity_rating: DiversityRating::from_score(diversity_score),
        }
    }

    fn coverage_analysis(&self) -> CoverageAnalysis {
        let mut team_moves: Vec<MoveTypeGroup> = Vec::new();
        let mut attack_types: Vec<(&Pokemon, HashSet<PokemonType>)> = Vec::new();

        for &member in &self.members {
            let mut member_attack_types = HashSet::new();
            for a_move in self.dex.known_moves_for(member) {
                let entry = format!("{}: {}", member.name, a_move.name);
                match team_moves
                    .iter_mut()
                    .find(|group| group.move_type == a_move.move_type)
                {
                    Some(group) => group.moves.push(entry),
                    None => team_moves
                        .push(MoveTypeGroup { move_type: a_move.move_type, moves: vec![entry] }),
                }

                if a_move.is_damaging() {
                    member_attack_types.insert(a_move.move_type);
                }
            }
            attack_types.push((member, member_attack_types));
        }

        let chart = self.chart();
        let coverage_effectiveness: Vec<_> = PokemonType::ALL
            .into_iter()
            .map(|defending| {
                let best_against = |types: &HashSet<PokemonType>| {
                    types
                        .iter()
                        .map(|&attacking| chart.multiplier(attacking, defending))
                        .fold(0.0, f32::max)
                };
                let effectiveness = attack_types
                    .iter()
                    .map(|(_, types)| best_against(types))
                    .fold(0.0, f32::max);
                let attackers = if effectiveness > 0.0 {
                    attack_types
                        .iter()
                        .filter(|(_, types)| best_against(types) == effectiveness)
                        .map(|(member, _)| member.name.clone())
                        .collect()
                } else {
                    Vec::new()
                };

                TypeCoverage { defending_type: defending, effectiveness, attackers }
            })
            .collect();

        let coverage_gaps: Vec<_> = coverage_effectiveness
            .iter()
            .filter(|coverage| coverage.effectiveness < 1.0)
            .map(|coverage| coverage.defending_type)
            .collect();
        let excellent_coverage: Vec<_> = coverage_effectiveness
            .iter()
            .filter(|coverage| coverage.effectiveness >= 2.0)
            .map(|coverage| coverage.defending_type)
            .collect();

        CoverageAnalysis {
            team_moves,
            coverage_effectiveness,
            coverage_gaps,
            coverage_score: ratio(excellent_coverage.len()),
            excellent_coverage,
        }
    }

    fn weakness_analysis(&self) -> WeaknessAnalysis {
        let chart = self.chart();
        let mut team_weaknesses = Vec::new();
        let mut team_resistances = Vec::new();
        let mut team_immunities = Vec::new();

        // Types are listed in the order they first affect a member.
        for member in &self.members {
            for attacking in PokemonType::ALL {
                let effectiveness = chart.effectiveness(attacking, &member.types);
                match Effectiveness::of(effectiveness) {
                    Effectiveness::SuperEffective => {
                        add_type_member(&mut team_weaknesses, attacking, &member.name)
                    },
                    Effectiveness::NotVeryEffective => {
                        add_type_member(&mut team_resistances, attacking, &member.name)
                    },
                    Effectiveness::NoEffect => {
                        add_type_member(&mut team_resistances, attacking, &member.name);
                        add_type_member(&mut team_immunities, attacking, &member.name);
                    },
                    Effectiveness::Normal => (),
                }
            }
        }

        let critical_weaknesses: Vec<_> = team_weaknesses
            .iter()
            .filter(|weakness| weakness.members.len() >= 2)
            .cloned()
            .collect();
        let defensive_gaps = PokemonType::ALL
            .into_iter()
            .filter(|&attacking| {
                !team_resistances
                    .iter()
                    .any(|resistance| resistance.pokemon_type == attacking)
            })
            .collect();

        WeaknessAnalysis {
            weakness_score: ratio(critical_weaknesses.len()),
            team_weaknesses,
            team_resistances,
            team_immunities,
            critical_weaknesses,
            defensive_gaps,
        }
    }

    fn synergy_analysis(&self) -> SynergyAnalysis {
        let mut synergy_pairs = Vec::new();
        let mut anti_synergy_pairs = Vec::new();

        for (i, &first) in self.members.iter().enumerate() {
            for &second in &self.members[i + 1..] {
                let score = self.pair_synergy(first, second);
                if score > SYNERGY_THRESHOLD {
                    synergy_pairs.push(PairSynergy {
                        pokemon1: first.name.clone(),
                        pokemon2: second.name.clone(),
                        score,
                        reason: self.synergy_reason(first, second),
                    });
                } else if score < ANTI_SYNERGY_THRESHOLD {
                    anti_synergy_pairs.push(PairSynergy {
                        pokemon1: first.name.clone(),
                        pokemon2: second.name.clone(),
                        score,
                        reason: self.anti_synergy_reason(first, second),
                    });
                }
            }
        }

        synergy_pairs.sort_by(|a, b| b.score.total_cmp(&a.score));
        anti_synergy_pairs.sort_by(|a, b| a.score.total_cmp(&b.score));

        SynergyAnalysis {
            overall_synergy: synergy_pairs.len() as i32 - anti_synergy_pairs.len() as i32,
            synergy_pairs,
            anti_synergy_pairs,
        }
    }

    /// Scores how well two members complement each other, between 0 and 1.
    ///
    /// `second` earns 0.4 for each of `first`'s types it is immune to and 0.2 for each it
    /// resists; the pair then earns 0.1 per distinct move type across both learnsets.
    fn pair_synergy(&self, first: &Pokemon, second: &Pokemon) -> f32 {
        let chart = self.chart();
        let type_score: f32 = first
            .types
            .iter()
            .flat_map(|&attacking| {
                second
                    .types
                    .iter()
                    .map(move |&defending| chart.multiplier(attacking, defending))
            })
            .map(|multiplier| match Effectiveness::of(multiplier) {
                Effectiveness::NoEffect => 0.4,
                Effectiveness::NotVeryEffective => 0.2,
                _ => 0.0,
            })
            .sum();

        let move_types: HashSet<_> = self
            .dex
            .known_moves_for(first)
            .chain(self.dex.known_moves_for(second))
            .map(|a_move| a_move.move_type)
            .collect();

        (type_score + move_types.len() as f32 * 0.1).min(1.0)
    }

    fn synergy_reason(&self, first: &Pokemon, second: &Pokemon) -> String {
        let chart = self.chart();
        let reasons: Vec<_> = first
            .types
            .iter()
            .flat_map(|&attacking| {
                second.types.iter().filter_map(move |&defending| {
                    match Effectiveness::of(chart.multiplier(attacking, defending)) {
                        Effectiveness::NoEffect => {
                            Some(format!("{} is immune to {}", second.name, attacking))
                        },
                        Effectiveness::NotVeryEffective => {
                            Some(format!("{} resists {}", second.name, attacking))
                        },
                        _ => None,
                    }
                })
            })
            .collect();

        if reasons.is_empty() {
            "Good move coverage diversity".into()
        } else {
            reasons.join("; ")
        }
    }

    fn anti_synergy_reason(&self, first: &Pokemon, second: &Pokemon) -> String {
        let chart = self.chart();
        let reasons: Vec<_> = PokemonType::ALL
            .into_iter()
            .filter(|&attacking| {
                chart.effectiveness(attacking, &first.types) > 1.0
                    && chart.effectiveness(attacking, &second.types) > 1.0
            })
            .map(|attacking| format!("Both weak to {}", attacking))
            .collect();

        if reasons.is_empty() {
            "Limited move coverage diversity".into()
        } else {
            reasons.join("; ")
        }
    }

    fn recommendations(
        &self,
        type_analysis: &TypeAnalysis,
        coverage_analysis: &CoverageAnalysis,
        weakness_analysis: &WeaknessAnalysis,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if self.len() < MAX_TEAM_SIZE {
            recommendations.push(format!(
                "Add {} more Pokémon to complete your team.",
                MAX_TEAM_SIZE - self.len()
            ));
        }
        if !coverage_analysis.coverage_gaps.is_empty() {
            recommendations.push(format!(
                "Add moves to cover: {}",
                join_types(coverage_analysis.coverage_gaps.iter().copied().take(3))
            ));
        }
        if !weakness_analysis.critical_weaknesses.is_empty() {
            recommendations.push(format!(
                "Add resistance to: {}",
                join_types(
                    weakness_analysis
                        .critical_weaknesses
                        .iter()
                        .map(|weakness| weakness.pokemon_type)
                        .take(3)
                )
            ));
        }
        if type_analysis.diversity_score < 0.5 {
            recommendations
                .push("Consider adding more diverse Pokémon types for better coverage.".into());
        }

        recommendations
    }
}

fn add_type_member(entries: &mut Vec<TypeMembers>, pokemon_type: PokemonType, name: &str) {
    match entries.iter_mut().find(|entry| entry.pokemon_type == pokemon_type) {
        Some(entry) => entry.members.push(name.into()),
        None => entries.push(TypeMembers { pokemon_type, members: vec![name.into()] }),
    }
}

fn ratio(count: usize) -> f32 {
    count as f32 / PokemonType::COUNT as f32
}

fn join_types<I>(types: I) -> String
where
    I: Iterator<Item = PokemonType>,
{
    types
        .map(|pokemon_type| pokemon_type.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Service implementation for teams.
///
/// Teams are built per request from a list of names and dropped afterwards. Used by the
/// [teams REST API endpoint implementations](crate::api::v1::teams).
#[derive(Debug, Clone)]
pub struct Service {
    dex: Arc<Dex>,
}

impl Service {
    /// Creates a new team service using the provided [`Dex`].
    pub fn new(dex: Arc<Dex>) -> Self {
        Self { dex }
    }

    /// Builds a team from `members` and analyzes it (see [`Team::analyze`]).
    ///
    /// An empty team results in a [`TeamError::Empty`] error.
    pub fn analyze_team<S>(&self, members: &[S]) -> crate::Result<TeamAnalysis>
    where
        S: AsRef<str>,
    {
        Team::from_names(&self.dex, members)?
            .analyze()
            .ok_or_else(|| TeamError::Empty.into())
    }

    /// Builds a team from `members` and suggests Pokemon to add (see [`Team::suggest_pokemon`]).
    pub fn suggest_pokemon<S>(&self, members: &[S]) -> crate::Result<TeamSuggestions>
    where
        S: AsRef<str>,
    {
        let team = Team::from_names(&self.dex, members)?;

        Ok(TeamSuggestions {
            team: team.members().iter().map(|member| member.name.clone()).collect(),
            suggestions: team.suggest_pokemon().into_iter().cloned().collect(),
        })
    }
}

/// Rating of a team's type diversity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, Serialize, Deserialize, ToSchema)]
pub enum DiversityRating {
    /// Diversity score of 0.8 or more
    Excellent,

    /// Diversity score of 0.6 or more
    Good,

    /// Diversity score of 0.4 or more
    Fair,

    /// Diversity score below 0.4
    Poor,
}

impl DiversityRating {
    /// Rates a diversity score (unique types / 18).
    pub fn from_score(diversity_score: f32) -> Self {
        if diversity_score >= 0.8 {
            Self::Excellent
        } else if diversity_score >= 0.6 {
            Self::Good
        } else if diversity_score >= 0.4 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Number of team members having a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TypeCount {
    /// The type
    #[serde(rename = "type")]
    pub pokemon_type: PokemonType,

    /// Number of members having it
    pub count: usize,
}

/// Team members affected by an attacking type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TypeMembers {
    /// The attacking type
    #[serde(rename = "type")]
    pub pokemon_type: PokemonType,

    /// Names of the members affected
    pub members: Vec<String>,
}

/// Team moves of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MoveTypeGroup {
    /// Move type
    #[serde(rename = "type")]
    pub move_type: PokemonType,

    /// Moves, as `Pokemon: Move`
    pub moves: Vec<String>,
}

/// How well the team hits a defending type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TypeCoverage {
    /// Defending type
    #[serde(rename = "type")]
    pub defending_type: PokemonType,

    /// Best multiplier any damaging team move reaches against this type
    pub effectiveness: f32,

    /// Members whose moves reach that multiplier
    pub attackers: Vec<String>,
}

/// Type distribution of a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TypeAnalysis {
    /// Number of members per type, in order of first appearance
    pub type_distribution: Vec<TypeCount>,

    /// Each member's types, as `Name: Type1/Type2`
    pub type_combinations: Vec<String>,

    /// The three most common types
    pub most_common_types: Vec<TypeCount>,

    /// Types appearing only once
    pub least_common_types: Vec<PokemonType>,

    /// Number of distinct types
    pub unique_types: usize,

    /// Distinct types / 18
    pub diversity_score: f32,

    /// Rating of the diversity score
    pub diversity_rating: DiversityRating,
}

/// Offensive coverage of a team's moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoverageAnalysis {
    /// Team moves grouped by type, in order of first appearance
    pub team_moves: Vec<MoveTypeGroup>,

    /// Coverage of each defending type, in canonical order
    pub coverage_effectiveness: Vec<TypeCoverage>,

    /// Defending types the team cannot hit for at least neutral damage
    pub coverage_gaps: Vec<PokemonType>,

    /// Defending types the team hits super-effectively
    pub excellent_coverage: Vec<PokemonType>,

    /// Excellent coverage types / 18
    pub coverage_score: f32,
}

/// Defensive profile of a team.
///
/// Per-type lists are ordered by the first member each type affects (members in team order,
/// then types in canonical order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeaknessAnalysis {
    /// Members weak to each attacking type
    pub team_weaknesses: Vec<TypeMembers>,

    /// Members resisting (or immune to) each attacking type
    pub team_resistances: Vec<TypeMembers>,

    /// Members immune to each attacking type
    pub team_immunities: Vec<TypeMembers>,

    /// Weaknesses shared by at least two members
    pub critical_weaknesses: Vec<TypeMembers>,

    /// Attacking types no member resists
    pub defensive_gaps: Vec<PokemonType>,

    /// Critical weaknesses / 18
    pub weakness_score: f32,
}

/// Synergy score of a pair of members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PairSynergy {
    /// First member
    pub pokemon1: String,

    /// Second member
    pub pokemon2: String,

    /// Synergy score, between 0 and 1
    pub score: f32,

    /// Human-readable explanation
    pub reason: String,
}

/// How well team members work together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SynergyAnalysis {
    /// Pairs scoring above 0.7, best first
    pub synergy_pairs: Vec<PairSynergy>,

    /// Pairs scoring below 0.3, worst first
    pub anti_synergy_pairs: Vec<PairSynergy>,

    /// Number of synergy pairs minus number of anti-synergy pairs
    pub overall_synergy: i32,
}

#[cfg_attr(
    doc,
    doc = r"
        Full analysis of a team, as returned by [`Team::analyze`].

        Scores are ratios over the 18 types. Lists of types are in canonical order, except for the
        per-type lists of [`WeaknessAnalysis`].
    "
)]
#[cfg_attr(not(doc), doc = "Team analysis")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ToResponse)]
pub struct TeamAnalysis {
    /// Number of members
    pub team_size: usize,

    /// Member names
    pub pokemon_list: Vec<String>,

    /// Type distribution
    pub type_analysis: TypeAnalysis,

    /// Offensive coverage
    pub coverage_analysis: CoverageAnalysis,

    /// Defensive weaknesses
    pub weakness_analysis: WeaknessAnalysis,

    /// Synergy between members
    pub synergy_analysis: SynergyAnalysis,

    /// Suggestions to improve the team
    pub recommendations: Vec<String>,
}

/// Pokemon suggested for a team, as returned by [`Service::suggest_pokemon`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, ToResponse)]
pub struct TeamSuggestions {
    /// Current team members
    pub team: Vec<String>,

    /// Suggested Pokemon, best first
    pub suggestions: Vec<Pokemon>,
}
