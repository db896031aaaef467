//! Command-line front-end of the Pokemon type matchup advisor.
//!
//! Prints the same analyses as the REST API, as plain-text reports. See `README.md` for usage.

use std::env::current_exe;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use cargo_metadata::MetadataCommand;
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use poke_advisor::data::dex::{Dex, POKEMON_FILE};
use poke_advisor::helpers::env::load_optional_dotenv;
use poke_advisor::report::{
    CountersReport, MatchupReport, MoveCoverageReport, MoveRecommendationsReport,
    SuggestionsReport, TeamListing, TeamReport,
};
use poke_advisor::services::matchup::DEFAULT_COUNTERS_LIMIT;
use poke_advisor::services::team::{Team, EMPTY_TEAM_MESSAGE};
use poke_advisor::services::{matchup, moves};
use simple_logger::SimpleLogger;

/// Pokemon type matchup advisor
#[derive(Debug, Parser)]
#[command(name = "advise", version, about, long_about = None)]
struct Cli {
    /// Directory containing the seed CSV files (defaults to `ADVISOR_DATA_DIR`, then to the data
    /// embedded in the binary)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze the matchup between your Pokemon and an opponent
    Matchup(MatchupArgs),

    /// List the Pokemon that fare best against an opponent
    Counters(CountersArgs),

    /// Recommend moves against an opponent, or analyze a Pokemon's move coverage
    Moves(MovesArgs),

    /// Analyze a team and suggest Pokemon to add
    Team(TeamArgs),

    /// Validate the seed CSV files
    CheckData,
}

#[derive(Debug, Args)]
struct MatchupArgs {
    /// Your Pokemon
    yours: String,

    /// The opponent's Pokemon
    opponent: String,
}

impl MatchupArgs {
    fn execute(&self, dex: Arc<Dex>) -> anyhow::Result<()> {
        let analysis = matchup::Service::new(dex).analyze_matchup(&self.yours, &self.opponent)?;
        print!("{}", MatchupReport(&analysis));

        Ok(())
    }
}

#[derive(Debug, Args)]
struct CountersArgs {
    /// The opponent's Pokemon
    opponent: String,

    /// Maximum number of counters to list
    #[arg(short, long, default_value_t = DEFAULT_COUNTERS_LIMIT)]
    limit: usize,
}

impl CountersArgs {
    fn execute(&self, dex: Arc<Dex>) -> anyhow::Result<()> {
        let counters = matchup::Service::new(dex).find_counters(&self.opponent, self.limit)?;
        print!("{}", CountersReport(&counters));

        Ok(())
    }
}

#[derive(Debug, Args)]
struct MovesArgs {
    /// The attacking Pokemon
    attacker: String,

    /// The defending Pokemon; if omitted, the attacker's move coverage is analyzed instead
    defender: Option<String>,
}

impl MovesArgs {
    fn execute(&self, dex: Arc<Dex>) -> anyhow::Result<()> {
        let service = moves::Service::new(dex);
        match &self.defender {
            Some(defender) => {
                let recommendations = service.recommend_moves(&self.attacker, defender)?;
                print!("{}", MoveRecommendationsReport(&recommendations));
            },
            None => {
                let coverage = service.analyze_move_coverage(&self.attacker)?;
                print!("{}", MoveCoverageReport(&coverage));
            },
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
struct TeamArgs {
    /// Team members (at most 6)
    members: Vec<String>,

    /// Also suggest Pokemon to add to the team
    #[arg(short, long)]
    suggest: bool,
}

impl TeamArgs {
    fn execute(&self, dex: Arc<Dex>) -> anyhow::Result<()> {
        let team = Team::from_names(&dex, &self.members)?;

        match team.analyze() {
            Some(analysis) => {
                print!("{}", TeamListing(team.members()));
                println!();
                print!("{}", TeamReport(&analysis));
            },
            None => println!("{}", EMPTY_TEAM_MESSAGE),
        }

        if self.suggest {
            let suggestions: Vec<_> = team.suggest_pokemon().into_iter().cloned().collect();
            println!();
            print!("{}", SuggestionsReport(&suggestions));
        }

        Ok(())
    }
}

/// Main program body.
fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .with_context(|| "failed to initialize logging facility")?;

    load_optional_dotenv()
        .with_context(|| "failed to load `.env` file containing environment variables")?;

    let cli = Cli::parse();
    let data_dir = cli.data_dir;
    match cli.command {
        Command::Matchup(args) => args.execute(load_dex(data_dir)?),
        Command::Counters(args) => args.execute(load_dex(data_dir)?),
        Command::Moves(args) => args.execute(load_dex(data_dir)?),
        Command::Team(args) => args.execute(load_dex(data_dir)?),
        Command::CheckData => check_data(data_dir),
    }
}

fn load_dex(data_dir: Option<PathBuf>) -> anyhow::Result<Arc<Dex>> {
    let dex = match data_dir {
        Some(data_dir) => Dex::load_from_dir(data_dir),
        None => Dex::load(),
    };

    Ok(Arc::new(dex.with_context(|| "failed to load advisor data")?))
}

/// Loads the seed CSV files from disk and reports what they contain.
///
/// Unlike the other commands, this never uses the data embedded in the binary: without
/// `--data-dir`, the `seed` directory next to the executable (or in the workspace) is checked.
fn check_data(data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let data_dir = match data_dir {
        Some(data_dir) => data_dir,
        None => get_seed_dir()?,
    };

    info!("Checking seed data in {}", data_dir.display());
    let start_time = Instant::now();
    let dex = Dex::load_from_dir(&data_dir)
        .with_context(|| format!("invalid seed data in {}", data_dir.display()))?;

    let learnset_count = dex
        .all_pokemon()
        .iter()
        .filter(|pokemon| !dex.moves_for(pokemon).is_empty())
        .count();
    println!("Seed data in {} is valid:", data_dir.display());
    println!("  Pokémon: {}", dex.all_pokemon().len());
    println!("  Moves: {}", dex.all_moves().len());
    println!("  Pokémon with move data: {}", learnset_count);
    info!("Seed data checked in {:.4?}s.", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Returns the path to the directory containing the seed CSV files.
fn get_seed_dir() -> anyhow::Result<PathBuf> {
    // First try looking in the directory of the current executable.
    let mut seed_dir = current_exe()?;
    seed_dir.pop();
    seed_dir.push("seed");
    if seed_dir.join(POKEMON_FILE).is_file() {
        return Ok(seed_dir);
    }

    // Otherwise we must be in dev environment, so use cargo.
    let metadata = MetadataCommand::new()
        .exec()
        .with_context(|| "failed to get metadata to fetch workspace root")?;

    Ok(metadata.workspace_root.join("seed").into_std_path_buf())
}
