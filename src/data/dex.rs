//! The [`Dex`]: every static table, loaded once at startup.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::data::type_chart::TypeChart;
use crate::error::{DataContext, DataError, Entity};
use crate::helpers::env::optional_env_var;
use crate::models::moves::{ImportLearnset, ImportMove, ImportTypeChartEntry, Move, MoveCategory};
use crate::models::pokemon::{ImportPokemon, Pokemon};
use crate::models::pokemon_type::PokemonType;
use crate::Error;

/// Environment variable that can point to a directory containing replacement seed files.
pub const DATA_DIR_ENV_VAR: &str = "ADVISOR_DATA_DIR";

/// Name of the seed file containing Pokemon.
pub const POKEMON_FILE: &str = "pokemon.csv";

/// Name of the seed file containing moves.
pub const MOVES_FILE: &str = "moves.csv";

/// Name of the seed file containing learnsets.
pub const LEARNSETS_FILE: &str = "learnsets.csv";

/// Name of the seed file containing the type chart.
pub const TYPE_CHART_FILE: &str = "type_chart.csv";

const EMBEDDED_POKEMON: &str = include_str!("../../seed/pokemon.csv");
const EMBEDDED_MOVES: &str = include_str!("../../seed/moves.csv");
const EMBEDDED_LEARNSETS: &str = include_str!("../../seed/learnsets.csv");
const EMBEDDED_TYPE_CHART: &str = include_str!("../../seed/type_chart.csv");

/// Static advisor tables: Pokemon, moves, learnsets and the type chart.
///
/// Names are looked up case-insensitively; lists are returned in seed file order. A `Dex` is
/// immutable once loaded and meant to be shared (usually through an [`Arc`](std::sync::Arc)).
#[derive(Debug)]
pub struct Dex {
    pokemon: Vec<Pokemon>,
    pokemon_index: HashMap<String, usize>,
    moves: Vec<Move>,
    move_index: HashMap<String, usize>,
    learnsets: HashMap<usize, Vec<String>>,
    type_chart: TypeChart,
}

impl Dex {
    /// Loads the tables.
    ///
    /// If the [`ADVISOR_DATA_DIR`](DATA_DIR_ENV_VAR) environment variable is set, seed files are
    /// loaded from that directory (see [`load_from_dir`](Dex::load_from_dir)); otherwise, the
    /// tables embedded in the binary are used (see [`load_default`](Dex::load_default)).
    pub fn load() -> crate::Result<Self> {
        match optional_env_var(DATA_DIR_ENV_VAR)? {
            Some(data_dir) => {
                info!("Loading advisor data from {}", data_dir);
                Self::load_from_dir(data_dir)
            },
            None => {
                info!("Loading embedded advisor data");
                Self::load_default()
            },
        }
    }

    /// Loads the tables embedded in the binary at compile time.
    pub fn load_default() -> crate::Result<Self> {
        Self::from_csv_readers(
            EMBEDDED_POKEMON.as_bytes(),
            EMBEDDED_MOVES.as_bytes(),
            EMBEDDED_LEARNSETS.as_bytes(),
            EMBEDDED_TYPE_CHART.as_bytes(),
        )
    }

    /// Loads the tables from seed files stored in `data_dir`.
    ///
    /// The directory must contain [`POKEMON_FILE`], [`MOVES_FILE`], [`LEARNSETS_FILE`] and
    /// [`TYPE_CHART_FILE`].
    pub fn load_from_dir<P>(data_dir: P) -> crate::Result<Self>
    where
        P: AsRef<Path>,
    {
        let open = |file_name: &str| {
            let path = data_dir.as_ref().join(file_name);
            File::open(&path).with_data_context(|| format!("failed to open {}", path.display()))
        };

        Self::from_csv_readers(
            open(POKEMON_FILE)?,
            open(MOVES_FILE)?,
            open(LEARNSETS_FILE)?,
            open(TYPE_CHART_FILE)?,
        )
    }

    /// Loads the tables from CSV data.
    ///
    /// Every row is validated, then tables are checked for consistency: names must be unique
    /// and learnsets must refer to known Pokemon. Learnset moves that are not in the move table
    /// are kept but ignored by analyses; they are reported as warnings.
    pub fn from_csv_readers<R>(
        pokemon: R,
        moves: R,
        learnsets: R,
        type_chart: R,
    ) -> crate::Result<Self>
    where
        R: io::Read,
    {
        let pokemon: Vec<Pokemon> = read_table::<ImportPokemon, _>(pokemon, POKEMON_FILE)?
            .into_iter()
            .map(Into::into)
            .collect();
        let pokemon_index = index_by_name(&pokemon, |pokemon| &pokemon.name, Entity::Pokemon)
            .with_data_context(|| format!("inconsistent data in {}", POKEMON_FILE))?;

        let moves: Vec<Move> = read_table::<ImportMove, _>(moves, MOVES_FILE)?
            .into_iter()
            .map(Into::into)
            .collect();
        let move_index = index_by_name(&moves, |a_move| &a_move.name, Entity::Move)
            .with_data_context(|| format!("inconsistent data in {}", MOVES_FILE))?;

        let mut learnset_map: HashMap<usize, Vec<String>> = HashMap::new();
        for row in read_table::<ImportLearnset, _>(learnsets, LEARNSETS_FILE)? {
            let pokemon_id = *pokemon_index.get(&name_key(&row.pokemon)).ok_or_else(|| {
                DataError::Inconsistent(format!("unknown Pokemon in learnset: {}", row.pokemon))
                    .with_data_context(|| format!("inconsistent data in {}", LEARNSETS_FILE))
            })?;

            if !move_index.contains_key(&name_key(&row.move_name)) {
                warn!(
                    "Learnset of {} references unknown move {}; it will be ignored",
                    row.pokemon, row.move_name
                );
            }

            learnset_map
                .entry(pokemon_id)
                .or_default()
                .push(row.move_name.trim().into());
        }

        let type_chart = TypeChart::from_entries(
            read_table::<ImportTypeChartEntry, _>(type_chart, TYPE_CHART_FILE)?
                .into_iter()
                .map(|entry| (entry.attacking, entry.defending, entry.multiplier)),
        )
        .with_data_context(|| format!("inconsistent data in {}", TYPE_CHART_FILE))?;

        info!(
            "Loaded {} Pokemon, {} moves and {} learnsets",
            pokemon.len(),
            moves.len(),
            learnset_map.len()
        );

        Ok(Self {
            pokemon,
            pokemon_index,
            moves,
            move_index,
            learnsets: learnset_map,
            type_chart,
        })
    }

    /// Looks up a Pokemon by name (case-insensitive).
    pub fn find_pokemon(&self, name: &str) -> Option<&Pokemon> {
        self.pokemon_index
            .get(&name_key(name))
            .map(|&id| &self.pokemon[id])
    }

    /// Looks up a Pokemon by name (case-insensitive), returning a
    /// [`NotFound`](Error::NotFound) error if it doesn't exist.
    pub fn pokemon(&self, name: &str) -> crate::Result<&Pokemon> {
        self.find_pokemon(name)
            .ok_or_else(|| Error::not_found(Entity::Pokemon, name))
    }

    /// Returns all Pokemon, in seed file order.
    pub fn all_pokemon(&self) -> &[Pokemon] {
        &self.pokemon
    }

    /// Returns all Pokemon having the given type, in seed file order.
    pub fn pokemon_by_type(&self, pokemon_type: PokemonType) -> impl Iterator<Item = &Pokemon> {
        self.pokemon
            .iter()
            .filter(move |pokemon| pokemon.types.contains(&pokemon_type))
    }

    /// Looks up a move by name (case-insensitive).
    pub fn find_move(&self, name: &str) -> Option<&Move> {
        self.move_index.get(&name_key(name)).map(|&id| &self.moves[id])
    }

    /// Looks up a move by name (case-insensitive), returning a [`NotFound`](Error::NotFound)
    /// error if it doesn't exist.
    pub fn move_info(&self, name: &str) -> crate::Result<&Move> {
        self.find_move(name)
            .ok_or_else(|| Error::not_found(Entity::Move, name))
    }

    /// Returns all moves, in seed file order.
    pub fn all_moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns all moves of the given type, in seed file order.
    pub fn moves_by_type(&self, move_type: PokemonType) -> impl Iterator<Item = &Move> {
        self.moves
            .iter()
            .filter(move |a_move| a_move.move_type == move_type)
    }

    /// Returns all moves of the given category, in seed file order.
    pub fn moves_by_category(&self, category: MoveCategory) -> impl Iterator<Item = &Move> {
        self.moves
            .iter()
            .filter(move |a_move| a_move.category == category)
    }

    /// Returns the names of the moves in a Pokemon's learnset, including moves that are not in
    /// the move table.
    ///
    /// Pokemon without learnset data have an empty learnset.
    pub fn moves_for(&self, pokemon: &Pokemon) -> &[String] {
        self.pokemon_index
            .get(&name_key(&pokemon.name))
            .and_then(|id| self.learnsets.get(id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the moves in a Pokemon's learnset that are in the move table, in learnset order.
    pub fn known_moves_for(&self, pokemon: &Pokemon) -> impl Iterator<Item = &Move> {
        self.moves_for(pokemon)
            .iter()
            .filter_map(|move_name| self.find_move(move_name))
    }

    /// Returns the type chart.
    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn read_table<T, R>(reader: R, file_name: &str) -> crate::Result<Vec<T>>
where
    T: DeserializeOwned + Validate,
    R: io::Read,
{
    let rows: Vec<T> = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<_, _>>()
        .with_data_context(|| format!("failed to parse {}", file_name))?;

    for row in &rows {
        row.validate()
            .with_data_context(|| format!("invalid row in {}", file_name))?;
    }

    debug!("Read {} rows from {}", rows.len(), file_name);
    Ok(rows)
}

fn index_by_name<T, F>(
    items: &[T],
    name: F,
    entity: Entity,
) -> Result<HashMap<String, usize>, DataError>
where
    F: Fn(&T) -> &String,
{
    let mut index = HashMap::with_capacity(items.len());
    for (id, item) in items.iter().enumerate() {
        if index.insert(name_key(name(item)), id).is_some() {
            return Err(DataError::Inconsistent(format!("duplicate {} name: {}", entity, name(item))));
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::helpers::tests::test_dex;

    const POKEMON_CSV: &str = "Name,Type 1,Type 2\nCharizard,Fire,Flying\nPikachu,Electric,\n";
    const MOVES_CSV: &str = "Name,Type,Power,Accuracy,PP,Category,Description\n\
                             Flamethrower,Fire,90,100,15,Special,Burns.\n\
                             Thunderbolt,Electric,90,100,15,Special,Zaps.\n";
    const LEARNSETS_CSV: &str = "Pokemon,Move\nCharizard,Flamethrower\nCharizard,Body Press\n";
    const TYPE_CHART_CSV: &str = "Attacking,Defending,Multiplier\nElectric,Flying,2.0\n";

    fn load(pokemon: &str, moves: &str, learnsets: &str, type_chart: &str) -> crate::Result<Dex> {
        Dex::from_csv_readers(
            pokemon.as_bytes(),
            moves.as_bytes(),
            learnsets.as_bytes(),
            type_chart.as_bytes(),
        )
    }

    mod load_default {
        use super::*;

        #[test]
        fn test_all() {
            let dex = Dex::load_default().unwrap();

            assert_eq!(305, dex.all_pokemon().len());
            assert_eq!(142, dex.all_moves().len());
            assert_eq!("Bulbasaur", dex.all_pokemon()[0].name);
            assert_eq!(0.0, dex.type_chart().multiplier(PokemonType::Normal, PokemonType::Ghost));
            assert_eq!(2.0, dex.type_chart().multiplier(PokemonType::Water, PokemonType::Fire));
            assert_eq!(1.0, dex.type_chart().multiplier(PokemonType::Fire, PokemonType::Normal));
        }
    }

    mod load_from_dir {
        use std::path::PathBuf;

        use super::*;

        fn seed_dir() -> PathBuf {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("seed")
        }

        #[test]
        fn test_seed_dir() {
            let dex = Dex::load_from_dir(seed_dir()).unwrap();

            assert_eq!(test_dex().all_pokemon(), dex.all_pokemon());
            assert_eq!(test_dex().all_moves(), dex.all_moves());
            assert_eq!(test_dex().type_chart(), dex.type_chart());
        }

        #[test]
        fn test_missing_dir() {
            let result = Dex::load_from_dir(seed_dir().join("does-not-exist"));

            assert_matches!(result, Err(Error::Data { source: DataError::Io(_), .. }));
        }
    }

    mod load {
        use std::env;

        use serial_test::serial;

        use super::*;

        #[test]
        #[serial(advisor_data_dir_tests)]
        fn test_without_data_dir() {
            env::remove_var(DATA_DIR_ENV_VAR);

            let dex = Dex::load().unwrap();
            assert_eq!(305, dex.all_pokemon().len());
        }

        #[test]
        #[serial(advisor_data_dir_tests)]
        fn test_with_invalid_data_dir() {
            env::set_var(DATA_DIR_ENV_VAR, "/this/directory/does/not/exist");

            let result = Dex::load();
            env::remove_var(DATA_DIR_ENV_VAR);

            assert_matches!(result, Err(Error::Data { context, .. }) => {
                assert!(context.starts_with("failed to open"));
            });
        }
    }

    mod from_csv_readers {
        use super::*;

        #[test]
        fn test_valid() {
            let dex = load(POKEMON_CSV, MOVES_CSV, LEARNSETS_CSV, TYPE_CHART_CSV).unwrap();

            assert_eq!(2, dex.all_pokemon().len());
            assert_eq!(2.0, dex.type_chart().multiplier(PokemonType::Electric, PokemonType::Flying));
        }

        #[test]
        fn test_duplicate_pokemon() {
            let result = load(
                "Name,Type 1,Type 2\nPikachu,Electric,\npikachu,Electric,\n",
                MOVES_CSV,
                "Pokemon,Move\n",
                TYPE_CHART_CSV,
            );

            assert_matches!(result, Err(Error::Data { source: DataError::Inconsistent(msg), .. }) => {
                assert_eq!("duplicate Pokemon name: pikachu", msg);
            });
        }

        #[test]
        fn test_duplicate_move() {
            let result = load(
                POKEMON_CSV,
                "Name,Type,Power,Accuracy,PP,Category,Description\n\
                 Surf,Water,90,100,15,Special,Waves.\n\
                 Surf,Water,90,100,15,Special,Waves.\n",
                "Pokemon,Move\n",
                TYPE_CHART_CSV,
            );

            assert_matches!(result, Err(Error::Data { source: DataError::Inconsistent(msg), .. }) => {
                assert_eq!("duplicate move name: Surf", msg);
            });
        }

        #[test]
        fn test_unknown_learnset_pokemon() {
            let result = load(POKEMON_CSV, MOVES_CSV, "Pokemon,Move\nMew,Psychic\n", TYPE_CHART_CSV);

            assert_matches!(result, Err(Error::Data { context, source: DataError::Inconsistent(msg), .. }) => {
                assert_eq!("inconsistent data in learnsets.csv", context);
                assert_eq!("unknown Pokemon in learnset: Mew", msg);
            });
        }

        #[test]
        fn test_invalid_type() {
            let result = load("Name,Type 1,Type 2\nEevee,Cute,\n", MOVES_CSV, LEARNSETS_CSV, TYPE_CHART_CSV);

            assert_matches!(result, Err(Error::Data { context, source: DataError::Csv(_), .. }) => {
                assert_eq!("failed to parse pokemon.csv", context);
            });
        }

        #[test]
        fn test_invalid_multiplier() {
            let result = load(
                POKEMON_CSV,
                MOVES_CSV,
                LEARNSETS_CSV,
                "Attacking,Defending,Multiplier\nFire,Grass,3.0\n",
            );

            assert_matches!(result, Err(Error::Data { context, source: DataError::Validation(_), .. }) => {
                assert_eq!("invalid row in type_chart.csv", context);
            });
        }

        #[test]
        fn test_duplicate_type_chart_entry() {
            let result = load(
                POKEMON_CSV,
                MOVES_CSV,
                LEARNSETS_CSV,
                "Attacking,Defending,Multiplier\nFire,Grass,2.0\nFire,Grass,2.0\n",
            );

            assert_matches!(result, Err(Error::Data { source: DataError::Inconsistent(_), .. }));
        }
    }

    mod lookups {
        use super::*;

        #[test]
        fn test_pokemon_case_insensitive() {
            let dex = test_dex();

            assert_matches!(dex.pokemon("charizard"), Ok(pokemon) => {
                assert_eq!("Charizard", pokemon.name);
                assert_eq!(vec![PokemonType::Fire, PokemonType::Flying], pokemon.types);
            });
            assert_eq!(dex.find_pokemon(" GENGAR "), dex.find_pokemon("Gengar"));
        }

        #[test]
        fn test_pokemon_not_found() {
            assert_matches!(
                test_dex().pokemon("Agumon"),
                Err(Error::NotFound { entity: Entity::Pokemon, name, .. }) if name == "Agumon"
            );
        }

        #[test]
        fn test_move_info() {
            let dex = test_dex();

            assert_matches!(dex.move_info("flamethrower"), Ok(a_move) => {
                assert_eq!("Flamethrower", a_move.name);
                assert_eq!(PokemonType::Fire, a_move.move_type);
                assert_eq!(90, a_move.power);
            });
            assert_matches!(
                dex.move_info("Splash"),
                Err(Error::NotFound { entity: Entity::Move, .. })
            );
        }

        #[test]
        fn test_by_type_and_category() {
            let dex = test_dex();

            assert!(dex
                .pokemon_by_type(PokemonType::Dragon)
                .all(|pokemon| pokemon.types.contains(&PokemonType::Dragon)));
            assert!(dex
                .pokemon_by_type(PokemonType::Dragon)
                .any(|pokemon| pokemon.name == "Garchomp"));
            assert!(dex
                .moves_by_type(PokemonType::Fire)
                .all(|a_move| a_move.move_type == PokemonType::Fire));
            assert!(dex
                .moves_by_category(MoveCategory::Status)
                .all(|a_move| a_move.power == 0));
        }
    }

    mod learnsets {
        use super::*;

        #[test]
        fn test_moves_for() {
            let dex = test_dex();
            let charizard = dex.pokemon("Charizard").unwrap();

            assert_eq!(
                vec![
                    "Fire Blast",
                    "Flamethrower",
                    "Air Slash",
                    "Dragon Claw",
                    "Earthquake",
                    "Solar Beam"
                ],
                dex.moves_for(charizard)
            );
        }

        #[test]
        fn test_unknown_moves_are_skipped() {
            let dex = test_dex();
            let corviknight = dex.pokemon("Corviknight").unwrap();

            assert_eq!(6, dex.moves_for(corviknight).len());
            let known: Vec<_> = dex
                .known_moves_for(corviknight)
                .map(|a_move| a_move.name.as_str())
                .collect();
            assert_eq!(vec!["Brave Bird", "Iron Head", "U-turn", "Bulk Up", "Roost"], known);
        }

        #[test]
        fn test_no_learnset() {
            let dex = test_dex();
            let bulbasaur = dex.pokemon("Bulbasaur").unwrap();

            assert!(dex.moves_for(bulbasaur).is_empty());
            assert_eq!(0, dex.known_moves_for(bulbasaur).count());
        }

        #[test]
        fn test_small_tables() {
            let dex = load(POKEMON_CSV, MOVES_CSV, LEARNSETS_CSV, TYPE_CHART_CSV).unwrap();
            let charizard = dex.pokemon("Charizard").unwrap();

            assert_eq!(vec!["Flamethrower", "Body Press"], dex.moves_for(charizard));
            assert_eq!(1, dex.known_moves_for(charizard).count());
        }
    }
}
