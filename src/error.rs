//! Advisor errors, plus the context traits used to build them.

use std::env;
use std::ffi::OsString;
use std::num::ParseIntError;

use strum_macros::Display;

/// Result of advisor operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Any error the advisor can report.
///
/// The API maps each variant to an HTTP status (see [`api::errors`](crate::api::errors)).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration variable (`ADVISOR_DATA_DIR`, `HTTP_PORT`, ...) is missing or unreadable.
    #[error("error related to environment variable: {context}")]
    EnvVar {
        /// What was being configured (see [`EnvVarContext`]).
        context: String,

        /// What went wrong with the variable.
        source: EnvVarError,

        /// Where the error was raised (empty unless `RUST_BACKTRACE` is set).
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },

    /// A request could not be extracted: malformed JSON or query string, or failed validation.
    #[error("input parsing error")]
    Input {
        /// Extractor error.
        #[from]
        source: actix_web_validator::error::Error,

        /// Where the error was raised (empty unless `RUST_BACKTRACE` is set).
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },

    /// Error that occurred while loading the static advisor tables (see [`Dex`](crate::data::dex::Dex)).
    #[error("data error: {context}")]
    Data {
        /// Data error context.
        ///
        /// Used by the code (via [`DataContext::with_data_context`]) to indicate which
        /// table or file was being loaded.
        context: String,

        /// Source of the data error.
        source: DataError,

        /// Where the error was raised (empty unless `RUST_BACKTRACE` is set).
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },

    /// A Pokemon or move name was not found in the static tables.
    #[error("{entity} not found: {name}")]
    NotFound {
        /// Kind of entity that was looked up.
        entity: Entity,

        /// Name used for the lookup, as provided by the caller.
        name: String,

        /// Where the error was raised (empty unless `RUST_BACKTRACE` is set).
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },

    /// A matchup was requested between a Pokemon and itself.
    #[error("{name} cannot be matched against itself")]
    SameMatchup {
        /// Name of the Pokemon on both sides of the matchup.
        name: String,

        /// Where the error was raised (empty unless `RUST_BACKTRACE` is set).
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },

    /// A team building rule was violated (see [`Team`](crate::services::team::Team)).
    #[error("team error")]
    Team {
        /// The violated rule.
        #[from]
        source: TeamError,

        /// Where the error was raised (empty unless `RUST_BACKTRACE` is set).
        #[cfg(backtrace_support)]
        backtrace: std::backtrace::Backtrace,
    },
}

impl Error {
    /// Creates a [`NotFound`](Error::NotFound) error for the given entity name.
    pub fn not_found<N>(entity: Entity, name: N) -> Self
    where
        N: Into<String>,
    {
        Self::NotFound {
            entity,
            name: name.into(),
            #[cfg(backtrace_support)]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    /// Creates a [`SameMatchup`](Error::SameMatchup) error for the given Pokemon name.
    pub fn same_matchup<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self::SameMatchup {
            name: name.into(),
            #[cfg(backtrace_support)]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

/// Kinds of entities stored in the static tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Entity {
    /// A Pokemon species.
    Pokemon,

    /// A move.
    #[strum(serialize = "move")]
    Move,
}

/// Problem with the value of an environment variable.
///
/// Extends [`VarError`](env::VarError) with parsing failures.
#[derive(Debug, thiserror::Error)]
pub enum EnvVarError {
    /// Not set.
    #[error("variable not found in environment")]
    NotFound,

    /// Set, but not valid Unicode.
    #[error("variable contained invalid, non-Unicode characters")]
    NotUnicode(OsString),

    /// Set, but not a valid integer (ports, worker counts).
    #[error("expected int value, found {value}")]
    IntExpected {
        /// Raw value of the variable.
        value: String,

        /// Why the value was rejected.
        source: ParseIntError,
    },
}

impl From<env::VarError> for EnvVarError {
    fn from(value: env::VarError) -> Self {
        match value {
            env::VarError::NotPresent => Self::NotFound,
            env::VarError::NotUnicode(os_str) => Self::NotUnicode(os_str),
        }
    }
}

/// Error type used for problems found while loading the static tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A seed file could not be read.
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),

    /// A seed file is not valid CSV, or a row does not match the expected columns.
    #[error("failed to parse CSV data")]
    Csv(#[from] csv::Error),

    /// A row was parsed but failed validation.
    #[error("invalid row")]
    Validation(#[from] validator::ValidationErrors),

    /// Rows are individually valid but inconsistent with each other (duplicates, dangling references).
    #[error("{0}")]
    Inconsistent(String),
}

/// Errors raised when a team building rule is violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    /// The team already has the maximum number of members.
    #[error("team is already full ({max} Pokemon maximum)")]
    Full {
        /// Maximum team size.
        max: usize,
    },

    /// The Pokemon is already part of the team.
    #[error("{0} is already in the team")]
    Duplicate(String),

    /// The Pokemon to remove is not part of the team.
    #[error("{0} is not in the team")]
    NotInTeam(String),

    /// The team has no members, so it cannot be analyzed.
    #[error("no Pokemon in team to analyze")]
    Empty,
}

/// Wraps environment variable failures into [`Error::EnvVar`].
///
/// Implemented for anything convertible into [`EnvVarError`] and for results holding one.
pub trait EnvVarContext {
    /// [`Error`] or [`Result`].
    type Output;

    /// Attaches a description of the variable being read. `context` is only called on error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::env;
    ///
    /// use poke_advisor::error::EnvVarContext;
    ///
    /// # fn example() -> poke_advisor::Result<()> {
    /// let data_dir = env::var("ADVISOR_DATA_DIR")
    ///     .with_env_var_context(|| "ADVISOR_DATA_DIR environment variable should be set")?;
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn with_env_var_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<E> EnvVarContext for E
where
    E: Into<EnvVarError>,
{
    type Output = Error;

    fn with_env_var_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        Error::EnvVar {
            context: context().into(),
            source: self.into(),
            #[cfg(backtrace_support)]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl<T, E> EnvVarContext for core::result::Result<T, E>
where
    E: EnvVarContext<Output = Error>,
{
    type Output = Result<T>;

    fn with_env_var_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.with_env_var_context(context))
    }
}

/// Wraps table loading failures into [`Error::Data`], like [`EnvVarContext`] does for variables.
pub trait DataContext {
    /// [`Error`] or [`Result`].
    type Output;

    /// Provides context about the table being loaded when the error occurred.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::fs::File;
    ///
    /// use poke_advisor::error::DataContext;
    ///
    /// # fn example() -> poke_advisor::Result<()> {
    /// let file = File::open("seed/pokemon.csv")
    ///     .with_data_context(|| "failed to open Pokemon seed file")?;
    /// #
    /// # Ok(())
    /// # }
    /// ```
    fn with_data_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<E> DataContext for E
where
    E: Into<DataError>,
{
    type Output = Error;

    fn with_data_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        Error::Data {
            context: context().into(),
            source: self.into(),
            #[cfg(backtrace_support)]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl<T, E> DataContext for core::result::Result<T, E>
where
    E: DataContext<Output = Error>,
{
    type Output = Result<T>;

    fn with_data_context<C, F>(self, context: F) -> Self::Output
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.with_data_context(context))
    }
}
