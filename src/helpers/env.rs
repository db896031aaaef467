//! Reading the advisor configuration from the environment.

use std::env;
use std::num::ParseIntError;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::error::{EnvVarContext, EnvVarError};

/// Loads the project `.env` file if there is one.
///
/// Returns `Ok(false)` when there is no `.env` file; a file that exists but cannot be parsed
/// is an error.
pub fn load_optional_dotenv() -> dotenvy::Result<bool> {
    match dotenv() {
        Ok(_) => Ok(true),
        Err(err) if err.not_found() => Ok(false),
        Err(err) => Err(err),
    }
}

/// Reads an integer environment variable (`HTTP_PORT`, `ADVISOR_WORKERS`).
///
/// ```no_run
/// use poke_advisor::error::EnvVarError;
/// use poke_advisor::helpers::env::int_env_var;
///
/// match int_env_var::<u16>("HTTP_PORT") {
///     Ok(port) => println!("port {}", port),
///     Err(EnvVarError::NotFound) => println!("default port"),
///     Err(err) => eprintln!("bad HTTP_PORT: {}", err),
/// }
/// ```
pub fn int_env_var<T>(key: &str) -> Result<T, EnvVarError>
where
    T: FromStr<Err = ParseIntError>,
{
    let value = env::var(key)?;
    value
        .parse()
        .map_err(|source| EnvVarError::IntExpected { value, source })
}

/// Reads an environment variable that may be left unset (`ADVISOR_DATA_DIR`, `ADVISOR_ENV`).
pub fn optional_env_var(key: &str) -> crate::Result<Option<String>> {
    match env::var(key).map_err(EnvVarError::from) {
        Ok(value) => Ok(Some(value)),
        Err(EnvVarError::NotFound) => Ok(None),
        Err(err) => {
            Err(err.with_env_var_context(|| format!("failed to read environment variable {}", key)))
        },
    }
}

/// Integer version of [`optional_env_var`]. A set but unparsable value is still an error.
pub fn optional_int_env_var<T>(key: &str) -> crate::Result<Option<T>>
where
    T: FromStr<Err = ParseIntError>,
{
    match int_env_var(key) {
        Ok(value) => Ok(Some(value)),
        Err(EnvVarError::NotFound) => Ok(None),
        Err(err) => {
            Err(err.with_env_var_context(|| format!("failed to parse environment variable {}", key)))
        },
    }
}
