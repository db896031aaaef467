//! Runtime environment of the advisor (development or production).

// Unfortunately, strum's `EnumIs` generates undocumented methods
#![allow(missing_docs)]

use std::sync::RwLock;

use log::warn;
use once_cell::sync::Lazy;
use strum_macros::{AsRefStr, Display, EnumIs, EnumString};

use crate::helpers::env::optional_env_var;

/// Environment variable selecting the [`ServiceEnv`].
pub const SERVICE_ENV_VAR: &str = "ADVISOR_ENV";

/// Environment the advisor runs in.
///
/// Read once from [`ADVISOR_ENV`](SERVICE_ENV_VAR); see [`current`](ServiceEnv::current).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, AsRefStr, Display, EnumIs, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ServiceEnv {
    /// Local development.
    ///
    /// API error responses carry the full internal error chain (see
    /// [`ErrorResponse`](crate::api::errors::ErrorResponse)) and the server logs its backtrace
    /// support at startup.
    Development,

    /// Deployed service. Internal errors are never described to callers.
    #[default]
    Production,
}

impl ServiceEnv {
    /// Returns the environment the advisor runs in.
    ///
    /// The value is read on first call and cached. A missing, unreadable or unknown
    /// `ADVISOR_ENV` value means [`Production`](ServiceEnv::Production).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use log::info;
    /// use poke_advisor::service_env::ServiceEnv;
    ///
    /// info!("Advisor is running in {}", ServiceEnv::current());
    /// ```
    pub fn current() -> Self {
        static CURRENT_ENV: Lazy<ServiceEnv> = Lazy::new(ServiceEnv::reload);

        if cfg!(test) {
            if let Some(overridden) = TEST_ENV.read().ok().and_then(|test_env| *test_env) {
                return overridden;
            }
        }

        *CURRENT_ENV
    }

    /// Reads the environment from `ADVISOR_ENV` again, bypassing the cache used by
    /// [`current`](ServiceEnv::current).
    pub fn reload() -> Self {
        match optional_env_var(SERVICE_ENV_VAR) {
            Ok(Some(value)) => Self::parse_or_default(&value),
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("{}; using {}", err, Self::default());
                Self::default()
            },
        }
    }

    fn parse_or_default(value: &str) -> Self {
        value.trim().parse().unwrap_or_else(|_| {
            warn!("unknown {} value {:?}; using {}", SERVICE_ENV_VAR, value, Self::default());
            Self::default()
        })
    }

    /// Makes [`current`](ServiceEnv::current) return `env` until the returned guard is dropped.
    #[cfg(test)]
    pub fn override_for_test(env: ServiceEnv) -> TestEnvGuard {
        let mut test_env = TEST_ENV.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = test_env.replace(env);

        TestEnvGuard { previous }
    }
}

static TEST_ENV: RwLock<Option<ServiceEnv>> = RwLock::new(None);

/// Restores the previous test environment on drop (see [`ServiceEnv::override_for_test`]).
#[cfg(test)]
#[derive(Debug)]
pub struct TestEnvGuard {
    previous: Option<ServiceEnv>,
}

#[cfg(test)]
impl Drop for TestEnvGuard {
    fn drop(&mut self) {
        let mut test_env = TEST_ENV.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *test_env = self.previous;
    }
}
