//! Library crate of the Pokemon type matchup advisor.
//!
//! The advisor loads static tables (Pokemon, moves, learnsets and the type chart) into a
//! [`Dex`](data::dex::Dex), then answers questions about them: how well one Pokemon fares against
//! another, which moves to use, and how balanced a team is. Answers are exposed through a REST API
//! (see [`configure_api`] and the [`advisor_app`] macro) and through the `advise` command-line tool.
//!
//! For more information, see `README.md`.

#![cfg_attr(backtrace_support, feature(error_generic_member_access))]
#![warn(missing_docs)]

pub mod api;
pub mod data;
pub mod error;
pub mod helpers;
pub mod models;
pub mod report;
pub mod service_env;
pub mod services;

use std::sync::Arc;

use actix_web::web;
use actix_web::web::ServiceConfig;
use actix_web_validator::{JsonConfig, PathConfig, QueryConfig};
pub use error::Error;
pub use error::Result;
use log::trace;

use crate::api::errors::actix_error_handler;
use crate::data::dex::Dex;

/// Creates an [`App`](actix_web::App) serving the advisor API for a shared [`Dex`].
///
/// The app logs requests using actix's [`Logger`](actix_web::middleware::Logger) middleware and
/// registers every endpoint through [`configure_api`].
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use actix_web::HttpServer;
/// use poke_advisor::advisor_app;
/// use poke_advisor::data::dex::Dex;
///
/// # async fn example() -> anyhow::Result<()> {
/// let dex = Arc::new(Dex::load()?);
/// HttpServer::new(move || advisor_app!(dex))
///     .bind(("127.0.0.1", 8080))?
///     .run()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! advisor_app {
    ($dex:expr) => {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .configure($crate::configure_api(&$dex))
    };
}

/// Registers the advisor API endpoints under `/api`, along with the OpenAPI doc endpoints.
///
/// Also registers the [`actix_web_validator`] configs so that input errors are reported through
/// [`actix_error_handler`].
pub fn configure_api(dex: &Arc<Dex>) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering input validation configs");
        config
            .app_data(JsonConfig::default().error_handler(actix_error_handler))
            .app_data(PathConfig::default().error_handler(actix_error_handler))
            .app_data(QueryConfig::default().error_handler(actix_error_handler));

        trace!("Adding API endpoints");
        config
            .service(web::scope("/api").configure(api::configure(dex)))
            .configure(api::doc::configure);
    }
}
