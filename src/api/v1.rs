//! Current version (`v1`) of the advisor REST API.

pub mod doc;
pub mod matchups;
pub mod moves;
pub mod pokemons;
pub mod teams;
pub mod types;

use std::sync::Arc;

use actix_web::web;
use actix_web::web::ServiceConfig;
use log::trace;

use crate::data::dex::Dex;

/// Allows registration of every `v1` scope (`/pokemons`, `/types`, `/matchups`, `/moves` and `/teams`).
///
/// Called automatically from [`api::configure`](crate::api::configure).
pub fn configure(dex: &Arc<Dex>) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Adding API endpoints for /api/v1");
        config
            .service(web::scope("/pokemons").configure(pokemons::configure(dex)))
            .service(web::scope("/types").configure(types::configure(dex)))
            .service(web::scope("/matchups").configure(matchups::configure(dex)))
            .service(web::scope("/moves").configure(moves::configure(dex)))
            .service(web::scope("/teams").configure(teams::configure(dex)));
    }
}
