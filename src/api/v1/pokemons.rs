//! Implementation of the advisor REST API endpoints for Pokemon.
//!
//! # Endpoints
//!
//! | HTTP method | Endpoint                             | Usage                                       | See                     |
//! |-------------|--------------------------------------|---------------------------------------------|-------------------------|
//! | `GET`       | `/api/v1/pokemons`                   | Lists Pokemon, paginated, optionally by type | [`list`]                |
//! | `GET`       | `/api/v1/pokemons/{name}`            | Returns one Pokemon, using its name         | [`get`](struct@get)     |
//! | `GET`       | `/api/v1/pokemons/{name}/coverage`   | Analyzes the type coverage of its moves     | [`coverage`]            |

use std::ops::Deref;
use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};
use actix_web::{get, HttpResponse};
use actix_web_validator::{Path, Query};
use log::trace;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::api::v1::doc::{InvalidQueryParamsResponse, PokemonNotFoundResponse, ServerErrorResponse};
use crate::api::HttpResult;
use crate::data::dex::Dex;
use crate::models::pokemon::Pokemon;
use crate::models::pokemon_type::PokemonType;
use crate::services::moves::MoveCoverage;
use crate::services::pokemon::PokemonsPage;
use crate::services::{moves, pokemon};

/// Allows registration of all Pokemon REST API endpoints.
///
/// See [module documentation](self) for the entire list of supported endpoints.
/// Called automatically from [`api::v1::configure`](crate::api::v1::configure).
pub fn configure(dex: &Arc<Dex>) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering Pokemon service app data");
        config
            .app_data(Data::new(pokemon::Service::new(dex.clone())))
            .app_data(Data::new(moves::Service::new(dex.clone())));

        trace!("Adding API endpoints for /api/v1/pokemons");
        config.service(list).service(coverage).service(get);
    }
}

/// Default value of the [`page_size`](ListParams::page_size) query parameter used when [listing Pokemon](list).
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Provides default value of the [`page_size`](ListParams::page_size) query parameter used when [listing Pokemon](list).
///
/// Provided because [`IntoParams`] needs a function to fetch a computed value; a constant does not work.
pub fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Path parameter used for endpoints with a Pokemon name ([`get`](struct@get) and [`coverage`]).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct Name {
    /// Name of the Pokemon (case-insensitive)
    #[validate(length(min = 1, max = 64))]
    #[param(example = "Charizard")]
    pub name: String,
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.name
    }
}

/// Query parameters for [list endpoint](list). Includes optional paging information and type filter.
///
/// See [`ListParams::default`] for the default values.
///
/// # Notes
///
/// Setting [`page_size`](ListParams::page_size) to a value greater than the [maximum](pokemon::Service::MAX_PAGE_SIZE)
/// will have no effect (the maximum value will be used instead).
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[serde(default, deny_unknown_fields)]
pub struct ListParams {
    /// Index of the page to fetch (1-based)
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 1)]
    pub page: i64,

    /// Number of Pokemon to return in each page
    #[validate(range(min = 1))]
    #[param(minimum = 1, maximum = 100, default = default_page_size)]
    pub page_size: i64,

    /// Only list Pokemon having this type
    #[serde(rename = "type")]
    #[param(inline)]
    pub pokemon_type: Option<PokemonType>,
}

impl Default for ListParams {
    /// Returns the default values of the query parameters passed to the API endpoint that [lists Pokemon](list).
    ///
    /// | Query parameter | Default value         |
    /// |-----------------|-----------------------|
    /// | `page`          | 1                     |
    /// | `page_size`     | [`DEFAULT_PAGE_SIZE`] |
    /// | `type`          | none                  |
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE, pokemon_type: None }
    }
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to list Pokemon in a paginated way.

        Registered as `GET /api/v1/pokemons`.

        # Input

        | Query parameter | Usage                                      |
        |-----------------|--------------------------------------------|
        | `page`          | Index of page to fetch (1-based)           |
        | `page_size`     | Number of Pokemon to include in each page  |
        | `type`          | Only list Pokemon having this type         |

        See [`ListParams::default`] for default values.

        # Output

        The endpoint returns a [`PokemonsPage`], serialized as JSON. This struct includes the list of
        [`Pokemon`]s in the page, as well as a [`total_pages`](PokemonsPage::total_pages) field that
        contains the total number of pages matching the filter.
    "
)]
#[cfg_attr(not(doc), doc = "Lists Pokemon in a paginated way")]
#[utoipa::path(
    context_path = "/api/v1/pokemons",
    params(ListParams),
    responses(
        (status = OK, response = PokemonsPage),
        InvalidQueryParamsResponse,
        ServerErrorResponse,
    ),
)]
#[get("", name = "/")]
pub async fn list(params: Query<ListParams>, service: Data<pokemon::Service>) -> HttpResult {
    let pokemons_page = service
        .get_ref()
        .get_pokemons(params.page, params.page_size, params.pokemon_type);

    Ok(HttpResponse::Ok().json(pokemons_page))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to fetch one Pokemon.

        Registered as `GET /api/v1/pokemons/{name}`.

        # Input

        - `{name}`: name of Pokemon to fetch (case-insensitive).

        # Output

        A [`Pokemon`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Returns information about a Pokemon")]
#[utoipa::path(
    context_path = "/api/v1/pokemons",
    params(Name),
    responses(
        (status = OK, response = Pokemon),
        PokemonNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[get("/{name}", name = "/{name}")]
pub async fn get(name: Path<Name>, service: Data<pokemon::Service>) -> HttpResult {
    let pokemon = service.get_ref().get_pokemon(&name)?;

    Ok(HttpResponse::Ok().json(pokemon))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to analyze the type coverage of a Pokemon's moves.

        Registered as `GET /api/v1/pokemons/{name}/coverage`.

        # Input

        - `{name}`: name of Pokemon to analyze (case-insensitive).

        # Output

        A [`MoveCoverage`], serialized as JSON. Pokemon without move data get an empty coverage
        with an explanatory [`message`](MoveCoverage::message).
    "
)]
#[cfg_attr(not(doc), doc = "Analyzes the type coverage of a Pokemon's moves")]
#[utoipa::path(
    context_path = "/api/v1/pokemons",
    params(Name),
    responses(
        (status = OK, response = MoveCoverage),
        PokemonNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[get("/{name}/coverage", name = "/{name}/coverage")]
pub async fn coverage(name: Path<Name>, service: Data<moves::Service>) -> HttpResult {
    let coverage = service.get_ref().analyze_move_coverage(&name)?;

    Ok(HttpResponse::Ok().json(coverage))
}
