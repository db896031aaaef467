//! Implementation of the advisor REST API endpoints for matchups.
//!
//! # Endpoints
//!
//! | HTTP method | Endpoint                              | Usage                                           | See               |
//! |-------------|---------------------------------------|-------------------------------------------------|-------------------|
//! | `GET`       | `/api/v1/matchups`                    | Analyzes the matchup between two Pokemon        | [`analyze`]       |
//! | `GET`       | `/api/v1/matchups/counters`           | Ranks the Pokemon that fare best vs an opponent | [`counters`]      |
//! | `GET`       | `/api/v1/matchups/counter-types`      | Lists types super-effective vs an opponent      | [`counter_types`] |

use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};
use actix_web::{get, HttpResponse};
use actix_web_validator::Query;
use log::trace;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::api::v1::doc::{
    InvalidMatchupResponse, InvalidQueryParamsResponse, PokemonNotFoundResponse,
    ServerErrorResponse,
};
use crate::api::HttpResult;
use crate::data::dex::Dex;
use crate::services::matchup;
use crate::services::matchup::{CounterTypes, Counters, MatchupAnalysis, DEFAULT_COUNTERS_LIMIT};

/// Allows registration of all matchup REST API endpoints.
///
/// See [module documentation](self) for the entire list of supported endpoints.
/// Called automatically from [`api::v1::configure`](crate::api::v1::configure).
pub fn configure(dex: &Arc<Dex>) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering matchup service app data");
        config.app_data(Data::new(matchup::Service::new(dex.clone())));

        trace!("Adding API endpoints for /api/v1/matchups");
        config
            .service(analyze)
            .service(counters)
            .service(counter_types);
    }
}

/// Provides default value of the [`limit`](CountersParams::limit) query parameter used when [finding counters](counters).
///
/// Provided because [`IntoParams`] needs a function to fetch a computed value; a constant does not work.
pub fn default_counters_limit() -> usize {
    DEFAULT_COUNTERS_LIMIT
}

/// Query parameters for [matchup analysis endpoint](analyze).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[serde(deny_unknown_fields)]
pub struct MatchupParams {
    /// Name of your Pokemon
    #[validate(length(min = 1, max = 64))]
    #[param(example = "Garchomp")]
    pub your: String,

    /// Name of the opponent's Pokemon
    #[validate(length(min = 1, max = 64))]
    #[param(example = "Pikachu")]
    pub opponent: String,
}

/// Query parameters for [counters endpoint](counters).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[serde(deny_unknown_fields)]
pub struct CountersParams {
    /// Name of the opponent's Pokemon
    #[validate(length(min = 1, max = 64))]
    #[param(example = "Charizard")]
    pub opponent: String,

    /// Maximum number of counters to return
    #[serde(default = "default_counters_limit")]
    #[validate(range(min = 1, max = 50))]
    #[param(minimum = 1, maximum = 50, default = default_counters_limit)]
    pub limit: usize,
}

/// Query parameters for [counter types endpoint](counter_types).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[serde(deny_unknown_fields)]
pub struct OpponentParams {
    /// Name of the opponent's Pokemon
    #[validate(length(min = 1, max = 64))]
    #[param(example = "Charizard")]
    pub opponent: String,
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to analyze the matchup between two Pokemon.

        Registered as `GET /api/v1/matchups`.

        # Input

        | Query parameter | Usage                          |
        |-----------------|--------------------------------|
        | `your`          | Name of your Pokemon           |
        | `opponent`      | Name of the opponent's Pokemon |

        Names are case-insensitive. Using the same Pokemon on both sides is rejected.

        # Output

        A [`MatchupAnalysis`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Analyzes the matchup between two Pokemon")]
#[utoipa::path(
    context_path = "/api/v1/matchups",
    params(MatchupParams),
    responses(
        (status = OK, response = MatchupAnalysis),
        InvalidMatchupResponse,
        PokemonNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[get("", name = "/")]
pub async fn analyze(params: Query<MatchupParams>, service: Data<matchup::Service>) -> HttpResult {
    let analysis = service
        .get_ref()
        .analyze_matchup(&params.your, &params.opponent)?;

    Ok(HttpResponse::Ok().json(analysis))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to rank the Pokemon that fare best against an opponent.

        Registered as `GET /api/v1/matchups/counters`.

        # Input

        | Query parameter | Usage                                        |
        |-----------------|----------------------------------------------|
        | `opponent`      | Name of the opponent's Pokemon               |
        | `limit`         | Maximum number of counters (1 to 50, default 10) |

        # Output

        [`Counters`], serialized as JSON. Picks are sorted by damage dealt (best first), then by
        damage taken (least first), then by name.
    "
)]
#[cfg_attr(not(doc), doc = "Ranks the Pokemon that fare best against an opponent")]
#[utoipa::path(
    context_path = "/api/v1/matchups",
    params(CountersParams),
    responses(
        (status = OK, response = Counters),
        InvalidQueryParamsResponse,
        PokemonNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[get("/counters", name = "/counters")]
pub async fn counters(params: Query<CountersParams>, service: Data<matchup::Service>) -> HttpResult {
    let counters = service
        .get_ref()
        .find_counters(&params.opponent, params.limit)?;

    Ok(HttpResponse::Ok().json(counters))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to list the attacking types that are super-effective against an opponent.

        Registered as `GET /api/v1/matchups/counter-types`.

        # Input

        - `opponent` query parameter: name of the opponent's Pokemon.

        # Output

        [`CounterTypes`], serialized as JSON, most effective types first.
    "
)]
#[cfg_attr(not(doc), doc = "Lists attacking types that are super-effective against an opponent")]
#[utoipa::path(
    context_path = "/api/v1/matchups",
    params(OpponentParams),
    responses(
        (status = OK, response = CounterTypes),
        InvalidQueryParamsResponse,
        PokemonNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[get("/counter-types", name = "/counter-types")]
pub async fn counter_types(
    params: Query<OpponentParams>,
    service: Data<matchup::Service>,
) -> HttpResult {
    let counter_types = service.get_ref().counter_types(&params.opponent)?;

    Ok(HttpResponse::Ok().json(counter_types))
}
