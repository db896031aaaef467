//! Implementation of the advisor REST API endpoints for moves.
//!
//! # Endpoints
//!
//! | HTTP method | Endpoint                           | Usage                                              | See                 |
//! |-------------|------------------------------------|----------------------------------------------------|---------------------|
//! | `GET`       | `/api/v1/moves`                    | Lists moves, optionally by type and/or category    | [`list`]            |
//! | `GET`       | `/api/v1/moves/recommendations`    | Recommends moves for an attacker vs a defender     | [`recommendations`] |
//! | `GET`       | `/api/v1/moves/{name}`             | Returns one move, using its name                   | [`get`](struct@get) |

use std::ops::Deref;
use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};
use actix_web::{get, HttpResponse};
use actix_web_validator::{Path, Query};
use log::trace;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::api::v1::doc::{
    InvalidQueryParamsResponse, MoveNotFoundResponse, PokemonNotFoundResponse, ServerErrorResponse,
};
use crate::api::HttpResult;
use crate::data::dex::Dex;
use crate::models::moves::{Move, MoveCategory};
use crate::models::pokemon_type::PokemonType;
use crate::services::moves;
use crate::services::moves::MoveRecommendations;

/// Allows registration of all move REST API endpoints.
///
/// See [module documentation](self) for the entire list of supported endpoints.
/// Called automatically from [`api::v1::configure`](crate::api::v1::configure).
pub fn configure(dex: &Arc<Dex>) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering moves service app data");
        config.app_data(Data::new(moves::Service::new(dex.clone())));

        trace!("Adding API endpoints for /api/v1/moves");
        config
            .service(list)
            .service(recommendations)
            .service(get);
    }
}

/// Path parameter used for the [`get`](struct@get) endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct MoveName {
    /// Name of the move (case-insensitive)
    #[validate(length(min = 1, max = 64))]
    #[param(example = "Thunderbolt")]
    pub name: String,
}

impl Deref for MoveName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.name
    }
}

/// Query parameters for [list endpoint](list). Both filters are optional.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[serde(default, deny_unknown_fields)]
pub struct ListParams {
    /// Only list moves of this type
    #[serde(rename = "type")]
    #[param(inline)]
    pub move_type: Option<PokemonType>,

    /// Only list moves of this category
    #[param(inline)]
    pub category: Option<MoveCategory>,
}

/// Query parameters for [recommendations endpoint](recommendations).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[serde(deny_unknown_fields)]
pub struct RecommendationParams {
    /// Name of the attacking Pokemon
    #[validate(length(min = 1, max = 64))]
    #[param(example = "Pikachu")]
    pub attacker: String,

    /// Name of the defending Pokemon
    #[validate(length(min = 1, max = 64))]
    #[param(example = "Gyarados")]
    pub defender: String,
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to list moves.

        Registered as `GET /api/v1/moves`.

        # Input

        | Query parameter | Usage                                            |
        |-----------------|--------------------------------------------------|
        | `type`          | Only list moves of this type                     |
        | `category`      | Only list moves of this category (`Physical`, `Special` or `Status`) |

        # Output

        A JSON array of [`Move`]s, in seed file order.
    "
)]
#[cfg_attr(not(doc), doc = "Lists moves")]
#[utoipa::path(
    context_path = "/api/v1/moves",
    params(ListParams),
    responses(
        (status = OK, body = Vec<Move>, description = "Matching moves"),
        InvalidQueryParamsResponse,
        ServerErrorResponse,
    ),
)]
#[get("", name = "/")]
pub async fn list(params: Query<ListParams>, service: Data<moves::Service>) -> HttpResult {
    let moves = service
        .get_ref()
        .list_moves(params.move_type, params.category);

    Ok(HttpResponse::Ok().json(moves))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to fetch one move.

        Registered as `GET /api/v1/moves/{name}`.

        # Input

        - `{name}`: name of move to fetch (case-insensitive).

        # Output

        A [`Move`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Returns information about a move")]
#[utoipa::path(
    context_path = "/api/v1/moves",
    params(MoveName),
    responses(
        (status = OK, response = Move),
        MoveNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[get("/{name}", name = "/{name}")]
pub async fn get(name: Path<MoveName>, service: Data<moves::Service>) -> HttpResult {
    let a_move = service.get_ref().get_move(&name)?;

    Ok(HttpResponse::Ok().json(a_move))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to recommend moves for an attacker against a defender.

        Registered as `GET /api/v1/moves/recommendations`.

        # Input

        | Query parameter | Usage                          |
        |-----------------|--------------------------------|
        | `attacker`      | Name of the attacking Pokemon  |
        | `defender`      | Name of the defending Pokemon  |

        # Output

        [`MoveRecommendations`], serialized as JSON. If the attacker has no move data, the
        recommendations are empty and [`message`](MoveRecommendations::message) explains why.
    "
)]
#[cfg_attr(not(doc), doc = "Recommends moves for an attacker against a defender")]
#[utoipa::path(
    context_path = "/api/v1/moves",
    params(RecommendationParams),
    responses(
        (status = OK, response = MoveRecommendations),
        InvalidQueryParamsResponse,
        PokemonNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[get("/recommendations", name = "/recommendations")]
pub async fn recommendations(
    params: Query<RecommendationParams>,
    service: Data<moves::Service>,
) -> HttpResult {
    let recommendations = service
        .get_ref()
        .recommend_moves(&params.attacker, &params.defender)?;

    Ok(HttpResponse::Ok().json(recommendations))
}
