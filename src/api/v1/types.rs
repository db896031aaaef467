//! Implementation of the advisor REST API endpoints for the type chart.
//!
//! # Endpoints
//!
//! | HTTP method | Endpoint                        | Usage                                             | See               |
//! |-------------|---------------------------------|---------------------------------------------------|-------------------|
//! | `GET`       | `/api/v1/types`                 | Lists the 18 types                                | [`list`]          |
//! | `GET`       | `/api/v1/types/chart`           | Returns the full type chart                       | [`chart`]         |
//! | `GET`       | `/api/v1/types/effectiveness`   | Computes the effectiveness of an attacking type   | [`effectiveness`] |

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};
use actix_web::{get, HttpResponse};
use actix_web_validator::Query;
use log::trace;
use serde::{Deserialize, Serialize};
use serde_with::formats::CommaSeparator;
use serde_with::{serde_as, StringWithSeparator};
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

use crate::api::v1::doc::{InvalidQueryParamsResponse, ServerErrorResponse};
use crate::api::HttpResult;
use crate::data::dex::Dex;
use crate::models::pokemon_type::PokemonType;
use crate::services::types;
use crate::services::types::TypeMatchup;

/// Allows registration of all type chart REST API endpoints.
///
/// See [module documentation](self) for the entire list of supported endpoints.
/// Called automatically from [`api::v1::configure`](crate::api::v1::configure).
pub fn configure(dex: &Arc<Dex>) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering types service app data");
        config.app_data(Data::new(types::Service::new(dex.clone())));

        trace!("Adding API endpoints for /api/v1/types");
        config.service(list).service(chart).service(effectiveness);
    }
}

/// Query parameters for [effectiveness endpoint](effectiveness).
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[serde(deny_unknown_fields)]
pub struct EffectivenessParams {
    /// Attacking type
    #[param(inline, example = "Rock")]
    pub attacking: PokemonType,

    /// Defending types, comma-separated (one or two distinct types)
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, PokemonType>")]
    #[validate(length(min = 1, max = 2), custom = "validate_defending_types")]
    #[param(value_type = String, example = "Fire,Flying")]
    pub defending: Vec<PokemonType>,
}

fn validate_defending_types(defending: &[PokemonType]) -> Result<(), ValidationError> {
    let distinct: HashSet<_> = defending.iter().collect();
    if distinct.len() == defending.len() {
        Ok(())
    } else {
        let mut err = ValidationError::new("duplicate_type");
        err.message = Some("defending types must be distinct".into());
        Err(err)
    }
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to list the 18 types.

        Registered as `GET /api/v1/types`.

        # Output

        The types, as a JSON array of strings in canonical order (`Normal` to `Fairy`).
    "
)]
#[cfg_attr(not(doc), doc = "Lists the 18 types")]
#[utoipa::path(
    context_path = "/api/v1/types",
    responses(
        (status = OK, body = Vec<PokemonType>, description = "The 18 types"),
        ServerErrorResponse,
    ),
)]
#[get("", name = "/")]
pub async fn list(service: Data<types::Service>) -> HttpResult {
    Ok(HttpResponse::Ok().json(service.get_ref().list_types()))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to fetch the full type chart.

        Registered as `GET /api/v1/types/chart`.

        # Output

        One [`TypeChartRow`](crate::data::type_chart::TypeChartRow) per attacking type, in canonical order, serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Returns the full type chart")]
#[utoipa::path(
    context_path = "/api/v1/types",
    responses(
        (status = OK, body = Vec<crate::data::type_chart::TypeChartRow>, description = "Type chart rows"),
        ServerErrorResponse,
    ),
)]
#[get("/chart", name = "/chart")]
pub async fn chart(service: Data<types::Service>) -> HttpResult {
    Ok(HttpResponse::Ok().json(service.get_ref().type_chart()))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to compute the combined effectiveness of an attacking type.

        Registered as `GET /api/v1/types/effectiveness`.

        # Input

        | Query parameter | Usage                                          |
        |-----------------|------------------------------------------------|
        | `attacking`     | Attacking type                                 |
        | `defending`     | One or two distinct defending types, comma-separated |

        # Output

        A [`TypeMatchup`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Computes the effectiveness of an attacking type")]
#[utoipa::path(
    context_path = "/api/v1/types",
    params(EffectivenessParams),
    responses(
        (status = OK, response = TypeMatchup),
        InvalidQueryParamsResponse,
        ServerErrorResponse,
    ),
)]
#[get("/effectiveness", name = "/effectiveness")]
pub async fn effectiveness(
    params: Query<EffectivenessParams>,
    service: Data<types::Service>,
) -> HttpResult {
    let matchup = service
        .get_ref()
        .effectiveness(params.attacking, &params.defending);

    Ok(HttpResponse::Ok().json(matchup))
}
