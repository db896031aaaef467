//! Implementation of the advisor REST API endpoints for teams.
//!
//! Teams are not stored: each request carries the full list of members.
//!
//! # Endpoints
//!
//! | HTTP method | Endpoint                     | Usage                                  | See             |
//! |-------------|------------------------------|----------------------------------------|-----------------|
//! | `POST`      | `/api/v1/teams/analysis`     | Analyzes a team                        | [`analysis`]    |
//! | `POST`      | `/api/v1/teams/suggestions`  | Suggests Pokemon to add to a team      | [`suggestions`] |

use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};
use actix_web::{post, HttpResponse};
use actix_web_validator::Json;
use log::trace;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::v1::doc::{InvalidTeamBodyResponse, PokemonNotFoundResponse, ServerErrorResponse};
use crate::api::HttpResult;
use crate::data::dex::Dex;
use crate::services::team;
use crate::services::team::{TeamAnalysis, TeamSuggestions};

/// Allows registration of all team REST API endpoints.
///
/// See [module documentation](self) for the entire list of supported endpoints.
/// Called automatically from [`api::v1::configure`](crate::api::v1::configure).
pub fn configure(dex: &Arc<Dex>) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering team service app data");
        config.app_data(Data::new(team::Service::new(dex.clone())));

        trace!("Adding API endpoints for /api/v1/teams");
        config.service(analysis).service(suggestions);
    }
}

/// Request body of the team endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
#[schema(example = json!({ "members": ["Charizard", "Blastoise", "Venusaur"] }))]
pub struct TeamRequest {
    /// Names of the team members, in order (at most 6)
    #[validate(length(max = 6))]
    #[schema(max_items = 6)]
    pub members: Vec<String>,
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to analyze a team.

        Registered as `POST /api/v1/teams/analysis`.

        # Input

        - Request body: the team, as a JSON-serialized [`TeamRequest`]. The team must have between
                        1 and 6 distinct members.

        # Output

        A [`TeamAnalysis`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Analyzes a team")]
#[utoipa::path(
    context_path = "/api/v1/teams",
    request_body(
        content = inline(TeamRequest),
        description = "Team members",
    ),
    responses(
        (status = OK, response = TeamAnalysis),
        InvalidTeamBodyResponse,
        PokemonNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[post("/analysis", name = "/analysis")]
pub async fn analysis(team: Json<TeamRequest>, service: Data<team::Service>) -> HttpResult {
    let analysis = service.get_ref().analyze_team(&team.members)?;

    Ok(HttpResponse::Ok().json(analysis))
}

#[cfg_attr(
    doc,
    doc = r"
        API endpoint to suggest Pokemon to add to a team.

        Registered as `POST /api/v1/teams/suggestions`.

        # Input

        - Request body: the team, as a JSON-serialized [`TeamRequest`]. An empty team gets a
                        balanced set of starters.

        # Output

        [`TeamSuggestions`], serialized as JSON.
    "
)]
#[cfg_attr(not(doc), doc = "Suggests Pokemon to add to a team")]
#[utoipa::path(
    context_path = "/api/v1/teams",
    request_body(
        content = inline(TeamRequest),
        description = "Team members",
    ),
    responses(
        (status = OK, response = TeamSuggestions),
        InvalidTeamBodyResponse,
        PokemonNotFoundResponse,
        ServerErrorResponse,
    ),
)]
#[post("/suggestions", name = "/suggestions")]
pub async fn suggestions(team: Json<TeamRequest>, service: Data<team::Service>) -> HttpResult {
    let suggestions = service.get_ref().suggest_pokemon(&team.members)?;

    Ok(HttpResponse::Ok().json(suggestions))
}
