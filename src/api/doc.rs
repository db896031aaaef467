//! OpenAPI documentation support.

use actix_web::web::ServiceConfig;
use log::trace;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api::errors::ErrorResponse;
use crate::api::v1::teams::TeamRequest;
use crate::data::type_chart::{Effectiveness, TypeChartRow};
use crate::models::moves::{Move, MoveCategory};
use crate::models::pokemon::Pokemon;
use crate::models::pokemon_type::PokemonType;
use crate::services::matchup::{
    CounterPick, CounterTypes, Counters, MatchupAnalysis, MatchupVerdict, SideAnalysis,
    TypeDetail, TypeEffectiveness,
};
use crate::services::moves::{CoverageQuality, MoveAnalysis, MoveCoverage, MoveRecommendations};
use crate::services::pokemon::PokemonsPage;
use crate::services::team::{
    CoverageAnalysis, DiversityRating, MoveTypeGroup, PairSynergy, SynergyAnalysis, TeamAnalysis,
    TeamSuggestions, TypeAnalysis, TypeCount, TypeCoverage, TypeMembers, WeaknessAnalysis,
};
use crate::services::types::TypeMatchup;

/// Registers the various OpenAPI-related endpoints, like swagger UI.
///
/// Called automatically from [`configure_api`](crate::configure_api).
pub fn configure(config: &mut ServiceConfig) {
    trace!("Adding OpenAPI doc endpoints");

    let openapi = ApiDoc::openapi();
    config
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
        )
        .service(Redoc::with_url("/redoc", openapi.clone()))
        .service(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"));
}

/// API documentation in OpenAPI format.
///
/// Generated automatically by the [`utoipa`] crate. To use, simply call [`ApiDoc::openapi`]
/// to create an instance, then pass it to the various helpers that allow the API doc to be
/// published, like [`SwaggerUi`].
#[derive(OpenApi)]
#[openapi(
    paths(
        api::v1::pokemons::list,
        api::v1::pokemons::get,
        api::v1::pokemons::coverage,
        api::v1::types::list,
        api::v1::types::chart,
        api::v1::types::effectiveness,
        api::v1::matchups::analyze,
        api::v1::matchups::counters,
        api::v1::matchups::counter_types,
        api::v1::moves::list,
        api::v1::moves::get,
        api::v1::moves::recommendations,
        api::v1::teams::analysis,
        api::v1::teams::suggestions,
    ),
    components(
        schemas(
            Pokemon,
            PokemonType,
            Move,
            MoveCategory,
            TypeChartRow,
            Effectiveness,
            TypeMatchup,
            MatchupVerdict,
            TypeDetail,
            SideAnalysis,
            MatchupAnalysis,
            CounterPick,
            Counters,
            TypeEffectiveness,
            CounterTypes,
            MoveAnalysis,
            MoveRecommendations,
            CoverageQuality,
            MoveCoverage,
            TeamRequest,
            DiversityRating,
            TypeCount,
            TypeMembers,
            MoveTypeGroup,
            TypeCoverage,
            TypeAnalysis,
            CoverageAnalysis,
            WeaknessAnalysis,
            PairSynergy,
            SynergyAnalysis,
            TeamAnalysis,
            TeamSuggestions,
        ),
        responses(
            PokemonsPage,
            Pokemon,
            Move,
            MoveCoverage,
            TypeMatchup,
            MatchupAnalysis,
            Counters,
            CounterTypes,
            MoveRecommendations,
            TeamAnalysis,
            TeamSuggestions,
            ErrorResponse,
        ),
    )
)]
pub struct ApiDoc;
