//! [`IntoResponses`] wrappers for advisor REST API endpoints.
//!
//! These helper types are used to document the possible API responses using [`utoipa::path`].

use utoipa::IntoResponses;

use crate::api::errors::ErrorResponse;

/// [`IntoResponses`] wrapper for bad query parameter errors.
///
/// Can be used to document 400 API error responses using [`utoipa::path`].
#[derive(Debug, IntoResponses)]
#[response(status = BAD_REQUEST, description = "Invalid query parameters")]
pub struct InvalidQueryParamsResponse;

/// [`IntoResponses`] wrapper for bad matchup errors.
///
/// Can be used to document 400 API error responses using [`utoipa::path`].
#[derive(Debug, IntoResponses)]
#[response(
    status = BAD_REQUEST,
    description = "Invalid query parameters OR same Pokemon on both sides of the matchup",
)]
pub struct InvalidMatchupResponse;

/// [`IntoResponses`] wrapper for bad team request body errors.
///
/// Can be used to document 400 API error responses using [`utoipa::path`].
#[derive(Debug, IntoResponses)]
#[response(
    status = BAD_REQUEST,
    description = "Invalid team in request body (empty, too many members or duplicates)",
)]
pub struct InvalidTeamBodyResponse;

/// [`IntoResponses`] wrapper for `Pokemon not found` errors.
///
/// Can be used to document 404 API error responses using [`utoipa::path`].
#[derive(Debug, IntoResponses)]
#[response(status = NOT_FOUND, description = "Requested Pokemon not found")]
pub struct PokemonNotFoundResponse;

/// [`IntoResponses`] wrapper for `move not found` errors.
///
/// Can be used to document 404 API error responses using [`utoipa::path`].
#[derive(Debug, IntoResponses)]
#[response(status = NOT_FOUND, description = "Requested move not found")]
pub struct MoveNotFoundResponse;

/// [`IntoResponses`] wrapper for internal server errors.
///
/// Can be used to document 5XX API error responses using [`utoipa::path`].
#[derive(Debug, IntoResponses)]
#[response(status = "5XX")]
pub struct ServerErrorResponse(#[to_response] ErrorResponse);
