//! Types and functions used to implement the advisor REST API.

pub mod doc;
pub mod errors;
pub mod v1;

use std::sync::Arc;

use actix_web::web;
use actix_web::web::ServiceConfig;
use actix_web::HttpResponse;
use log::trace;

use crate::data::dex::Dex;

/// [`Result`](crate::Result) definition used to return [`HttpResponse`]s from API endpoints.
///
/// If an [`Error`](crate::Error) is returned, it is converted to an appropriate [`HttpResponse`]
/// by the error handling code (see [`ErrorResponse::from`](errors::ErrorResponse::from) for details).
pub type HttpResult = crate::Result<HttpResponse>;

/// Allows registration of the current version of the advisor API under the `/v1` scope.
///
/// Called automatically from [`configure_api`](crate::configure_api).
pub fn configure(dex: &Arc<Dex>) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Adding API endpoints for /api");
        config.service(web::scope("/v1").configure(v1::configure(dex)));
    }
}
