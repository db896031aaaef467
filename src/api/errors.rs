//! Types and functions to implement proper error handling in the advisor API.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TryFromInto};
use utoipa::{ToResponse, ToSchema};

use crate::helpers::error::recursive_error_message;
use crate::service_env::ServiceEnv;
use crate::Error;

impl ResponseError for Error {
    /// Maps the [`Error`] to an HTTP [`StatusCode`].
    ///
    /// | Error                                      | Status                      |
    /// |--------------------------------------------|-----------------------------|
    /// | `Input`, `SameMatchup`, `Team`             | `400 Bad Request`           |
    /// | `NotFound`                                 | `404 Not Found`             |
    /// | `EnvVar`, `Data`                           | `500 Internal Server Error` |
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Input { .. } | Error::SameMatchup { .. } | Error::Team { .. } => {
                StatusCode::BAD_REQUEST
            },
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::EnvVar { .. } | Error::Data { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON [`HttpResponse`] body (see [`ErrorResponse::from`]).
    ///
    /// Server errors are logged, since their details never reach the caller in production.
    fn error_response(&self) -> HttpResponse<BoxBody> {
        let error_response: ErrorResponse = self.into();
        if error_response.status_code.is_server_error() {
            error!("{}", recursive_error_message(self));
        }
        HttpResponse::build(error_response.status_code).json(error_response)
    }
}

/// JSON body of every advisor API error.
///
/// `internal_error` is only filled in [`Development`](ServiceEnv::Development).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, ToResponse)]
#[response(
    description = "Server error",
    example = json!({
        "status_code": 500,
        "error": "Internal Server Error"
    }),
)]
pub struct ErrorResponse {
    /// HTTP status code
    #[serde_as(as = "TryFromInto<u16>")]
    #[schema(
        value_type = u16,
        minimum = 100,
        maximum = 999,
    )]
    pub status_code: StatusCode,

    /// Error message
    pub error: String,

    /// More details, when appropriate (like for validation errors or unknown names)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Full error chain, in development only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_error: Option<String>,
}

impl From<&Error> for ErrorResponse {
    /// Describes an [`Error`] for API callers.
    ///
    /// Caller mistakes (bad input, unknown names, invalid teams) are explained in `details`.
    /// Server-side failures only get their status reason, unless the advisor runs in
    /// [`Development`](ServiceEnv::Development).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::env;
    ///
    /// use actix_web::http::StatusCode;
    /// use actix_web::{HttpResponse, ResponseError};
    /// use poke_advisor::api::errors::ErrorResponse;
    /// use poke_advisor::error::EnvVarContext;
    /// use poke_advisor::Error;
    ///
    /// let error = env::var("NONEXISTENT_ADVISOR_ENV_VAR")
    ///     .unwrap_err()
    ///     .with_env_var_context(|| "NONEXISTENT_ADVISOR_ENV_VAR should be set");
    ///
    /// let error_response: ErrorResponse = (&error).into();
    /// let http_response = HttpResponse::build(error_response.status_code).json(error_response);
    ///
    /// assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, http_response.status());
    /// ```
    fn from(value: &Error) -> Self {
        let status_code = value.status_code();
        let reason = status_code.canonical_reason().unwrap_or("Unknown Error");
        let internal_error = ServiceEnv::current()
            .is_development()
            .then(|| recursive_error_message(value));

        Self { status_code, error: reason.into(), details: Self::details_for(value), internal_error }
    }
}

impl ErrorResponse {
    fn details_for(error: &Error) -> Option<String> {
        match error {
            Error::Input { source, .. } => Some(source.to_string()),
            Error::Team { source, .. } => Some(source.to_string()),
            Error::NotFound { .. } | Error::SameMatchup { .. } => Some(error.to_string()),
            Error::EnvVar { .. } | Error::Data { .. } => None,
        }
    }
}

/// Error handler for the `actix_web_validator` extractor configs.
///
/// Converts extractor errors (bad JSON, unparsable query strings, failed validation, like
/// [`DeserializeErrors`]) into our [`Error`], so they produce the same [`ErrorResponse`] bodies
/// as errors returned by the endpoints.
///
/// # Examples
///
/// ```no_run
/// use actix_web_validator::{JsonConfig, PathConfig};
/// use poke_advisor::api::errors::actix_error_handler;
///
/// let json_config = JsonConfig::default().error_handler(actix_error_handler);
/// let path_config = PathConfig::default().error_handler(actix_error_handler);
/// ```
///
/// [`DeserializeErrors`]: actix_web_validator::error::DeserializeErrors
pub fn actix_error_handler<E, R>(err: E, _req: &R) -> actix_web::error::Error
where
    E: Into<Error>,
{
    Into::<Error>::into(err).into()
}
