//! Main advisor web application crate.
//!
//! This crate loads the advisor data, registers the API endpoints and starts handling HTTP
//! connections. All the actual implementation is in the [lib crate](poke_advisor).
//!
//! For more information, see `README.md`.

use std::sync::Arc;

use actix_web::{web, HttpResponse, HttpServer, Responder};
use anyhow::Context;
use env_logger::Env;
use log::info;
use poke_advisor::advisor_app;
use poke_advisor::data::dex::Dex;
use poke_advisor::helpers::env::{load_optional_dotenv, optional_env_var, optional_int_env_var};
use poke_advisor::service_env::ServiceEnv;
use rustc_version_runtime::version;
use serde::Serialize;

/// Default HTTP port used for the advisor app (see [`get_http_port`]).
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Environment variable that can be used to set the number of HTTP workers.
const WORKERS_ENV_VAR: &str = "ADVISOR_WORKERS";

/// Main program body.
///
/// Takes care of setting up the advisor app, then serves its endpoints over HTTP.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_file_loaded = load_optional_dotenv()?;

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if !env_file_loaded {
        info!(".env file not found; skipped");
    }

    info!("Loading advisor data");
    let dex = Arc::new(Dex::load().with_context(|| "failed to load advisor data")?);
    info!(
        "Loaded {} Pokemon and {} moves",
        dex.all_pokemon().len(),
        dex.all_moves().len()
    );

    let server_address = get_server_address()?;
    let http_port = get_http_port()?;

    info!("Starting advisor HTTP server");
    let mut server = HttpServer::new(move || {
        advisor_app!(dex)
            .app_data(web::Data::from(dex.clone()))
            .route("/", web::get().to(hello))
    });
    if let Some(workers) = optional_int_env_var::<usize>(WORKERS_ENV_VAR)? {
        server = server.workers(workers);
    }
    let server = server
        .bind((server_address.as_str(), http_port))
        .with_context(|| format!("failed to bind to port {}", http_port))?
        .run();

    info!(
        "Advisor server started in {}! Listening on {}:{}.",
        ServiceEnv::current(),
        server_address,
        http_port
    );
    info!("Rust version used: {}", version());
    if ServiceEnv::current().is_development() {
        info!("Backtrace support: {}", get_backtrace_support());
    }
    Ok(server.await?)
}

/// Default address the advisor binds to; use `HTTP_ADDR=0.0.0.0` in a container.
const DEFAULT_HTTP_ADDR: &str = "127.0.0.1";

fn get_server_address() -> anyhow::Result<String> {
    Ok(optional_env_var("HTTP_ADDR")?.unwrap_or_else(|| DEFAULT_HTTP_ADDR.into()))
}

fn get_http_port() -> anyhow::Result<u16> {
    Ok(optional_int_env_var("HTTP_PORT")?.unwrap_or(DEFAULT_HTTP_PORT))
}

/// Returns a string representing the status of [`Backtrace`](std::backtrace::Backtrace) support on this platform.
fn get_backtrace_support() -> &'static str {
    #[cfg(backtrace_support)]
    match std::backtrace::Backtrace::capture().status() {
        std::backtrace::BacktraceStatus::Captured => "supported",
        std::backtrace::BacktraceStatus::Disabled => "disabled",
        std::backtrace::BacktraceStatus::Unsupported => "unsupported",
        _ => "unknown (unrecognized enum value)",
    }

    #[cfg(not(backtrace_support))]
    "unsupported (not Nightly toolchain)"
}

/// Handler for the `/` endpoint. Returns a hello message along with the size of the loaded data.
///
/// Could be used as a healthcheck of sorts.
async fn hello(dex: web::Data<Dex>) -> impl Responder {
    HttpResponse::Ok().json(Hello::new(&dex))
}

/// Data returned by the `/` endpoint.
#[derive(Debug, Serialize)]
struct Hello {
    message: &'static str,
    pokemon: usize,
    moves: usize,
}

impl Hello {
    fn new(dex: &Dex) -> Self {
        Self {
            message: "Hello from the Pokemon advisor!",
            pokemon: dex.all_pokemon().len(),
            moves: dex.all_moves().len(),
        }
    }
}
