//! Storefront entry-point: loads configuration, then serves the course
//! detail endpoints and OpenAPI docs.

mod server;

use std::ffi::OsString;

use mockable::{DefaultEnv, Env};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use actix_web::web;
use storefront::inbound::http::health::HealthState;
use storefront::inbound::http::session_config::{BuildMode, session_settings_from_env};
use storefront::settings::StorefrontSettings;

use server::{ServerConfig, create_server};

fn load_config<I, E>(args: I, env: &E) -> std::io::Result<ServerConfig>
where
    I: IntoIterator<Item = OsString>,
    E: Env,
{
    let settings = StorefrontSettings::load_from_iter(args)
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    let session = session_settings_from_env(env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    Ok(ServerConfig::new(
        session,
        settings.bind_addr().map_err(std::io::Error::other)?,
        settings.api_base_url().map_err(std::io::Error::other)?,
        settings.request_timeout().map_err(std::io::Error::other)?,
    ))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let health_state = web::Data::new(HealthState::new());
    let config = load_config(std::env::args_os(), &DefaultEnv::new())?;
    let server = create_server(health_state, config)?;
    server.await
}
