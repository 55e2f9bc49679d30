//! Backend entry-point: loads settings, resolves storage and serves the API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_backend::inbound::http::health::HealthState;
use users_backend::server::{ServerConfig, create_server};
use users_backend::settings::ServerSettings;

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

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(|e| {
        error!(error = %e, "failed to load settings");
        std::io::Error::other(format!("failed to load settings: {e}"))
    })?;
    let config = ServerConfig::from_settings(&settings).map_err(|e| {
        error!(error = %e, "invalid server configuration");
        std::io::Error::other(e)
    })?;

    info!(
        bind_addr = %config.bind_addr(),
        prefix = config.prefix(),
        database_type = settings.database_type(),
        "starting users service"
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
