//! Backend entry-point: wires the REST endpoints, the embedded frontend,
//! health probes, and OpenAPI docs.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::server::{ServerSettings, create_server};

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

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;
    info!(host = settings.host(), port = settings.port(), seed = settings.seed, "starting server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &settings)?;
    server.await
}
