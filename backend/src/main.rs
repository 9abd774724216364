//! Directory server entry-point: loads settings, opens the database pool and
//! serves the REST API.

mod server;

use std::time::Duration;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use directory::inbound::http::health::HealthState;
use directory::outbound::persistence::{DbPool, PoolConfig};
use directory::settings::DirectorySettings;
use server::{ServerConfig, create_server};

const POOL_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);
const POOL_MIN_IDLE: u32 = 2;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load_from_iter(std::env::args_os())
        .wrap_err("load directory settings")?;
    let database_url = settings
        .database_url()
        .ok_or_else(|| eyre!("DIRECTORY_DATABASE_URL must be set"))?;
    let bind_addr = settings.bind_addr().wrap_err("parse bind address")?;

    let pool_max_size = settings.pool_max_size();
    let pool_config = PoolConfig::new(database_url)
        .with_max_size(pool_max_size)
        .with_min_idle(Some(pool_max_size.min(POOL_MIN_IDLE)))
        .with_connection_timeout(POOL_CHECKOUT_TIMEOUT);
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("build database connection pool")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))
        .wrap_err_with(|| format!("bind HTTP server to {bind_addr}"))?;
    server.await.wrap_err("run HTTP server")
}
