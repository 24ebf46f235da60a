//! Exercise tracker entry-point: loads settings, prepares storage and runs
//! the HTTP server.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

use server::{RuntimeSettings, ServerConfig, ServerSettings, create_server};

async fn prepare_database(config: PoolConfig) -> std::io::Result<DbPool> {
    let url = config.database_url().to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(|err| std::io::Error::other(format!("database migration failed: {err}")))?;
    info!(applied, "database schema up to date");

    DbPool::new(config)
        .await
        .map_err(|err| std::io::Error::other(format!("database pool setup failed: {err}")))
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

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let RuntimeSettings {
        bind_addr,
        database,
        public_dir,
    } = settings
        .resolve(&DefaultEnv::new())
        .map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr, public_dir);
    if let Some(database) = database {
        config = config.with_db_pool(prepare_database(database).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "exercise tracker listening");

    // Actix performs the graceful stop; liveness only reports the drain.
    let shutdown_health = health_state.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown_health.mark_draining();
        }
    });

    server.await
}
