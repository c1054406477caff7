//! Worker process for the Starforge universe generator.
//!
//! Polls the `PostgreSQL` job queue, claims universe-generation jobs one at a
//! time, and runs the staged world generator for each, reporting progress
//! back onto the Job Record.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `starforge-config.yaml` (or `STARFORGE_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Build the world generator from the `generation` section
//! 5. Run the polling loop until Ctrl-C
//! 6. Close the connection pool

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use starforge_core::{StarforgeConfig, Worker};
use starforge_db::{PostgresConfig, PostgresPool};
use starforge_world::WorldGenerator;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::StartupError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "starforge-config.yaml";

/// Application entry point for the worker.
///
/// # Errors
///
/// Returns an error if configuration, the database connection, or
/// migrations fail. Job failures never stop the process.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration (before logging, which takes its level from it).
    let config_path = config_path();
    let loaded = load_config(&config_path)?;
    let config = loaded.config;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("starforge-worker starting");
    if loaded.from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        worker = %config.worker.name,
        poll_interval_ms = config.worker.poll_interval_ms,
        galaxy_count = config.generation.galaxy_count,
        ecology = config.generation.ecology.enabled,
        fixed_seed = config.worker.seed.is_some(),
        "Worker configuration"
    );

    // 3. Connect to PostgreSQL and migrate.
    let pg_config = PostgresConfig::from(&config.infrastructure);
    let pg = PostgresPool::connect(&pg_config)
        .await
        .map_err(StartupError::from)?;
    pg.run_migrations().await.map_err(StartupError::from)?;

    // 4. Build the generator.
    let generator = WorldGenerator::new(config.generation.clone()).map_err(StartupError::from)?;

    // 5. Run until Ctrl-C.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown requested; finishing the current job"),
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C; stopping"),
        }
        let _ = shutdown_tx.send(true);
    });

    let mut worker = Worker::new(
        Arc::new(pg.job_store()),
        Arc::new(pg.world_store()),
        generator,
        config.worker,
    );
    worker.run(shutdown_rx).await;

    // 6. Close the pool.
    pg.close().await;
    info!("starforge-worker exited");
    Ok(())
}

/// A configuration and whether it came from disk.
struct LoadedConfig {
    config: StarforgeConfig,
    from_file: bool,
}

fn config_path() -> PathBuf {
    std::env::var_os("STARFORGE_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist. `DATABASE_URL` applies either way.
fn load_config(path: &Path) -> Result<LoadedConfig, StartupError> {
    if path.exists() {
        let config = StarforgeConfig::from_file(path)?;
        Ok(LoadedConfig {
            config,
            from_file: true,
        })
    } else {
        let mut config = StarforgeConfig::default();
        config.infrastructure.apply_env_overrides();
        Ok(LoadedConfig {
            config,
            from_file: false,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let loaded = load_config(Path::new("/nonexistent/starforge-config.yaml")).unwrap();
        assert!(!loaded.from_file);
        assert!(loaded.config.worker.name.starts_with("starforge-worker-"));
        assert_eq!(loaded.config.worker.poll_interval_ms, 2000);
    }

    #[test]
    fn shipped_config_parses() {
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../starforge-config.yaml"
        ));
        let loaded = load_config(path).unwrap();
        assert!(loaded.from_file);
    }
}
