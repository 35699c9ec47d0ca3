//! # Animedex Server
//!
//! Loads the anime catalog once at startup and serves it read-only over HTTP.

use std::path::PathBuf;

use anyhow::Context;
use animedex_core::load_catalog;
use animedex_server::{
    AppState, create_app,
    infra::config::{ConfigLoad, ConfigLoader, ConfigOverrides},
};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "animedex-server")]
#[command(about = "Read-only anime catalog API")]
struct Cli {
    /// Server port (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config and HOST)
    #[arg(long)]
    host: Option<String>,

    /// Path to the catalog JSON file
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new().with_overrides(ConfigOverrides {
        host: cli.host,
        port: cli.port,
        dataset_path: cli.dataset,
    });
    if let Some(path) = cli.config {
        loader = loader.with_config_path(path);
    }

    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let catalog = load_catalog(config.dataset_path())
        .inspect_err(|err| error!(error = %err, "catalog failed to load"))
        .with_context(|| {
            format!(
                "failed to load catalog from {}",
                config.dataset_path().display()
            )
        })?;

    info!(
        root = %config.root().display(),
        public = %config.assets.public_dir.display(),
        images = %config.assets.images_dir.display(),
        "serving static assets"
    );

    let host = config.server.host.clone();
    let port = config.server.port;
    let app = create_app(AppState::new(catalog, config));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    let addr = listener.local_addr().context("listener has no local address")?;
    info!("animedex listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
