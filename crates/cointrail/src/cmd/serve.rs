//! Serve command - Run the cointrail server
//!
//! Binds the HTTP source, appends every accepted record to its session CSV,
//! and shuts down gracefully on SIGINT/SIGTERM.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use cointrail_config::Config;
use cointrail_sinks::session_csv::{SessionCsvConfig, SessionCsvSink};
use cointrail_sources::{HttpSource, HttpSourceConfig};

/// Config files tried, in order, when `--config` is not given
const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/cointrail.toml", "cointrail.toml"];

/// How long in-flight requests get to finish after a shutdown signal
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Serve command arguments
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Bind address (overrides [server].address)
    #[arg(long)]
    pub address: Option<String>,

    /// Listen port (overrides [server].port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory for session CSV files (overrides [storage].path)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command line overrides and re-validate
    pub fn apply(self, config: &mut Config) -> Result<()> {
        if let Some(address) = self.address {
            config.server.address = address;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(data_dir) = self.data_dir {
            config.storage.path = data_dir;
        }
        config.validate().context("invalid command line override")
    }
}

/// Load configuration
///
/// An explicit path must exist. Without one, the default locations are tried
/// and built-in defaults are used if none is present.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(anyhow::anyhow!("config file not found: {}", path.display()));
        }
        return Config::from_file(path).context("failed to load configuration");
    }

    for candidate in DEFAULT_CONFIG_PATHS.iter().map(Path::new) {
        if candidate.exists() {
            return Config::from_file(candidate).context("failed to load configuration");
        }
    }

    Ok(Config::default())
}

/// Run the serve command
pub async fn run(config: Config, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(default)".to_string());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        platform = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        config = %config_path,
        "cointrail starting"
    );

    if let Err(e) = run_server(config).await {
        error!(error = %e, "server error");
        return Err(e);
    }

    info!("cointrail shutdown complete");
    Ok(())
}

/// Main server run loop
async fn run_server(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let sink = SessionCsvSink::new(SessionCsvConfig::default().with_path(&config.storage.path));
    sink.init().context("failed to prepare data directory")?;

    let http_config = HttpSourceConfig {
        address: config.server.address.clone(),
        port: config.server.port,
        max_payload_size: config.server.max_payload_size,
        cors_enabled: config.server.cors_enabled,
    };

    let source = HttpSource::new(http_config, sink);
    let mut server = tokio::spawn(source.run(cancel.clone()));

    tokio::select! {
        _ = wait_for_shutdown() => {
            info!("shutdown signal received, stopping server...");
        }
        result = &mut server => {
            // Server exited on its own, e.g. the port was taken
            return result
                .context("HTTP source task panicked")?
                .context("HTTP source failed");
        }
    }

    cancel.cancel();

    match tokio::time::timeout(SHUTDOWN_TIMEOUT, server).await {
        Ok(Ok(result)) => result.context("HTTP source failed")?,
        Ok(Err(e)) => warn!(error = %e, "HTTP source task panicked during shutdown"),
        Err(_) => warn!("HTTP source did not finish within timeout, continuing shutdown"),
    }

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
