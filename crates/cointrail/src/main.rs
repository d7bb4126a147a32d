//! Cointrail - Telemetry sink for the coin collection game
//!
//! # Usage
//!
//! ```bash
//! # Run the server (default)
//! cointrail
//! cointrail --config cointrail.toml
//!
//! # Override port and data directory
//! cointrail serve --port 8080 --data-dir /var/lib/cointrail
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cointrail_config::{Config, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Cointrail - Telemetry sink for the coin collection game
#[derive(Parser, Debug)]
#[command(name = "cointrail")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    // Global args that apply to serve when no subcommand given
    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true, env = "COINTRAIL_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the server
    Serve(cmd::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = match cli.command {
        Some(Command::Serve(args)) => args,
        // No subcommand = run server (default behavior)
        None => cmd::serve::ServeArgs::default(),
    };

    let mut config = cmd::serve::load_config(cli.config.as_deref())?;
    args.apply(&mut config)?;

    let log_level = resolve_log_level(cli.log_level.as_deref(), &config);
    init_logging(log_level, config.log.format)?;

    cmd::serve::run(config, cli.config).await
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level<'a>(cli_level: Option<&'a str>, config: &Config) -> &'a str {
    cli_level.unwrap_or(config.log.level.as_str())
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Console => registry
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["cointrail"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "cointrail",
            "serve",
            "--port",
            "8080",
            "--data-dir",
            "/tmp/sessions",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.data_dir, Some("/tmp/sessions".into()));
    }

    #[test]
    fn test_log_level_precedence() {
        let mut config = Config::default();
        assert_eq!(resolve_log_level(None, &config), "info");

        config.log.level = cointrail_config::LogLevel::Warn;
        assert_eq!(resolve_log_level(None, &config), "warn");
        assert_eq!(resolve_log_level(Some("trace"), &config), "trace");
    }
}
