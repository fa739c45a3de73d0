//! Twin Daemon - Digital-twin telemetry service
//!
//! The daemon serves simulated animal vitals over a JSON API:
//! - Bounded in-memory history of temperature/heart-rate readings
//! - On-the-fly anomaly detection against fixed normal bands
//! - Simulated collar device status

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twin_daemon::error::DaemonError;
use twin_daemon::{DaemonConfig, Server};

/// Twin Daemon CLI
#[derive(Parser)]
#[command(name = "twind")]
#[command(about = "Digital-twin telemetry daemon", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TWIN_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "TWIN_LISTEN_ADDR", default_value = "0.0.0.0:5000")]
    listen: String,

    /// Restrict CORS to one origin (all origins when omitted)
    #[arg(long, env = "TWIN_CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// Log level
    #[arg(long, env = "TWIN_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "TWIN_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), DaemonError> {
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let mut config =
        DaemonConfig::load(cli.config.as_deref()).map_err(|e| DaemonError::Config(e.to_string()))?;

    // Override with CLI args
    config.server.listen_addr = cli
        .listen
        .parse()
        .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;

    if cli.cors_origin.is_some() {
        config.server.cors_origin = cli.cors_origin;
    }

    // Print startup banner
    println!(
        r#"
  _            _           _
 | |___      _(_)_ __   __| |
 | __\ \ /\ / / | '_ \ / _` |
 | |_ \ V  V /| | | | | (_| |
  \__| \_/\_/ |_|_| |_|\__,_|

  Digital-twin telemetry daemon
  Version: {}
  Listening: {}
"#,
        env!("CARGO_PKG_VERSION"),
        config.server.listen_addr
    );

    // Create and run server
    let server = Server::new(config);
    server.run().await
}
