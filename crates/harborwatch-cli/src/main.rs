//! Harborwatch entry point.

use clap::Parser;
use harborwatch_app::Runtime;
use harborwatch_cli::{LogService, PortDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Harborwatch terminal client
#[derive(Parser, Debug)]
#[command(name = "harborwatch")]
#[command(about = "Polling terminal client for the port ship tracker")]
#[command(version)]
struct Args {
    /// Base URL of the log service
    #[arg(short, long, default_value = "http://127.0.0.1:8000")]
    server: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // stdout is the operator console; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!("harborwatch starting, polling {}", args.server);
    tracing::info!("press 'e' to compose an emergency message, Ctrl-C to quit");

    let service = LogService::new(&args.server)?;
    let driver = PortDriver::new(service)?;

    Ok(Runtime::new(driver).run().await?)
}
