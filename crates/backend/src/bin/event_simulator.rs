use backend::usecases::u501_event_simulator::{LogApiClient, Simulator};
use clap::Parser;
use std::time::Duration;

/// Posts simulated authentication and order events to the log API.
#[derive(Parser, Debug)]
#[command(name = "event_simulator", version)]
struct Cli {
    /// Base URL of the log API
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    api_url: String,

    /// How long to keep generating events
    #[arg(long, default_value_t = 30)]
    duration_seconds: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    let client = LogApiClient::new(&cli.api_url)?;
    let mut simulator = Simulator::new(client);
    let summary = simulator
        .run(Duration::from_secs(cli.duration_seconds))
        .await;

    println!(
        "Simulator finished: {} iterations, {} logs sent, {} failed",
        summary.iterations, summary.sent, summary.failed
    );
    Ok(())
}
