//! Open-Meteo forecast CLI
//!
//! Prints the current temperature for a location.

#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use openmeteo::{CancellationToken, ForecastClient, ForecastParams, OpenMeteoClient};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Open-Meteo forecast CLI
#[derive(Debug, Parser)]
#[command(name = "openmeteo-forecast")]
#[command(author, version, about = "Current temperature from Open-Meteo", long_about = None)]
struct Cli {
    /// Latitude in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lon: f64,

    /// IANA timezone for the returned timestamps
    #[arg(long, default_value = "UTC")]
    timezone: String,

    /// Service origin (defaults to the public Open-Meteo API)
    #[arg(long, env = "OPEN_METEO_HOST")]
    host: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Fetch the current temperature for `params`
async fn run(
    client: &dyn ForecastClient,
    params: &ForecastParams,
    cancel: &CancellationToken,
) -> anyhow::Result<f64> {
    client.forecast(params, cancel).await.with_context(|| {
        format!(
            "forecast for {}, {} ({}) failed",
            params.latitude, params.longitude, params.timezone
        )
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = OpenMeteoClient::with_host(cli.host.as_deref().unwrap_or_default())?;
    debug!(base_url = %client.base_url(), "Client ready");

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling forecast request");
            on_interrupt.cancel();
        }
    });

    let params = ForecastParams::new(cli.lat, cli.lon, cli.timezone);
    let temperature = run(&client, &params, &cancel).await?;

    println!("{temperature}");
    Ok(())
}
