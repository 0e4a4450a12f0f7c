//! Open-Meteo forecast client
//!
//! Client for the Open-Meteo Forecast API (<https://open-meteo.com>).
//! Fetches the current temperature at 2 metres for a location, without an API key.

pub mod client;
pub mod config;
pub mod error;
mod models;

pub use client::{ForecastClient, OpenMeteoClient};
pub use config::OpenMeteoConfig;
pub use error::{ErrorKind, OpenMeteoError};
pub use models::{CurrentReading, ForecastParams, ForecastResponse};

/// Token accepted by [`ForecastClient::forecast`] to abort an in-flight request
pub use tokio_util::sync::CancellationToken;
