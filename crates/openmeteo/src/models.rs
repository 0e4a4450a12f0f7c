//! Forecast data models
//!
//! Request parameters and the wire shape of the Open-Meteo forecast response.

use serde::{Deserialize, Serialize};

/// Location and timezone for a forecast request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastParams {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// IANA timezone name used by the service for timestamps (e.g. `Europe/Berlin`)
    pub timezone: String,
}

impl ForecastParams {
    /// Create new forecast parameters
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, timezone: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            timezone: timezone.into(),
        }
    }
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self::new(0.0, 0.0, "UTC")
    }
}

/// Forecast response as returned by the `/v1/forecast` endpoint
///
/// Only the fields this client reads are modelled; everything else in the
/// payload (units, elevation, hourly series) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastResponse {
    /// Latitude of the grid cell the service used
    pub latitude: f64,
    /// Longitude of the grid cell the service used
    pub longitude: f64,
    /// Current conditions
    pub current: CurrentReading,
    /// Set by the service when the request was rejected
    pub error: bool,
    /// Human-readable reason accompanying `error`
    pub reason: String,
}

/// Current conditions block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrentReading {
    /// Observation time in the requested timezone (`2024-01-15T12:00`)
    pub time: String,
    /// Air temperature at 2 metres
    pub temperature_2m: f64,
}
