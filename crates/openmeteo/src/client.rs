//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo `/v1/forecast` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::config::OpenMeteoConfig;
use crate::error::OpenMeteoError;
use crate::models::{ForecastParams, ForecastResponse};

/// Forecast client trait for fetching the current temperature
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Get the current temperature at 2 metres for a location
    ///
    /// The request is abandoned as soon as `cancel` fires.
    async fn forecast(
        &self,
        params: &ForecastParams,
        cancel: &CancellationToken,
    ) -> Result<f64, OpenMeteoError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, OpenMeteoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.resolved_base_url().to_string(),
        })
    }

    /// Create a client for `host`, falling back to the public origin when `host` is empty
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_host(host: &str) -> Result<Self, OpenMeteoError> {
        Self::new(OpenMeteoConfig::with_host(host))
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, OpenMeteoError> {
        Self::new(OpenMeteoConfig::default())
    }

    /// Origin this client sends requests to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for a forecast
    #[must_use]
    pub fn forecast_url(&self, params: &ForecastParams) -> String {
        format!(
            "{}/v1/forecast?latitude={:.6}&longitude={:.6}&current=temperature_2m&hourly=temperature_2m&timezone={}",
            self.base_url, params.latitude, params.longitude, params.timezone
        )
    }

    /// Fetch and decode the full forecast response
    ///
    /// # Errors
    ///
    /// Returns [`OpenMeteoError::Cancelled`] if `cancel` fires first, otherwise
    /// any error from the HTTP exchange or the payload.
    #[instrument(skip(self, cancel), fields(lat = %params.latitude, lon = %params.longitude, tz = %params.timezone))]
    pub async fn fetch(
        &self,
        params: &ForecastParams,
        cancel: &CancellationToken,
    ) -> Result<ForecastResponse, OpenMeteoError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(OpenMeteoError::Cancelled),
            result = self.exchange(params) => result,
        }
    }

    async fn exchange(&self, params: &ForecastParams) -> Result<ForecastResponse, OpenMeteoError> {
        let url = self.forecast_url(params);
        debug!(url = %url, "Fetching forecast");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        debug!(status = %status, "Forecast response received");
        if status != StatusCode::OK {
            return Err(OpenMeteoError::ServiceError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let forecast: ForecastResponse = serde_json::from_slice(&body)?;

        if forecast.error {
            return Err(OpenMeteoError::ForecastError {
                reason: forecast.reason,
            });
        }

        Ok(forecast)
    }
}

#[async_trait]
impl ForecastClient for OpenMeteoClient {
    async fn forecast(
        &self,
        params: &ForecastParams,
        cancel: &CancellationToken,
    ) -> Result<f64, OpenMeteoError> {
        let response = self.fetch(params, cancel).await?;
        Ok(response.current.temperature_2m)
    }
}
