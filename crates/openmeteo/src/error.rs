//! Open-Meteo error types

use thiserror::Error;

/// Category of an [`OpenMeteoError`], for matching without inspecting details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network, timeout or cancellation failure
    Transport,
    /// Service answered with a non-200 status
    Service,
    /// Response body was not valid JSON for the expected shape
    Parse,
    /// Service parsed the request but reported a logical error
    Forecast,
}

/// Errors that can occur while fetching a forecast
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// The HTTP exchange failed (DNS, connect, timeout, truncated body)
    #[error(transparent)]
    RequestFailed(#[from] reqwest::Error),

    /// The caller cancelled the request before it completed
    #[error("request cancelled")]
    Cancelled,

    /// Non-200 HTTP status; the body is not inspected
    #[error("open-meteo service error")]
    ServiceError {
        /// Status code returned by the service
        status: u16,
    },

    /// Response body could not be decoded
    #[error(transparent)]
    ParseError(#[from] serde_json::Error),

    /// The service flagged the request as failed
    #[error("open-meteo forecast error: {reason}")]
    ForecastError {
        /// Reason text provided by the service
        reason: String,
    },
}

impl OpenMeteoError {
    /// Returns the category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::RequestFailed(_) | Self::Cancelled => ErrorKind::Transport,
            Self::ServiceError { .. } => ErrorKind::Service,
            Self::ParseError(_) => ErrorKind::Parse,
            Self::ForecastError { .. } => ErrorKind::Forecast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(OpenMeteoError::Cancelled.kind(), ErrorKind::Transport);
        assert_eq!(
            OpenMeteoError::ServiceError { status: 500 }.kind(),
            ErrorKind::Service
        );
        assert_eq!(
            OpenMeteoError::ForecastError {
                reason: "x".to_string()
            }
            .kind(),
            ErrorKind::Forecast
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(OpenMeteoError::from(json_err).kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_service_error_display_is_fixed() {
        assert_eq!(
            OpenMeteoError::ServiceError { status: 500 }.to_string(),
            "open-meteo service error"
        );
        assert_eq!(
            OpenMeteoError::ServiceError { status: 404 }.to_string(),
            "open-meteo service error"
        );
    }

    #[test]
    fn test_forecast_error_display_includes_reason() {
        let err = OpenMeteoError::ForecastError {
            reason: "Latitude must be in range of -90 to 90°".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "open-meteo forecast error: Latitude must be in range of -90 to 90°"
        );
    }

    #[test]
    fn test_parse_error_is_verbatim() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n\t\"\"\n}").unwrap_err();
        let expected = json_err.to_string();
        let err = OpenMeteoError::from(json_err);
        assert_eq!(err.to_string(), expected);
    }
}
