//! Driven port for fetching weather data keyed by a city query.
//!
//! The domain owns the request and response contracts so the widget stays
//! adapter-agnostic: anything that can turn a query into a report (or a
//! failure) can sit behind this port.

use async_trait::async_trait;

use crate::domain::query::CityQuery;
use crate::domain::report::WeatherReport;

/// Errors surfaced while fetching a weather report.
///
/// Each variant carries the human-readable cause the widget shows in the
/// display region, so `Display` is the bare message. Failures are caught at
/// the invocation frame and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherSourceError {
    /// Network transport failed before a usable response arrived.
    #[error("{message}")]
    Transport {
        /// Human-readable cause.
        message: String,
    },
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Status {
        /// Human-readable cause.
        message: String,
    },
    /// The response body could not be decoded into a report.
    #[error("{message}")]
    Decode {
        /// Human-readable cause.
        message: String,
    },
}

impl WeatherSourceError {
    /// Build a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a non-success status failure.
    pub fn status(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
        }
    }

    /// Build a decode failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for the asynchronous weather fetcher.
///
/// Callers must only invoke this with a constructed [`CityQuery`]; the empty
/// input case is handled before the port is reached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Issue one outbound request for `query` and await the round trip.
    async fn fetch_weather(&self, query: &CityQuery)
    -> Result<WeatherReport, WeatherSourceError>;
}

/// Fixture implementation resolving with a fixed report.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureWeatherSource;

#[async_trait]
impl WeatherSource for FixtureWeatherSource {
    async fn fetch_weather(
        &self,
        _query: &CityQuery,
    ) -> Result<WeatherReport, WeatherSourceError> {
        Ok(WeatherReport {
            location: "Paris".to_owned(),
            temperature: 18.0,
            condition: "clear".to_owned(),
        })
    }
}
