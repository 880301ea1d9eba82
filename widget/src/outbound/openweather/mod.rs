//! OpenWeather outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `WeatherSource`
//! port.

mod dto;
mod http_source;

pub use http_source::OpenWeatherHttpSource;
