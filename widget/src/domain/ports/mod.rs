//! Domain ports for the hexagonal boundary.

mod weather_source;

#[cfg(test)]
pub use weather_source::MockWeatherSource;
pub use weather_source::{FixtureWeatherSource, WeatherSource, WeatherSourceError};
