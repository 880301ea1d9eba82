//! DTOs for decoding OpenWeather JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into the
//! domain report (`WeatherReport`) in one pass.

use serde::Deserialize;

use crate::domain::report::WeatherReport;

#[derive(Debug, Deserialize)]
pub(super) struct WeatherResponseDto {
    pub(super) name: String,
    pub(super) main: MainDto,
    #[serde(default)]
    pub(super) weather: Vec<ConditionDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MainDto {
    pub(super) temp: f64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionDto {
    pub(super) description: String,
}

impl WeatherResponseDto {
    pub(super) fn into_domain_report(self) -> Result<WeatherReport, String> {
        if !self.main.temp.is_finite() {
            return Err(format!(
                "response for {} includes a non-finite temperature",
                self.name
            ));
        }
        let condition = self
            .weather
            .into_iter()
            .next()
            .map(|entry| entry.description)
            .ok_or_else(|| format!("response for {} is missing weather conditions", self.name))?;

        Ok(WeatherReport {
            location: self.name,
            temperature: self.main.temp,
            condition,
        })
    }
}
