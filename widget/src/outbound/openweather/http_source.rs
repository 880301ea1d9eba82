//! Reqwest-backed OpenWeather source adapter.
//!
//! This adapter owns transport details only: request parameterization,
//! timeout and HTTP error mapping, and JSON decoding into the domain report.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::warn;

use super::dto::WeatherResponseDto;
use crate::domain::ports::{WeatherSource, WeatherSourceError};
use crate::domain::query::CityQuery;
use crate::domain::report::WeatherReport;

/// User-facing cause for any non-success status, matching the widget's
/// original wording. The status code and body stay in the log.
const NOT_FOUND_MESSAGE: &str = "City not found";

/// OpenWeather source adapter performing HTTP GET requests against one
/// endpoint.
pub struct OpenWeatherHttpSource {
    client: Client,
    endpoint: Url,
    api_key: String,
    units: String,
}

impl OpenWeatherHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        api_key: String,
        units: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            units,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherHttpSource {
    async fn fetch_weather(
        &self,
        query: &CityQuery,
    ) -> Result<WeatherReport, WeatherSourceError> {
        let url = build_request_url(&self.endpoint, query, &self.api_key, &self.units);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(
                city = query.as_str(),
                status = status.as_u16(),
                body = %body_preview(body.as_ref()),
                "weather endpoint returned a failure status"
            );
            return Err(map_status_error(status));
        }

        parse_report(body.as_ref())
    }
}

/// Substitute the query, credential, and units into the request URL.
///
/// The identifier is forwarded exactly as supplied; placeholder text never
/// reaches the wire.
fn build_request_url(endpoint: &Url, query: &CityQuery, api_key: &str, units: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("q", query.as_str())
        .append_pair("appid", api_key)
        .append_pair("units", units);
    url
}

fn parse_report(body: &[u8]) -> Result<WeatherReport, WeatherSourceError> {
    let decoded: WeatherResponseDto = serde_json::from_slice(body).map_err(|error| {
        WeatherSourceError::decode(format!("invalid weather JSON payload: {error}"))
    })?;
    decoded.into_domain_report().map_err(WeatherSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> WeatherSourceError {
    WeatherSourceError::transport(error.to_string())
}

fn map_status_error(_status: StatusCode) -> WeatherSourceError {
    WeatherSourceError::status(NOT_FOUND_MESSAGE)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the non-network request and mapping helpers.

    use super::*;
    use rstest::rstest;

    fn query(text: &str) -> CityQuery {
        CityQuery::parse(text).expect("test queries are non-empty")
    }

    #[test]
    fn request_url_carries_the_exact_identifier() {
        let endpoint = Url::parse("https://api.openweathermap.org/data/2.5/weather")
            .expect("endpoint parses");
        let url = build_request_url(&endpoint, &query("New York"), "secret-token", "metric");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        assert!(
            pairs.contains(&("q".to_owned(), "New York".to_owned())),
            "the q parameter must be the untransformed identifier"
        );
        assert!(
            pairs.contains(&("appid".to_owned(), "secret-token".to_owned())),
            "the credential must be substituted, not a placeholder"
        );
        assert!(pairs.contains(&("units".to_owned(), "metric".to_owned())));
    }

    #[test]
    fn parses_a_well_formed_body_into_a_report() {
        let body = br#"{
            "name": "Paris",
            "main": { "temp": 18 },
            "weather": [ { "description": "clear" } ]
        }"#;

        let report = parse_report(body).expect("body decodes");
        assert_eq!(report.location, "Paris");
        assert!((report.temperature - 18.0).abs() < f64::EPSILON);
        assert_eq!(report.condition, "clear");
    }

    #[test]
    fn missing_conditions_map_to_decode_errors() {
        let body = br#"{ "name": "Paris", "main": { "temp": 18 }, "weather": [] }"#;

        let error = parse_report(body).expect_err("decode should fail");
        assert!(
            matches!(error, WeatherSourceError::Decode { .. }),
            "an absent weather[0] is a malformed body"
        );
    }

    #[test]
    fn invalid_json_maps_to_decode_errors() {
        let error = parse_report(b"<html>Bad Gateway</html>").expect_err("decode should fail");
        assert!(matches!(error, WeatherSourceError::Decode { .. }));
    }

    #[rstest]
    #[case::not_found(StatusCode::NOT_FOUND)]
    #[case::unauthorized(StatusCode::UNAUTHORIZED)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR)]
    fn non_success_statuses_all_read_as_city_not_found(#[case] status: StatusCode) {
        let error = map_status_error(status);
        assert_eq!(
            error.to_string(),
            "City not found",
            "the user-facing cause is fixed regardless of status"
        );
        assert!(matches!(error, WeatherSourceError::Status { .. }));
    }

    #[test]
    fn long_bodies_are_previewed_for_the_log() {
        let body = "x".repeat(500);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."), "long bodies are truncated");
        assert!(preview.chars().count() <= 163);
    }
}
