//! Weather report record and its deterministic renderer.

/// Structured result of a successful weather fetch.
///
/// Received whole from the adapter, never partially constructed, and
/// discarded after rendering; the widget retains nothing between
/// activations.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Resolved location name as reported by the provider.
    pub location: String,
    /// Temperature in the configured units (Celsius by default).
    pub temperature: f64,
    /// Free-text condition description.
    pub condition: String,
}

/// Format a report into display markup.
///
/// Pure function of its input: the same report always yields byte-identical
/// markup. Assumes structural well-formedness; the fetcher guarantees it.
pub fn render_weather(report: &WeatherReport) -> String {
    format!(
        "<h2>Weather in {location}</h2>\n<p>Temperature: {temperature} °C</p>\n<p>Condition: {condition}</p>",
        location = report.location,
        temperature = report.temperature,
        condition = report.condition,
    )
}
