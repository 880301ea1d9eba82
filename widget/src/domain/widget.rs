//! Fetch-and-render controller for the weather widget.
//!
//! The controller owns call handling only: empty-input substitution, one
//! fetch per activation, and conversion of outcomes into display frames.
//! Every activation is independent; no state persists between calls and
//! overlapping fetches settle last-resolved-wins on the shared display.

use std::sync::Arc;

use tracing::warn;

use crate::domain::display::{DisplayFrame, DisplaySurface, Tone};
use crate::domain::ports::WeatherSource;
use crate::domain::query::CityQuery;
use crate::domain::report::render_weather;

/// Prompt substituted when the input field is empty.
pub const EMPTY_QUERY_PROMPT: &str = "Please enter a city name.";

/// Controller translating activation events into fetch-and-render cycles.
///
/// Constructed once at initialization with both ports passed explicitly;
/// handlers receive all data as arguments rather than reading ambient state.
pub struct WeatherWidget {
    source: Arc<dyn WeatherSource>,
    display: Arc<dyn DisplaySurface>,
}

impl WeatherWidget {
    /// Wire the widget to its fetcher and display.
    pub fn new(source: Arc<dyn WeatherSource>, display: Arc<dyn DisplaySurface>) -> Self {
        Self { source, display }
    }

    /// Handle one activation event with the field text read at that moment.
    ///
    /// Empty text shows the prompt without invoking the fetcher. Otherwise
    /// the exact identifier is fetched and the display region is replaced
    /// with either the rendered report or the failure cause. Failures are
    /// consumed here; nothing propagates and nothing is retried.
    pub async fn handle_fetch_click(&self, field_text: &str) {
        let Some(query) = CityQuery::parse(field_text) else {
            self.display.show(DisplayFrame::new(
                format!("<p>{EMPTY_QUERY_PROMPT}</p>"),
                Tone::Neutral,
            ));
            return;
        };

        match self.source.fetch_weather(&query).await {
            Ok(report) => {
                self.display
                    .show(DisplayFrame::new(render_weather(&report), Tone::Neutral));
            }
            Err(error) => {
                warn!(city = query.as_str(), error = %error, "weather fetch failed");
                self.display
                    .show(DisplayFrame::new(format!("<p>{error}</p>"), Tone::Failure));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage through the mocked port; behaviour tests live in
    //! `tests/widget_behaviour.rs`.

    use super::*;
    use crate::domain::display::InMemoryDisplay;
    use crate::domain::ports::{MockWeatherSource, WeatherSourceError};
    use crate::domain::report::WeatherReport;

    fn widget_with(source: MockWeatherSource) -> (WeatherWidget, Arc<InMemoryDisplay>) {
        let display = Arc::new(InMemoryDisplay::default());
        let widget = WeatherWidget::new(
            Arc::new(source),
            Arc::clone(&display) as Arc<dyn DisplaySurface>,
        );
        (widget, display)
    }

    #[tokio::test]
    async fn empty_field_substitutes_the_prompt() {
        let mut source = MockWeatherSource::new();
        source.expect_fetch_weather().never();
        let (widget, display) = widget_with(source);

        widget.handle_fetch_click("").await;

        let frame = display.current().expect("prompt frame shown");
        assert_eq!(frame.markup, "<p>Please enter a city name.</p>");
        assert_eq!(frame.tone, Tone::Neutral);
    }

    #[tokio::test]
    async fn failure_cause_becomes_red_display_text() {
        let mut source = MockWeatherSource::new();
        source
            .expect_fetch_weather()
            .returning(|_| Err(WeatherSourceError::status("City not found")));
        let (widget, display) = widget_with(source);

        widget.handle_fetch_click("Atlantis").await;

        let frame = display.current().expect("error frame shown");
        assert_eq!(frame.markup, "<p>City not found</p>");
        assert_eq!(frame.tone, Tone::Failure);
    }

    #[tokio::test]
    async fn success_replaces_the_display_with_rendered_markup() {
        let mut source = MockWeatherSource::new();
        source.expect_fetch_weather().returning(|_| {
            Ok(WeatherReport {
                location: "Paris".to_owned(),
                temperature: 18.0,
                condition: "clear".to_owned(),
            })
        });
        let (widget, display) = widget_with(source);

        widget.handle_fetch_click("Paris").await;

        let frame = display.current().expect("report frame shown");
        assert!(frame.markup.contains("Weather in Paris"));
        assert_eq!(frame.tone, Tone::Neutral);
    }
}
