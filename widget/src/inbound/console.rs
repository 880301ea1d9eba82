//! Console input adapter for the widget loop.
//!
//! Each submitted line stands in for one button activation: the field text
//! is read synchronously at that moment and handed to the widget as an
//! argument. No debouncing and no live validation; empty submissions reach
//! the widget and earn the prompt.

use std::io;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::widget::WeatherWidget;

/// Sentinel ending the interactive loop.
const QUIT_COMMAND: &str = "quit";

/// Drive the widget from stdin until EOF or the quit sentinel.
///
/// Registration happens here once at startup; the loop owns no state beyond
/// the reader and passes every field text in as an argument.
///
/// # Errors
///
/// Returns an error when reading from stdin fails.
pub async fn run_fetch_loop(widget: &WeatherWidget) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line == QUIT_COMMAND {
            break;
        }
        widget.handle_fetch_click(&line).await;
    }
    Ok(())
}
