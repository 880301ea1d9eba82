//! Widget entry-point: wires the console loop, the HTTP weather source, and
//! the display at startup, then dispatches on the selected mode.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use widget::config::{Cli, Mode};
use widget::domain::display::ConsoleDisplay;
use widget::domain::simulated::{SimulatedOutcome, SimulatedUserSource};
use widget::domain::widget::WeatherWidget;
use widget::inbound::console::run_fetch_loop;
use widget::outbound::openweather::OpenWeatherHttpSource;

/// Application bootstrap.
#[tokio::main]
async fn main() -> io::Result<()> {
    // Diagnostics go to stderr so display frames keep stdout to themselves.
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    match cli.mode {
        Some(Mode::Simulate { reject, delay_ms }) => {
            let outcome = if reject {
                SimulatedOutcome::Reject
            } else {
                SimulatedOutcome::Resolve
            };
            SimulatedUserSource::new(Duration::from_millis(delay_ms), outcome)
                .run_demo()
                .await;
            Ok(())
        }
        Some(Mode::Fetch) | None => run_widget(&cli).await,
    }
}

fn build_widget(cli: &Cli) -> io::Result<WeatherWidget> {
    let api_key = cli.api_key.clone().ok_or_else(|| {
        io::Error::other("an API key is required: pass --api-key or set OPENWEATHER_API_KEY")
    })?;
    let source = OpenWeatherHttpSource::new(
        cli.endpoint.clone(),
        api_key,
        cli.units.clone(),
        cli.timeout(),
    )
    .map_err(|e| io::Error::other(format!("failed to build the weather client: {e}")))?;

    Ok(WeatherWidget::new(Arc::new(source), Arc::new(ConsoleDisplay)))
}

async fn run_widget(cli: &Cli) -> io::Result<()> {
    let widget = build_widget(cli)?;
    run_fetch_loop(&widget).await
}
