//! Command-line configuration for the widget binary.

use std::time::Duration;

use clap::{Parser, Subcommand};
use url::Url;

/// Default OpenWeather current-weather endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Command-line configuration.
#[derive(Debug, Parser)]
#[command(name = "widget", about = "Asynchronous weather fetch-and-render widget")]
pub struct Cli {
    /// Weather endpoint the outbound adapter targets.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Credential token sent as the `appid` request parameter.
    #[arg(long, env = "OPENWEATHER_API_KEY")]
    pub api_key: Option<String>,

    /// Outbound request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout_seconds: u64,

    /// Measurement units requested from the provider.
    #[arg(long, default_value = "metric")]
    pub units: String,

    /// Mode to run; defaults to the interactive fetch loop.
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Runnable modes.
#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Interactive fetch-and-render loop reading city names from stdin.
    Fetch,
    /// Timer-backed simulated source demo running both consumer styles.
    Simulate {
        /// Settle the simulated source on its rejection branch.
        #[arg(long)]
        reject: bool,

        /// Settlement delay in milliseconds.
        #[arg(long, default_value_t = 2000)]
        delay_ms: u64,
    },
}

impl Cli {
    /// Outbound request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for argument parsing.

    use super::*;

    #[test]
    fn defaults_select_the_fetch_loop() {
        let cli = Cli::try_parse_from(["widget"]).expect("bare invocation parses");
        assert!(cli.mode.is_none());
        assert_eq!(cli.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(cli.units, "metric");
        assert_eq!(cli.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn simulate_mode_accepts_rejection_and_delay() {
        let cli = Cli::try_parse_from(["widget", "simulate", "--reject", "--delay-ms", "50"])
            .expect("simulate invocation parses");
        match cli.mode {
            Some(Mode::Simulate { reject, delay_ms }) => {
                assert!(reject);
                assert_eq!(delay_ms, 50);
            }
            other => panic!("expected simulate mode, got {other:?}"),
        }
    }
}
