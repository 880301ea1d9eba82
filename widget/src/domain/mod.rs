//! Domain core for the fetch-and-render flow.
//!
//! Purpose: keep the widget's semantics independent of transport and
//! presentation. Types are immutable once constructed and each documents its
//! lifecycle invariants in its own Rustdoc.
//!
//! Public surface:
//! - `CityQuery` — user-supplied lookup key, consumed by one fetch.
//! - `WeatherReport` / `render_weather` — fetch result and its pure renderer.
//! - `DisplaySurface` and adapters — the single replace-on-write region.
//! - `WeatherSource` port — the asynchronous fetcher boundary.
//! - `WeatherWidget` — the controller tying the above together.
//! - `SimulatedUserSource` — timer-backed stand-in for a real async source.

pub mod display;
pub mod ports;
pub mod query;
pub mod report;
pub mod simulated;
pub mod widget;

pub use self::query::CityQuery;
pub use self::report::{WeatherReport, render_weather};
