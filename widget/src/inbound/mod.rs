//! Inbound adapters that translate user events into domain calls while
//! keeping I/O details at the edge.
//!
//! The console loop under [`console`] is the only inbound surface; a
//! graphical field-and-button front end would sit alongside it.

pub mod console;
