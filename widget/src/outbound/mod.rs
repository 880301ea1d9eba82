//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and wire
//! representations; they contain no business logic. The only outbound
//! concern here is the weather HTTP source.

pub mod openweather;
