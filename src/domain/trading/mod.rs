//! Trading domain: positions, signals, investment tiers.
//!
//! Rows are passed through as opaque records.

#[cfg(feature = "http")]
pub mod client;
