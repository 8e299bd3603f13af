//! Support domain: customer support tickets.

#[cfg(feature = "http")]
pub mod client;
