//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and the partial-update bodies it writes
//! - `wire.rs`: Raw serde structs matching backend rows (where rows are typed)
//! - `client.rs`: Sub-client with HTTP methods (and caching, for balances)
//!
//! Tables the client does not own a shape for are passed through as
//! [`Record`](crate::shared::Record).

pub mod audit;
pub mod balance;
pub mod dashboard;
pub mod finance;
pub mod kyc;
pub mod notification;
pub mod support;
pub mod trading;
pub mod user;
