//! Shared utilities used across all domain modules.

pub mod display;
pub mod query;
pub mod serde_util;

pub use display::{balance_text, with_separators};
pub use query::{Order, Query};

/// Opaque backend row. Shapes the client does not own pass through untouched.
pub type Record = serde_json::Value;
