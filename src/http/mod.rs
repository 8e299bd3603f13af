//! HTTP gateway layer: `BackofficeHttp` and per-call request options.

pub mod client;

pub use client::{BackofficeHttp, ErrorBody, RequestOptions, SessionExpiredHook};
