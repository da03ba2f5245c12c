//! HTTP transport.
//!
//! This module performs single request/response exchanges with the QPay
//! API and turns non-2xx responses into [`ApiError`](crate::ApiError)s.

mod client;
pub mod endpoints;

pub use client::{Authorization, DEFAULT_TIMEOUT, HttpTransport, NO_BODY};
