//! Validated value types.

mod base_url;
mod nullable;

pub use base_url::BaseUrl;
pub(crate) use nullable::null_as_default;
