//! qpay - QPay V2 merchant API client
//!
//! This library wraps the QPay V2 merchant API: invoices, payment checks and
//! listings, card payment cancellation and refunds, and ebarimt (electronic
//! tax receipt) issuance. All operations flow through a [`QPayClient`], which
//! keeps one bearer token per client instance and renews it on demand.
//!
//! # Example
//!
//! ```no_run
//! use qpay::{Config, QPayClient};
//!
//! # async fn example() -> Result<(), qpay::Error> {
//! let config = Config::from_env()?;
//! let client = QPayClient::new(config)?;
//!
//! let request = client
//!     .config()
//!     .simple_invoice("ORDER-1001", "terminal", "Coffee", 4500.0);
//! let invoice = client.create_simple_invoice(&request).await?;
//!
//! println!("{}: {}", invoice.invoice_id, invoice.qpay_short_url);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod codes;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, SessionManager, TokenResponse, TokenState};
pub use client::QPayClient;
pub use config::Config;
pub use error::{ApiError, Error};
pub use transport::HttpTransport;
pub use types::BaseUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
