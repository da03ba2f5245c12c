//! Authentication types and token lifecycle.
//!
//! Every domain operation obtains its bearer token from a
//! [`SessionManager`], which caches one token pair per client instance.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::SessionManager;
pub use tokens::{AccessToken, EXPIRY_MARGIN_SECS, RefreshToken, TokenResponse, TokenState};
