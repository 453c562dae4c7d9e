//! Authentication module
//!
//! Script-application OAuth2 password grant against Reddit's token endpoint.
//!
//! The `Authenticator` fetches an access token on first use, caches it with
//! its expiry, and applies it as a bearer header to outgoing requests.

mod authenticator;
mod types;

pub use authenticator::{Authenticator, DEFAULT_TOKEN_URL};
pub use types::{CachedToken, Credentials};

#[cfg(test)]
mod tests;
