// --- File: src/auth.rs ---
//! Bearer-token acquisition for outgoing requests.
//!
//! The backend accepts a bearer token issued at admin login. Rather than
//! reading it from one fixed place, the client takes a [`TokenProvider`] so
//! the caller decides where the token lives (in-memory session, env var, ...).

use std::env;

/// Environment variable consulted by [`EnvTokenProvider`] by default.
pub const ADMIN_TOKEN_VAR: &str = "TOKEN_ADMIN";

/// Supplies the bearer token attached to outgoing requests.
///
/// The provider is queried once per request, so a provider backed by mutable
/// storage picks up token rotation without rebuilding the client. Returning
/// `None` lets the request proceed unauthenticated.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Holds a fixed token for the lifetime of the client.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

/// Reads the token from an environment variable on every request.
pub struct EnvTokenProvider {
    var_name: String,
}

impl EnvTokenProvider {
    pub fn new() -> Self {
        Self::from_var(ADMIN_TOKEN_VAR)
    }

    pub fn from_var(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenProvider for EnvTokenProvider {
    fn bearer_token(&self) -> Option<String> {
        env::var(&self.var_name).ok().filter(|t| !t.is_empty())
    }
}
