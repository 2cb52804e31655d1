//! Session token holding and distribution.
//!
//! [`AuthStore`] is the single writer for the signed-in session. Interested
//! parties subscribe and observe every change; the current value can also be
//! read directly. Tokens never appear in `Debug` or `Display` output.

use std::fmt;

use tokio::sync::watch;

/// A bearer token that masks itself in all formatting output.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(***)")
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

/// In-memory store for the current session token.
///
/// `None` means signed out. Setting or clearing replaces the value and wakes
/// every subscriber; a subscriber that only cares about the latest state can
/// read [`AuthStore::token`] instead.
#[derive(Clone)]
pub struct AuthStore {
    current: watch::Sender<Option<AuthToken>>,
}

impl AuthStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    pub fn token(&self) -> Option<AuthToken> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<AuthToken>> {
        self.current.subscribe()
    }

    pub fn set(&self, token: AuthToken) {
        self.current.send_replace(Some(token));
    }

    pub fn clear(&self) {
        self.current.send_replace(None);
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}
