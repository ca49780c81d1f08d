//! Value types shared by both sides of the wiring.

use std::fmt;

/// Unique numeric user identifier.
pub type UserId = i64;

/// Key handed out on a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    /// Key returned by the stubbed session cache for every login.
    pub const PLACEHOLDER: &'static str = "your-session-key";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn placeholder() -> Self {
        Self::new(Self::PLACEHOLDER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The user behind a validated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub user_id: UserId,
}

impl Identity {
    pub fn new(username: impl Into<String>, user_id: UserId) -> Self {
        Self {
            username: username.into(),
            user_id,
        }
    }
}

/// Connection parameters for a backing store.
///
/// All three values are opaque; nothing here connects anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub host: String,
    pub login: String,
    pub password: String,
}

impl ConnectionParams {
    pub fn new(
        host: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            login: login.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("host", &self.host)
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}
