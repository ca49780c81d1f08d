//! Error types for authlink.

use thiserror::Error;

/// Main error type for credential and session operations.
#[derive(Error, Debug)]
pub enum AuthlinkError {
    /// Credential or session validation failed for the given user.
    #[error("error authenticating user {username}: {source}")]
    Authentication {
        username: String,
        #[source]
        source: Box<AuthlinkError>,
    },

    /// Authenticated user tried to act on another user's account.
    #[error("authenticated user {authenticated}: trying to change password for {requested}")]
    Unauthorized {
        authenticated: String,
        requested: String,
    },

    /// Username/password pair was rejected.
    #[error("invalid credentials for user {0}")]
    InvalidCredentials(String),

    /// Backing datastore failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// No session exists for the given key.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// Session existed but is no longer valid.
    #[error("session expired: {0}")]
    SessionExpired(String),
}

impl AuthlinkError {
    /// Wrap a collaborator failure with the username it was raised for.
    pub fn authentication(username: impl Into<String>, source: AuthlinkError) -> Self {
        Self::Authentication {
            username: username.into(),
            source: Box::new(source),
        }
    }
}

/// Convenience Result type for authlink operations.
pub type Result<T> = std::result::Result<T, AuthlinkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_authentication_display_wraps_source() {
        let err = AuthlinkError::authentication(
            "alice",
            AuthlinkError::SessionExpired("k-1".into()),
        );
        let msg = err.to_string();
        assert!(msg.contains("alice"));
        assert!(msg.contains("session expired: k-1"));
    }

    #[test]
    fn test_authentication_exposes_source() {
        let err = AuthlinkError::authentication("bob", AuthlinkError::Storage("down".into()));
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "storage error: down");
    }

    #[test]
    fn test_unauthorized_names_both_users() {
        let err = AuthlinkError::Unauthorized {
            authenticated: "alice".into(),
            requested: "bob".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("alice"));
        assert!(msg.contains("bob"));
    }

    #[test]
    fn test_invalid_credentials_display() {
        let err = AuthlinkError::InvalidCredentials("carol".into());
        assert!(err.to_string().contains("carol"));
        assert!(err.to_string().contains("invalid credentials"));
    }

    #[test]
    fn test_session_not_found_display() {
        let err = AuthlinkError::SessionNotFound("missing-key".into());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("missing-key"));
    }
}
