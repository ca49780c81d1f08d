//! Session management module.
//!
//! The session authority logs users in and validates their session keys.
//! Checking passwords and locking accounts belongs to whatever holds the
//! user table, so the authority asks for those two operations through
//! [`UserDirectory`] instead of naming a concrete store.

mod authority;

pub use authority::SessionAuthority;

use crate::identity::UserId;
use crate::Result;

/// User lookup and lockout, as seen from the session authority.
pub trait UserDirectory: Send + Sync {
    /// Check if a username/password pair is valid, returning the user id.
    fn validate_user(&self, username: &str, password: &str) -> Result<UserId>;

    /// Record that an account can no longer be accessed after a bad login.
    fn lock_out_user(&self, username: &str) -> Result<()>;
}
