//! SQL-backed credential store.
//!
//! The store needs to check sessions before letting a user change their
//! password, but it must not depend on any concrete session implementation.
//! It declares the one operation it needs as [`SessionValidator`] and lets
//! the composition root supply something that implements it.

mod store;

pub use store::CredentialStore;

use crate::identity::{Identity, SessionKey};
use crate::Result;

/// Session lookup, as seen from the credential store.
pub trait SessionValidator: Send + Sync {
    /// Validate a session key, returning the user it belongs to.
    fn validate_session(&self, key: &SessionKey) -> Result<Identity>;
}
