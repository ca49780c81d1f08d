//! Session authority backed by a session cache.

use std::sync::{Arc, OnceLock, Weak};

use tracing::{debug, info, warn};

use super::UserDirectory;
use crate::error::AuthlinkError;
use crate::identity::{ConnectionParams, Identity, SessionKey, UserId};
use crate::state::WiringState;
use crate::Result;

const STUB_USERNAME: &str = "fprefect";
const STUB_USER_ID: UserId = 42;

/// Issues and validates session keys.
pub struct SessionAuthority {
    params: ConnectionParams,
    directory: OnceLock<Weak<dyn UserDirectory>>,
}

impl SessionAuthority {
    /// Create a new authority. The user directory is left unset.
    pub fn new(params: ConnectionParams) -> Self {
        debug!(host = %params.host, login = %params.login, "session authority created");
        Self {
            params,
            directory: OnceLock::new(),
        }
    }

    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    /// Bind the user directory. Only the first call takes effect.
    pub fn set_user_directory(&self, directory: Weak<dyn UserDirectory>) {
        if self.directory.set(directory).is_err() {
            debug!("session authority already wired, ignoring user directory");
        } else {
            debug!("session authority wired to user directory");
        }
    }

    pub fn wiring_state(&self) -> WiringState {
        if self.directory.get().is_some() {
            WiringState::Wired
        } else {
            WiringState::Unwired
        }
    }

    /// Authenticate a user, returning a session key.
    ///
    /// A failed login locks the account. If the lockout itself fails, that
    /// failure is logged and the caller still gets the original error.
    ///
    /// # Panics
    ///
    /// Panics if no user directory was set, or if it has been dropped.
    pub fn authenticate_user(&self, username: &str, password: &str) -> Result<SessionKey> {
        let directory = self.user_directory();

        if let Err(auth_err) = directory.validate_user(username, password) {
            // a single bad login locks the account
            if let Err(lock_err) = directory.lock_out_user(username) {
                warn!(username, error = %lock_err, "failed to lock out user");
            }
            info!(username, "authentication failed");
            return Err(AuthlinkError::authentication(username, auth_err));
        }

        info!(username, "user authenticated");
        Ok(SessionKey::placeholder())
    }

    /// Check a session key, returning the logged-in user.
    pub fn validate_session(&self, key: &SessionKey) -> Result<Identity> {
        debug!(key = %key, "validating session");
        Ok(Identity::new(STUB_USERNAME, STUB_USER_ID))
    }

    fn user_directory(&self) -> Arc<dyn UserDirectory> {
        let Some(weak) = self.directory.get() else {
            panic!("user directory was never set on the session authority");
        };
        match weak.upgrade() {
            Some(directory) => directory,
            None => panic!("user directory was dropped while the session authority is in use"),
        }
    }
}
