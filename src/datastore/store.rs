//! Credential store implementation.

use std::sync::{Arc, OnceLock, Weak};

use tracing::{debug, info};

use super::SessionValidator;
use crate::error::AuthlinkError;
use crate::identity::{ConnectionParams, SessionKey, UserId};
use crate::state::WiringState;
use crate::Result;

/// User id returned by the stubbed credential table.
const STUB_USER_ID: UserId = 42;

/// Credential store backed by a SQL database.
///
/// Construct it with [`CredentialStore::new`], then hand it a session
/// validator with [`CredentialStore::set_session_validator`] before calling
/// [`CredentialStore::change_password`].
pub struct CredentialStore {
    params: ConnectionParams,
    sessions: OnceLock<Weak<dyn SessionValidator>>,
}

impl CredentialStore {
    /// Create a new store. The session validator is left unset.
    pub fn new(params: ConnectionParams) -> Self {
        debug!(host = %params.host, login = %params.login, "credential store created");
        Self {
            params,
            sessions: OnceLock::new(),
        }
    }

    /// Connection parameters this store was built with.
    pub fn params(&self) -> &ConnectionParams {
        &self.params
    }

    /// Bind the session validator.
    ///
    /// Only the first call takes effect; later calls are ignored.
    pub fn set_session_validator(&self, validator: Weak<dyn SessionValidator>) {
        if self.sessions.set(validator).is_err() {
            debug!("credential store already wired, ignoring session validator");
        } else {
            debug!("credential store wired to session validator");
        }
    }

    pub fn wiring_state(&self) -> WiringState {
        if self.sessions.get().is_some() {
            WiringState::Wired
        } else {
            WiringState::Unwired
        }
    }

    /// Check a username/password pair, returning the user id.
    pub fn validate_user(&self, username: &str, _password: &str) -> Result<UserId> {
        debug!(username, "validating user");
        Ok(STUB_USER_ID)
    }

    /// Record that the account can no longer log in.
    pub fn lock_out_user(&self, username: &str) -> Result<()> {
        info!(username, "user locked out");
        Ok(())
    }

    /// Change a user's password.
    ///
    /// The session must belong to `username`; a user may only change their
    /// own password.
    ///
    /// # Panics
    ///
    /// Panics if no session validator was set, or if it has been dropped.
    pub fn change_password(
        &self,
        key: &SessionKey,
        username: &str,
        _new_password: &str,
    ) -> Result<()> {
        let sessions = self.session_validator();

        let identity = sessions
            .validate_session(key)
            .map_err(|e| AuthlinkError::authentication(username, e))?;

        if identity.username != username {
            return Err(AuthlinkError::Unauthorized {
                authenticated: identity.username,
                requested: username.to_string(),
            });
        }

        info!(username, "password changed");
        Ok(())
    }

    fn session_validator(&self) -> Arc<dyn SessionValidator> {
        let Some(weak) = self.sessions.get() else {
            panic!("session validator was never set on the credential store");
        };
        match weak.upgrade() {
            Some(validator) => validator,
            None => panic!("session validator was dropped while the credential store is in use"),
        }
    }
}
