//! Composition root.
//!
//! This is the only module that knows both concrete types. It connects each
//! component to the capability trait the other one declares, builds both,
//! and cross-wires them.

use std::sync::{Arc, Weak};

use tracing::info;

use crate::config::{Config, ConfigError};
use crate::datastore::{CredentialStore, SessionValidator};
use crate::identity::{ConnectionParams, Identity, SessionKey, UserId};
use crate::session::{SessionAuthority, UserDirectory};
use crate::Result;

impl SessionValidator for SessionAuthority {
    fn validate_session(&self, key: &SessionKey) -> Result<Identity> {
        SessionAuthority::validate_session(self, key)
    }
}

impl UserDirectory for CredentialStore {
    fn validate_user(&self, username: &str, password: &str) -> Result<UserId> {
        CredentialStore::validate_user(self, username, password)
    }

    fn lock_out_user(&self, username: &str) -> Result<()> {
        CredentialStore::lock_out_user(self, username)
    }
}

/// Owner of both components.
///
/// Each component only holds a weak reference to the other, so the pair
/// stays usable for as long as the `App` is alive.
pub struct App {
    pub store: Arc<CredentialStore>,
    pub authority: Arc<SessionAuthority>,
}

impl App {
    /// Build both components from connection parameters and wire them.
    pub fn new(datastore: ConnectionParams, session_cache: ConnectionParams) -> Self {
        let store = Arc::new(CredentialStore::new(datastore));
        let authority = Arc::new(SessionAuthority::new(session_cache));
        wire(&store, &authority);
        Self { store, authority }
    }

    /// Build from a loaded configuration.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.datastore.to_params(),
            config.session_cache.to_params(),
        ))
    }
}

/// Inject each component into the other.
pub fn wire(store: &Arc<CredentialStore>, authority: &Arc<SessionAuthority>) {
    let sessions: Weak<dyn SessionValidator> = Arc::<SessionAuthority>::downgrade(authority);
    let directory: Weak<dyn UserDirectory> = Arc::<CredentialStore>::downgrade(store);

    store.set_session_validator(sessions);
    authority.set_user_directory(directory);

    info!("credential store and session authority wired");
}
