//! # authlink
//!
//! A credential store and a session authority that need each other, wired
//! together without either one naming the other's concrete type.
//!
//! Each side declares the narrow capability it consumes as a trait:
//! the credential store asks for a [`SessionValidator`], the session
//! authority asks for a [`UserDirectory`]. The [`wiring`] module is the
//! only place that knows both concrete types; it implements the traits,
//! builds both components and injects each into the other as a weak
//! back-reference.
//!
//! Both backing stores are stubbed. Nothing is persisted and nothing
//! connects over the network.
//!
//! ## Quick Start
//!
//! ```
//! use authlink::{App, ConnectionParams, SessionKey};
//!
//! let app = App::new(
//!     ConnectionParams::new("localhost", "sqluser", "hunter2"),
//!     ConnectionParams::new("localhost", "redisuser", "hunter2"),
//! );
//!
//! let key = app.authority.authenticate_user("alice", "pw")?;
//! assert_eq!(key, SessionKey::placeholder());
//! # Ok::<(), authlink::AuthlinkError>(())
//! ```

pub mod cli;
pub mod config;
pub mod datastore;
pub mod error;
pub mod identity;
pub mod logging;
pub mod session;
pub mod state;
pub mod wiring;

// Re-export commonly used types
pub use datastore::{CredentialStore, SessionValidator};
pub use error::{AuthlinkError, Result};
pub use identity::{ConnectionParams, Identity, SessionKey, UserId};
pub use session::{SessionAuthority, UserDirectory};
pub use state::WiringState;
pub use wiring::App;
