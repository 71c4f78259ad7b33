//! Security Service Rust Client
//!
//! A typed client for the security service API: login and session handling,
//! user enrollment, and management of roles, apps and administrators. The bearer
//! token is persisted through a pluggable [`KeyValueStore`].

pub mod api_client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod identity;
pub mod session;
pub mod storage;
pub mod types;

pub use api_client::{ApiClient, ApiClientConfig, DEFAULT_BASE_URL};
pub use envelope::Envelope;
pub use error::{ClientError, Result};
pub use identity::JwtUserData;
pub use session::SessionStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
