//! Session store holding the single bearer token of this client

use crate::error::Result;
use crate::identity::JwtUserData;
use crate::storage::{KeyValueStore, MemoryStore};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Storage key of the persisted session token
pub const TOKEN_KEY: &str = "authToken";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Headers sent by every request, authenticated or not
pub fn default_headers() -> HashMap<String, String> {
    HashMap::from([(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string())])
}

/// Holder of the current session token
///
/// Cloning is cheap and clones share the same backing storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Session store that forgets everything when dropped
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Current token, if any
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Replace the stored token
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)?;
        info!("Session token stored");
        Ok(())
    }

    /// Drop the stored token; a no-op when none is stored
    pub fn clear_token(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        info!("Session token cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Default headers plus `Authorization: Bearer <token>` when a token is stored
    pub fn auth_headers(&self) -> HashMap<String, String> {
        let mut headers = default_headers();
        if let Some(token) = self.token().filter(|t| !t.is_empty()) {
            headers.insert(AUTHORIZATION.to_string(), format!("Bearer {token}"));
        }
        headers
    }

    /// Claims of the stored token, for display only
    ///
    /// The signature is NOT checked. Never use the result to make an access decision.
    pub fn cached_identity(&self) -> Option<JwtUserData> {
        let token = self.token()?;
        let identity = JwtUserData::decode_unverified(&token);
        if identity.is_none() {
            warn!("Stored session token could not be decoded");
        }
        identity
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_store() {
        let session = SessionStore::in_memory();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());

        session.set_token("token_123").unwrap();
        assert_eq!(session.token().as_deref(), Some("token_123"));
        assert!(session.is_authenticated());

        session.clear_token().unwrap();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());

        session.clear_token().unwrap();
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let session = SessionStore::in_memory();
        session.set_token("").unwrap();

        assert!(!session.is_authenticated());
        assert!(!session.auth_headers().contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_auth_headers() {
        let session = SessionStore::in_memory();

        let headers = session.auth_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert!(!headers.contains_key(AUTHORIZATION));

        session.set_token("abc.def.ghi").unwrap();
        let headers = session.auth_headers();
        assert_eq!(headers[CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(headers[AUTHORIZATION], "Bearer abc.def.ghi");
    }

    #[test]
    fn test_clones_share_token() {
        let session = SessionStore::in_memory();
        let other = session.clone();

        session.set_token("shared").unwrap();
        assert_eq!(other.token().as_deref(), Some("shared"));
    }

    #[test]
    fn test_cached_identity_absent() {
        let session = SessionStore::in_memory();
        assert_eq!(session.cached_identity(), None);

        session.set_token("abc.def.ghi").unwrap();
        assert_eq!(session.cached_identity(), None);
    }
}
