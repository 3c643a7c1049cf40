// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted session: the active access/refresh token pair.
//!
//! This is the only code that reads or writes the token keys.

use crate::error::Result;
use crate::storage::{keys, KeyValueStore};
use std::sync::Arc;

/// The active token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Session persistence on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(keys::ACCESS_TOKEN)?
            .filter(|t| !t.is_empty()))
    }

    pub fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(keys::REFRESH_TOKEN)?
            .filter(|t| !t.is_empty()))
    }

    /// The current session, or `None` when no access token is stored
    /// (whatever else may be lying around).
    pub fn current(&self) -> Result<Option<Session>> {
        let Some(access_token) = self.access_token()? else {
            return Ok(None);
        };
        Ok(Some(Session {
            access_token,
            refresh_token: self.refresh_token()?,
        }))
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.access_token()?.is_some())
    }

    /// Store a new token pair, replacing any previous session.
    pub fn save(&self, access_token: &str, refresh_token: &str) -> Result<()> {
        self.store.set(keys::ACCESS_TOKEN, access_token)?;
        self.store.set(keys::REFRESH_TOKEN, refresh_token)?;
        Ok(())
    }

    /// Replace only the access token (after a refresh).
    pub fn set_access_token(&self, access_token: &str) -> Result<()> {
        self.store.set(keys::ACCESS_TOKEN, access_token)?;
        Ok(())
    }

    pub fn is_superuser(&self) -> Result<bool> {
        Ok(self.store.get(keys::IS_SUPERUSER)?.as_deref() == Some("true"))
    }

    pub fn set_superuser(&self, is_superuser: bool) -> Result<()> {
        self.store
            .set(keys::IS_SUPERUSER, if is_superuser { "true" } else { "false" })?;
        Ok(())
    }

    /// Remove the token pair and the superuser flag.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(keys::ACCESS_TOKEN)?;
        self.store.remove(keys::REFRESH_TOKEN)?;
        self.store.remove(keys::IS_SUPERUSER)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_save_and_clear() {
        let store = Arc::new(MemoryStore::new());
        let session = SessionStore::new(store.clone());

        assert!(!session.is_authenticated().unwrap());
        assert_eq!(session.current().unwrap(), None);

        session.save("acc", "ref").unwrap();
        session.set_superuser(true).unwrap();
        assert_eq!(
            session.current().unwrap(),
            Some(Session {
                access_token: "acc".to_string(),
                refresh_token: Some("ref".to_string()),
            })
        );
        assert!(session.is_superuser().unwrap());

        store.set("theme", "dark").unwrap();
        session.clear().unwrap();
        assert!(!session.is_authenticated().unwrap());
        assert!(!session.is_superuser().unwrap());
        assert!(!store.contains_key(keys::REFRESH_TOKEN));
        assert!(store.contains_key("theme"));
    }

    #[test]
    fn test_refresh_token_alone_is_not_a_session() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::REFRESH_TOKEN, "ref").unwrap();
        store.set(keys::ACCESS_TOKEN, "").unwrap();

        let session = SessionStore::new(store);
        assert!(!session.is_authenticated().unwrap());
        assert_eq!(session.current().unwrap(), None);
    }
}
