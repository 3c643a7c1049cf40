// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Multi-account directory: accounts previously used on this device and
//! which of them is shown as current.
//!
//! Switching accounts is bookkeeping only. It never touches the session
//! tokens; the caller has to log in as the target account separately.

use crate::error::Result;
use crate::models::{AccountProfilePatch, StoredAccount};
use crate::storage::{keys, KeyValueStore, StorageError};
use crate::time_utils::now_rfc3339;
use std::sync::Arc;

/// Account directory on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct AccountDirectory {
    store: Arc<dyn KeyValueStore>,
}

impl AccountDirectory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All remembered accounts, most recently added first.
    pub fn get_stored_accounts(&self) -> Result<Vec<StoredAccount>> {
        let Some(raw) = self.store.get(keys::STORED_ACCOUNTS)? else {
            return Ok(Vec::new());
        };

        let accounts = serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            key: keys::STORED_ACCOUNTS.to_string(),
            reason: e.to_string(),
        })?;
        Ok(accounts)
    }

    pub fn save_stored_accounts(&self, accounts: &[StoredAccount]) -> Result<()> {
        let raw = serde_json::to_string(accounts).map_err(|e| StorageError::Corrupt {
            key: keys::STORED_ACCOUNTS.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(keys::STORED_ACCOUNTS, &raw)?;
        Ok(())
    }

    /// Insert or update by id. Updates keep the entry's position; new
    /// accounts go to the front.
    pub fn add_stored_account(&self, account: StoredAccount) -> Result<bool> {
        let mut accounts = self.get_stored_accounts()?;

        match accounts.iter_mut().find(|a| a.id == account.id) {
            Some(existing) => {
                tracing::debug!(account_id = %account.id, "Updating stored account");
                *existing = account;
            }
            None => {
                tracing::debug!(account_id = %account.id, "Remembering new account");
                accounts.insert(0, account);
            }
        }

        self.save_stored_accounts(&accounts)?;
        Ok(true)
    }

    /// Make `account_id` the current account. Returns `false` (and changes
    /// nothing) if it is not in the directory.
    pub fn switch_to_account(&self, account_id: &str) -> Result<bool> {
        let mut accounts = self.get_stored_accounts()?;
        let Some(account) = accounts.iter_mut().find(|a| a.id == account_id) else {
            tracing::debug!(account_id, "Switch requested for unknown account");
            return Ok(false);
        };

        account.last_used = now_rfc3339();
        self.save_stored_accounts(&accounts)?;
        self.store.set(keys::CURRENT_ACCOUNT_ID, account_id)?;

        tracing::debug!(
            account_id,
            "Switched current account (session tokens unchanged)"
        );
        Ok(true)
    }

    /// Forget an account. Always returns `true`, even for unknown ids.
    pub fn remove_account(&self, account_id: &str) -> Result<bool> {
        let mut accounts = self.get_stored_accounts()?;
        accounts.retain(|a| a.id != account_id);
        self.save_stored_accounts(&accounts)?;

        if self.get_current_account_id()?.as_deref() == Some(account_id) {
            self.store.remove(keys::CURRENT_ACCOUNT_ID)?;
        }
        Ok(true)
    }

    pub fn get_current_account_id(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(keys::CURRENT_ACCOUNT_ID)?
            .filter(|id| !id.is_empty()))
    }

    /// The entry the current-account pointer resolves to, if any.
    pub fn current_account(&self) -> Result<Option<StoredAccount>> {
        let Some(current_id) = self.get_current_account_id()? else {
            return Ok(None);
        };
        Ok(self
            .get_stored_accounts()?
            .into_iter()
            .find(|a| a.id == current_id))
    }

    /// Merge profile edits into the current account. Returns `false` when
    /// there is no current account or it is not in the directory.
    pub fn update_current_account_profile(&self, patch: &AccountProfilePatch) -> Result<bool> {
        let Some(current_id) = self.get_current_account_id()? else {
            return Ok(false);
        };

        let mut accounts = self.get_stored_accounts()?;
        let Some(account) = accounts.iter_mut().find(|a| a.id == current_id) else {
            return Ok(false);
        };

        if let Some(username) = &patch.username {
            account.username = username.clone();
        }
        if let Some(email) = &patch.email {
            account.email = email.clone();
        }
        if let Some(profile_image) = &patch.profile_image {
            account.profile_image = profile_image.clone();
        }

        self.save_stored_accounts(&accounts)?;
        Ok(true)
    }

    /// Drop the current-account pointer only.
    pub fn clear_current(&self) -> Result<()> {
        self.store.remove(keys::CURRENT_ACCOUNT_ID)?;
        Ok(())
    }

    /// Forget every remembered account.
    pub fn clear_directory(&self) -> Result<()> {
        self.store.remove(keys::STORED_ACCOUNTS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn account(id: &str, username: &str) -> StoredAccount {
        StoredAccount {
            id: id.to_string(),
            username: username.to_string(),
            email: format!("{}@example.org", username),
            profile_image: None,
            last_used: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    fn directory() -> (Arc<MemoryStore>, AccountDirectory) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), AccountDirectory::new(store))
    }

    #[test]
    fn test_new_accounts_are_prepended() {
        let (_, dir) = directory();
        dir.add_stored_account(account("1", "asha")).unwrap();
        dir.add_stored_account(account("2", "ravi")).unwrap();

        let ids: Vec<String> = dir
            .get_stored_accounts()
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_upsert_keeps_position() {
        let (_, dir) = directory();
        dir.add_stored_account(account("1", "asha")).unwrap();
        dir.add_stored_account(account("2", "ravi")).unwrap();
        assert!(dir.add_stored_account(account("1", "asha_k")).unwrap());

        let accounts = dir.get_stored_accounts().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].id, "1");
        assert_eq!(accounts[1].username, "asha_k");
    }

    #[test]
    fn test_switch_updates_last_used_and_pointer() {
        let (_, dir) = directory();
        dir.add_stored_account(account("1", "asha")).unwrap();

        assert!(dir.switch_to_account("1").unwrap());
        assert_eq!(dir.get_current_account_id().unwrap().as_deref(), Some("1"));
        let current = dir.current_account().unwrap().unwrap();
        assert_ne!(current.last_used, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_switch_unknown_leaves_pointer() {
        let (_, dir) = directory();
        dir.add_stored_account(account("1", "asha")).unwrap();
        dir.switch_to_account("1").unwrap();

        assert!(!dir.switch_to_account("does-not-exist").unwrap());
        assert_eq!(dir.get_current_account_id().unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_remove_current_clears_pointer() {
        let (store, dir) = directory();
        store.set(keys::ACCESS_TOKEN, "acc").unwrap();
        dir.add_stored_account(account("1", "asha")).unwrap();
        dir.switch_to_account("1").unwrap();

        assert!(dir.remove_account("1").unwrap());
        assert_eq!(dir.get_current_account_id().unwrap(), None);
        assert!(dir.get_stored_accounts().unwrap().is_empty());
        // Session untouched
        assert!(store.contains_key(keys::ACCESS_TOKEN));

        // Unknown ids still report success
        assert!(dir.remove_account("nobody").unwrap());
    }

    #[test]
    fn test_remove_other_keeps_pointer() {
        let (_, dir) = directory();
        dir.add_stored_account(account("1", "asha")).unwrap();
        dir.add_stored_account(account("2", "ravi")).unwrap();
        dir.switch_to_account("1").unwrap();

        dir.remove_account("2").unwrap();
        assert_eq!(dir.get_current_account_id().unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_update_current_profile() {
        let (_, dir) = directory();
        let patch = AccountProfilePatch {
            username: Some("asha_k".to_string()),
            profile_image: Some(Some("/media/profile_images/a.png".to_string())),
            ..Default::default()
        };

        // No pointer yet
        assert!(!dir.update_current_account_profile(&patch).unwrap());

        dir.add_stored_account(account("1", "asha")).unwrap();
        dir.switch_to_account("1").unwrap();
        assert!(dir.update_current_account_profile(&patch).unwrap());

        let current = dir.current_account().unwrap().unwrap();
        assert_eq!(current.username, "asha_k");
        assert_eq!(current.email, "asha@example.org");
        assert_eq!(
            current.profile_image.as_deref(),
            Some("/media/profile_images/a.png")
        );

        let clear = AccountProfilePatch {
            profile_image: Some(None),
            ..Default::default()
        };
        dir.update_current_account_profile(&clear).unwrap();
        assert_eq!(dir.current_account().unwrap().unwrap().profile_image, None);
    }

    #[test]
    fn test_dangling_pointer_is_a_miss() {
        let (store, dir) = directory();
        store.set(keys::CURRENT_ACCOUNT_ID, "42").unwrap();
        assert!(!dir
            .update_current_account_profile(&AccountProfilePatch::default())
            .unwrap());
        assert_eq!(dir.current_account().unwrap(), None);
    }

    #[test]
    fn test_corrupt_directory_is_an_error() {
        let (store, dir) = directory();
        store.set(keys::STORED_ACCOUNTS, "{not json").unwrap();
        assert!(matches!(
            dir.get_stored_accounts(),
            Err(crate::error::ApiError::Storage(_))
        ));
    }
}
