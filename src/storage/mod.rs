// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer: a string key-value store, the device-local
//! counterpart of browser storage.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Persisted key names.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const IS_SUPERUSER: &str = "is_superuser";
    pub const CURRENT_ACCOUNT_ID: &str = "currentAccountId";
    /// JSON-encoded array of stored accounts
    pub const STORED_ACCOUNTS: &str = "storedAccounts";
}

/// String key-value persistence.
///
/// Implementations must be safe to share across tasks. There is no
/// transactional guarantee across keys.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt stored value for {key}: {reason}")]
    Corrupt { key: String, reason: String },
}
