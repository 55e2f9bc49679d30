//! User storage adapters and backend selection.
//!
//! The configured backend name is resolved once at startup. Only the
//! in-memory store exists today; new backends implement
//! [`UserStorage`](crate::domain::ports::UserStorage) and get a variant in
//! [`StorageBackend`].

mod memory;

pub use memory::InMemoryUserStorage;

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::ports::UserStorage;

/// Backend name selected when configuration does not say otherwise.
pub const DEFAULT_STORAGE_BACKEND: &str = "mock";

/// Raised when configuration names a backend that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageSelectionError {
    #[error("invalid database type: {kind}")]
    InvalidDatabaseType { kind: String },
}

/// Storage backends known to this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local map; accepts the names `mock` and `memory`.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = StorageSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" | "memory" => Ok(Self::Memory),
            _ => Err(StorageSelectionError::InvalidDatabaseType { kind: s.to_owned() }),
        }
    }
}

impl StorageBackend {
    /// Construct a fresh store for this backend.
    pub fn build(self) -> Arc<dyn UserStorage> {
        match self {
            Self::Memory => Arc::new(InMemoryUserStorage::new()),
        }
    }
}

/// Resolve a backend name and construct its store.
///
/// # Examples
/// ```
/// use users_backend::outbound::storage::build_user_storage;
///
/// assert!(build_user_storage("mock").is_ok());
/// assert!(build_user_storage("postgres").is_err());
/// ```
pub fn build_user_storage(kind: &str) -> Result<Arc<dyn UserStorage>, StorageSelectionError> {
    Ok(kind.parse::<StorageBackend>()?.build())
}
