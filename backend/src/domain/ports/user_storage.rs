//! Storage port for user records.
//!
//! Implementations are deliberately permissive: `create` and `update`
//! overwrite, `delete` ignores absent records. Existence rules ("already
//! exists", "must exist") belong to the caller, which probes with
//! [`UserStorage::get`] first. Only [`UserStorageError::NotFound`] carries
//! meaning for callers; every other variant is an internal failure.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

use super::define_port_error;

/// Message returned to clients when a user lookup misses.
pub const USER_NOT_FOUND: &str = "user not found";

define_port_error! {
    /// Errors raised by user storage adapters.
    pub enum UserStorageError {
        /// No record is stored under the identifier.
        NotFound { id: String } => "user not found: {id}",
        /// The backing store could not be reached or is in a broken state.
        Unavailable { message: String } => "user storage unavailable: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user storage query failed: {message}",
    }
}

impl From<UserStorageError> for Error {
    fn from(value: UserStorageError) -> Self {
        if value.is_not_found() {
            Error::not_found(USER_NOT_FOUND)
        } else {
            Error::internal(value.to_string())
        }
    }
}

/// Capability set every user storage backend provides.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Return every stored user. Order is unspecified.
    async fn list(&self) -> Result<Vec<User>, UserStorageError>;

    /// Store `user` under its identifier, replacing any existing record.
    async fn create(&self, user: &User) -> Result<(), UserStorageError>;

    /// Fetch a user, failing with [`UserStorageError::NotFound`] when absent.
    async fn get(&self, id: &UserId) -> Result<User, UserStorageError>;

    /// Replace the record stored under `id`.
    async fn update(&self, id: &UserId, user: &User) -> Result<(), UserStorageError>;

    /// Remove the record stored under `id`, if any.
    async fn delete(&self, id: &UserId) -> Result<(), UserStorageError>;
}
