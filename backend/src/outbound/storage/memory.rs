//! In-memory user storage.
//!
//! Records live in a `HashMap` behind an `RwLock`. Nothing is persisted; the
//! store starts empty with every process.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserStorage, UserStorageError};
use crate::domain::{User, UserId};

/// `UserStorage` adapter backed by a lock-guarded map.
///
/// # Examples
/// ```
/// use users_backend::domain::User;
/// use users_backend::domain::ports::UserStorage;
/// use users_backend::outbound::storage::InMemoryUserStorage;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let storage = InMemoryUserStorage::new();
/// let alice = User::try_from_parts("alice", "Alice", 30).unwrap();
/// storage.create(&alice).await.unwrap();
/// assert_eq!(storage.get(alice.id()).await.unwrap(), alice);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserStorage {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<UserId, User>>, UserStorageError> {
        self.users
            .read()
            .map_err(|_| UserStorageError::unavailable("in-memory user map lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<UserId, User>>, UserStorageError> {
        self.users
            .write()
            .map_err(|_| UserStorageError::unavailable("in-memory user map lock poisoned"))
    }
}

#[async_trait]
impl UserStorage for InMemoryUserStorage {
    async fn list(&self) -> Result<Vec<User>, UserStorageError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn create(&self, user: &User) -> Result<(), UserStorageError> {
        self.write()?.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn get(&self, id: &UserId) -> Result<User, UserStorageError> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| UserStorageError::not_found(id.as_ref()))
    }

    async fn update(&self, id: &UserId, user: &User) -> Result<(), UserStorageError> {
        self.write()?.insert(id.clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserStorageError> {
        self.write()?.remove(id);
        Ok(())
    }
}
