//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_storage;

#[cfg(test)]
pub use user_storage::MockUserStorage;
pub use user_storage::{USER_NOT_FOUND, UserStorage, UserStorageError};
