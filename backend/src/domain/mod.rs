//! Domain primitives and ports.
//!
//! Purpose: define the user record, its validation rules, the transport
//! agnostic error type, and the storage port the HTTP adapter drives.
//!
//! Public surface:
//! - Error / ErrorCode: failure category and message.
//! - User / UserId / UserPayload: the user resource and its wire form.
//! - ports::UserStorage: storage capability set.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::user::{USER_ID_MAX, USER_ID_MIN, User, UserId, UserPayload, UserValidationError};
