//! User data model and validation.
//!
//! Clients send a [`UserPayload`]; it becomes a [`User`] only after the
//! identifier passes validation, so malformed JSON and invalid records can be
//! reported separately.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Minimum allowed length for a user identifier.
pub const USER_ID_MIN: usize = 3;
/// Maximum allowed length for a user identifier.
pub const USER_ID_MAX: usize = 32;

/// Validation errors returned when a payload cannot become a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserValidationError {
    InvalidId { id: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { id } => write!(f, "invalid user ID: {id}"),
        }
    }
}

impl std::error::Error for UserValidationError {}

static USER_ID_RE: OnceLock<Regex> = OnceLock::new();

fn user_id_regex() -> &'static Regex {
    USER_ID_RE.get_or_init(|| {
        let pattern = format!("^[a-z0-9]{{{USER_ID_MIN},{USER_ID_MAX}}}$");
        Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("user id regex failed to compile: {error}"))
    })
}

/// Primary key of a user record.
///
/// Lowercase ASCII letters and digits only, between [`USER_ID_MIN`] and
/// [`USER_ID_MAX`] characters.
///
/// # Examples
/// ```
/// use users_backend::domain::UserId;
///
/// assert!(UserId::new("alice").is_ok());
/// assert!(UserId::new("Alice").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if !user_id_regex().is_match(&id) {
            return Err(UserValidationError::InvalidId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated user record as it appears on the wire.
///
/// Absent or `null` fields decode to their zero value (`""` or `0`), so a
/// body such as `{"id":"gina"}` still describes a user. Only the identifier
/// is checked, when the payload becomes a [`User`].
///
/// Example JSON: `{"id":"alice","name":"Alice","age":30}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "alice")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = 30)]
    pub age: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stored user record.
///
/// ## Invariants
/// - `id` satisfies the [`UserId`] format.
///
/// Serialises as `{"id":..,"name":..,"age":..}` in that field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "UserPayload", into = "UserPayload")]
pub struct User {
    #[schema(value_type = String, example = "alice")]
    id: UserId,
    #[schema(example = "Alice")]
    name: String,
    #[schema(example = 30)]
    age: i64,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Fallible constructor enforcing the identifier invariant.
    pub fn try_from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        age: i64,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id)?, name, age))
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

impl From<User> for UserPayload {
    fn from(value: User) -> Self {
        let User { id, name, age } = value;
        Self {
            id: id.into(),
            name,
            age,
        }
    }
}

impl TryFrom<UserPayload> for User {
    type Error = UserValidationError;

    fn try_from(value: UserPayload) -> Result<Self, Self::Error> {
        let UserPayload { id, name, age } = value;
        User::try_from_parts(id, name, age)
    }
}

#[cfg(test)]
mod tests;
