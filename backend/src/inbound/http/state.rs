//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on the storage port and stay testable with any implementation of it.

use std::sync::Arc;

use crate::domain::ports::UserStorage;

/// Default upper bound on request body size.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use users_backend::inbound::http::state::HttpState;
/// use users_backend::outbound::storage::InMemoryUserStorage;
///
/// let state = HttpState::new(Arc::new(InMemoryUserStorage::new())).with_body_limit(4096);
/// assert_eq!(state.body_limit, 4096);
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserStorage>,
    pub body_limit: usize,
}

impl HttpState {
    pub fn new(users: Arc<dyn UserStorage>) -> Self {
        Self {
            users,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Override the maximum accepted request body size in bytes.
    #[must_use]
    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}
