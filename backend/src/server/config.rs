//! HTTP server configuration object and helpers.

use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::domain::ports::UserStorage;
use crate::outbound::storage::{StorageSelectionError, build_user_storage};
use crate::settings::ServerSettings;

/// Raised when settings cannot be turned into a runnable server.
#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("invalid bind address {address}: {source}")]
    InvalidBindAddress {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("bind address {address} resolved to nothing")]
    UnresolvedBindAddress { address: String },
    #[error(transparent)]
    Storage(#[from] StorageSelectionError),
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) timeout: Duration,
    pub(crate) body_limit: usize,
    pub(crate) prefix: String,
    pub(crate) users: Arc<dyn UserStorage>,
}

impl ServerConfig {
    /// Construct a configuration from explicit parts.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, users: Arc<dyn UserStorage>) -> Self {
        let defaults = ServerSettings::default();
        Self {
            bind_addr,
            timeout: defaults.timeout(),
            body_limit: defaults.max_body_bytes(),
            prefix: defaults.prefix(),
            users,
        }
    }

    /// Resolve the bind address and storage backend named by `settings`.
    ///
    /// # Errors
    /// Fails when the host does not resolve or the storage backend is unknown.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, ServerConfigError> {
        let address = format!("{}:{}", settings.host(), settings.port());
        let bind_addr = address
            .to_socket_addrs()
            .map_err(|source| ServerConfigError::InvalidBindAddress {
                address: address.clone(),
                source,
            })?
            .next()
            .ok_or_else(|| ServerConfigError::UnresolvedBindAddress {
                address: address.clone(),
            })?;
        let users = build_user_storage(settings.database_type())?;

        Ok(Self {
            bind_addr,
            timeout: settings.timeout(),
            body_limit: settings.max_body_bytes(),
            prefix: settings.prefix(),
            users,
        })
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn body_limit(&self) -> usize {
        self.body_limit
    }
}
