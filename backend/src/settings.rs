//! Server settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USERS_*` environment variables over an
//! optional configuration file. Every field is optional; the accessors
//! apply defaults.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::DEFAULT_BODY_LIMIT;
use crate::outbound::storage::DEFAULT_STORAGE_BACKEND;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PREFIX: &str = "/users";

/// Startup configuration for the users service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServerSettings {
    /// Host name or address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Client request and disconnect timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Storage backend name (`mock` or `memory`).
    pub database_type: Option<String>,
    /// Path prefix the user resource is mounted under.
    pub prefix: Option<String>,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: Option<usize>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn database_type(&self) -> &str {
        self.database_type
            .as_deref()
            .unwrap_or(DEFAULT_STORAGE_BACKEND)
    }

    /// Resource prefix with a leading slash and no trailing slash.
    ///
    /// A prefix that is empty or only slashes falls back to
    /// [`DEFAULT_PREFIX`], since the server root is taken by the greeting.
    pub fn prefix(&self) -> String {
        let trimmed = self
            .prefix
            .as_deref()
            .map(|raw| raw.trim().trim_matches('/'))
            .unwrap_or_default();
        if trimmed.is_empty() {
            DEFAULT_PREFIX.to_owned()
        } else {
            format!("/{trimmed}")
        }
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_BODY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and defaults.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "USERS_HOST",
        "USERS_PORT",
        "USERS_TIMEOUT_SECS",
        "USERS_DATABASE_TYPE",
        "USERS_PREFIX",
        "USERS_MAX_BODY_BYTES",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("users-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert_eq!(settings.database_type(), "mock");
        assert_eq!(settings.prefix(), "/users");
        assert_eq!(settings.max_body_bytes(), 1024 * 1024);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USERS_HOST", Some("0.0.0.0".to_owned())),
            ("USERS_PORT", Some("9090".to_owned())),
            ("USERS_TIMEOUT_SECS", Some("3".to_owned())),
            ("USERS_DATABASE_TYPE", Some("memory".to_owned())),
            ("USERS_PREFIX", Some("/v1/users".to_owned())),
            ("USERS_MAX_BODY_BYTES", Some("2048".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 9090);
        assert_eq!(settings.timeout(), Duration::from_secs(3));
        assert_eq!(settings.database_type(), "memory");
        assert_eq!(settings.prefix(), "/v1/users");
        assert_eq!(settings.max_body_bytes(), 2048);
    }

    #[rstest]
    #[case(None, "/users")]
    #[case(Some("accounts"), "/accounts")]
    #[case(Some("/accounts/"), "/accounts")]
    #[case(Some(" /v2/people "), "/v2/people")]
    #[case(Some("/"), "/users")]
    #[case(Some(""), "/users")]
    fn prefix_is_normalised(#[case] raw: Option<&str>, #[case] expected: &str) {
        let settings = ServerSettings {
            prefix: raw.map(str::to_owned),
            ..ServerSettings::default()
        };
        assert_eq!(settings.prefix(), expected);
    }
}
