//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `DIRECTORY_*` environment variables, or a
//! configuration file, in that order of precedence.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Settings for the directory server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// PostgreSQL connection URL. Required to start the server.
    pub database_url: Option<String>,
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl DirectorySettings {
    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Parse the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns the parse failure when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> DirectorySettings {
        DirectorySettings::load_from_iter([OsString::from("directory")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("DIRECTORY_DATABASE_URL", None::<String>),
            ("DIRECTORY_BIND_ADDR", None::<String>),
            ("DIRECTORY_POOL_MAX_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.database_url().is_none());
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid literal")
        );
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "DIRECTORY_DATABASE_URL",
                Some("postgres://directory@db/directory".to_owned()),
            ),
            ("DIRECTORY_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            ("DIRECTORY_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.database_url(),
            Some("postgres://directory@db/directory")
        );
        assert_eq!(
            settings.bind_addr().expect("override parses"),
            "127.0.0.1:9090".parse::<SocketAddr>().expect("valid literal")
        );
        assert_eq!(settings.pool_max_size(), 4);
    }

    #[rstest]
    fn invalid_bind_addr_is_reported() {
        let _guard = lock_env([
            ("DIRECTORY_DATABASE_URL", None::<String>),
            ("DIRECTORY_BIND_ADDR", Some("not-an-address".to_owned())),
            ("DIRECTORY_POOL_MAX_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }
}
