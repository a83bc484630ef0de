// ABOUTME: Environment configuration management for the admin bootstrap tool
// ABOUTME: Handles environment variables, database URL parsing, and credential loading
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-derived configuration.
//!
//! All settings come from process environment variables, with an optional
//! command-line override for the database URL. No global state is read.

use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Type-safe database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if s.starts_with("sqlite:") {
            let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
            if path_str == ":memory:" {
                Ok(DatabaseUrl::Memory)
            } else {
                Ok(DatabaseUrl::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Err(AppError::config_invalid(
                "PostgreSQL URLs are not supported; use a sqlite: URL or a file path",
            ))
        } else {
            // Fallback: treat as SQLite file path
            Ok(DatabaseUrl::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    pub fn to_connection_string(&self) -> String {
        match self {
            DatabaseUrl::SQLite { path } => format!("sqlite:{}", path.display()),
            DatabaseUrl::Memory => "sqlite::memory:".to_string(),
        }
    }

    /// Check if this is an in-memory database
    pub fn is_memory(&self) -> bool {
        matches!(self, DatabaseUrl::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/users.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Credentials for the initial admin account
#[derive(Clone)]
pub struct AdminConfig {
    /// Display name for the admin account
    pub admin_name: String,
    /// Email address for the admin account
    pub admin_email: String,
    /// Plaintext password, hashed before it ever reaches the store
    pub admin_password: String,
}

impl AdminConfig {
    /// Load admin credentials from environment variables.
    ///
    /// `ADMIN_NAME` falls back to "Admin" when unset; `ADMIN_EMAIL` and
    /// `ADMIN_PASSWORD` are required.
    pub fn from_env() -> AppResult<Self> {
        let admin_name = env_var_or("ADMIN_NAME", "Admin");
        let admin_email =
            env::var("ADMIN_EMAIL").map_err(|_| AppError::config_missing("ADMIN_EMAIL"))?;
        let admin_password =
            env::var("ADMIN_PASSWORD").map_err(|_| AppError::config_missing("ADMIN_PASSWORD"))?;

        Ok(Self {
            admin_name,
            admin_email,
            admin_password,
        })
    }
}

// Manual Debug keeps the plaintext password out of log output.
impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("admin_name", &self.admin_name)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"<redacted>")
            .finish()
    }
}

/// Complete configuration for one bootstrap run
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Where the user store lives
    pub database_url: DatabaseUrl,
    /// Credentials for the admin account to create
    pub admin: AdminConfig,
}

impl BootstrapConfig {
    /// Load configuration from the environment.
    ///
    /// The database URL resolves in precedence order: explicit override,
    /// then the `DATABASE_URL` environment variable, then the built-in
    /// default of `sqlite:./data/users.db`.
    pub fn from_env(database_url_override: Option<String>) -> AppResult<Self> {
        let database_url = match database_url_override.or_else(|| env::var("DATABASE_URL").ok()) {
            Some(raw) => DatabaseUrl::parse_url(&raw)?,
            None => DatabaseUrl::default(),
        };

        Ok(Self {
            database_url,
            admin: AdminConfig::from_env()?,
        })
    }
}

/// Get environment variable with default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
