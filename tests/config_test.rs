#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use admin_bootstrap::config::{AdminConfig, BootstrapConfig, DatabaseUrl};
use admin_bootstrap::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_bootstrap_env() {
    env::remove_var("ADMIN_NAME");
    env::remove_var("ADMIN_EMAIL");
    env::remove_var("ADMIN_PASSWORD");
    env::remove_var("DATABASE_URL");
}

#[test]
#[serial]
fn test_admin_config_reads_credentials_verbatim() {
    clear_bootstrap_env();
    env::set_var("ADMIN_NAME", "  Dr. Admin  ");
    env::set_var("ADMIN_EMAIL", "Admin@Example.COM");
    env::set_var("ADMIN_PASSWORD", "change-me");

    let config = AdminConfig::from_env().expect("Failed to load admin config");

    // Values are not trimmed, lowercased, or validated
    assert_eq!(config.admin_name, "  Dr. Admin  ");
    assert_eq!(config.admin_email, "Admin@Example.COM");
    assert_eq!(config.admin_password, "change-me");

    clear_bootstrap_env();
}

#[test]
#[serial]
fn test_admin_name_defaults_when_unset() {
    clear_bootstrap_env();
    env::set_var("ADMIN_EMAIL", "admin@example.com");
    env::set_var("ADMIN_PASSWORD", "change-me");

    let config = AdminConfig::from_env().expect("Failed to load admin config");

    assert_eq!(config.admin_name, "Admin");

    clear_bootstrap_env();
}

#[test]
#[serial]
fn test_missing_admin_email_is_rejected() {
    clear_bootstrap_env();
    env::set_var("ADMIN_PASSWORD", "change-me");

    let error = AdminConfig::from_env().expect_err("Expected missing email to fail");

    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.contains("ADMIN_EMAIL"));

    clear_bootstrap_env();
}

#[test]
#[serial]
fn test_missing_admin_password_is_rejected() {
    clear_bootstrap_env();
    env::set_var("ADMIN_EMAIL", "admin@example.com");

    let error = AdminConfig::from_env().expect_err("Expected missing password to fail");

    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.contains("ADMIN_PASSWORD"));

    clear_bootstrap_env();
}

#[test]
#[serial]
fn test_database_url_override_wins_over_environment() {
    clear_bootstrap_env();
    env::set_var("ADMIN_EMAIL", "admin@example.com");
    env::set_var("ADMIN_PASSWORD", "change-me");
    env::set_var("DATABASE_URL", "sqlite:./from-env.db");

    let config = BootstrapConfig::from_env(Some("sqlite:./from-flag.db".to_string()))
        .expect("Failed to load config");

    assert_eq!(
        config.database_url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./from-flag.db")
        }
    );

    clear_bootstrap_env();
}

#[test]
#[serial]
fn test_database_url_from_environment() {
    clear_bootstrap_env();
    env::set_var("ADMIN_EMAIL", "admin@example.com");
    env::set_var("ADMIN_PASSWORD", "change-me");
    env::set_var("DATABASE_URL", "sqlite::memory:");

    let config = BootstrapConfig::from_env(None).expect("Failed to load config");

    assert_eq!(config.database_url, DatabaseUrl::Memory);

    clear_bootstrap_env();
}

#[test]
#[serial]
fn test_database_url_falls_back_to_default() {
    clear_bootstrap_env();
    env::set_var("ADMIN_EMAIL", "admin@example.com");
    env::set_var("ADMIN_PASSWORD", "change-me");

    let config = BootstrapConfig::from_env(None).expect("Failed to load config");

    assert_eq!(config.database_url, DatabaseUrl::default());
    assert_eq!(
        config.database_url.to_connection_string(),
        "sqlite:./data/users.db"
    );

    clear_bootstrap_env();
}

#[test]
#[serial]
fn test_invalid_database_url_is_rejected() {
    clear_bootstrap_env();
    env::set_var("ADMIN_EMAIL", "admin@example.com");
    env::set_var("ADMIN_PASSWORD", "change-me");
    env::set_var("DATABASE_URL", "postgres://localhost/app");

    let error = BootstrapConfig::from_env(None).expect_err("Expected postgres URL to fail");

    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    clear_bootstrap_env();
}
