// ABOUTME: Main library entry point for the admin bootstrap tool
// ABOUTME: Provides configuration, hashing, storage, and seeding building blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Admin Bootstrap Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy; nothing here needs it
#![deny(unsafe_code)]

//! # Admin Bootstrap
//!
//! A one-shot command that creates the initial admin user for a fresh
//! deployment. The command is idempotent: it only writes when the backing
//! user store holds no users at all, so re-running it (or racing a second
//! copy of it) can never produce a second account.
//!
//! ## Behavior
//!
//! - **Empty store**: creates one admin user from environment-derived
//!   configuration, with a bcrypt-hashed password
//! - **Populated store**: warns and exits successfully without writing
//! - **Persistence failure**: exits non-zero, leaving the store unchanged
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use admin_bootstrap::config::BootstrapConfig;
//! use admin_bootstrap::hashing::BcryptHasher;
//! use admin_bootstrap::seeder::AdminSeeder;
//! use admin_bootstrap::store::{SqliteStore, UserStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Reads ADMIN_NAME / ADMIN_EMAIL / ADMIN_PASSWORD / DATABASE_URL
//!     let config = BootstrapConfig::from_env(None)?;
//!
//!     let store = SqliteStore::new(&config.database_url).await?;
//!     store.migrate().await?;
//!
//!     let seeder = AdminSeeder::new(store, BcryptHasher::new(), config.admin);
//!     seeder.run().await?;
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crate (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access them.

/// Environment-derived configuration for the bootstrap command
pub mod config;

/// Unified error handling with standard error codes
pub mod errors;

/// Password hashing capability and the bcrypt implementation
pub mod hashing;

/// Core data models shared by seeding and storage
pub mod models;

/// Idempotent first-admin seeding service
pub mod seeder;

/// User storage abstraction with the SQLite backend
pub mod store;
