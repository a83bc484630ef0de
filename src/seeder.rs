// ABOUTME: Idempotent admin seeding service for the bootstrap command
// ABOUTME: Creates the initial admin user only when the store holds no users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Admin Bootstrap Contributors

//! First-admin seeding against an injected store and hasher

use crate::config::AdminConfig;
use crate::errors::{AppError, AppResult};
use crate::hashing::PasswordHasher;
use crate::models::User;
use crate::store::UserStore;
use tracing::{info, warn};
use uuid::Uuid;

/// What a seeding run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and the admin user was created
    Created {
        /// Identifier of the newly created user
        user_id: Uuid,
    },
    /// At least one user already existed, so nothing was written
    AlreadySeeded,
}

/// Service that seeds the initial admin user
pub struct AdminSeeder<S, H> {
    store: S,
    hasher: H,
    config: AdminConfig,
}

impl<S, H> AdminSeeder<S, H>
where
    S: UserStore,
    H: PasswordHasher,
{
    /// Create a new seeder over the given store and hasher
    #[must_use]
    pub const fn new(store: S, hasher: H, config: AdminConfig) -> Self {
        Self {
            store,
            hasher,
            config,
        }
    }

    /// Seed the initial admin user if the store is empty.
    ///
    /// Runs the guard (any user present means nothing is written), hashes
    /// the configured password, and inserts through the transactional
    /// first-user path so a concurrent run cannot create a second account.
    /// Either outcome is a success; only configuration, hashing, or
    /// persistence failures produce an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store cannot be queried or written
    /// - Password hashing fails
    pub async fn run(&self) -> AppResult<SeedOutcome> {
        let existing = self
            .store
            .get_user_count()
            .await
            .map_err(|e| AppError::database(format!("Failed to count users: {e}")))?;

        if existing > 0 {
            warn!("Admin user already exists. Aborting.");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        info!("Creating initial admin user...");

        let password_hash = self.hasher.hash(&self.config.admin_password)?;
        let user = User::new(
            self.config.admin_name.clone(),
            self.config.admin_email.clone(),
            password_hash,
        );

        let inserted = self
            .store
            .create_first_user(&user)
            .await
            .map_err(|e| AppError::database(format!("Failed to create admin user: {e}")))?;

        match inserted {
            Some(user_id) => {
                info!(user_id = %user_id, email = %self.config.admin_email, "Admin user created successfully!");
                Ok(SeedOutcome::Created { user_id })
            }
            None => {
                // Another process seeded between our count and insert.
                warn!("Admin user already exists. Aborting.");
                Ok(SeedOutcome::AlreadySeeded)
            }
        }
    }
}
