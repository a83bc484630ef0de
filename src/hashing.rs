// ABOUTME: Password hashing capability for the admin bootstrap tool
// ABOUTME: Defines the PasswordHasher seam and the production bcrypt implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Admin Bootstrap Contributors

//! Password hashing behind a trait so the seeding service never depends on a
//! concrete algorithm and tests can substitute doubles.

use crate::errors::{AppError, AppResult};

/// Capability to hash plaintext passwords and verify digests
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a storable digest
    fn hash(&self, plaintext: &str) -> AppResult<String>;

    /// Verify a plaintext password against a stored digest
    fn verify(&self, plaintext: &str, digest: &str) -> AppResult<bool>;
}

/// Production hasher backed by bcrypt
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a hasher with the bcrypt default cost (12)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost.
    ///
    /// Cost 4 is roughly 60x faster than the default and is the right choice
    /// for tests; production callers should stay on [`BcryptHasher::new`].
    #[must_use]
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> AppResult<String> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AppError::internal("Failed to hash password").with_source(e))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> AppResult<bool> {
        bcrypt::verify(plaintext, digest)
            .map_err(|e| AppError::internal("Failed to verify password digest").with_source(e))
    }
}
