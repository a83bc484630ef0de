// ABOUTME: Core data models for the admin bootstrap tool
// ABOUTME: Defines the User record persisted in the backing store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Admin Bootstrap Contributors

//! # Data Models
//!
//! Domain types shared between the seeding service and the storage layer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user account in the backing store
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (used for identification)
    pub email: String,
    /// Hashed password for authentication
    pub password_hash: String,
    /// When the user account was created
    pub created_at: DateTime<Utc>,
    /// Last time the account record was modified
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the given name, email, and password hash
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_populates_identity() {
        let user = User::new(
            "Admin".to_owned(),
            "admin@example.com".to_owned(),
            "$2b$04$hash".to_owned(),
        );

        assert_eq!(user.name, "Admin");
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.password_hash, "$2b$04$hash");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        let first = User::new(
            "Admin".to_owned(),
            "admin@example.com".to_owned(),
            "hash".to_owned(),
        );
        let second = User::new(
            "Admin".to_owned(),
            "admin@example.com".to_owned(),
            "hash".to_owned(),
        );

        assert_ne!(first.id, second.id);
    }
}
