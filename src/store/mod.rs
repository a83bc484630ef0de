// ABOUTME: Storage abstraction layer for the admin bootstrap tool
// ABOUTME: Defines the UserStore trait implemented by the SQLite backend

use crate::models::User;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide
/// a consistent interface for the seeding service.
#[async_trait]
pub trait UserStore: Send + Sync + Clone {
    /// Run migrations to set up the schema
    async fn migrate(&self) -> Result<()>;

    /// Get total number of users
    async fn get_user_count(&self) -> Result<i64>;

    /// Get user by email address
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Create a new user account
    async fn create_user(&self, user: &User) -> Result<Uuid>;

    /// Create a user only if the store holds no users yet.
    ///
    /// The emptiness check and the insert run in one transaction, so two
    /// concurrent callers cannot both succeed. Returns `None` when another
    /// user already exists.
    async fn create_first_user(&self, user: &User) -> Result<Option<Uuid>>;
}
