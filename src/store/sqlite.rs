//! SQLite storage implementation
//!
//! This module implements the `UserStore` trait on top of a SQLite
//! connection pool. Timestamps are stored as RFC3339 text and user ids
//! as UUID text, keeping the schema portable and easy to inspect.

use super::UserStore;
use crate::config::DatabaseUrl;
use crate::models::User;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite, SqlitePool};
use uuid::Uuid;

const INSERT_USER_SQL: &str = r#"
    INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

/// SQLite-backed user store
#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open a connection pool for the given database URL
    pub async fn new(database_url: &DatabaseUrl) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.is_memory() {
            database_url.to_connection_string()
        } else {
            format!("{}?mode=rwc", database_url.to_connection_string())
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn migrate(&self) -> Result<()> {
        // The UNIQUE constraint on email backs up the transactional
        // first-user insert: duplicates are rejected even if a future
        // caller bypasses create_first_user.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_user_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM users")
            .fetch_one(&self.pool)
            .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        sqlx::query(INSERT_USER_SQL)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at.to_rfc3339())
            .bind(user.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(user.id)
    }

    async fn create_first_user(&self, user: &User) -> Result<Option<Uuid>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("SELECT COUNT(*) as count FROM users")
            .fetch_one(&mut *tx)
            .await?;
        let count: i64 = row.try_get("count")?;

        if count > 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query(INSERT_USER_SQL)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at.to_rfc3339())
            .bind(user.updated_at.to_rfc3339())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(user.id))
    }
}

/// Convert a database row to the User model
fn row_to_user(row: &SqliteRow) -> Result<User> {
    let id_str: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id_str)?;

    let name: String = row.try_get("name")?;
    let email: String = row.try_get("email")?;
    let password_hash: String = row.try_get("password_hash")?;

    let created_at_str: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)?.with_timezone(&Utc);

    let updated_at_str: String = row.try_get("updated_at")?;
    let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)?.with_timezone(&Utc);

    Ok(User {
        id,
        name,
        email,
        password_hash,
        created_at,
        updated_at,
    })
}
