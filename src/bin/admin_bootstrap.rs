// ABOUTME: Command-line entry point for seeding the initial admin user
// ABOUTME: Wires environment config, SQLite store, and bcrypt hashing into one run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Admin Bootstrap Contributors

//! Creates the initial admin user for a fresh deployment. Safe to run
//! repeatedly: if any user already exists the command warns and exits
//! successfully without writing.
//!
//! Usage:
//! ```bash
//! # Create the initial admin user (name defaults to "Admin")
//! ADMIN_EMAIL=admin@example.com ADMIN_PASSWORD=change-me \
//!     cargo run --bin admin-bootstrap
//!
//! # Point at a specific database
//! cargo run --bin admin-bootstrap -- --database-url sqlite:./data/users.db
//!
//! # Enable debug logging
//! cargo run --bin admin-bootstrap -- --verbose
//! ```

use admin_bootstrap::config::BootstrapConfig;
use admin_bootstrap::hashing::BcryptHasher;
use admin_bootstrap::seeder::{AdminSeeder, SeedOutcome};
use admin_bootstrap::store::{SqliteStore, UserStore};
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "admin-bootstrap",
    about = "Creates the initial admin user from environment variables if no users exist",
    long_about = "Seed the first admin account for a deployment. Reads ADMIN_NAME, \
                  ADMIN_EMAIL, and ADMIN_PASSWORD from the environment, hashes the \
                  password with bcrypt, and inserts exactly one user into an empty store."
)]
struct BootstrapArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = BootstrapArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    // Load configuration
    let config = BootstrapConfig::from_env(args.database_url)?;

    // Initialize database
    info!("Connecting to database: {}", config.database_url);
    let store = SqliteStore::new(&config.database_url).await?;

    info!("Running database migrations...");
    store.migrate().await?;

    let admin = config.admin;
    let seeder = AdminSeeder::new(store, BcryptHasher::new(), admin.clone());

    if let SeedOutcome::Created { user_id } = seeder.run().await? {
        println!("\nAdmin user created successfully!");
        println!("{}", "=".repeat(50));
        println!("   Name: {}", admin.admin_name);
        println!("   Email: {}", admin.admin_email);
        println!("   User ID: {user_id}");
        println!("\nLog in with the configured credentials and rotate the password after first use.");
    }

    Ok(())
}
