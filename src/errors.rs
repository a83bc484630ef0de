// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the admin
//! bootstrap tool. It defines standard error types and error codes so that
//! configuration, hashing, and persistence failures surface consistently.

use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Configuration (6000-6999)
    /// A required configuration value was not provided
    ConfigMissing = 6001,
    /// A configuration value was provided but could not be used
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// An unexpected internal failure
    InternalError = 9000,
    /// A failure in the persistence layer
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get a human-readable description for this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ConfigMissing => "A required configuration value is missing",
            ErrorCode::ConfigInvalid => "A configuration value is invalid",
            ErrorCode::InternalError => "An internal error occurred",
            ErrorCode::DatabaseError => "A database operation failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Missing configuration error naming the absent environment variable
    pub fn config_missing(variable: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("Required environment variable {variable} is not set"),
        )
    }

    /// Invalid configuration error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
