// ABOUTME: Unified error types for the biological-age engine
// ABOUTME: Thiserror-based AppError used by algorithm selection and name parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error handling for the engine's fallible surfaces.
//!
//! Estimation itself never errors: an invalid biomarker panel yields `None`,
//! which callers treat as "insufficient data". `AppError` exists for the
//! surfaces that genuinely fail, such as parsing an algorithm name supplied
//! by a caller.

use thiserror::Error;

/// Result type alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied input failed validation
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of what was wrong
        message: String,
    },
}

impl AppError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
