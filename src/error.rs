// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for tutor
//!
//! `CommunicationFailure` is the only failure the conversation cycle knows
//! about; it is always recovered into a sentinel turn. `TutorError` covers
//! the outer surfaces (settings, terminal, one-off CLI commands).

use thiserror::Error;

/// Main error type for tutor operations
#[derive(Error, Debug)]
pub enum TutorError {
    /// The tutoring service could not be reached or understood
    #[error("Communication error: {0}")]
    Communication(#[from] CommunicationFailure),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal UI errors
    #[error("Terminal error: {0}")]
    Tui(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Why an outbound call to the tutoring service failed.
///
/// The variants exist for logs only. The conversation shows every one of
/// them to the user as the same sentinel message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommunicationFailure {
    /// Transport-level failure (connection refused, DNS, reset, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("Service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not JSON or lacked the expected field
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for CommunicationFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CommunicationFailure::InvalidResponse(err.to_string())
        } else {
            CommunicationFailure::Network(err.to_string())
        }
    }
}

/// Result type alias for tutor operations
pub type Result<T> = std::result::Result<T, TutorError>;
