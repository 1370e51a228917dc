// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store error types.

use std::time::Duration;

use thiserror::Error;

/// Store error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Coarse classification used to pick user-facing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The record does not exist.
    NotFound,
    /// A write collided with an existing employee id.
    ConflictOnWrite,
    /// The backend could not be reached or did not answer in time.
    Transport,
    /// Anything else the backend rejected.
    Other,
}

impl StoreError {
    /// Classifies this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            StoreError::NotFound(_) => FailureKind::NotFound,
            StoreError::Conflict(_) => FailureKind::ConflictOnWrite,
            StoreError::Transport(_) | StoreError::Timeout(_) => FailureKind::Transport,
            StoreError::Http { .. } | StoreError::Decode(_) => FailureKind::Other,
        }
    }

    /// Builds the error for a non-success HTTP status.
    pub fn from_status(status: u16, reason: &str, context: &str) -> Self {
        match status {
            404 => StoreError::NotFound(context.to_string()),
            409 => StoreError::Conflict(context.to_string()),
            _ => StoreError::Http {
                status,
                reason: reason.to_string(),
            },
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            StoreError::from_status(status.as_u16(), reason, &err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
