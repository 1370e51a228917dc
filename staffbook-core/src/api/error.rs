// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the Staffbook view layer.

use thiserror::Error;

use crate::contact::ValidationError;
use crate::store::{FailureKind, StoreError};

/// Unified error type for Staffbook view operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StaffbookError {
    /// Field-level validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Record missing.
    #[error("contact not found: {0}")]
    NotFound(String),

    /// Duplicate employee id detected by the store at write time.
    #[error("conflict on write: {0}")]
    ConflictOnWrite(String),

    /// Backend unreachable or too slow.
    #[error("transport error: {0}")]
    Transport(String),

    /// Any other store failure.
    #[error("store error: {0}")]
    Store(StoreError),

    /// Invalid operation in current state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl From<StoreError> for StaffbookError {
    fn from(err: StoreError) -> Self {
        match err.kind() {
            FailureKind::NotFound => StaffbookError::NotFound(err.to_string()),
            FailureKind::ConflictOnWrite => StaffbookError::ConflictOnWrite(err.to_string()),
            FailureKind::Transport => StaffbookError::Transport(err.to_string()),
            FailureKind::Other => StaffbookError::Store(err),
        }
    }
}

/// Result type for Staffbook operations.
pub type StaffbookResult<T> = Result<T, StaffbookError>;
