// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Validation
//!
//! Synchronous rules applied to raw form input.

use thiserror::Error;

/// Maximum length of a full email address.
const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of the part before `@`.
const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length of a single domain label.
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

/// Validation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Employee ID must be a whole number")]
    NotAnInteger,
    #[error("Employee ID must be at least {min}")]
    BelowMinimum { min: i64 },
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Employee ID already exists")]
    DuplicateEmployeeId,
    #[error("Could not verify that the Employee ID is unique")]
    UniquenessUnverified,
    #[error("Field cannot be changed after creation")]
    Frozen,
}

/// Rejects empty or whitespace-only values.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates email shape.
///
/// Empty input passes; emptiness is the required rule's concern. A single
/// `@` separates a dot-atom local part from a domain of hyphenated labels.
/// A top-level domain is not required (`user@localhost` is accepted).
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::InvalidEmail);
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };

    if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH {
        return Err(ValidationError::InvalidEmail);
    }
    let local_ok = local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_local_char));
    if !local_ok {
        return Err(ValidationError::InvalidEmail);
    }

    let domain_ok = !domain.is_empty() && domain.split('.').all(is_domain_label);
    if !domain_ok {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_DOMAIN_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
