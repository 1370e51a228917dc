// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! Directory records keyed by a client-assigned employee identifier, plus
//! the field rules and external link helpers that operate on them.

pub mod links;
pub mod validation;

pub use links::{instagram_url, linkedin_url, whatsapp_url, ContactLinks};
pub use validation::{validate_email, validate_required, ValidationError};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Smallest accepted employee identifier.
pub const MIN_EMPLOYEE_ID: i64 = 1;

/// Client-assigned, directory-wide unique identifier of a contact.
///
/// Always a positive integer. Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct EmployeeId(u64);

impl EmployeeId {
    /// Creates an employee id, rejecting zero.
    pub fn new(value: u64) -> Option<Self> {
        (value >= MIN_EMPLOYEE_ID as u64).then_some(EmployeeId(value))
    }

    /// Returns the numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for EmployeeId {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < MIN_EMPLOYEE_ID {
            return Err(ValidationError::BelowMinimum {
                min: MIN_EMPLOYEE_ID,
            });
        }
        Ok(EmployeeId(value as u64))
    }
}

impl From<EmployeeId> for u64 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl FromStr for EmployeeId {
    type Err = ValidationError;

    /// Parses user input. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required);
        }
        let value: i64 = trimmed.parse().map_err(|_| ValidationError::NotAnInteger)?;
        EmployeeId::try_from(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage identifier assigned by the backend.
///
/// json-server style stores hand out either strings or numbers, so both
/// are accepted. Business logic never keys on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorageId {
    Number(u64),
    Text(String),
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageId::Number(n) => write!(f, "{}", n),
            StorageId::Text(s) => f.write_str(s),
        }
    }
}

/// One directory entry.
///
/// Updates always replace the whole record; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Backend storage id (absent until the store assigns one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StorageId>,
    pub employee_id: EmployeeId,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Photo URL or path.
    pub photo: String,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Contact {
    /// Creates a contact with the required fields and no optional ones.
    pub fn new(
        employee_id: EmployeeId,
        name: &str,
        phone: &str,
        email: &str,
        photo: &str,
    ) -> Self {
        Contact {
            id: None,
            employee_id,
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            photo: photo.to_string(),
            instagram: None,
            linkedin: None,
            whatsapp: None,
            company: None,
            address: None,
            notes: None,
        }
    }

    /// Returns the display name, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "this contact"
        } else {
            &self.name
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
