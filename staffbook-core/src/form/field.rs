// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Form fields and their per-field state.

use std::fmt;

use crate::contact::{validate_email, validate_required, EmployeeId, ValidationError};

/// An editable contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    EmployeeId,
    Name,
    Phone,
    Email,
    Photo,
    Instagram,
    Linkedin,
    Whatsapp,
    Company,
    Address,
    Notes,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 11] = [
        Field::EmployeeId,
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Photo,
        Field::Instagram,
        Field::Linkedin,
        Field::Whatsapp,
        Field::Company,
        Field::Address,
        Field::Notes,
    ];

    /// The JSON key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Field::EmployeeId => "employeeId",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Photo => "photo",
            Field::Instagram => "instagram",
            Field::Linkedin => "linkedin",
            Field::Whatsapp => "whatsapp",
            Field::Company => "company",
            Field::Address => "address",
            Field::Notes => "notes",
        }
    }

    /// Looks a field up by its JSON key.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.key() == key)
    }

    /// Returns true if the field must be filled in.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::EmployeeId | Field::Name | Field::Phone | Field::Email | Field::Photo
        )
    }

    /// Runs this field's synchronous rules against a raw value.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.is_required() {
            validate_required(value)?;
        }
        match self {
            Field::EmployeeId => value.parse::<EmployeeId>().map(|_| ()),
            Field::Email => validate_email(value.trim()),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What the user sees for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not interacted with yet; errors stay hidden.
    Untouched,
    /// Touched and waiting on an asynchronous check.
    Pending,
    /// Touched and passing every rule.
    Valid,
    /// Touched and failing a rule.
    Invalid(ValidationError),
}

/// Value and interaction state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub(crate) value: String,
    pub(crate) touched: bool,
    pub(crate) frozen: bool,
}

impl FieldState {
    /// Returns the raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true once the user interacted with the field.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Returns true if the field no longer accepts edits.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}
