// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Form Model
//!
//! Field values, per-field validation and the submission state of exactly
//! one contact being created or edited.
//!
//! Synchronous rules run on every read. The employee id additionally needs
//! an asynchronous uniqueness verdict: every edit of that field issues a
//! new [`CheckTicket`], and only the verdict for the latest ticket is kept.

mod field;
pub mod uniqueness;

pub use field::{Field, FieldState, FieldStatus};
pub use uniqueness::{evaluate, CheckTicket, FormMode, Uniqueness, UniquenessChecker};

use std::collections::BTreeMap;

use tracing::debug;

use crate::contact::{Contact, EmployeeId, ValidationError};

/// Submission progress of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing in flight.
    Idle,
    /// Waiting on the uniqueness check.
    Validating,
    /// A write is in flight.
    Submitting,
    /// The last write failed.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UniquenessState {
    NotChecked,
    Pending(CheckTicket),
    Resolved {
        candidate: EmployeeId,
        verdict: Uniqueness,
    },
}

/// Editable state of one contact.
#[derive(Debug, Clone)]
pub struct FormModel {
    mode: FormMode,
    fields: BTreeMap<Field, FieldState>,
    uniqueness: UniquenessState,
    generation: u64,
    submission: SubmissionState,
}

impl FormModel {
    /// Creates a blank form.
    pub fn new(mode: FormMode) -> Self {
        FormModel {
            mode,
            fields: Field::ALL
                .iter()
                .map(|f| (*f, FieldState::default()))
                .collect(),
            uniqueness: UniquenessState::NotChecked,
            generation: 0,
            submission: SubmissionState::Idle,
        }
    }

    /// Returns the form mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Fills every field from an existing contact and freezes the employee id.
    ///
    /// Fields stay untouched. The record is unique with respect to itself,
    /// so no check is issued.
    pub fn populate(&mut self, contact: &Contact) {
        let optional = |v: &Option<String>| v.clone().unwrap_or_default();
        let values = [
            (Field::EmployeeId, contact.employee_id.to_string()),
            (Field::Name, contact.name.clone()),
            (Field::Phone, contact.phone.clone()),
            (Field::Email, contact.email.clone()),
            (Field::Photo, contact.photo.clone()),
            (Field::Instagram, optional(&contact.instagram)),
            (Field::Linkedin, optional(&contact.linkedin)),
            (Field::Whatsapp, optional(&contact.whatsapp)),
            (Field::Company, optional(&contact.company)),
            (Field::Address, optional(&contact.address)),
            (Field::Notes, optional(&contact.notes)),
        ];
        for (field, value) in values {
            self.state_mut(field).value = value;
        }

        self.state_mut(Field::EmployeeId).frozen = true;
        self.generation += 1;
        self.uniqueness = UniquenessState::Resolved {
            candidate: contact.employee_id,
            verdict: Uniqueness::Unique,
        };
    }

    /// Returns the state of a field.
    pub fn field(&self, field: Field) -> &FieldState {
        // every field is inserted in `new`
        &self.fields[&field]
    }

    fn state_mut(&mut self, field: Field) -> &mut FieldState {
        self.fields.entry(field).or_default()
    }

    /// Returns the raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        self.field(field).value()
    }

    /// Sets a field value and marks it touched.
    ///
    /// Editing the employee id supersedes any in-flight uniqueness check.
    /// When the new value passes the synchronous rules a fresh ticket is
    /// returned and must be resolved before the form can be submitted.
    pub fn set_value(
        &mut self,
        field: Field,
        value: &str,
    ) -> Result<Option<CheckTicket>, ValidationError> {
        if self.field(field).is_frozen() {
            return Err(ValidationError::Frozen);
        }

        let state = self.state_mut(field);
        state.value = value.to_string();
        state.touched = true;

        if field != Field::EmployeeId {
            return Ok(None);
        }

        self.generation += 1;
        match value.parse::<EmployeeId>() {
            Ok(candidate) => {
                let ticket = CheckTicket {
                    generation: self.generation,
                    candidate,
                };
                self.uniqueness = UniquenessState::Pending(ticket);
                Ok(Some(ticket))
            }
            Err(_) => {
                self.uniqueness = UniquenessState::NotChecked;
                Ok(None)
            }
        }
    }

    /// Marks a field as touched.
    pub fn touch(&mut self, field: Field) {
        self.state_mut(field).touched = true;
    }

    /// Marks every field as touched so latent errors become visible.
    pub fn touch_all(&mut self) {
        for state in self.fields.values_mut() {
            state.touched = true;
        }
    }

    /// Applies a uniqueness verdict.
    ///
    /// Returns false and changes nothing if `ticket` has been superseded.
    pub fn apply_uniqueness(&mut self, ticket: CheckTicket, verdict: Uniqueness) -> bool {
        match self.uniqueness {
            UniquenessState::Pending(current) if current == ticket => {
                self.uniqueness = UniquenessState::Resolved {
                    candidate: ticket.candidate,
                    verdict,
                };
                true
            }
            _ => {
                debug!(
                    candidate = %ticket.candidate,
                    generation = ticket.generation,
                    latest = self.generation,
                    "discarding stale uniqueness result"
                );
                false
            }
        }
    }

    /// Records a collision the store reported at write time.
    pub(crate) fn record_write_conflict(&mut self, candidate: EmployeeId) {
        if self.value(Field::EmployeeId).parse::<EmployeeId>().ok() != Some(candidate) {
            return;
        }
        self.generation += 1;
        self.uniqueness = UniquenessState::Resolved {
            candidate,
            verdict: Uniqueness::Conflict,
        };
    }

    /// Returns the ticket still awaiting a verdict, if any.
    pub fn pending_check(&self) -> Option<CheckTicket> {
        match self.uniqueness {
            UniquenessState::Pending(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Returns true while a uniqueness check is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending_check().is_some()
    }

    /// Returns the current error of a field, touched or not.
    ///
    /// A frozen field is never in error.
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        let state = self.field(field);
        if state.is_frozen() {
            return None;
        }
        if let Err(err) = field.validate(state.value()) {
            return Some(err);
        }
        if field != Field::EmployeeId {
            return None;
        }
        match self.uniqueness {
            UniquenessState::Resolved {
                verdict: Uniqueness::Conflict,
                ..
            } => Some(ValidationError::DuplicateEmployeeId),
            UniquenessState::Resolved {
                verdict: Uniqueness::Inconclusive,
                ..
            } => Some(ValidationError::UniquenessUnverified),
            _ => None,
        }
    }

    /// Returns the user-visible status of a field.
    pub fn status(&self, field: Field) -> FieldStatus {
        if !self.field(field).is_touched() {
            return FieldStatus::Untouched;
        }
        if field == Field::EmployeeId && self.is_pending() {
            return FieldStatus::Pending;
        }
        match self.error(field) {
            Some(err) => FieldStatus::Invalid(err),
            None => FieldStatus::Valid,
        }
    }

    /// Returns every field currently in error.
    pub fn errors(&self) -> Vec<(Field, ValidationError)> {
        Field::ALL
            .iter()
            .filter_map(|f| self.error(*f).map(|e| (*f, e)))
            .collect()
    }

    /// Returns true if the form may be submitted.
    pub fn is_valid(&self) -> bool {
        !self.is_pending() && self.errors().is_empty()
    }

    /// Returns the submission state.
    pub fn submission(&self) -> SubmissionState {
        match self.submission {
            SubmissionState::Idle | SubmissionState::Error if self.is_pending() => {
                SubmissionState::Validating
            }
            other => other,
        }
    }

    pub(crate) fn set_submission(&mut self, submission: SubmissionState) {
        self.submission = submission;
    }

    /// Builds the full record from the current values, frozen fields included.
    ///
    /// Values are trimmed; blank optional fields become `None`.
    pub fn to_contact(&self) -> Result<Contact, ValidationError> {
        let employee_id = self.value(Field::EmployeeId).parse::<EmployeeId>()?;
        let text = |f: Field| self.value(f).trim().to_string();
        let optional = |f: Field| {
            let v = text(f);
            (!v.is_empty()).then_some(v)
        };

        Ok(Contact {
            id: None,
            employee_id,
            name: text(Field::Name),
            phone: text(Field::Phone),
            email: text(Field::Email),
            photo: text(Field::Photo),
            instagram: optional(Field::Instagram),
            linkedin: optional(Field::Linkedin),
            whatsapp: optional(Field::Whatsapp),
            company: optional(Field::Company),
            address: optional(Field::Address),
            notes: optional(Field::Notes),
        })
    }
}
