// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Employee ID Uniqueness
//!
//! Cross-checks a candidate employee id against the whole contact
//! collection. Results are tied to a [`CheckTicket`] so that only the most
//! recently issued check can land.

use tracing::{debug, warn};

use crate::contact::{Contact, EmployeeId};
use crate::repository::ContactRepository;

/// Whether the form creates a new contact or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Producing a new contact.
    Create,
    /// Bound to the contact with this employee id.
    Edit(EmployeeId),
}

impl FormMode {
    /// Returns the employee id being edited, if any.
    pub fn editing(&self) -> Option<EmployeeId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// Outcome of a uniqueness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uniqueness {
    /// No other contact uses the id.
    Unique,
    /// Another contact already uses the id.
    Conflict,
    /// The collection could not be fetched.
    Inconclusive,
}

/// Handle for one issued check.
///
/// Tickets are ordered by issue time; a result is only applied while its
/// ticket is still the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket {
    pub(crate) generation: u64,
    pub(crate) candidate: EmployeeId,
}

impl CheckTicket {
    /// The employee id being checked.
    pub fn candidate(&self) -> EmployeeId {
        self.candidate
    }

    /// Issue order of this ticket.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Scans `contacts` for a collision with `candidate`.
///
/// In edit mode the record being edited never collides with itself.
pub fn evaluate(contacts: &[Contact], candidate: EmployeeId, mode: FormMode) -> Uniqueness {
    if mode.editing() == Some(candidate) {
        return Uniqueness::Unique;
    }
    if contacts.iter().any(|c| c.employee_id == candidate) {
        Uniqueness::Conflict
    } else {
        Uniqueness::Unique
    }
}

/// Runs uniqueness checks against the contact repository.
#[derive(Clone)]
pub struct UniquenessChecker {
    repository: ContactRepository,
}

impl UniquenessChecker {
    /// Creates a checker backed by `repository`.
    pub fn new(repository: ContactRepository) -> Self {
        UniquenessChecker { repository }
    }

    /// Checks a parsed candidate.
    ///
    /// A failed fetch yields [`Uniqueness::Inconclusive`], never `Unique`.
    pub async fn check(&self, candidate: EmployeeId, mode: FormMode) -> Uniqueness {
        if mode.editing() == Some(candidate) {
            return Uniqueness::Unique;
        }
        match self.repository.list_contacts().await {
            Ok(contacts) => {
                let verdict = evaluate(&contacts, candidate, mode);
                debug!(%candidate, ?verdict, "uniqueness checked");
                verdict
            }
            Err(err) => {
                warn!(%candidate, error = %err, "uniqueness check could not fetch contacts");
                Uniqueness::Inconclusive
            }
        }
    }

    /// Checks raw input. Empty or unparseable input is not checked at all;
    /// the synchronous rules report those.
    pub async fn check_input(&self, input: &str, mode: FormMode) -> Option<Uniqueness> {
        let candidate = input.parse::<EmployeeId>().ok()?;
        Some(self.check(candidate, mode).await)
    }
}
