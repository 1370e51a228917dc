// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delete Flow
//!
//! Confirmation and single-in-flight bookkeeping shared by the listing and
//! detail views.

use tracing::{debug, warn};

use crate::contact::EmployeeId;
use crate::store::StoreResult;

use super::error::StaffbookError;
use super::interaction::Interaction;
use super::messages;

/// Final result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The identifier was missing or invalid; nothing was sent.
    Invalid,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// A delete for the same contact is already in flight.
    Ignored,
    /// The store removed the contact.
    Deleted,
    /// The store rejected or never answered the delete.
    Failed(StaffbookError),
}

/// What to do after the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteStep {
    /// Send the delete for this id.
    Proceed(EmployeeId),
    /// Nothing to send.
    Done(DeleteOutcome),
}

/// Remembers which contact is currently being deleted.
#[derive(Debug, Default)]
pub(crate) struct DeleteFlow {
    deleting: Option<EmployeeId>,
}

impl DeleteFlow {
    pub(crate) fn deleting(&self) -> Option<EmployeeId> {
        self.deleting
    }

    /// Validates, guards and confirms a delete.
    pub(crate) fn begin<I: Interaction>(
        &mut self,
        employee_id: Option<EmployeeId>,
        name: &str,
        interaction: &I,
    ) -> DeleteStep {
        let Some(employee_id) = employee_id else {
            interaction.alert(messages::INVALID_DELETE);
            return DeleteStep::Done(DeleteOutcome::Invalid);
        };

        if self.deleting == Some(employee_id) {
            debug!(%employee_id, "delete already in flight");
            return DeleteStep::Done(DeleteOutcome::Ignored);
        }

        if !interaction.confirm(&messages::delete_prompt(name, employee_id)) {
            return DeleteStep::Done(DeleteOutcome::Declined);
        }

        self.deleting = Some(employee_id);
        DeleteStep::Proceed(employee_id)
    }

    /// Clears the in-flight marker and reports the result.
    pub(crate) fn finish<I: Interaction>(
        &mut self,
        employee_id: EmployeeId,
        result: StoreResult<()>,
        interaction: &I,
    ) -> DeleteOutcome {
        if self.deleting == Some(employee_id) {
            self.deleting = None;
        }
        match result {
            Ok(()) => DeleteOutcome::Deleted,
            Err(err) => {
                warn!(%employee_id, error = %err, "delete failed");
                interaction.alert(&messages::delete_failed(&err));
                DeleteOutcome::Failed(err.into())
            }
        }
    }
}
