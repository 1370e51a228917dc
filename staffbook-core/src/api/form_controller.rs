// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Form Controller
//!
//! Drives one create or edit session from route parameter to navigation:
//!
//! ```text
//! Loading --load ok--> Ready --submit--> Submitting --ok--> Succeeded
//!    |                   ^                   |
//!    | load failed       +------ Failed <----+ write failed
//!    v
//! Closed
//! ```
//!
//! Every asynchronous step has a split form (`edit_field` / `resolve_check`
//! / `apply_check`, `begin_submit` / `finish_submit`) so a host can
//! interleave responses in any order, and a combined form for sequential use.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::contact::{Contact, EmployeeId};
use crate::form::{
    CheckTicket, Field, FormMode, FormModel, SubmissionState, Uniqueness, UniquenessChecker,
};
use crate::repository::ContactRepository;
use crate::store::{FailureKind, StoreError, StoreResult};

use super::error::{StaffbookError, StaffbookResult};
use super::events::{EventDispatcher, ViewEvent};
use super::interaction::Interaction;
use super::messages;
use super::navigation::{Navigator, Route, RouteParam};

/// Lifecycle state of the form view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Fetching the contact to edit.
    Loading,
    /// Interactive.
    Ready,
    /// A write is in flight.
    Submitting,
    /// The write succeeded and the view navigated away.
    Succeeded,
    /// The last write failed. Still interactive; values are preserved.
    Failed(StaffbookError),
    /// The contact could not be loaded and the view navigated away.
    Closed(StaffbookError),
}

impl FormState {
    /// Returns true if the user may edit and submit.
    pub fn is_interactive(&self) -> bool {
        matches!(self, FormState::Ready | FormState::Failed(_))
    }
}

/// A write the controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteRequest {
    /// Create a new contact.
    Create(Contact),
    /// Replace the contact stored under `employee_id`.
    Update {
        employee_id: EmployeeId,
        contact: Contact,
    },
}

/// Result of asking to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Not interactive or a write is already in flight.
    Ignored,
    /// The form is invalid or still validating; every field is now touched.
    Blocked,
    /// The write to perform.
    Dispatched(WriteRequest),
}

/// Final result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Blocked,
    /// Saved; the view navigated to this route.
    Succeeded(Route),
    /// Not saved; the form stays open.
    Failed(StaffbookError),
}

/// Orchestrates a [`FormModel`], uniqueness checks and the repository.
pub struct ContactFormController<N: Navigator, I: Interaction> {
    repository: ContactRepository,
    checker: UniquenessChecker,
    navigator: N,
    interaction: I,
    events: Arc<EventDispatcher>,
    target: RouteParam,
    form: FormModel,
    state: FormState,
    submit_in_flight: bool,
}

impl<N: Navigator, I: Interaction> ContactFormController<N, I> {
    /// Creates a controller for the given route parameter.
    ///
    /// No parameter starts a blank create session in `Ready`. Any parameter
    /// starts in `Loading`; call [`load`](Self::load) next.
    pub fn new(
        repository: ContactRepository,
        target: RouteParam,
        navigator: N,
        interaction: I,
        events: Arc<EventDispatcher>,
    ) -> Self {
        let (mode, state) = match &target {
            RouteParam::Absent => (FormMode::Create, FormState::Ready),
            RouteParam::Valid(id) => (FormMode::Edit(*id), FormState::Loading),
            RouteParam::Invalid(_) => (FormMode::Create, FormState::Loading),
        };
        ContactFormController {
            checker: UniquenessChecker::new(repository.clone()),
            repository,
            navigator,
            interaction,
            events,
            target,
            form: FormModel::new(mode),
            state,
            submit_in_flight: false,
        }
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the form model.
    pub fn form(&self) -> &FormModel {
        &self.form
    }

    /// Returns the form mode.
    pub fn mode(&self) -> FormMode {
        self.form.mode()
    }

    /// Returns true while a write is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight
    }

    /// Loads the contact to edit. Does nothing unless `Loading`.
    ///
    /// A failed load is fatal for this view: the user is notified and sent
    /// back to the listing.
    pub async fn load(&mut self) {
        if self.state != FormState::Loading {
            return;
        }

        let employee_id = match self.target.clone() {
            RouteParam::Valid(id) => id,
            RouteParam::Invalid(raw) => {
                warn!(param = %raw, "invalid employee id in route");
                let err = StaffbookError::NotFound(raw);
                self.close(messages::CONTACT_NOT_FOUND, err);
                return;
            }
            RouteParam::Absent => {
                self.set_state(FormState::Ready);
                return;
            }
        };

        match self.repository.get_contact(employee_id).await {
            Ok(contact) => {
                self.form.populate(&contact);
                debug!(%employee_id, "contact loaded for editing");
                self.set_state(FormState::Ready);
            }
            Err(err) => {
                warn!(%employee_id, error = %err, "failed to load contact");
                let notice = match err.kind() {
                    FailureKind::Transport => messages::LOAD_UNREACHABLE,
                    _ => messages::CONTACT_NOT_FOUND,
                };
                self.close(notice, err.into());
            }
        }
    }

    /// Sets a field value without waiting for validation.
    ///
    /// Returns the uniqueness ticket to resolve when the employee id changed
    /// to a well-formed value.
    pub fn edit_field(&mut self, field: Field, value: &str) -> StaffbookResult<Option<CheckTicket>> {
        if !self.state.is_interactive() {
            return Err(StaffbookError::InvalidState(format!(
                "cannot edit {} while {:?}",
                field, self.state
            )));
        }
        let ticket = self.form.set_value(field, value)?;
        self.notify_field(field);
        Ok(ticket)
    }

    /// Runs the uniqueness check for a ticket.
    pub async fn resolve_check(&self, ticket: CheckTicket) -> Uniqueness {
        self.checker.check(ticket.candidate(), self.form.mode()).await
    }

    /// Applies a check result. Returns false if the ticket was superseded.
    pub fn apply_check(&mut self, ticket: CheckTicket, verdict: Uniqueness) -> bool {
        if !self.form.apply_uniqueness(ticket, verdict) {
            return false;
        }
        self.events.dispatch(ViewEvent::UniquenessResolved {
            candidate: ticket.candidate(),
            verdict,
        });
        self.notify_field(Field::EmployeeId);
        true
    }

    /// Sets a field value and, for the employee id, waits for its check.
    pub async fn set_field(&mut self, field: Field, value: &str) -> StaffbookResult<()> {
        if let Some(ticket) = self.edit_field(field, value)? {
            let verdict = self.resolve_check(ticket).await;
            self.apply_check(ticket, verdict);
        }
        Ok(())
    }

    /// Validates and, if possible, starts a write.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.submit_in_flight || !self.state.is_interactive() {
            debug!(state = ?self.state, "submit ignored");
            return SubmitAttempt::Ignored;
        }

        if !self.form.is_valid() {
            self.form.touch_all();
            for field in Field::ALL {
                self.notify_field(field);
            }
            debug!(errors = ?self.form.errors(), pending = self.form.is_pending(), "submit blocked");
            return SubmitAttempt::Blocked;
        }

        let contact = match self.form.to_contact() {
            Ok(contact) => contact,
            Err(err) => {
                warn!(error = %err, "valid form produced no contact");
                self.form.touch_all();
                return SubmitAttempt::Blocked;
            }
        };

        let request = match self.form.mode() {
            FormMode::Create => WriteRequest::Create(contact),
            FormMode::Edit(employee_id) => WriteRequest::Update {
                employee_id,
                contact,
            },
        };

        self.submit_in_flight = true;
        self.form.set_submission(SubmissionState::Submitting);
        self.set_state(FormState::Submitting);
        SubmitAttempt::Dispatched(request)
    }

    /// Completes a write started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(
        &mut self,
        request: &WriteRequest,
        result: StoreResult<Contact>,
    ) -> SubmitOutcome {
        self.submit_in_flight = false;

        match result {
            Ok(saved) => {
                debug!(employee_id = %saved.employee_id, "contact saved");
                self.form.set_submission(SubmissionState::Idle);
                self.set_state(FormState::Succeeded);
                let route = match request {
                    WriteRequest::Create(_) => Route::List,
                    WriteRequest::Update { employee_id, .. } => Route::Detail(*employee_id),
                };
                self.navigate(route);
                SubmitOutcome::Succeeded(route)
            }
            Err(err) => {
                warn!(error = %err, "contact write failed");
                let notice = Self::write_failure_notice(request, &err);
                if let (WriteRequest::Create(contact), FailureKind::ConflictOnWrite) =
                    (request, err.kind())
                {
                    self.form.record_write_conflict(contact.employee_id);
                    self.notify_field(Field::EmployeeId);
                }
                self.alert(notice);
                let err = StaffbookError::from(err);
                self.form.set_submission(SubmissionState::Error);
                self.set_state(FormState::Failed(err.clone()));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Validates, writes and navigates.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.begin_submit() {
            SubmitAttempt::Ignored => return SubmitOutcome::Ignored,
            SubmitAttempt::Blocked => return SubmitOutcome::Blocked,
            SubmitAttempt::Dispatched(request) => request,
        };

        let result = match &request {
            WriteRequest::Create(contact) => self.repository.create_contact(contact).await,
            WriteRequest::Update {
                employee_id,
                contact,
            } => self.repository.update_contact(*employee_id, contact).await,
        };
        self.finish_submit(&request, result)
    }

    /// Leaves the form without saving.
    pub fn cancel(&mut self) -> Route {
        let route = match self.form.mode() {
            FormMode::Edit(employee_id) => Route::Detail(employee_id),
            FormMode::Create => Route::List,
        };
        self.navigate(route);
        route
    }

    fn write_failure_notice(request: &WriteRequest, err: &StoreError) -> &'static str {
        match (request, err.kind()) {
            (_, FailureKind::Transport) => messages::WRITE_UNREACHABLE,
            (WriteRequest::Create(_), FailureKind::ConflictOnWrite) => messages::CREATE_CONFLICT,
            (WriteRequest::Create(_), _) => messages::CREATE_FAILED,
            (WriteRequest::Update { .. }, _) => messages::UPDATE_FAILED,
        }
    }

    fn close(&mut self, notice: &str, err: StaffbookError) {
        self.alert(notice);
        self.set_state(FormState::Closed(err));
        self.navigate(Route::List);
    }

    fn set_state(&mut self, state: FormState) {
        self.state = state.clone();
        self.events.dispatch(ViewEvent::FormStateChanged { state });
    }

    fn notify_field(&self, field: Field) {
        self.events.dispatch(ViewEvent::FieldChanged {
            field,
            status: self.form.status(field),
        });
    }

    fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
        self.events.dispatch(ViewEvent::Navigated { route });
    }

    fn alert(&self, message: &str) {
        self.interaction.alert(message);
        self.events.dispatch(ViewEvent::Alert {
            message: message.to_string(),
        });
    }
}
