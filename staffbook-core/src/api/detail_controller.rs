// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Detail Controller
//!
//! Shows one contact and offers edit, delete and external links.

use std::sync::Arc;

use tracing::warn;

use crate::contact::{Contact, ContactLinks, EmployeeId};
use crate::repository::ContactRepository;
use crate::store::StoreResult;

use super::delete::{DeleteFlow, DeleteOutcome, DeleteStep};
use super::events::{EventDispatcher, ViewEvent};
use super::interaction::Interaction;
use super::navigation::{Navigator, Route, RouteParam};

/// State and actions of the detail view.
pub struct ContactDetailController<N: Navigator, I: Interaction> {
    repository: ContactRepository,
    navigator: N,
    interaction: I,
    events: Arc<EventDispatcher>,
    contact: Option<Contact>,
    loading: bool,
    delete_flow: DeleteFlow,
}

impl<N: Navigator, I: Interaction> ContactDetailController<N, I> {
    /// Creates the controller. It starts out loading; call [`open`](Self::open).
    pub fn new(
        repository: ContactRepository,
        navigator: N,
        interaction: I,
        events: Arc<EventDispatcher>,
    ) -> Self {
        ContactDetailController {
            repository,
            navigator,
            interaction,
            events,
            contact: None,
            loading: true,
            delete_flow: DeleteFlow::default(),
        }
    }

    /// Returns the shown contact.
    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    /// Returns true while the contact is being fetched.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns true while a delete is in flight.
    pub fn is_deleting(&self) -> bool {
        self.delete_flow.deleting().is_some()
    }

    /// Loads the contact named by the route parameter.
    ///
    /// An absent or invalid parameter, or a failed fetch, leaves the view
    /// empty.
    pub async fn open(&mut self, param: RouteParam) {
        self.contact = None;
        let employee_id = match param {
            RouteParam::Valid(id) => id,
            RouteParam::Absent | RouteParam::Invalid(_) => {
                self.loading = false;
                return;
            }
        };

        self.loading = true;
        match self.repository.get_contact(employee_id).await {
            Ok(contact) => self.contact = Some(contact),
            Err(err) => warn!(%employee_id, error = %err, "failed to load contact"),
        }
        self.loading = false;
    }

    /// External links for the shown contact.
    pub fn links(&self) -> ContactLinks {
        self.contact
            .as_ref()
            .map(ContactLinks::for_contact)
            .unwrap_or_default()
    }

    /// Opens the edit form for the shown contact.
    pub fn edit(&self) -> Option<Route> {
        let route = Route::Edit(self.contact.as_ref()?.employee_id);
        self.navigate(route);
        Some(route)
    }

    /// Validates and confirms a delete of the shown contact.
    pub fn begin_delete(&mut self) -> DeleteStep {
        let employee_id = self.contact.as_ref().map(|c| c.employee_id);
        let name = self
            .contact
            .as_ref()
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| "this contact".to_string());

        let step = self
            .delete_flow
            .begin(employee_id, &name, &self.interaction);
        if let DeleteStep::Proceed(employee_id) = step {
            self.events
                .dispatch(ViewEvent::DeleteStarted { employee_id });
        }
        step
    }

    /// Completes a delete; success returns to the listing.
    pub fn finish_delete(&mut self, employee_id: EmployeeId, result: StoreResult<()>) -> DeleteOutcome {
        let outcome = self
            .delete_flow
            .finish(employee_id, result, &self.interaction);
        let success = outcome == DeleteOutcome::Deleted;
        self.events.dispatch(ViewEvent::DeleteFinished {
            employee_id,
            success,
        });
        if success {
            self.navigate(Route::List);
        }
        outcome
    }

    /// Confirms, deletes and returns to the listing.
    pub async fn delete(&mut self) -> DeleteOutcome {
        match self.begin_delete() {
            DeleteStep::Done(outcome) => outcome,
            DeleteStep::Proceed(employee_id) => {
                let result = self.repository.delete_contact(employee_id).await;
                self.finish_delete(employee_id, result)
            }
        }
    }

    fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
        self.events.dispatch(ViewEvent::Navigated { route });
    }
}
