// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact List Controller
//!
//! The listing view: loads every contact, opens details and deletes
//! entries after confirmation.

use std::sync::Arc;

use tracing::{error, warn};

use crate::contact::{Contact, ContactLinks, EmployeeId};
use crate::repository::ContactRepository;
use crate::store::StoreResult;

use super::delete::{DeleteFlow, DeleteOutcome, DeleteStep};
use super::events::{EventDispatcher, ViewEvent};
use super::interaction::Interaction;
use super::navigation::{Navigator, Route};

/// State and actions of the listing view.
pub struct ContactListController<N: Navigator, I: Interaction> {
    repository: ContactRepository,
    navigator: N,
    interaction: I,
    events: Arc<EventDispatcher>,
    contacts: Vec<Contact>,
    loading: bool,
    delete_flow: DeleteFlow,
}

impl<N: Navigator, I: Interaction> ContactListController<N, I> {
    /// Creates the controller. It starts out loading; call [`load`](Self::load).
    pub fn new(
        repository: ContactRepository,
        navigator: N,
        interaction: I,
        events: Arc<EventDispatcher>,
    ) -> Self {
        ContactListController {
            repository,
            navigator,
            interaction,
            events,
            contacts: Vec::new(),
            loading: true,
            delete_flow: DeleteFlow::default(),
        }
    }

    /// Returns the contacts shown.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Returns true while the list is being fetched.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the contact currently being deleted, if any.
    pub fn deleting(&self) -> Option<EmployeeId> {
        self.delete_flow.deleting()
    }

    /// Fetches the list.
    ///
    /// Entries without a storage id are logged and still shown. On failure
    /// the previously shown list is kept.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.repository.list_contacts().await {
            Ok(contacts) => {
                for (index, contact) in contacts.iter().enumerate() {
                    if contact.id.is_none() {
                        warn!(index, employee_id = %contact.employee_id, "contact has no storage id");
                    }
                }
                self.contacts = contacts;
                self.events.dispatch(ViewEvent::ListLoaded {
                    count: self.contacts.len(),
                });
            }
            Err(err) => {
                error!(error = %err, "error loading contacts");
            }
        }
        self.loading = false;
    }

    /// Opens a contact's detail view.
    pub fn view(&self, employee_id: EmployeeId) -> Route {
        let route = Route::Detail(employee_id);
        self.navigator.navigate(route);
        self.events.dispatch(ViewEvent::Navigated { route });
        route
    }

    /// Opens the blank form.
    pub fn create(&self) -> Route {
        self.navigator.navigate(Route::Create);
        self.events.dispatch(ViewEvent::Navigated {
            route: Route::Create,
        });
        Route::Create
    }

    /// External links for one listed contact.
    pub fn links_for(&self, contact: &Contact) -> ContactLinks {
        ContactLinks::for_contact(contact)
    }

    /// Validates and confirms a delete, marking it in flight when accepted.
    pub fn begin_delete(&mut self, employee_id: Option<EmployeeId>) -> DeleteStep {
        let name = employee_id
            .and_then(|id| self.contacts.iter().find(|c| c.employee_id == id))
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

    /// Completes a delete and reloads the list on success.
    pub async fn finish_delete(
        &mut self,
        employee_id: EmployeeId,
        result: StoreResult<()>,
    ) -> DeleteOutcome {
        let outcome = self
            .delete_flow
            .finish(employee_id, result, &self.interaction);
        let success = outcome == DeleteOutcome::Deleted;
        self.events.dispatch(ViewEvent::DeleteFinished {
            employee_id,
            success,
        });
        if success {
            self.load().await;
        }
        outcome
    }

    /// Confirms, deletes and reloads.
    pub async fn delete(&mut self, employee_id: Option<EmployeeId>) -> DeleteOutcome {
        match self.begin_delete(employee_id) {
            DeleteStep::Done(outcome) => outcome,
            DeleteStep::Proceed(employee_id) => {
                let result = self.repository.delete_contact(employee_id).await;
                self.finish_delete(employee_id, result).await
            }
        }
    }
}
