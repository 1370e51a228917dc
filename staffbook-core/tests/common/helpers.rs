// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Controller harness.
//!
//! Wires controllers to a [`MockStore`], a [`RecordingNavigator`], a
//! [`ScriptedInteraction`] and an event log.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use staffbook_core::api::{
    parse_route_param, CallbackHandler, ContactDetailController, ContactFormController,
    ContactListController, EventDispatcher, RecordingNavigator, ScriptedInteraction, ViewEvent,
};
use staffbook_core::form::Field;
use staffbook_core::store::MockStore;
use staffbook_core::{Contact, ContactRepository};

pub type FormController<'a> =
    ContactFormController<&'a RecordingNavigator, &'a ScriptedInteraction>;
pub type ListController<'a> =
    ContactListController<&'a RecordingNavigator, &'a ScriptedInteraction>;
pub type DetailController<'a> =
    ContactDetailController<&'a RecordingNavigator, &'a ScriptedInteraction>;

pub struct Harness {
    pub store: Arc<MockStore>,
    pub navigator: RecordingNavigator,
    pub interaction: ScriptedInteraction,
    pub events: Arc<EventDispatcher>,
    pub log: Arc<Mutex<Vec<ViewEvent>>>,
    pub timeout: Duration,
}

impl Harness {
    /// Harness over `contacts` whose confirmations are declined.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self::with_interaction(contacts, ScriptedInteraction::declining())
    }

    pub fn with_interaction(contacts: Vec<Contact>, interaction: ScriptedInteraction) -> Self {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let mut events = EventDispatcher::new();
        events.add_handler(Arc::new(CallbackHandler::new(move |event| {
            sink.lock().unwrap().push(event);
        })));

        Harness {
            store: Arc::new(MockStore::with_contacts(contacts)),
            navigator: RecordingNavigator::new(),
            interaction,
            events: Arc::new(events),
            log,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn repository(&self) -> ContactRepository {
        ContactRepository::new(self.store.clone()).with_timeout(self.timeout)
    }

    /// A form controller for the raw route parameter, not yet loaded.
    pub fn form(&self, param: Option<&str>) -> FormController<'_> {
        ContactFormController::new(
            self.repository(),
            parse_route_param(param),
            &self.navigator,
            &self.interaction,
            self.events.clone(),
        )
    }

    /// A loaded form controller.
    pub async fn loaded_form(&self, param: Option<&str>) -> FormController<'_> {
        let mut form = self.form(param);
        form.load().await;
        form
    }

    pub fn list(&self) -> ListController<'_> {
        ContactListController::new(
            self.repository(),
            &self.navigator,
            &self.interaction,
            self.events.clone(),
        )
    }

    pub fn detail(&self) -> DetailController<'_> {
        ContactDetailController::new(
            self.repository(),
            &self.navigator,
            &self.interaction,
            self.events.clone(),
        )
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.log.lock().unwrap().clone()
    }
}

/// Fills every required field of a create form with valid values.
pub async fn fill_required(form: &mut FormController<'_>, employee_id: &str) {
    form.set_field(Field::EmployeeId, employee_id).await.unwrap();
    form.set_field(Field::Name, "Margaret Hamilton").await.unwrap();
    form.set_field(Field::Phone, "+1 555 0100").await.unwrap();
    form.set_field(Field::Email, "margaret@example.com").await.unwrap();
    form.set_field(Field::Photo, "https://example.com/m.jpg")
        .await
        .unwrap();
}
