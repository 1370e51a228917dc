// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Workflow Integration Tests
//!
//! Tests complete create, browse, edit and delete sessions through the
//! controllers and an HTTP store.

use std::sync::Arc;

use serde_json::json;
use staffbook_core::api::{
    messages, parse_route_param, ContactDetailController, ContactFormController,
    ContactListController, DeleteOutcome, EventDispatcher, RecordingNavigator, Route,
    ScriptedInteraction, SubmitOutcome,
};
use staffbook_core::form::{Field, FieldStatus};
use staffbook_core::store::{HttpStore, StoreConfig};
use staffbook_core::{ContactRepository, EmployeeId, ValidationError};

use super::fake_server::FakeServer;

fn id(n: u64) -> EmployeeId {
    EmployeeId::new(n).unwrap()
}

fn repository(server: &FakeServer) -> ContactRepository {
    let config = StoreConfig::default().with_base_url(&server.base_url);
    let store = HttpStore::new(&config).unwrap();
    ContactRepository::from_config(Arc::new(store), &config)
}

fn seed() -> Vec<serde_json::Value> {
    vec![json!({
        "employeeId": 3,
        "name": "Ada Lovelace",
        "phone": "+44 20 7946 0000",
        "email": "ada@example.com",
        "photo": "https://example.com/ada.jpg",
        "linkedin": "ada-lovelace"
    })]
}

#[tokio::test]
async fn test_full_contact_lifecycle() {
    let server = FakeServer::start(seed()).await;
    let repo = repository(&server);
    let navigator = RecordingNavigator::new();
    let interaction = ScriptedInteraction::accepting();
    let events = Arc::new(EventDispatcher::new());

    // Listing
    let mut list =
        ContactListController::new(repo.clone(), &navigator, &interaction, events.clone());
    list.load().await;
    assert_eq!(list.contacts().len(), 1);
    assert_eq!(list.create(), Route::Create);

    // Create
    let mut form = ContactFormController::new(
        repo.clone(),
        parse_route_param(None),
        &navigator,
        &interaction,
        events.clone(),
    );
    form.load().await;
    form.set_field(Field::EmployeeId, "42").await.unwrap();
    form.set_field(Field::Name, "Margaret Hamilton").await.unwrap();
    form.set_field(Field::Phone, "+1 (555) 010-0199").await.unwrap();
    form.set_field(Field::Email, "margaret@example.com").await.unwrap();
    form.set_field(Field::Photo, "https://example.com/m.jpg").await.unwrap();
    form.set_field(Field::Instagram, "mhamilton").await.unwrap();
    assert_eq!(form.submit().await, SubmitOutcome::Succeeded(Route::List));

    list.load().await;
    assert_eq!(list.contacts().len(), 2);

    // Detail
    let mut detail =
        ContactDetailController::new(repo.clone(), &navigator, &interaction, events.clone());
    detail.open(parse_route_param(Some("42"))).await;
    let links = detail.links();
    assert_eq!(links.whatsapp.as_deref(), Some("https://wa.me/15550100199"));
    assert_eq!(links.instagram.as_deref(), Some("https://instagram.com/mhamilton"));
    assert_eq!(links.linkedin, None);
    assert_eq!(detail.edit(), Some(Route::Edit(id(42))));

    // Edit
    let mut edit = ContactFormController::new(
        repo.clone(),
        parse_route_param(Some("42")),
        &navigator,
        &interaction,
        events.clone(),
    );
    edit.load().await;
    assert_eq!(edit.form().value(Field::Instagram), "mhamilton");
    edit.set_field(Field::Company, "NASA").await.unwrap();
    assert_eq!(
        edit.submit().await,
        SubmitOutcome::Succeeded(Route::Detail(id(42)))
    );
    let stored = server
        .records()
        .into_iter()
        .find(|r| r["employeeId"] == json!(42))
        .unwrap();
    assert_eq!(stored["company"], json!("NASA"));
    assert_eq!(stored["instagram"], json!("mhamilton"));

    // Delete from the detail view
    detail.open(parse_route_param(Some("42"))).await;
    assert_eq!(detail.delete().await, DeleteOutcome::Deleted);
    assert_eq!(navigator.last(), Some(Route::List));
    assert_eq!(server.records().len(), 1);
    assert!(interaction.alerts().is_empty());
}

#[tokio::test]
async fn test_malformed_records_do_not_block_listing_or_create() {
    let mut records = seed();
    records.push(json!({"employeeId": 8, "name": "Legacy", "phone": "1", "email": "l@x.io"}));
    records.push(json!({
        "employeeId": 0,
        "name": "Zero",
        "phone": "1",
        "email": "z@x.io",
        "photo": "z.png"
    }));
    let server = FakeServer::start(records).await;
    let repo = repository(&server);
    let navigator = RecordingNavigator::new();
    let interaction = ScriptedInteraction::accepting();
    let events = Arc::new(EventDispatcher::new());

    let mut list =
        ContactListController::new(repo.clone(), &navigator, &interaction, events.clone());
    list.load().await;
    assert_eq!(list.contacts().len(), 1);
    assert_eq!(list.contacts()[0].employee_id, id(3));

    let mut form = ContactFormController::new(
        repo,
        parse_route_param(None),
        &navigator,
        &interaction,
        events,
    );
    form.load().await;
    form.set_field(Field::EmployeeId, "42").await.unwrap();
    assert_eq!(form.form().status(Field::EmployeeId), FieldStatus::Valid);

    form.set_field(Field::Name, "Margaret Hamilton").await.unwrap();
    form.set_field(Field::Phone, "+1 555 0100").await.unwrap();
    form.set_field(Field::Email, "margaret@example.com").await.unwrap();
    form.set_field(Field::Photo, "m.jpg").await.unwrap();
    assert_eq!(form.submit().await, SubmitOutcome::Succeeded(Route::List));
    assert_eq!(server.records().len(), 4);
}

#[tokio::test]
async fn test_duplicate_employee_id_is_caught_before_write() {
    let server = FakeServer::start(seed()).await;
    let navigator = RecordingNavigator::new();
    let interaction = ScriptedInteraction::declining();
    let mut form = ContactFormController::new(
        repository(&server),
        parse_route_param(None),
        &navigator,
        &interaction,
        Arc::new(EventDispatcher::new()),
    );
    form.load().await;

    form.set_field(Field::EmployeeId, "3").await.unwrap();

    assert_eq!(
        form.form().status(Field::EmployeeId),
        FieldStatus::Invalid(ValidationError::DuplicateEmployeeId)
    );
    assert_eq!(form.submit().await, SubmitOutcome::Blocked);
    assert_eq!(server.records().len(), 1);
}

#[tokio::test]
async fn test_id_taken_after_check_is_rejected_at_write() {
    let server = FakeServer::start(seed()).await;
    let navigator = RecordingNavigator::new();
    let interaction = ScriptedInteraction::declining();
    let mut form = ContactFormController::new(
        repository(&server),
        parse_route_param(None),
        &navigator,
        &interaction,
        Arc::new(EventDispatcher::new()),
    );
    form.load().await;
    form.set_field(Field::EmployeeId, "42").await.unwrap();
    form.set_field(Field::Name, "Margaret Hamilton").await.unwrap();
    form.set_field(Field::Phone, "+1 555 0100").await.unwrap();
    form.set_field(Field::Email, "margaret@example.com").await.unwrap();
    form.set_field(Field::Photo, "m.jpg").await.unwrap();

    // Someone else claims 42 between the check and the submit.
    let mut rival = seed()[0].clone();
    rival["employeeId"] = json!(42);
    server.insert(rival);

    let outcome = form.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(interaction.alerts(), vec![messages::CREATE_CONFLICT]);
    assert_eq!(
        form.form().error(Field::EmployeeId),
        Some(ValidationError::DuplicateEmployeeId)
    );
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_editing_unknown_contact_returns_to_list() {
    let server = FakeServer::start(seed()).await;
    let navigator = RecordingNavigator::new();
    let interaction = ScriptedInteraction::declining();
    let mut form = ContactFormController::new(
        repository(&server),
        parse_route_param(Some("7")),
        &navigator,
        &interaction,
        Arc::new(EventDispatcher::new()),
    );

    form.load().await;

    assert_eq!(interaction.alerts(), vec![messages::CONTACT_NOT_FOUND]);
    assert_eq!(navigator.visited(), vec![Route::List]);
    assert_eq!(server.records().len(), 1);
}
