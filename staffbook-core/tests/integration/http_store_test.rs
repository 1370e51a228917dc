// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HttpStore against the json-server stand-in.

use std::time::Duration;

use serde_json::json;
use staffbook_core::store::{ContactStore, FailureKind, HttpStore, StoreConfig, StoreError};
use staffbook_core::{Contact, EmployeeId, StorageId};

use super::fake_server::FakeServer;

fn id(n: u64) -> EmployeeId {
    EmployeeId::new(n).unwrap()
}

fn record(employee_id: u64, name: &str) -> serde_json::Value {
    json!({
        "employeeId": employee_id,
        "name": name,
        "phone": "+1 555 0100",
        "email": format!("{}@example.com", employee_id),
        "photo": "https://example.com/p.jpg",
        "instagram": "",
        "linkedin": "",
        "whatsapp": "",
        "company": "",
        "address": "",
        "notes": ""
    })
}

fn store_for(server: &FakeServer) -> HttpStore {
    HttpStore::new(&StoreConfig::default().with_base_url(&server.base_url)).unwrap()
}

#[tokio::test]
async fn test_list_decodes_json_server_records() {
    let server = FakeServer::start(vec![record(3, "Ada"), record(7, "Grace")]).await;
    let store = store_for(&server);

    let contacts = store.list().await.unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].employee_id, id(3));
    assert_eq!(contacts[0].id, Some(StorageId::Text("1".into())));
    // Blank optional strings come back as absent.
    assert_eq!(contacts[0].instagram, None);
}

#[tokio::test]
async fn test_list_skips_records_that_are_not_contacts() {
    let mut legacy = record(8, "Legacy");
    legacy.as_object_mut().unwrap().remove("photo");
    let server = FakeServer::start(vec![record(3, "Ada"), legacy, record(7, "Grace")]).await;
    let store = store_for(&server);

    let contacts = store.list().await.unwrap();

    let ids: Vec<_> = contacts.iter().map(|c| c.employee_id).collect();
    assert_eq!(ids, vec![id(3), id(7)]);
    assert_eq!(store.get(id(8)).await.unwrap_err().kind(), FailureKind::NotFound);
}

#[tokio::test]
async fn test_get_finds_by_employee_id() {
    let server = FakeServer::start(vec![record(3, "Ada"), record(7, "Grace")]).await;
    let store = store_for(&server);

    let contact = store.get(id(7)).await.unwrap();
    assert_eq!(contact.name, "Grace");

    let err = store.get(id(8)).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::NotFound);
}

#[tokio::test]
async fn test_create_rejects_existing_employee_id() {
    let server = FakeServer::start(vec![record(3, "Ada")]).await;
    let store = store_for(&server);
    let duplicate = Contact::new(id(3), "Imposter", "1", "i@example.com", "p.jpg");

    let err = store.create(&duplicate).await.unwrap_err();

    assert!(matches!(err, StoreError::Conflict(_)));
    assert_eq!(server.records().len(), 1);
}

#[tokio::test]
async fn test_create_returns_stored_record() {
    let server = FakeServer::start(Vec::new()).await;
    let store = store_for(&server);
    let mut contact = Contact::new(id(42), "Margaret", "1", "m@example.com", "p.jpg");
    contact.company = Some("NASA".into());

    let created = store.create(&contact).await.unwrap();

    assert_eq!(created.id, Some(StorageId::Text("1".into())));
    assert_eq!(created.company.as_deref(), Some("NASA"));
    let stored = &server.records()[0];
    assert_eq!(stored["employeeId"], json!(42));
    assert!(stored.get("instagram").is_none());
}

#[tokio::test]
async fn test_update_replaces_whole_record_and_keeps_storage_id() {
    let server = FakeServer::start(vec![record(3, "Ada"), record(7, "Grace")]).await;
    let store = store_for(&server);
    let replacement = Contact::new(id(7), "Grace Hopper", "2", "g@example.com", "g.jpg");

    let updated = store.update(id(7), &replacement).await.unwrap();

    assert_eq!(updated.id, Some(StorageId::Text("2".into())));
    let stored = &server.records()[1];
    assert_eq!(stored["name"], json!("Grace Hopper"));
    assert_eq!(stored["phone"], json!("2"));
    // Whole-record replacement drops fields the new record omits.
    assert!(stored.get("notes").is_none());
}

#[tokio::test]
async fn test_update_and_delete_of_missing_contact_are_not_found() {
    let server = FakeServer::start(vec![record(3, "Ada")]).await;
    let store = store_for(&server);
    let ghost = Contact::new(id(5), "Ghost", "1", "g@example.com", "g.jpg");

    assert_eq!(
        store.update(id(5), &ghost).await.unwrap_err().kind(),
        FailureKind::NotFound
    );
    assert_eq!(
        store.delete(id(5)).await.unwrap_err().kind(),
        FailureKind::NotFound
    );
}

#[tokio::test]
async fn test_delete_removes_by_storage_id() {
    let server = FakeServer::start(vec![record(3, "Ada"), record(7, "Grace")]).await;
    let store = store_for(&server);

    store.delete(id(3)).await.unwrap();

    let remaining = server.records();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["employeeId"], json!(7));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    // Bind and drop a listener to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = StoreConfig::default()
        .with_base_url(&format!("http://{}", addr))
        .with_timeout(Duration::from_secs(2));
    let store = HttpStore::new(&config).unwrap();

    let err = store.list().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
}
