// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Minimal json-server stand-in.
//!
//! Stores records as raw JSON, hands out string ids and filters by any
//! query parameter, like the real thing. It does not enforce uniqueness.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

#[derive(Default)]
pub struct FakeDb {
    pub records: Vec<Value>,
    next_id: u64,
}

pub type Db = Arc<Mutex<FakeDb>>;

pub struct FakeServer {
    pub base_url: String,
    pub db: Db,
}

impl FakeServer {
    /// Starts a server on an ephemeral port, seeded with `records`.
    pub async fn start(records: Vec<Value>) -> Self {
        let db: Db = Arc::new(Mutex::new(FakeDb::default()));
        for record in records {
            insert(&db, record);
        }

        let app = Router::new()
            .route("/contacts", get(list).post(create))
            .route("/contacts/:id", get(fetch).put(replace).delete(remove))
            .with_state(db.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeServer {
            base_url: format!("http://{}", addr),
            db,
        }
    }

    pub fn records(&self) -> Vec<Value> {
        self.db.lock().unwrap().records.clone()
    }

    /// Adds a record behind the client's back.
    pub fn insert(&self, record: Value) {
        insert(&self.db, record);
    }
}

fn insert(db: &Db, mut record: Value) -> Value {
    let mut db = db.lock().unwrap();
    db.next_id += 1;
    record["id"] = Value::String(db.next_id.to_string());
    db.records.push(record.clone());
    record
}

fn matches(record: &Value, params: &HashMap<String, String>) -> bool {
    params.iter().all(|(key, want)| match &record[key] {
        Value::String(s) => s == want,
        other => other.to_string() == *want,
    })
}

async fn list(
    State(db): State<Db>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let db = db.lock().unwrap();
    Json(
        db.records
            .iter()
            .filter(|r| matches(r, &params))
            .cloned()
            .collect(),
    )
}

async fn fetch(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let db = db.lock().unwrap();
    db.records
        .iter()
        .find(|r| r["id"] == Value::String(id.clone()))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create(State(db): State<Db>, Json(record): Json<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(insert(&db, record)))
}

async fn replace(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(mut record): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut db = db.lock().unwrap();
    let slot = db
        .records
        .iter_mut()
        .find(|r| r["id"] == Value::String(id.clone()))
        .ok_or(StatusCode::NOT_FOUND)?;
    record["id"] = Value::String(id);
    *slot = record.clone();
    Ok(Json(record))
}

async fn remove(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let mut db = db.lock().unwrap();
    let before = db.records.len();
    db.records.retain(|r| r["id"] != Value::String(id.clone()));
    if db.records.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
