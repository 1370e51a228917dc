// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Store Module
//!
//! The CRUD backend seam. Every record is addressed by its employee id;
//! storage ids stay an implementation detail of each backend.
//!
//! Backends:
//! - [`MemoryStore`] - in-process store
//! - [`MockStore`] - instrumented store for tests (call log, injected failures)
//! - [`HttpStore`] - json-server compatible HTTP backend (feature `http`)

mod config;
mod error;
#[cfg(feature = "http")]
mod http;
mod memory;
mod mock;

pub use config::StoreConfig;
pub use error::{FailureKind, StoreError, StoreResult};
#[cfg(feature = "http")]
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use mock::{MockStore, StoreCall, StoreOp};

use async_trait::async_trait;

use crate::contact::{Contact, EmployeeId};

/// CRUD backend for contacts.
///
/// Implementations report missing records as [`StoreError::NotFound`] and
/// employee id collisions on create as [`StoreError::Conflict`].
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Lists every contact.
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// Fetches one contact by employee id.
    async fn get(&self, employee_id: EmployeeId) -> StoreResult<Contact>;

    /// Creates a contact and returns it with its storage id assigned.
    async fn create(&self, contact: &Contact) -> StoreResult<Contact>;

    /// Replaces the record stored under `employee_id`.
    async fn update(&self, employee_id: EmployeeId, contact: &Contact) -> StoreResult<Contact>;

    /// Deletes the record stored under `employee_id`.
    async fn delete(&self, employee_id: EmployeeId) -> StoreResult<()>;
}
