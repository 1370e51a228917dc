// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Repository
//!
//! Thin asynchronous client over a [`ContactStore`]. Adds a per-call
//! timeout and nothing else.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::contact::{Contact, EmployeeId};
use crate::store::{ContactStore, StoreConfig, StoreError, StoreResult};

/// Asynchronous CRUD client for contacts.
#[derive(Clone)]
pub struct ContactRepository {
    store: Arc<dyn ContactStore>,
    timeout: Duration,
}

impl ContactRepository {
    /// Creates a repository with the default request timeout.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self::from_config(store, &StoreConfig::default())
    }

    /// Creates a repository using the timeout from `config`.
    pub fn from_config(store: Arc<dyn ContactStore>, config: &StoreConfig) -> Self {
        ContactRepository {
            store,
            timeout: config.request_timeout,
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Lists every contact.
    pub async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.bounded("list", self.store.list()).await
    }

    /// Fetches a contact by employee id.
    pub async fn get_contact(&self, employee_id: EmployeeId) -> StoreResult<Contact> {
        self.bounded("get", self.store.get(employee_id)).await
    }

    /// Creates a contact.
    pub async fn create_contact(&self, contact: &Contact) -> StoreResult<Contact> {
        self.bounded("create", self.store.create(contact)).await
    }

    /// Replaces the contact stored under `employee_id`.
    pub async fn update_contact(
        &self,
        employee_id: EmployeeId,
        contact: &Contact,
    ) -> StoreResult<Contact> {
        self.bounded("update", self.store.update(employee_id, contact))
            .await
    }

    /// Deletes the contact stored under `employee_id`.
    pub async fn delete_contact(&self, employee_id: EmployeeId) -> StoreResult<()> {
        self.bounded("delete", self.store.delete(employee_id)).await
    }

    async fn bounded<T, F>(&self, op: &'static str, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        debug!(op, "store call");
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!(op, timeout = ?self.timeout, "store call timed out");
                Err(StoreError::Timeout(self.timeout))
            }
        }
    }
}
