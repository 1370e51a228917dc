// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Store
//!
//! Instrumented store for exercising controllers without a server.
//! Records every call, can fail or hang chosen operations, and otherwise
//! delegates to a [`MemoryStore`].

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{ContactStore, MemoryStore, StoreError, StoreResult};
use crate::contact::{Contact, EmployeeId};

/// Store operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// A recorded call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Get(EmployeeId),
    Create(Contact),
    Update(EmployeeId, Contact),
    Delete(EmployeeId),
}

impl StoreCall {
    /// Returns the operation this call belongs to.
    pub fn op(&self) -> StoreOp {
        match self {
            StoreCall::List => StoreOp::List,
            StoreCall::Get(_) => StoreOp::Get,
            StoreCall::Create(_) => StoreOp::Create,
            StoreCall::Update(..) => StoreOp::Update,
            StoreCall::Delete(_) => StoreOp::Delete,
        }
    }

    /// Returns true for create, update and delete.
    pub fn is_write(&self) -> bool {
        matches!(self.op(), StoreOp::Create | StoreOp::Update | StoreOp::Delete)
    }
}

/// Mock contact store for tests.
///
/// # Example
///
/// ```
/// use staffbook_core::store::{MockStore, StoreError, StoreOp};
///
/// let store = MockStore::new();
/// store.fail_on(StoreOp::List, StoreError::Transport("connection refused".into()));
/// assert!(store.calls().is_empty());
/// ```
#[derive(Default)]
pub struct MockStore {
    backend: MemoryStore,
    calls: Mutex<Vec<StoreCall>>,
    failures: Mutex<HashMap<StoreOp, StoreError>>,
    hanging: Mutex<HashSet<StoreOp>>,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockStore {
    /// Creates an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock store pre-filled with contacts.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        MockStore {
            backend: MemoryStore::with_contacts(contacts),
            ..Default::default()
        }
    }

    /// Makes every subsequent call of `op` fail with `error`.
    pub fn fail_on(&self, op: StoreOp, error: StoreError) {
        guard(&self.failures).insert(op, error);
    }

    /// Removes an injected failure.
    pub fn clear_failure(&self, op: StoreOp) {
        guard(&self.failures).remove(&op);
    }

    /// Makes every subsequent call of `op` never complete.
    pub fn hang_on(&self, op: StoreOp) {
        guard(&self.hanging).insert(op);
    }

    /// Returns all recorded calls in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        guard(&self.calls).clone()
    }

    /// Returns the number of recorded calls of `op`.
    pub fn count(&self, op: StoreOp) -> usize {
        guard(&self.calls).iter().filter(|c| c.op() == op).count()
    }

    /// Returns only the recorded writes.
    pub fn writes(&self) -> Vec<StoreCall> {
        guard(&self.calls)
            .iter()
            .filter(|c| c.is_write())
            .cloned()
            .collect()
    }

    /// Current contents of the backing store.
    pub async fn snapshot(&self) -> Vec<Contact> {
        self.backend.list().await.unwrap_or_default()
    }

    async fn intercept(&self, call: StoreCall) -> StoreResult<()> {
        let op = call.op();
        guard(&self.calls).push(call);

        let hangs = guard(&self.hanging).contains(&op);
        if hangs {
            std::future::pending::<()>().await;
        }

        let failure = guard(&self.failures).get(&op).cloned();
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactStore for MockStore {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        self.intercept(StoreCall::List).await?;
        self.backend.list().await
    }

    async fn get(&self, employee_id: EmployeeId) -> StoreResult<Contact> {
        self.intercept(StoreCall::Get(employee_id)).await?;
        self.backend.get(employee_id).await
    }

    async fn create(&self, contact: &Contact) -> StoreResult<Contact> {
        self.intercept(StoreCall::Create(contact.clone())).await?;
        self.backend.create(contact).await
    }

    async fn update(&self, employee_id: EmployeeId, contact: &Contact) -> StoreResult<Contact> {
        self.intercept(StoreCall::Update(employee_id, contact.clone()))
            .await?;
        self.backend.update(employee_id, contact).await
    }

    async fn delete(&self, employee_id: EmployeeId) -> StoreResult<()> {
        self.intercept(StoreCall::Delete(employee_id)).await?;
        self.backend.delete(employee_id).await
    }
}
