// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory contact store.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{ContactStore, StoreError, StoreResult};
use crate::contact::{Contact, EmployeeId, StorageId};

#[derive(Default)]
struct Inner {
    contacts: Vec<Contact>,
    next_storage_id: u64,
}

/// Contact store held in process memory.
///
/// Assigns sequential numeric storage ids and enforces employee id
/// uniqueness on create.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with contacts. Missing storage ids are assigned.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let mut inner = Inner::default();
        for mut contact in contacts {
            inner.next_storage_id += 1;
            if contact.id.is_none() {
                contact.id = Some(StorageId::Number(inner.next_storage_id));
            }
            inner.contacts.push(contact);
        }
        MemoryStore {
            inner: Mutex::new(inner),
        }
    }

    /// Returns the number of stored contacts.
    pub fn len(&self) -> usize {
        self.lock().map(|inner| inner.contacts.len()).unwrap_or(0)
    }

    /// Returns true if the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Transport("memory store lock poisoned".into()))
    }
}

fn position(contacts: &[Contact], employee_id: EmployeeId) -> StoreResult<usize> {
    contacts
        .iter()
        .position(|c| c.employee_id == employee_id)
        .ok_or_else(|| StoreError::NotFound(format!("employee {}", employee_id)))
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.lock()?.contacts.clone())
    }

    async fn get(&self, employee_id: EmployeeId) -> StoreResult<Contact> {
        let inner = self.lock()?;
        let index = position(&inner.contacts, employee_id)?;
        Ok(inner.contacts[index].clone())
    }

    async fn create(&self, contact: &Contact) -> StoreResult<Contact> {
        let mut inner = self.lock()?;
        if inner
            .contacts
            .iter()
            .any(|c| c.employee_id == contact.employee_id)
        {
            return Err(StoreError::Conflict(format!(
                "employeeId {} already exists",
                contact.employee_id
            )));
        }

        inner.next_storage_id += 1;
        let mut stored = contact.clone();
        stored.id = Some(StorageId::Number(inner.next_storage_id));
        inner.contacts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, employee_id: EmployeeId, contact: &Contact) -> StoreResult<Contact> {
        let mut inner = self.lock()?;
        let index = position(&inner.contacts, employee_id)?;

        let mut stored = contact.clone();
        stored.id = inner.contacts[index].id.clone();
        inner.contacts[index] = stored.clone();
        Ok(stored)
    }

    async fn delete(&self, employee_id: EmployeeId) -> StoreResult<()> {
        let mut inner = self.lock()?;
        let index = position(&inner.contacts, employee_id)?;
        inner.contacts.remove(index);
        Ok(())
    }
}
