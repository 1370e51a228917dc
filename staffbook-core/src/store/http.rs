//! JSON-over-HTTP contact store
//!
//! Talks to a json-server style backend:
//! - `GET    {base}/{collection}` lists records
//! - `GET    {base}/{collection}?employeeId=N` finds records by employee id
//! - `POST   {base}/{collection}` creates a record
//! - `PUT    {base}/{collection}/{id}` replaces a record by storage id
//! - `DELETE {base}/{collection}/{id}` removes a record by storage id
//!
//! The server does not enforce employee id uniqueness, so writes look the
//! record up first.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

use super::{ContactStore, StoreConfig, StoreError, StoreResult};
use crate::contact::{Contact, EmployeeId, StorageId};

/// HTTP-backed contact store
pub struct HttpStore {
    client: Client,
    config: StoreConfig,
}

impl HttpStore {
    /// Create a new HTTP store from config
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Get the collection URL
    pub fn collection_url(&self) -> String {
        self.config.collection_url()
    }

    async fn find(&self, employee_id: EmployeeId) -> StoreResult<Option<Contact>> {
        let response = self
            .client
            .get(self.config.collection_url())
            .query(&[("employeeId", employee_id.get())])
            .send()
            .await?;
        let response = check_status(response, &format!("employee {}", employee_id))?;

        let matches = decode_contacts(response.json().await?);
        Ok(matches
            .into_iter()
            .find(|c| c.employee_id == employee_id))
    }

    async fn storage_id(&self, employee_id: EmployeeId) -> StoreResult<StorageId> {
        let contact = self
            .find(employee_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("employee {}", employee_id)))?;

        contact.id.ok_or_else(|| {
            StoreError::Decode(format!("employee {} has no storage id", employee_id))
        })
    }
}

/// Decodes a collection body entry by entry. Entries that do not form a
/// valid contact are logged and skipped.
fn decode_contacts(entries: Vec<Value>) -> Vec<Contact> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Contact>(entry) {
            Ok(contact) => Some(contact),
            Err(error) => {
                warn!(index, %error, "skipping malformed contact record");
                None
            }
        })
        .collect()
}

fn check_status(response: Response, context: &str) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let reason = status.canonical_reason().unwrap_or("Unknown error");
    Err(StoreError::from_status(status.as_u16(), reason, context))
}

#[async_trait]
impl ContactStore for HttpStore {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        let response = self
            .client
            .get(self.config.collection_url())
            .send()
            .await?;
        let response = check_status(response, "contact list")?;
        Ok(decode_contacts(response.json().await?))
    }

    async fn get(&self, employee_id: EmployeeId) -> StoreResult<Contact> {
        self.find(employee_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("employee {}", employee_id)))
    }

    async fn create(&self, contact: &Contact) -> StoreResult<Contact> {
        if self.find(contact.employee_id).await?.is_some() {
            return Err(StoreError::Conflict(format!(
                "employeeId {} already exists",
                contact.employee_id
            )));
        }

        let mut body = contact.clone();
        body.id = None;
        let response = self
            .client
            .post(self.config.collection_url())
            .json(&body)
            .send()
            .await?;
        let response = check_status(response, &format!("employeeId {}", contact.employee_id))?;

        let created: Contact = response.json().await?;
        debug!(employee_id = %created.employee_id, "created contact");
        Ok(created)
    }

    async fn update(&self, employee_id: EmployeeId, contact: &Contact) -> StoreResult<Contact> {
        let storage_id = self.storage_id(employee_id).await?;

        let mut body = contact.clone();
        body.id = Some(storage_id.clone());
        let response = self
            .client
            .put(self.config.record_url(&storage_id.to_string()))
            .json(&body)
            .send()
            .await?;
        let response = check_status(response, &format!("employee {}", employee_id))?;

        Ok(response.json().await?)
    }

    async fn delete(&self, employee_id: EmployeeId) -> StoreResult<()> {
        let storage_id = self.storage_id(employee_id).await?;

        let response = self
            .client
            .delete(self.config.record_url(&storage_id.to_string()))
            .send()
            .await?;
        check_status(response, &format!("employee {}", employee_id))?;
        debug!(%employee_id, %storage_id, "deleted contact");
        Ok(())
    }
}
