//! User-facing notices.

use crate::contact::EmployeeId;
use crate::store::StoreError;

pub const CONTACT_NOT_FOUND: &str = "Contact not found";
pub const LOAD_UNREACHABLE: &str =
    "Could not load contact. Please check your connection and try again.";
pub const CREATE_CONFLICT: &str = "Employee ID already exists. Please use a different ID.";
pub const CREATE_FAILED: &str = "Failed to create contact. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update contact. Please try again.";
pub const WRITE_UNREACHABLE: &str =
    "Could not reach the contact server. Please check your connection and try again.";
pub const INVALID_DELETE: &str = "Cannot delete contact: Invalid Employee ID";

/// Confirmation prompt shown before deleting.
pub fn delete_prompt(name: &str, employee_id: EmployeeId) -> String {
    format!(
        "Are you sure you want to delete {} (Employee ID: {})?",
        name, employee_id
    )
}

/// Notice shown when a delete fails.
pub fn delete_failed(err: &StoreError) -> String {
    match err {
        StoreError::Http { status, reason } => {
            format!("Failed to delete contact. HTTP {}: {}", status, reason)
        }
        StoreError::Transport(_) | StoreError::Timeout(_) => {
            "Failed to delete contact. Please check if the contact server is running.".to_string()
        }
        other => format!("Failed to delete contact: {}", other),
    }
}
