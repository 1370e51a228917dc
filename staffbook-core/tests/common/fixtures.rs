// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact fixtures.

use staffbook_core::{Contact, EmployeeId};

/// Shorthand for a known-good employee id.
pub fn id(value: u64) -> EmployeeId {
    EmployeeId::new(value).expect("fixture ids are positive")
}

/// A complete contact with derived contact details.
pub fn contact(employee_id: u64, name: &str) -> Contact {
    let slug = name.to_lowercase().replace(' ', ".");
    Contact::new(
        id(employee_id),
        name,
        &format!("+41 79 555 {:04}", employee_id),
        &format!("{}@example.com", slug),
        &format!("https://example.com/photos/{}.jpg", employee_id),
    )
}

/// A contact with every optional field set.
pub fn full_contact(employee_id: u64, name: &str) -> Contact {
    let mut c = contact(employee_id, name);
    c.whatsapp = Some(c.phone.clone());
    c.instagram = Some("staffbook".to_string());
    c.linkedin = Some("staffbook-team".to_string());
    c.company = Some("Acme".to_string());
    c.address = Some("Bahnhofstrasse 1, Zurich".to_string());
    c.notes = Some("Prefers email".to_string());
    c
}

/// The directory most scenarios start from: employees 3, 7 and 9.
pub fn directory() -> Vec<Contact> {
    vec![
        contact(3, "Ada Lovelace"),
        contact(7, "Grace Hopper"),
        contact(9, "Alan Turing"),
    ]
}
