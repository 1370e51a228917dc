//! Display Helpers
//!
//! Terminal output formatting.

use console::style;
use staffbook_core::{Contact, ContactLinks};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success line.
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Prints an informational line.
pub fn info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Prints a warning to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Prints an error to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Employee ID")]
    employee_id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Company")]
    company: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        ContactRow {
            employee_id: contact.employee_id.get(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            company: contact.company.clone().unwrap_or_default(),
        }
    }
}

/// Renders the contact listing.
pub fn display_contacts_table(contacts: &[Contact]) {
    let rows: Vec<ContactRow> = contacts.iter().map(ContactRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn row(label: &str, value: &str) {
    println!("  {:<10} {}", style(label).dim(), value);
}

/// Renders one contact with its external links.
pub fn display_contact_details(contact: &Contact, links: &ContactLinks) {
    println!();
    println!(
        "  {}  {}",
        style(contact.display_name()).bold().cyan(),
        style(format!("#{}", contact.employee_id)).dim()
    );
    println!();
    row("Phone", &contact.phone);
    row("Email", &contact.email);
    row("Photo", &contact.photo);

    let optional = [
        ("Company", &contact.company),
        ("Address", &contact.address),
        ("Notes", &contact.notes),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            row(label, value);
        }
    }

    let links = [
        ("WhatsApp", &links.whatsapp),
        ("Instagram", &links.instagram),
        ("LinkedIn", &links.linkedin),
    ];
    if links.iter().any(|(_, url)| url.is_some()) {
        println!();
        for (label, url) in links {
            if let Some(url) = url {
                row(label, url);
            }
        }
    }
    println!();
}
