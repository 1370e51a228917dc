//! Contacts Command
//!
//! List, view, create, edit, delete and open contacts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use staffbook_core::api::{
    parse_route_param, CallbackHandler, ContactDetailController, ContactFormController,
    ContactListController, DeleteOutcome, EventDispatcher, FormState, SubmitOutcome,
};
use staffbook_core::{Contact, Field, RouteParam, ViewEvent};

use crate::config::CliConfig;
use crate::display;
use crate::terminal::{TerminalInteraction, TerminalNavigator};
use crate::LinkKind;

/// Contact fields accepted on the command line.
///
/// Every flag is optional here; the form reports missing required values.
#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    /// Employee ID (positive whole number)
    #[arg(long)]
    pub employee_id: Option<String>,
    /// Full name
    #[arg(long)]
    pub name: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Email address
    #[arg(long)]
    pub email: Option<String>,
    /// Photo URL
    #[arg(long)]
    pub photo: Option<String>,
    /// Instagram handle
    #[arg(long)]
    pub instagram: Option<String>,
    /// LinkedIn profile slug
    #[arg(long)]
    pub linkedin: Option<String>,
    /// WhatsApp number
    #[arg(long)]
    pub whatsapp: Option<String>,
    /// Company
    #[arg(long)]
    pub company: Option<String>,
    /// Postal address
    #[arg(long)]
    pub address: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl ContactArgs {
    /// The fields that were given, in form order.
    fn provided(&self) -> Vec<(Field, &str)> {
        [
            (Field::EmployeeId, &self.employee_id),
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Email, &self.email),
            (Field::Photo, &self.photo),
            (Field::Instagram, &self.instagram),
            (Field::Linkedin, &self.linkedin),
            (Field::Whatsapp, &self.whatsapp),
            (Field::Company, &self.company),
            (Field::Address, &self.address),
            (Field::Notes, &self.notes),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// Per-command collaborators.
struct Session {
    navigator: TerminalNavigator,
    interaction: TerminalInteraction,
}

impl Session {
    fn new(assume_yes: bool) -> Self {
        Session {
            navigator: TerminalNavigator::default(),
            interaction: TerminalInteraction::new(assume_yes),
        }
    }
}

fn require_id(raw: &str) -> Result<RouteParam> {
    match parse_route_param(Some(raw)) {
        RouteParam::Invalid(raw) => bail!("Invalid employee ID '{}'", raw),
        RouteParam::Absent => bail!("Employee ID is required"),
        param => Ok(param),
    }
}

async fn fetch_contact<'s>(
    config: &CliConfig,
    session: &'s Session,
    raw_id: &str,
) -> Result<ContactDetailController<&'s TerminalNavigator, &'s TerminalInteraction>> {
    let param = require_id(raw_id)?;
    let mut detail = ContactDetailController::new(
        config.repository()?,
        &session.navigator,
        &session.interaction,
        Arc::new(EventDispatcher::new()),
    );
    detail.open(param).await;
    if detail.contact().is_none() {
        bail!("Contact {} not found", raw_id);
    }
    Ok(detail)
}

/// Lists all contacts.
pub async fn list(config: &CliConfig, json: bool) -> Result<()> {
    let session = Session::new(false);

    let loaded = Arc::new(AtomicBool::new(false));
    let flag = loaded.clone();
    let mut events = EventDispatcher::new();
    events.add_handler(Arc::new(CallbackHandler::new(move |event| {
        if let ViewEvent::ListLoaded { .. } = event {
            flag.store(true, Ordering::SeqCst);
        }
    })));

    let mut list = ContactListController::new(
        config.repository()?,
        &session.navigator,
        &session.interaction,
        Arc::new(events),
    );
    list.load().await;

    if !loaded.load(Ordering::SeqCst) {
        bail!(
            "Could not load contacts from {}. Is the contact server running?",
            config.api_url
        );
    }

    let contacts = list.contacts();
    if json {
        println!("{}", serde_json::to_string_pretty(contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        display::info("No contacts yet. Add one with:");
        println!("  staffbook create --employee-id <ID> --name <NAME> ...");
        return Ok(());
    }

    println!();
    println!("Contacts ({}):", contacts.len());
    println!();
    display::display_contacts_table(contacts);
    println!();

    Ok(())
}

/// Shows details for a specific contact.
pub async fn show(config: &CliConfig, id: &str, json: bool) -> Result<()> {
    let session = Session::new(false);
    let detail = fetch_contact(config, &session, id).await?;

    if let Some(contact) = detail.contact() {
        if json {
            println!("{}", serde_json::to_string_pretty(contact)?);
        } else {
            display::display_contact_details(contact, &detail.links());
        }
    }

    Ok(())
}

async fn fill<N, I>(form: &mut ContactFormController<N, I>, fields: &ContactArgs) -> Result<()>
where
    N: staffbook_core::Navigator,
    I: staffbook_core::Interaction,
{
    for (field, value) in fields.provided() {
        if let Err(err) = form.set_field(field, value).await {
            bail!("{}: {}", field, err);
        }
    }
    Ok(())
}

fn report_submit(outcome: SubmitOutcome, errors: Vec<(Field, String)>, done: &str) -> Result<()> {
    match outcome {
        SubmitOutcome::Succeeded(route) => {
            display::success(done);
            display::info(&format!("Next: {}", route));
            Ok(())
        }
        SubmitOutcome::Blocked => {
            for (field, err) in &errors {
                display::error(&format!("{}: {}", field, err));
            }
            bail!("Contact not saved: {} field(s) need attention", errors.len())
        }
        SubmitOutcome::Failed(err) => bail!("Contact not saved: {}", err),
        SubmitOutcome::Ignored => bail!("Contact not saved"),
    }
}

fn field_errors(form: &staffbook_core::FormModel) -> Vec<(Field, String)> {
    form.errors()
        .into_iter()
        .map(|(field, err)| (field, err.to_string()))
        .collect()
}

/// Creates a contact from the given fields.
pub async fn create(config: &CliConfig, fields: &ContactArgs) -> Result<()> {
    let session = Session::new(false);
    let mut form = ContactFormController::new(
        config.repository()?,
        RouteParam::Absent,
        &session.navigator,
        &session.interaction,
        Arc::new(EventDispatcher::new()),
    );

    fill(&mut form, fields).await?;
    let outcome = form.submit().await;
    let errors = field_errors(form.form());
    let name = form.form().value(Field::Name).trim().to_string();

    report_submit(outcome, errors, &format!("Created contact: {}", name))
}

/// Changes the given fields of an existing contact.
pub async fn edit(config: &CliConfig, id: &str, fields: &ContactArgs) -> Result<()> {
    let param = require_id(id)?;
    if fields.provided().is_empty() {
        bail!("Nothing to change. Pass at least one field, e.g. --name");
    }

    let session = Session::new(false);
    let mut form = ContactFormController::new(
        config.repository()?,
        param,
        &session.navigator,
        &session.interaction,
        Arc::new(EventDispatcher::new()),
    );
    form.load().await;
    if let FormState::Closed(err) = form.state() {
        bail!("Cannot edit contact {}: {}", id, err);
    }

    fill(&mut form, fields).await?;
    let outcome = form.submit().await;
    let errors = field_errors(form.form());

    report_submit(outcome, errors, &format!("Updated contact {}", id))
}

/// Deletes a contact after confirmation.
pub async fn delete(config: &CliConfig, id: &str, yes: bool) -> Result<()> {
    let session = Session::new(yes);
    let mut detail = fetch_contact(config, &session, id).await?;
    let name = detail
        .contact()
        .map(|c| c.display_name().to_string())
        .unwrap_or_default();

    match detail.delete().await {
        DeleteOutcome::Deleted => {
            display::success(&format!("Deleted contact: {}", name));
            Ok(())
        }
        DeleteOutcome::Declined => {
            display::info("Cancelled");
            Ok(())
        }
        DeleteOutcome::Failed(err) => bail!("Contact not deleted: {}", err),
        DeleteOutcome::Invalid | DeleteOutcome::Ignored => bail!("Contact not deleted"),
    }
}

fn pick_link(contact: &Contact, links: staffbook_core::ContactLinks, kind: LinkKind) -> Result<String> {
    let (url, label) = match kind {
        LinkKind::Whatsapp => (links.whatsapp, "WhatsApp"),
        LinkKind::Instagram => (links.instagram, "Instagram"),
        LinkKind::Linkedin => (links.linkedin, "LinkedIn"),
    };
    match url {
        Some(url) => Ok(url),
        None => bail!("{} has no {} link", contact.display_name(), label),
    }
}

/// Opens a contact's external profile in the system default application.
pub async fn open_link(config: &CliConfig, id: &str, kind: LinkKind, print: bool) -> Result<()> {
    let session = Session::new(false);
    let detail = fetch_contact(config, &session, id).await?;
    let Some(contact) = detail.contact() else {
        bail!("Contact {} not found", id);
    };
    let url = pick_link(contact, detail.links(), kind)?;

    if print {
        println!("{}", url);
        return Ok(());
    }

    display::info(&format!("Opening {}...", url));
    if let Err(e) = open::that(&url) {
        display::warning(&format!("Failed to open: {}", e));
        println!("{}", url);
    }
    Ok(())
}
