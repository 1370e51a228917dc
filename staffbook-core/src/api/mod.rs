// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staffbook View Layer
//!
//! Headless controllers for the three contact views.
//!
//! # Overview
//!
//! Each controller owns its view state, talks to the store through a
//! [`ContactRepository`](crate::repository::ContactRepository), and reaches
//! the outside world only through injected seams:
//! - [`Navigator`] - moves between views
//! - [`Interaction`] - blocking notices and confirmations
//! - [`EventDispatcher`] - change notifications
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use staffbook_core::api::*;
//! use staffbook_core::form::Field;
//!
//! let mut form = ContactFormController::new(
//!     repository,
//!     parse_route_param(None),
//!     RecordingNavigator::new(),
//!     ScriptedInteraction::accepting(),
//!     Arc::new(EventDispatcher::new()),
//! );
//! form.set_field(Field::EmployeeId, "42").await?;
//! form.set_field(Field::Name, "Ada Lovelace").await?;
//! let outcome = form.submit().await;
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for the view layer
//! - [`events`] - Event system for callbacks
//! - [`navigation`] - Routes and the navigator seam
//! - [`interaction`] - Alerts and confirmations
//! - [`form_controller`] - Create/edit lifecycle
//! - [`list_controller`] - Listing view
//! - [`detail_controller`] - Detail view

mod delete;
pub mod detail_controller;
pub mod error;
pub mod events;
pub mod form_controller;
pub mod interaction;
pub mod list_controller;
pub mod messages;
pub mod navigation;

// Error types
pub use error::{StaffbookError, StaffbookResult};

// Events
pub use events::{CallbackHandler, EventDispatcher, EventHandler, ViewEvent};

// Collaborators
pub use interaction::{Interaction, ScriptedInteraction};
pub use navigation::{parse_route_param, Navigator, RecordingNavigator, Route, RouteParam};

// Controllers
pub use delete::{DeleteOutcome, DeleteStep};
pub use detail_controller::ContactDetailController;
pub use form_controller::{
    ContactFormController, FormState, SubmitAttempt, SubmitOutcome, WriteRequest,
};
pub use list_controller::ContactListController;
