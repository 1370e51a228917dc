//! Event System
//!
//! Change notifications for view state. Controllers expose their current
//! state synchronously and publish every change here.

use std::sync::Arc;

use crate::contact::EmployeeId;
use crate::form::{Field, FieldStatus, Uniqueness};

use super::form_controller::FormState;
use super::navigation::Route;

/// Events emitted by Staffbook views.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The form controller changed state.
    FormStateChanged {
        /// The new state.
        state: FormState,
    },

    /// A form field changed value or status.
    FieldChanged {
        /// The field.
        field: Field,
        /// Its new status.
        status: FieldStatus,
    },

    /// A uniqueness check result was applied.
    UniquenessResolved {
        /// The checked employee id.
        candidate: EmployeeId,
        /// The applied verdict.
        verdict: Uniqueness,
    },

    /// The contact list was (re)loaded.
    ListLoaded {
        /// Number of contacts shown.
        count: usize,
    },

    /// A delete request was sent.
    DeleteStarted {
        /// The contact being deleted.
        employee_id: EmployeeId,
    },

    /// A delete request finished.
    DeleteFinished {
        /// The contact that was targeted.
        employee_id: EmployeeId,
        /// Whether the delete succeeded.
        success: bool,
    },

    /// A view asked to navigate.
    Navigated {
        /// Destination.
        route: Route,
    },

    /// A blocking notice was shown to the user.
    Alert {
        /// Notice text.
        message: String,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive view events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: ViewEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(ViewEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(ViewEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(ViewEvent) + Send + Sync,
{
    fn on_event(&self, event: ViewEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: ViewEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }
}
