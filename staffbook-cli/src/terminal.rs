//! Terminal collaborators for the headless controllers.

use std::sync::Mutex;

use dialoguer::Confirm;
use staffbook_core::{Interaction, Navigator, Route};
use tracing::debug;

use crate::display;

/// Alerts go to stderr; confirmations are asked on the terminal.
pub struct TerminalInteraction {
    assume_yes: bool,
}

impl TerminalInteraction {
    pub fn new(assume_yes: bool) -> Self {
        TerminalInteraction { assume_yes }
    }
}

impl Interaction for TerminalInteraction {
    fn alert(&self, message: &str) {
        display::error(message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        // A prompt that cannot be shown counts as declined.
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Remembers where a controller wanted to go next.
#[derive(Default)]
pub struct TerminalNavigator {
    last: Mutex<Option<Route>>,
}

impl TerminalNavigator {
    pub fn last(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|last| *last)
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        debug!(%route, "navigate");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}
