//! User Interaction
//!
//! Blocking notices and confirmation prompts, injected so views can run
//! headless.

use std::collections::VecDeque;
use std::sync::Mutex;

/// Capability to notify the user and ask yes/no questions.
pub trait Interaction {
    /// Shows a blocking notice.
    fn alert(&self, message: &str);

    /// Asks the user to confirm. Returns true if accepted.
    fn confirm(&self, message: &str) -> bool;
}

impl<I: Interaction + ?Sized> Interaction for &I {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Interaction with pre-scripted answers that records every prompt.
///
/// Confirmations are answered from the queue; when it runs dry the
/// default answer is used.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<bool>>,
    default_answer: bool,
    alerts: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    /// Declines every confirmation.
    pub fn declining() -> Self {
        Self::default()
    }

    /// Accepts every confirmation.
    pub fn accepting() -> Self {
        ScriptedInteraction {
            default_answer: true,
            ..Default::default()
        }
    }

    /// Queues answers for the next confirmations.
    pub fn with_answers(answers: &[bool]) -> Self {
        ScriptedInteraction {
            answers: Mutex::new(answers.iter().copied().collect()),
            ..Default::default()
        }
    }

    /// Returns every alert shown.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().map(|a| a.clone()).unwrap_or_default()
    }

    /// Returns every confirmation prompt shown.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Interaction for ScriptedInteraction {
    fn alert(&self, message: &str) {
        if let Ok(mut alerts) = self.alerts.lock() {
            alerts.push(message.to_string());
        }
    }

    fn confirm(&self, message: &str) -> bool {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(message.to_string());
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .unwrap_or(self.default_answer)
    }
}
