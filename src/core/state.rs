//! Application state management

use crate::dialog::Alert;
use crate::tray::TrayAction;

/// Text of the alert shown for "Preferences"
pub const PREFERENCES_ALERT: &str = "No preferences yet";

/// Whether the "Allow computer to sleep" item is checked.
///
/// This is display state only. Nothing here talks to the power manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SleepState {
    allowed: bool,
}

impl SleepState {
    pub fn new(allowed: bool) -> Self {
        Self { allowed }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Flip the state and return the new value
    pub fn toggle(&mut self) -> bool {
        self.allowed = !self.allowed;
        self.allowed
    }
}

/// What the event loop has to do after a menu click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show a modal alert
    Alert(Alert),
    /// The sleep toggle changed; the tray must reflect `allowed`
    SleepToggled { allowed: bool },
    /// Leave the event loop
    Quit,
}

/// Global application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Sleep toggle
    pub sleep: SleepState,
}

impl AppState {
    pub fn new(sleep_allowed: bool) -> Self {
        Self {
            sleep: SleepState::new(sleep_allowed),
        }
    }

    /// Apply a tray action to the state and describe the side effect
    pub fn apply(&mut self, action: TrayAction) -> Outcome {
        match action {
            TrayAction::Preferences => Outcome::Alert(Alert::new(PREFERENCES_ALERT)),
            TrayAction::ToggleSleep => Outcome::SleepToggled {
                allowed: self.sleep.toggle(),
            },
            TrayAction::Quit => Outcome::Quit,
        }
    }
}
