//! Sleeper
//!
//! A proof-of-concept menu bar app. It shows a "Sleeper" status item with
//! "Preferences" and "Allow computer to sleep" entries. The toggle only changes
//! a check mark; nothing here asks the OS to keep the machine awake.

pub mod core;
pub mod dialog;
#[cfg(target_os = "macos")]
pub mod macos;
pub mod tray;

pub use core::config::Config;
pub use core::events::AppEvent;
pub use core::state::{AppState, Outcome, SleepState};
pub use dialog::Alert;
pub use tray::{TrayAction, TrayManager};
