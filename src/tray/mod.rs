//! Tray module - System tray icon and menu

mod icon;
mod menu;

pub use menu::{TrayAction, TrayManager};
