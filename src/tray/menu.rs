//! Tray menu management

use super::icon::TrayIcons;
use crate::core::config::AppConfig;
use crate::core::events::{AppEvent, EventSender};
use anyhow::{Context, Result};
use tray_icon::{
    menu::{CheckMenuItem, Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem},
    TrayIcon as TrayIconHandle, TrayIconBuilder,
};
use tracing::{debug, error, info};

/// Menu item ids. Fixed strings so events can be mapped without holding the items.
const PREFERENCES_ID: &str = "preferences";
const TOGGLE_SLEEP_ID: &str = "allow-sleep";
const QUIT_ID: &str = "quit";

const PREFERENCES_LABEL: &str = "Preferences";
const TOGGLE_SLEEP_LABEL: &str = "Allow computer to sleep";

/// Tray menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    /// "Preferences" clicked
    Preferences,
    /// "Allow computer to sleep" clicked
    ToggleSleep,
    /// Quit application
    Quit,
}

impl TrayAction {
    /// Map a menu event id to an action; ids we didn't create map to nothing
    pub fn from_menu_id(id: &MenuId) -> Option<Self> {
        match id.0.as_str() {
            PREFERENCES_ID => Some(Self::Preferences),
            TOGGLE_SLEEP_ID => Some(Self::ToggleSleep),
            QUIT_ID => Some(Self::Quit),
            _ => None,
        }
    }

    /// Id of the menu item that triggers this action
    pub fn menu_id(&self) -> MenuId {
        match self {
            Self::Preferences => MenuId::new(PREFERENCES_ID),
            Self::ToggleSleep => MenuId::new(TOGGLE_SLEEP_ID),
            Self::Quit => MenuId::new(QUIT_ID),
        }
    }
}

/// Tooltip text for the toggle state
pub fn tooltip(title: &str, sleep_allowed: bool) -> String {
    if sleep_allowed {
        format!("{} - Sleep allowed", title)
    } else {
        format!("{} - Keeping awake", title)
    }
}

/// Tray manager. Lives on the event loop thread.
pub struct TrayManager {
    /// Tray icon handle
    tray: TrayIconHandle,
    /// Icons for the two toggle states
    icons: TrayIcons,
    /// "Allow computer to sleep" item
    sleep_item: CheckMenuItem,
    title: String,
}

impl TrayManager {
    /// Create the tray icon and menu, and start forwarding menu clicks to `event_tx`
    pub fn new(config: &AppConfig, sleep_allowed: bool, event_tx: EventSender) -> Result<Self> {
        let icons = TrayIcons::new().context("Failed to load tray icons")?;

        let menu = Menu::new();

        let preferences_item =
            MenuItem::with_id(TrayAction::Preferences.menu_id(), PREFERENCES_LABEL, true, None);
        let sleep_item = CheckMenuItem::with_id(
            TrayAction::ToggleSleep.menu_id(),
            TOGGLE_SLEEP_LABEL,
            true,
            sleep_allowed,
            None,
        );

        menu.append(&preferences_item)?;
        menu.append(&sleep_item)?;

        if config.show_quit {
            let quit_item =
                MenuItem::with_id(TrayAction::Quit.menu_id(), &config.quit_label, true, None);
            menu.append(&PredefinedMenuItem::separator())?;
            menu.append(&quit_item)?;
        }

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_title(&config.title)
            .with_tooltip(tooltip(&config.title, sleep_allowed))
            .with_icon(icons.for_state(sleep_allowed).clone())
            .build()
            .context("Failed to create tray icon")?;

        info!("Tray icon created");

        start_menu_handler(event_tx);

        Ok(Self {
            tray,
            icons,
            sleep_item,
            title: config.title.clone(),
        })
    }

    /// Reflect the toggle state in the check mark, icon and tooltip
    pub fn set_sleep_allowed(&mut self, allowed: bool) {
        // The toolkit may already have flipped the check mark on click;
        // the model's value wins either way.
        self.sleep_item.set_checked(allowed);

        if let Err(e) = self.tray.set_icon(Some(self.icons.for_state(allowed).clone())) {
            error!("Failed to set tray icon: {}", e);
        }

        if let Err(e) = self.tray.set_tooltip(Some(tooltip(&self.title, allowed))) {
            error!("Failed to set tray tooltip: {}", e);
        }
    }
}

/// Forward menu events to the event loop from a dedicated thread
fn start_menu_handler(event_tx: EventSender) {
    std::thread::spawn(move || {
        let receiver = MenuEvent::receiver();

        while let Ok(event) = receiver.recv() {
            debug!("Menu event: {:?}", event);

            if let Some(action) = TrayAction::from_menu_id(&event.id) {
                if let Err(e) = event_tx.send(AppEvent::TrayAction(action)) {
                    error!("Failed to send tray action: {}", e);
                    break;
                }
            }
        }
    });
}
