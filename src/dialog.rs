//! Native alert dialogs

/// A modal alert with a single OK button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Alert that only has a title, like a one-line message box
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: String::new(),
        }
    }

    /// Window title and body text handed to the native dialog.
    ///
    /// macOS renders the title as the bold alert text. Windows and GTK only use
    /// it as the window caption, so a title-only alert there repeats the title
    /// in the body.
    fn dialog_text(&self) -> (&str, &str) {
        if cfg!(target_os = "macos") || !self.message.is_empty() {
            (&self.title, &self.message)
        } else {
            (&self.title, &self.title)
        }
    }

    /// Show the alert and block until it is dismissed
    pub fn show(&self) {
        let (title, description) = self.dialog_text();
        rfd::MessageDialog::new()
            .set_title(title)
            .set_description(description)
            .set_buttons(rfd::MessageButtons::Ok)
            .set_level(rfd::MessageLevel::Info)
            .show();
    }
}
