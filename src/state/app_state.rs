//! Application state definitions

use super::forms::FormState;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Form inputs with inline validation
    #[default]
    Editing,
    /// Resume card built from the current values
    Previewing,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Editing => "Add Your details",
            Self::Previewing => "Preview",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: FormState,
    /// Result line of the last successful export
    pub status_message: Option<String>,
}

impl AppState {
    /// Validate and switch to the preview if the form is valid.
    /// Returns whether the view changed.
    pub fn request_preview(&mut self) -> bool {
        if self.form.request_preview() {
            self.current_view = View::Previewing;
            true
        } else {
            false
        }
    }

    /// Go back to the form, whatever the current errors
    pub fn return_to_editing(&mut self) {
        self.current_view = View::Editing;
    }
}
