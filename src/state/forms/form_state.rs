//! Form state holder: values, errors and keyboard focus

use super::field::{Field, FormData};
use super::validation::{validate, FormErrors};

/// Buttons on the editing screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    ViewPdf,
    DownloadPdf,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewPdf => "View PDF",
            Self::DownloadPdf => "Download PDF",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::ViewPdf => Self::DownloadPdf,
            Self::DownloadPdf => Self::ViewPdf,
        }
    }
}

/// Focus index of the buttons row (one past the last field)
const BUTTONS_ROW: usize = Field::ALL.len();

/// Owns the current form values and the last validation result
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub data: FormData,
    pub errors: FormErrors,
    /// Focused row: 0..=4 are fields, 5 is the buttons row
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
}

impl FormState {
    /// Overwrite a field. Any error on that field is dropped without
    /// re-validating; it only comes back on the next explicit check.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.data.get_mut(field) = value.into();
        if self.errors.has(field) {
            self.errors.clear_field(field);
        }
    }

    /// Validate for the preview screen. Returns true when the form is valid
    /// and the caller may switch views; otherwise the errors are stored.
    pub fn request_preview(&mut self) -> bool {
        self.errors = validate(&self.data);
        self.errors.is_empty()
    }

    /// Validate for export. Returns a snapshot of the values to export,
    /// or `None` after storing the errors.
    pub fn request_export(&mut self) -> Option<FormData> {
        self.errors = validate(&self.data);
        if self.errors.is_empty() {
            Some(self.data.clone())
        } else {
            None
        }
    }

    /// The focused field, or `None` when the buttons row is focused
    pub fn active_field(&self) -> Option<Field> {
        Field::from_index(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn focus_field(&mut self, field: Field) {
        self.active_field_index = field.index();
    }

    /// Move focus to the first field holding an error, if any
    pub fn focus_first_error(&mut self) {
        let first = self.errors.fields().next();
        if let Some(field) = first {
            self.focus_field(field);
        }
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % (BUTTONS_ROW + 1);
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = BUTTONS_ROW;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn toggle_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            let mut value = self.data.get(field).to_string();
            value.push(c);
            self.set_field(field, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field() {
            let mut value = self.data.get(field).to_string();
            if value.pop().is_some() {
                self.set_field(field, value);
            }
        }
    }

    /// Insert a line break when a multi-line field is focused
    pub fn newline(&mut self) {
        if self.active_field().is_some_and(|f| f.is_multiline()) {
            self.input_char('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut state = FormState::default();
        state.set_field(Field::Name, "Ada Lovelace");
        state.set_field(Field::Email, "ada@example.com");
        state.set_field(Field::Phone, "+44 20 7946 0958");
        state
    }

    mod editing {
        use super::*;

        #[test]
        fn test_set_field_overwrites_value() {
            let mut state = FormState::default();
            state.set_field(Field::Position, "Engineer");
            state.set_field(Field::Position, "Lead");
            assert_eq!(state.data.position, "Lead");
        }

        #[test]
        fn test_set_field_clears_only_that_error() {
            let mut state = FormState::default();
            assert!(!state.request_preview());
            assert_eq!(state.errors.len(), 3);

            state.set_field(Field::Email, "still not an email");
            assert!(!state.errors.has(Field::Email));
            assert!(state.errors.has(Field::Name));
            assert!(state.errors.has(Field::Phone));
        }

        #[test]
        fn test_clearing_does_not_revalidate() {
            let mut state = FormState::default();
            state.request_preview();
            state.set_field(Field::Phone, "1");
            assert!(state.errors.get(Field::Phone).is_none());
        }

        #[test]
        fn test_input_char_and_backspace_edit_focused_field() {
            let mut state = FormState::default();
            state.focus_field(Field::Email);
            for c in "a@b".chars() {
                state.input_char(c);
            }
            state.backspace();
            assert_eq!(state.data.email, "a@");
            assert!(state.data.name.is_empty());
        }

        #[test]
        fn test_typing_clears_error_of_focused_field() {
            let mut state = FormState::default();
            state.request_preview();
            state.focus_field(Field::Name);
            state.input_char('x');
            assert!(!state.errors.has(Field::Name));
            assert!(state.errors.has(Field::Email));
        }

        #[test]
        fn test_backspace_on_empty_field_keeps_error() {
            let mut state = FormState::default();
            state.request_preview();
            state.backspace();
            assert!(state.errors.has(Field::Name));
        }

        #[test]
        fn test_newline_only_in_description() {
            let mut state = FormState::default();
            state.newline();
            assert!(state.data.name.is_empty());

            state.focus_field(Field::Description);
            state.input_char('a');
            state.newline();
            state.input_char('b');
            assert_eq!(state.data.description, "a\nb");
        }

        #[test]
        fn test_input_on_buttons_row_is_ignored() {
            let mut state = FormState::default();
            state.prev_field();
            assert!(state.is_buttons_row_active());
            state.input_char('x');
            assert_eq!(state.data, FormData::default());
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_next_field_cycles_through_buttons_row() {
            let mut state = FormState::default();
            for _ in 0..5 {
                state.next_field();
            }
            assert!(state.is_buttons_row_active());
            assert_eq!(state.active_field(), None);
            state.next_field();
            assert_eq!(state.active_field(), Some(Field::Name));
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut state = FormState::default();
            state.prev_field();
            assert!(state.is_buttons_row_active());
            state.prev_field();
            assert_eq!(state.active_field(), Some(Field::Description));
        }

        #[test]
        fn test_focus_first_error() {
            let mut state = FormState::default();
            state.set_field(Field::Name, "Ada");
            state.focus_field(Field::Description);
            state.request_preview();
            state.focus_first_error();
            assert_eq!(state.active_field(), Some(Field::Email));
        }

        #[test]
        fn test_focus_first_error_without_errors_keeps_focus() {
            let mut state = filled();
            state.focus_field(Field::Position);
            state.request_preview();
            state.focus_first_error();
            assert_eq!(state.active_field(), Some(Field::Position));
        }

        #[test]
        fn test_toggle_button() {
            let mut state = FormState::default();
            assert_eq!(state.selected_button, FormButton::ViewPdf);
            state.toggle_button();
            assert_eq!(state.selected_button, FormButton::DownloadPdf);
            state.toggle_button();
            assert_eq!(state.selected_button, FormButton::ViewPdf);
        }
    }

    mod requests {
        use super::*;

        #[test]
        fn test_preview_rejected_when_invalid() {
            let mut state = FormState::default();
            state.set_field(Field::Name, "Ada");
            assert!(!state.request_preview());
            assert!(state.errors.has(Field::Email));
        }

        #[test]
        fn test_preview_accepted_when_valid() {
            let mut state = filled();
            assert!(state.request_preview());
            assert!(state.errors.is_empty());
        }

        #[test]
        fn test_export_returns_snapshot_when_valid() {
            let mut state = filled();
            state.set_field(Field::Position, "Analyst");
            let snapshot = state.request_export().unwrap();
            assert_eq!(snapshot, state.data);
        }

        #[test]
        fn test_export_stores_errors_when_invalid() {
            let mut state = filled();
            state.set_field(Field::Phone, "123");
            assert!(state.request_export().is_none());
            assert_eq!(
                state.errors.get(Field::Phone),
                Some("Phone number must be at least 10 digits")
            );
        }

        #[test]
        fn test_successful_request_replaces_stale_errors() {
            let mut state = FormState::default();
            state.request_preview();
            state.data = filled().data;
            assert!(state.request_export().is_some());
            assert!(state.errors.is_empty());
        }
    }
}
