//! Application state and core logic

use crate::config::TuiConfig;
use crate::export::{DocumentExporter, PdfExporter};
use crate::icons::{Icon, IconResolver};
use crate::state::{AppState, Field, FormButton, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Resolves icon names to image assets
    pub icons: IconResolver,
    /// Builds and saves the resume document
    exporter: Box<dyn DocumentExporter>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from the user's configuration
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config: {err:#}");
            TuiConfig::default()
        });

        let exporter = PdfExporter::new(config.resolved_output_dir());
        tracing::info!("Exports will be saved to {}", exporter.output_dir().display());

        let icons = IconResolver::new(config.resolved_asset_dir());
        tracing::debug!("Resolving icons from {}", icons.asset_dir().display());
        for icon in Icon::ALL {
            let asset = icons.resolve(icon);
            tracing::debug!("{} -> {} ({}px)", asset.alt, asset.path.display(), asset.size);
        }

        Ok(Self::with_exporter(Box::new(exporter), icons))
    }

    /// Create an App around a specific exporter
    pub fn with_exporter(exporter: Box<dyn DocumentExporter>, icons: IconResolver) -> Self {
        Self {
            state: AppState::default(),
            icons,
            exporter,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press in the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: Ctrl+C
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Editing => self.handle_editing_key(key).await,
            View::Previewing => self.handle_preview_key(key).await,
        }

        Ok(())
    }

    fn is_download_shortcut(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('d')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::DOWNLOAD_MODIFIER))
    }

    /// Plain or shifted characters, and AltGr compositions (reported as
    /// Ctrl+Alt on Windows). A lone Ctrl or Alt is a shortcut, not text.
    fn is_text_input(key: &KeyEvent) -> bool {
        let chord = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
        chord != KeyModifiers::CONTROL && chord != KeyModifiers::ALT
    }

    /// Handle keys in the editing view
    async fn handle_editing_key(&mut self, key: KeyEvent) {
        if Self::is_download_shortcut(&key) {
            self.download_pdf().await;
            return;
        }

        let on_buttons = self.state.form.is_buttons_row_active();
        match key.code {
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.view_pdf();
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left | KeyCode::Right if on_buttons => self.state.form.toggle_button(),
            KeyCode::Enter | KeyCode::Char(' ') if on_buttons => {
                match self.state.form.selected_button {
                    FormButton::ViewPdf => self.view_pdf(),
                    FormButton::DownloadPdf => self.download_pdf().await,
                }
            }
            KeyCode::Enter => {
                if self.state.form.active_field() == Some(Field::Description) {
                    self.state.form.newline();
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Char(c) if Self::is_text_input(&key) => {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Handle keys in the preview view
    async fn handle_preview_key(&mut self, key: KeyEvent) {
        if Self::is_download_shortcut(&key) {
            self.download_pdf().await;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
                self.state.return_to_editing();
            }
            KeyCode::Enter | KeyCode::Char('d') => self.download_pdf().await,
            _ => {}
        }
    }

    /// Show the preview when the form is valid; otherwise errors appear inline
    pub fn view_pdf(&mut self) {
        if !self.state.request_preview() {
            tracing::debug!(
                "Preview blocked by {} validation error(s)",
                self.state.form.errors.len()
            );
            self.state.form.focus_first_error();
        }
    }

    /// Validate, then build and save the PDF.
    ///
    /// An invalid form only records its errors. Export failures are logged
    /// and otherwise ignored; the view never changes.
    pub async fn download_pdf(&mut self) {
        let Some(snapshot) = self.state.form.request_export() else {
            tracing::debug!(
                "Export blocked by {} validation error(s)",
                self.state.form.errors.len()
            );
            if self.state.current_view == View::Editing {
                self.state.form.focus_first_error();
            }
            return;
        };

        match self.exporter.export(&snapshot).await {
            Ok(path) => {
                tracing::info!("Saved resume to {}", path.display());
                self.state.status_message = Some(format!("Saved {}", path.display()));
            }
            Err(err) => {
                tracing::error!("Error downloading PDF: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportError, MockDocumentExporter};
    use std::io;
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(exporter: MockDocumentExporter) -> App {
        App::with_exporter(Box::new(exporter), IconResolver::default())
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn fill_valid(app: &mut App) {
        type_text(app, "Ada").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(app, "ada@example.com").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(app, "(020) 7946-0958").await;
    }

    mod editing {
        use super::*;

        #[tokio::test]
        async fn test_typing_fills_focused_fields() {
            let mut app = app_with(MockDocumentExporter::new());
            fill_valid(&mut app).await;
            assert_eq!(app.state.form.data.name, "Ada");
            assert_eq!(app.state.form.data.email, "ada@example.com");
            assert_eq!(app.state.form.data.phone, "(020) 7946-0958");
        }

        #[tokio::test]
        async fn test_enter_in_description_inserts_newline() {
            let mut app = app_with(MockDocumentExporter::new());
            app.state.form.focus_field(Field::Description);
            type_text(&mut app, "one").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_text(&mut app, "two").await;
            assert_eq!(app.state.form.data.description, "one\ntwo");
        }

        #[tokio::test]
        async fn test_enter_on_single_line_field_moves_focus() {
            let mut app = app_with(MockDocumentExporter::new());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.form.active_field(), Some(Field::Email));
        }

        #[tokio::test]
        async fn test_control_chars_are_not_typed() {
            let mut app = app_with(MockDocumentExporter::new());
            app.handle_key(ctrl('x')).await.unwrap();
            assert!(app.state.form.data.name.is_empty());
        }

        #[tokio::test]
        async fn test_alt_chords_are_not_typed() {
            let mut app = app_with(MockDocumentExporter::new());
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
                .await
                .unwrap();
            assert!(app.state.form.data.name.is_empty());
        }

        #[tokio::test]
        async fn test_altgr_characters_are_typed() {
            let mut app = app_with(MockDocumentExporter::new());
            app.state.form.focus_field(Field::Email);
            type_text(&mut app, "ada").await;
            app.handle_key(KeyEvent::new(
                KeyCode::Char('@'),
                KeyModifiers::CONTROL | KeyModifiers::ALT,
            ))
            .await
            .unwrap();
            type_text(&mut app, "example.com").await;
            assert_eq!(app.state.form.data.email, "ada@example.com");
        }

        #[tokio::test]
        async fn test_shifted_characters_are_typed() {
            let mut app = app_with(MockDocumentExporter::new());
            app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT))
                .await
                .unwrap();
            assert_eq!(app.state.form.data.name, "A");
        }

        #[tokio::test]
        async fn test_ctrl_c_quits() {
            let mut app = app_with(MockDocumentExporter::new());
            assert!(!app.should_quit());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }
    }

    mod preview {
        use super::*;

        #[tokio::test]
        async fn test_invalid_form_stays_in_editing_with_errors() {
            let mut app = app_with(MockDocumentExporter::new());
            app.handle_key(ctrl('p')).await.unwrap();
            assert_eq!(app.state.current_view, View::Editing);
            assert_eq!(app.state.form.errors.len(), 3);
        }

        #[tokio::test]
        async fn test_rejected_preview_focuses_first_error() {
            let mut app = app_with(MockDocumentExporter::new());
            type_text(&mut app, "Ada").await;
            app.state.form.focus_field(Field::Description);
            app.handle_key(ctrl('p')).await.unwrap();
            assert_eq!(app.state.form.active_field(), Some(Field::Email));
        }

        #[tokio::test]
        async fn test_valid_form_opens_preview_and_back() {
            let mut app = app_with(MockDocumentExporter::new());
            fill_valid(&mut app).await;
            app.handle_key(ctrl('p')).await.unwrap();
            assert_eq!(app.state.current_view, View::Previewing);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Editing);
        }

        #[tokio::test]
        async fn test_view_button_on_buttons_row() {
            let mut app = app_with(MockDocumentExporter::new());
            fill_valid(&mut app).await;
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert!(app.state.form.is_buttons_row_active());

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Previewing);
        }

        #[tokio::test]
        async fn test_editing_after_preview_clears_error_only_on_edit() {
            let mut app = app_with(MockDocumentExporter::new());
            app.handle_key(ctrl('p')).await.unwrap();
            type_text(&mut app, "x").await;
            assert!(!app.state.form.errors.has(Field::Name));
            assert!(app.state.form.errors.has(Field::Email));
        }
    }

    mod download {
        use super::*;

        #[tokio::test]
        async fn test_invalid_form_never_reaches_exporter() {
            let mut exporter = MockDocumentExporter::new();
            exporter.expect_export().times(0);
            let mut app = app_with(exporter);

            app.handle_key(ctrl('d')).await.unwrap();

            assert_eq!(app.state.current_view, View::Editing);
            assert_eq!(app.state.form.errors.len(), 3);
            assert!(app.state.status_message.is_none());
        }

        #[tokio::test]
        async fn test_valid_form_is_exported_once() {
            let mut exporter = MockDocumentExporter::new();
            exporter
                .expect_export()
                .withf(|form| form.name == "Ada" && form.email == "ada@example.com")
                .times(1)
                .returning(|_| Ok(PathBuf::from("/tmp/Ada.pdf")));
            let mut app = app_with(exporter);
            fill_valid(&mut app).await;

            app.handle_key(ctrl('d')).await.unwrap();

            assert_eq!(app.state.current_view, View::Editing);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Saved /tmp/Ada.pdf")
            );
        }

        #[tokio::test]
        async fn test_download_from_preview_keeps_preview() {
            let mut exporter = MockDocumentExporter::new();
            exporter
                .expect_export()
                .times(1)
                .returning(|_| Ok(PathBuf::from("Ada.pdf")));
            let mut app = app_with(exporter);
            fill_valid(&mut app).await;
            app.handle_key(ctrl('p')).await.unwrap();

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.current_view, View::Previewing);
        }

        #[tokio::test]
        async fn test_download_button_on_buttons_row() {
            let mut exporter = MockDocumentExporter::new();
            exporter
                .expect_export()
                .times(1)
                .returning(|_| Ok(PathBuf::from("Ada.pdf")));
            let mut app = app_with(exporter);
            fill_valid(&mut app).await;
            app.state.form.prev_field();
            app.state.form.prev_field();
            app.state.form.prev_field();
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.form.selected_button, FormButton::DownloadPdf);

            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
        }

        #[tokio::test]
        async fn test_export_failure_is_swallowed() {
            let mut exporter = MockDocumentExporter::new();
            exporter
                .expect_export()
                .times(1)
                .returning(|_| Err(ExportError::Io(io::Error::other("disk full"))));
            let mut app = app_with(exporter);
            fill_valid(&mut app).await;
            app.handle_key(ctrl('p')).await.unwrap();

            let result = app.handle_key(key(KeyCode::Char('d'))).await;

            assert!(result.is_ok());
            assert_eq!(app.state.current_view, View::Previewing);
            assert!(app.state.form.errors.is_empty());
            assert!(app.state.status_message.is_none());
        }

        #[tokio::test]
        async fn test_status_message_clears_on_next_key() {
            let mut exporter = MockDocumentExporter::new();
            exporter
                .expect_export()
                .returning(|_| Ok(PathBuf::from("Ada.pdf")));
            let mut app = app_with(exporter);
            fill_valid(&mut app).await;
            app.handle_key(ctrl('d')).await.unwrap();
            assert!(app.state.status_message.is_some());

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert!(app.state.status_message.is_none());
        }
    }
}
