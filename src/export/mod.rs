//! Resume PDF export
//!
//! The exporter turns a validated form into a one-page PDF and writes it
//! to the output directory:
//! - `layout`: fixed label/value positions and description wrapping
//! - `metrics`: Helvetica glyph widths used for wrapping
//! - `pdf`: serialization of a layout with lopdf

mod layout;
mod metrics;
mod pdf;

use crate::state::{Field, FormData};
use async_trait::async_trait;
use layout::layout_resume;
use pdf::render_pdf;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while building or saving a document
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to build PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Failed to write PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF worker stopped: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// A rendered document ready to be saved
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `<name>.pdf` with the name taken verbatim, or `resume.pdf` when empty
pub fn export_file_name(form: &FormData) -> String {
    let base = if form.name.is_empty() {
        "resume"
    } else {
        form.name.as_str()
    };
    format!("{base}.pdf")
}

/// Lay out and render `form` into an in-memory document
pub fn build_document(form: &FormData) -> Result<ExportedDocument, ExportError> {
    let layout = layout_resume(form);
    let title = format!("{} resume", form.display_value(Field::Name));
    let bytes = render_pdf(&layout, &title)?;
    Ok(ExportedDocument {
        file_name: export_file_name(form),
        bytes,
    })
}

/// Trait for document export, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Build the document for `form` and deliver it, returning where it went
    async fn export(&self, form: &FormData) -> Result<PathBuf, ExportError>;
}

/// Writes resume PDFs into a directory on disk
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
}

impl PdfExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save `document` under its file name.
    ///
    /// The bytes go to a temporary sibling first and are renamed into place,
    /// so the final name never refers to a half-written file.
    pub async fn deliver(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let safe_name = sanitize_filename::sanitize(&document.file_name);
        let target = self.output_dir.join(&safe_name);
        // Fixed-length temp name; a long target name must still fit
        let temp = self.output_dir.join(format!(".{}.tmp", Uuid::new_v4()));

        tokio::fs::write(&temp, &document.bytes).await?;
        if let Err(err) = tokio::fs::rename(&temp, &target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(err.into());
        }

        tracing::debug!("Wrote {} bytes to {}", document.bytes.len(), target.display());
        Ok(target)
    }
}

#[async_trait]
impl DocumentExporter for PdfExporter {
    async fn export(&self, form: &FormData) -> Result<PathBuf, ExportError> {
        let form = form.clone();
        let document = tokio::task::spawn_blocking(move || build_document(&form)).await??;
        self.deliver(&document).await
    }
}
