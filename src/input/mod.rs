use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("DOCX parse error: {0}")]
    DocxParse(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Document formats the extractor understands, chosen by file suffix only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Pdf,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("docx") => Ok(DocumentFormat::Docx),
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some(other) => Err(LoadError::UnsupportedFormat(format!(
                ".{} ({})",
                other,
                path.display()
            ))),
            None => Err(LoadError::UnsupportedFormat(format!(
                "missing file extension ({})",
                path.display()
            ))),
        }
    }
}

/// Text blocks in document order: one per paragraph (DOCX) or page (PDF).
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub blocks: Vec<String>,
    pub source: String,
}

impl LoadedDocument {
    /// Full document text with blocks joined by newlines.
    pub fn context(&self) -> String {
        self.blocks.join("\n")
    }
}

/// Load a document, dispatching on its file extension.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let format = DocumentFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading document");

    let doc = match format {
        DocumentFormat::Docx => docx::load(path)?,
        DocumentFormat::Pdf => pdf::load(path)?,
    };

    tracing::info!(
        source = %doc.source,
        blocks = doc.blocks.len(),
        "document text extracted"
    );
    Ok(doc)
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub mod docx;
pub mod pdf;
