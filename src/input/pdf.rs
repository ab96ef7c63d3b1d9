use super::{read_bytes, LoadError, LoadedDocument};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

/// Load text from a PDF file, one block per page.
///
/// pdf-extract can panic on malformed fonts or glyph tables, so extraction
/// runs under `catch_unwind` and a panic is reported as `PdfParse`.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    let buffer = read_bytes(path)?;

    let pages = match catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&buffer)
    })) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(LoadError::PdfParse(e.to_string())),
        Err(_) => {
            tracing::error!(path = %path.display(), "PDF extraction panicked");
            return Err(LoadError::PdfParse(
                "extraction panicked, likely malformed fonts".to_string(),
            ));
        }
    };

    tracing::debug!(path = %path.display(), pages = pages.len(), "PDF pages extracted");

    Ok(LoadedDocument {
        blocks: pages,
        source: format!("pdf:{}", path.display()),
    })
}
