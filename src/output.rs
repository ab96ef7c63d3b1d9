use crate::resolve::MeaningMap;
use docx_rs::{Docx, Paragraph, Run};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot create report {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write DOCX report {path}: {message}")]
    Pack { path: PathBuf, message: String },
}

/// Serialize the mapping as a single-line JSON object.
pub fn to_json(meanings: &MeaningMap) -> Result<String, OutputError> {
    Ok(serde_json::to_string(meanings)?)
}

/// Report document: a heading line, then one `ABBR: meaning` paragraph per
/// entry.
pub fn report_docx(meanings: &MeaningMap) -> Docx {
    let heading = if meanings.is_empty() {
        "No abbreviations found.".to_string()
    } else {
        format!("Abbreviations ({})", meanings.len())
    };

    let mut docx =
        Docx::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(heading).bold()));
    for (abbr, meaning) in meanings {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(abbr.as_str()).bold())
                .add_run(Run::new().add_text(format!(": {}", meaning))),
        );
    }
    docx
}

pub fn write_report(meanings: &MeaningMap, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    report_docx(meanings)
        .build()
        .pack(file)
        .map_err(|e| OutputError::Pack {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), entries = meanings.len(), "DOCX report written");
    Ok(())
}
