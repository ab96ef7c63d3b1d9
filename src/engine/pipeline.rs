use super::config::Config;
use super::error::AbbrexError;
use crate::abbrev::{collect, Classifier};
use crate::input;
use crate::resolve::{CompletionClient, MeaningMap, Resolver};
use std::path::Path;

/// Extract, scan, and resolve one document.
pub fn run<C: CompletionClient + ?Sized>(
    path: &Path,
    config: &Config,
    client: &C,
    classifier: &Classifier,
) -> Result<MeaningMap, AbbrexError> {
    let doc = input::load(path)?;
    let collected = collect(&doc, classifier);

    tracing::info!(
        source = %doc.source,
        candidates = collected.abbreviations.len(),
        "abbreviation candidates collected"
    );

    let meanings = Resolver::new(client, config).resolve(&collected.abbreviations, &collected.context)?;
    Ok(meanings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LoadError;
    use crate::resolve::{CompletionRequest, ResolveError};

    struct PanicClient;

    impl CompletionClient for PanicClient {
        fn complete(&self, _request: &CompletionRequest) -> Result<String, ResolveError> {
            panic!("client must not be called");
        }
    }

    #[test]
    fn test_unsupported_extension_fails_before_client() {
        let result = run(
            Path::new("report.txt"),
            &Config::default(),
            &PanicClient,
            &Classifier::default(),
        );
        assert!(matches!(
            result,
            Err(AbbrexError::Load(LoadError::UnsupportedFormat(_)))
        ));
    }

    #[test]
    fn test_missing_file_fails_before_client() {
        let result = run(
            Path::new("/nonexistent/report.docx"),
            &Config::default(),
            &PanicClient,
            &Classifier::default(),
        );
        assert!(matches!(
            result,
            Err(AbbrexError::Load(LoadError::FileNotFound(_)))
        ));
    }
}
