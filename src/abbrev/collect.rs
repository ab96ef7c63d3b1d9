use super::classify::{clean_token, Classifier};
use crate::input::LoadedDocument;
use std::collections::BTreeSet;

/// Unique cleaned tokens the classifier accepted, in sorted order.
pub type AbbreviationSet = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct Collected {
    pub abbreviations: AbbreviationSet,
    pub context: String,
}

/// Scan a document's blocks for abbreviation candidates.
pub fn collect(doc: &LoadedDocument, classifier: &Classifier) -> Collected {
    let mut abbreviations = AbbreviationSet::new();

    for block in &doc.blocks {
        for raw in block.split_whitespace() {
            let token = clean_token(raw);
            if classifier.accepts(&token) {
                abbreviations.insert(token);
            }
        }
    }

    tracing::debug!(
        blocks = doc.blocks.len(),
        candidates = abbreviations.len(),
        "abbreviation scan finished"
    );

    Collected {
        abbreviations,
        context: doc.context(),
    }
}
