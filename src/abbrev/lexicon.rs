use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Cannot read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A set of ordinary words that should not be reported as abbreviations.
///
/// Lookups are made with a lowercased, period-free form of the token.
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

/// In-memory word list, one lowercase entry per word.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Read a plain-text corpus: one word per line, `#` comments and blank
    /// lines skipped.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        );
        tracing::debug!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Union of several lexicons, e.g. a general word corpus plus a
/// lexical-semantic one.
#[derive(Default)]
pub struct LexiconSet {
    members: Vec<Box<dyn Lexicon>>,
}

impl LexiconSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lexicon: Box<dyn Lexicon>) {
        self.members.push(lexicon);
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Lexicon for LexiconSet {
    fn contains(&self, word: &str) -> bool {
        self.members.iter().any(|m| m.contains(word))
    }
}
