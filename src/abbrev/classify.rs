use super::lexicon::Lexicon;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD_OR_PERIOD: Regex = Regex::new(r"[^\w.]").unwrap();
    // Dotted groups ("U.S.", "U.S.A") or a bare run of capitals ("NASA").
    static ref ABBREVIATION: Regex = Regex::new(r"^(?:(?:[A-Z]+\.)+[A-Z]*|[A-Z]{2,})$").unwrap();
    static ref SINGLE_INITIAL: Regex = Regex::new(r"^[A-Z]\.$").unwrap();
}

/// Strip every character that is neither a word character nor a period.
///
/// Periods survive so dotted forms like "U.S." keep their shape.
pub fn clean_token(raw: &str) -> String {
    NON_WORD_OR_PERIOD.replace_all(raw, "").into_owned()
}

/// Surface-form abbreviation test on an already cleaned token.
pub fn is_abbreviation(token: &str) -> bool {
    if token.chars().count() <= 1 {
        return false;
    }
    if SINGLE_INITIAL.is_match(token) {
        return false;
    }
    ABBREVIATION.is_match(token)
}

/// Abbreviation classifier: the surface test, optionally followed by an
/// exclusion lexicon of ordinary words.
///
/// The default classifier has no lexicon. Dictionary filtering over-filtered
/// all-caps common words and proper nouns, so it is opt-in only.
#[derive(Default)]
pub struct Classifier {
    exclusions: Option<Box<dyn Lexicon>>,
}

impl Classifier {
    pub fn with_lexicon(lexicon: Box<dyn Lexicon>) -> Self {
        Self {
            exclusions: Some(lexicon),
        }
    }

    pub fn has_lexicon(&self) -> bool {
        self.exclusions.is_some()
    }

    pub fn accepts(&self, token: &str) -> bool {
        if !is_abbreviation(token) {
            return false;
        }

        match &self.exclusions {
            Some(lexicon) => {
                let word: String = token.chars().filter(|&c| c != '.').collect();
                !lexicon.contains(&word.to_lowercase())
            }
            None => true,
        }
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("has_lexicon", &self.has_lexicon())
            .finish()
    }
}
