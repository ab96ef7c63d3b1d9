pub mod classify;
pub mod collect;
pub mod lexicon;

pub use classify::{clean_token, is_abbreviation, Classifier};
pub use collect::{collect, AbbreviationSet, Collected};
pub use lexicon::{Lexicon, LexiconError, LexiconSet, WordList};
