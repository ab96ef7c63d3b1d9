use crate::abbrev::LexiconError;
use crate::engine::config::ConfigError;
use crate::input::LoadError;
use crate::output::OutputError;
use crate::resolve::ResolveError;
use thiserror::Error;

/// Any failure between startup and JSON output. None of these are retried.
#[derive(Error, Debug)]
pub enum AbbrexError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
