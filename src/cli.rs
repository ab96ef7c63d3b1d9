use clap::Parser;
use std::path::PathBuf;

/// Extract abbreviations from a DOCX or PDF document and resolve their
/// meanings in context. Prints a JSON object of abbreviation -> meaning.
#[derive(Parser, Debug)]
#[command(name = "abbrex", version, about)]
pub struct CliArgs {
    /// Input document (.docx or .pdf)
    pub file: PathBuf,

    /// Word list (one word per line) whose entries are never reported as
    /// abbreviations. May be given more than once.
    #[arg(long = "exclude-words", value_name = "FILE")]
    pub exclude_words: Vec<PathBuf>,

    /// Also write the mapping as a DOCX report to this path
    #[arg(long = "docx-out", value_name = "FILE")]
    pub docx_out: Option<PathBuf>,
}
