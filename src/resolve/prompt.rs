use crate::abbrev::AbbreviationSet;

const INSTRUCTION: &str = "You are given a document and a list of words taken from it. \
For each word, first decide whether it is actually used as an abbreviation in the document. \
For every word that is an abbreviation, give its full form as used in this document, \
one per line, in the format `WORD: full form`. \
Do not list words that are not abbreviations, and do not add any other text.";

/// Build the single-request prompt: instruction, full document, then the
/// candidate words one per line.
pub fn build_prompt(abbreviations: &AbbreviationSet, context: &str) -> String {
    let words = abbreviations
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\nDocument:\n{}\n\nWords:\n{}",
        INSTRUCTION, context, words
    )
}
