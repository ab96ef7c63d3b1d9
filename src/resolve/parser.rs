use std::collections::BTreeMap;

/// Abbreviation -> meaning, keyed as the model wrote it.
pub type MeaningMap = BTreeMap<String, String>;

const SEPARATOR: &str = ": ";

/// Parse the model's free-text answer into a meaning map.
///
/// Supports lines of the form `KEY: meaning`, split on the first `": "`
/// with both halves trimmed. Any other line is ignored.
pub fn parse_meanings(text: &str) -> MeaningMap {
    let mut meanings = MeaningMap::new();

    for line in text.trim().lines() {
        if let Some((key, value)) = line.split_once(SEPARATOR) {
            meanings.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    meanings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_lines_without_separator() {
        let text = "NASA: National Aeronautics and Space Administration\nfoo bar\nFBI: Federal Bureau of Investigation";
        let meanings = parse_meanings(text);

        assert_eq!(meanings.len(), 2);
        assert_eq!(
            meanings.get("NASA").map(String::as_str),
            Some("National Aeronautics and Space Administration")
        );
        assert_eq!(
            meanings.get("FBI").map(String::as_str),
            Some("Federal Bureau of Investigation")
        );
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let meanings = parse_meanings("RE: Subject: the reply prefix");
        assert_eq!(
            meanings.get("RE").map(String::as_str),
            Some("Subject: the reply prefix")
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let meanings = parse_meanings("  UN :  United Nations  \r\n");
        assert_eq!(meanings.get("UN").map(String::as_str), Some("United Nations"));
    }

    #[test]
    fn test_parse_colon_without_space_is_ignored() {
        let meanings = parse_meanings("Time 10:30\nURL:https://example.com");
        assert!(meanings.is_empty());
    }

    #[test]
    fn test_parse_empty_and_refusal() {
        assert!(parse_meanings("").is_empty());
        assert!(parse_meanings("None of these words are abbreviations.").is_empty());
    }

    #[test]
    fn test_parse_later_duplicate_wins() {
        let meanings = parse_meanings("US: United States\nUS: Ultrasound");
        assert_eq!(meanings.len(), 1);
        assert_eq!(meanings.get("US").map(String::as_str), Some("Ultrasound"));
    }

    #[test]
    fn test_parse_keeps_model_key_spelling() {
        let meanings = parse_meanings("- U.S.A: United States of America");
        assert!(meanings.contains_key("- U.S.A"));
    }
}
