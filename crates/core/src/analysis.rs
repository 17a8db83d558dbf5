//! Text preparation for the project analysis (summarization) endpoint.
//!
//! The endpoint summarises every project description at once. These helpers
//! build the input text and the fixed replies used when no outbound call is
//! made.

/// Reply when there is no description text to summarise.
pub const NOTHING_TO_SUMMARIZE: &str = "No hay descripciones que resumir.";

/// Reply when the inference API key is not configured.
pub const MISSING_CREDENTIAL: &str =
    "HF_API_KEY no configurada. Este endpoint necesita llave para IA (ej: HuggingFace).";

/// Maximum number of characters echoed back as a sample when the
/// credential is missing.
pub const SAMPLE_CHARS: usize = 300;

/// Separator placed between consecutive descriptions (a blank line).
pub const DESCRIPTION_SEPARATOR: &str = "\n\n";

/// Join descriptions in the given order, separated by a blank line.
///
/// Projects without a description contribute an empty entry, so the
/// separators of neighbouring projects are kept.
///
/// ```
/// use glocation_core::analysis::join_descriptions;
///
/// let text = join_descriptions([Some("uno".to_string()), None, Some("dos".to_string())]);
/// assert_eq!(text, "uno\n\n\n\ndos");
/// ```
pub fn join_descriptions<I>(descriptions: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    descriptions
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<_>>()
        .join(DESCRIPTION_SEPARATOR)
}

/// `true` when the text contains nothing but whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// First [`SAMPLE_CHARS`] characters of `text`.
///
/// Counts Unicode scalar values, never splitting a multi-byte character.
pub fn sample(text: &str) -> String {
    text.chars().take(SAMPLE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_order() {
        let text = join_descriptions([Some("a".to_string()), Some("b".to_string())]);
        assert_eq!(text, "a\n\nb");
    }

    #[test]
    fn join_empty_input() {
        assert_eq!(join_descriptions(Vec::new()), "");
    }

    #[test]
    fn all_missing_descriptions_are_blank() {
        let text = join_descriptions([None, None, Some("  ".to_string())]);
        assert!(is_blank(&text));
    }

    #[test]
    fn text_with_content_is_not_blank() {
        assert!(!is_blank("\n\n proyecto \n"));
    }

    #[test]
    fn sample_truncates_to_limit() {
        let long = "x".repeat(SAMPLE_CHARS + 50);
        assert_eq!(sample(&long).chars().count(), SAMPLE_CHARS);
    }

    #[test]
    fn sample_keeps_short_text_whole() {
        assert_eq!(sample("corto"), "corto");
    }

    #[test]
    fn sample_counts_characters_not_bytes() {
        let accented = "ñ".repeat(SAMPLE_CHARS + 1);
        let out = sample(&accented);
        assert_eq!(out.chars().count(), SAMPLE_CHARS);
        assert_eq!(out.len(), SAMPLE_CHARS * 'ñ'.len_utf8());
    }
}
