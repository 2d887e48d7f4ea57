//! Sentence segmentation.

/// Split document text on sentence-terminal punctuation.
///
/// Each piece is whitespace-trimmed and empty pieces are dropped, so blank
/// or punctuation-only input yields an empty result. Order follows the
/// original text.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_periods() {
        assert_eq!(
            split_sentences("First sentence. Second sentence."),
            vec!["First sentence", "Second sentence"]
        );
    }

    #[test]
    fn splits_on_all_terminal_punctuation() {
        assert_eq!(
            split_sentences("What a day! Is it over? It is."),
            vec!["What a day", "Is it over", "It is"]
        );
    }

    #[test]
    fn preserves_order() {
        let sentences = split_sentences("a. b. c.");
        assert_eq!(sentences, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(split_sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn punctuation_only_yields_nothing() {
        assert!(split_sentences("...!?.").is_empty());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(split_sentences("  hello there  ."), vec!["hello there"]);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(
            split_sentences("no terminator here"),
            vec!["no terminator here"]
        );
    }
}
