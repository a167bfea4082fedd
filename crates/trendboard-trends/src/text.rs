//! Lexical signal extraction: hashtags and keyword candidates.
//!
//! Deliberately crude. Nothing here stems, deduplicates or understands
//! language; callers count the returned tokens.

use std::sync::LazyLock;

use regex::Regex;

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

/// Minimum keyword length used by every normalizer.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Function words dropped from keyword candidates.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "have", "will", "your", "what", "when",
    "where", "about", "they", "their", "there", "been", "were", "into", "than", "just",
];

/// Every `#word` run in `text`, lowercased, in order of appearance.
///
/// Duplicates are kept.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    HASHTAG_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every maximal run of alphabetic characters in `text` with at least
/// `min_length` characters, lowercased, minus [`STOP_WORDS`].
///
/// Accented letters belong to the run, so "Zürich" is one token and never
/// a fragment of one. Length counts characters, not bytes.
///
/// Duplicates are kept.
#[must_use]
pub fn extract_keywords(text: &str, min_length: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|run| run.chars().count() >= min_length && !STOP_WORDS.contains(run))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashtags_are_lowercased_in_order_with_duplicates() {
        let tags = extract_hashtags("Launch day #Rust and #AI_news then #rust again");
        assert_eq!(tags, vec!["#rust", "#ai_news", "#rust"]);
    }

    #[test]
    fn hashtag_requires_a_word_character() {
        assert!(extract_hashtags("# nothing here #").is_empty());
        assert_eq!(extract_hashtags("##double"), vec!["#double"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract_hashtags("").is_empty());
        assert!(extract_keywords("", MIN_KEYWORD_LEN).is_empty());
    }

    #[test]
    fn keywords_drop_short_tokens_and_stop_words() {
        let words = extract_keywords("What the Rust compiler does with this code", 4);
        assert_eq!(words, vec!["rust", "compiler", "does", "code"]);
    }

    #[test]
    fn keywords_split_on_digits_and_punctuation() {
        let words = extract_keywords("GPT4turbo release: open-source models!", 4);
        assert_eq!(words, vec!["turbo", "release", "open", "source", "models"]);
    }

    #[test]
    fn non_ascii_letters_stay_inside_their_word() {
        let words = extract_keywords("Zürich startups and Straße café", 4);
        assert_eq!(words, vec!["zürich", "startups", "straße", "café"]);
        assert!(!words.iter().any(|w| w == "rich" || w == "stra"));
    }

    #[test]
    fn keyword_length_counts_characters_not_bytes() {
        // "été" is three characters but five bytes.
        assert!(extract_keywords("été", 4).is_empty());
        assert_eq!(extract_keywords("éclair", 6), vec!["éclair"]);
    }

    #[test]
    fn keywords_respect_custom_min_length() {
        let words = extract_keywords("tiny big enormous", 6);
        assert_eq!(words, vec!["enormous"]);
    }

    #[test]
    fn keyword_output_never_violates_length_or_stop_words() {
        let text = "About their new Framework, they said: WHERE is the 2nd release? #launch";
        for word in extract_keywords(text, MIN_KEYWORD_LEN) {
            assert!(word.chars().count() >= MIN_KEYWORD_LEN, "too short: {word}");
            assert!(!STOP_WORDS.contains(&word.as_str()), "stop word: {word}");
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn hashtag_output_is_lowercase_and_prefixed() {
        for tag in extract_hashtags("#One #TWO #thrEE_3") {
            assert!(tag.starts_with('#'));
            assert_eq!(tag, tag.to_lowercase());
        }
    }
}
