//! Property tests for phrase matchers.

use proptest::prelude::*;

use macrograph_lexicon::phrase::{compile_phrases, PhraseStyle};

fn phrase_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,2}"
}

proptest! {
    #[test]
    fn phrase_matches_itself_in_context(phrase in phrase_strategy(), upper in any::<bool>()) {
        let matcher = compile_phrases(&[phrase.as_str()], PhraseStyle::Inflected)
            .unwrap()
            .unwrap();
        let embedded = if upper { phrase.to_uppercase() } else { phrase.clone() };
        let text = format!("Markets: {embedded}, analysts say");
        prop_assert!(matcher.is_match(&text));
    }
}

proptest! {
    #[test]
    fn phrase_never_matches_inside_a_longer_word(phrase in "[a-z]{2,8}") {
        let matcher = compile_phrases(&[phrase.as_str()], PhraseStyle::Nominal)
            .unwrap()
            .unwrap();
        // Glued between other letters the phrase is never a whole word.
        let text = format!("zq{phrase}xq");
        prop_assert!(!matcher.is_match(&text));
    }
}
