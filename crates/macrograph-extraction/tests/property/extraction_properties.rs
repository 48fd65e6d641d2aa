//! Property tests for single-pass candidate construction.

use std::collections::HashSet;
use std::sync::OnceLock;

use macrograph_core::config::{EventPairing, ExtractionConfig};
use macrograph_core::{EdgeRelation, Headline};
use macrograph_extraction::HeadlineExtractor;
use macrograph_lexicon::Lexicon;
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "Fed cuts rates",
    "rate hike bets",
    "strong jobs report",
    "weak payrolls",
    "wage growth",
    "dovish pivot",
    "hawkish Fed",
    "dollar",
    "gold",
    "stocks",
    "VIX",
    "treasuries",
    "oil",
    "surge",
    "slips",
    "steady",
    "as",
    "after",
    "on",
    "ahead of",
];

fn lexicon() -> &'static Lexicon {
    static LEXICON: OnceLock<Lexicon> = OnceLock::new();
    LEXICON.get_or_init(|| Lexicon::builtin().unwrap())
}

fn headline_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..8).prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn candidate_count_follows_signal_counts(title in headline_strategy()) {
        let lexicon = lexicon();
        let headline = Headline::new(title);

        for pairing in [EventPairing::Primary, EventPairing::All] {
            let extractor = HeadlineExtractor::new(lexicon, &ExtractionConfig { event_pairing: pairing });
            let signals = extractor.detect(&headline);
            let batch = extractor.extract(&headline);

            let event_sources = match pairing {
                EventPairing::Primary => usize::from(signals.primary_event.is_some()),
                EventPairing::All => signals.events.len(),
            };
            let m = signals.mechanisms.len();
            let a = signals.assets.len();
            let expected = if m == 0 {
                event_sources * a
            } else {
                event_sources * m + m * a
            };
            prop_assert_eq!(batch.len(), expected);

            let triggers = batch.candidates.iter().filter(|c| c.relation == EdgeRelation::Triggers).count();
            prop_assert_eq!(triggers, event_sources * m);
        }
    }

    #[test]
    fn candidates_are_unique_and_share_the_headline_pattern(title in headline_strategy()) {
        let lexicon = lexicon();
        let extractor = HeadlineExtractor::new(lexicon, &ExtractionConfig { event_pairing: EventPairing::All });
        let batch = extractor.extract(&Headline::new(title));

        let keys: HashSet<_> = batch.candidates.iter().map(|c| c.key()).collect();
        prop_assert_eq!(keys.len(), batch.len());
        for c in &batch.candidates {
            prop_assert_eq!(&c.pattern, &batch.pattern.name);
            if c.relation.is_impact() {
                prop_assert_eq!(c.relation, EdgeRelation::impact(c.polarity));
            }
        }
    }

    #[test]
    fn extraction_is_deterministic(title in headline_strategy()) {
        let lexicon = lexicon();
        let extractor = HeadlineExtractor::new(lexicon, &ExtractionConfig::default());
        let headline = Headline::new(title);
        prop_assert_eq!(extractor.extract(&headline), extractor.extract(&headline));
    }
}
