//! Property tests for whole-run determinism.

use std::sync::{Arc, OnceLock};

use macrograph_core::{Headline, MacrographConfig};
use macrograph_lexicon::Lexicon;
use macrograph_pipeline::MacrographEngine;
use proptest::prelude::*;

fn lexicon() -> Arc<Lexicon> {
    static LEXICON: OnceLock<Arc<Lexicon>> = OnceLock::new();
    LEXICON
        .get_or_init(|| Arc::new(Lexicon::builtin().unwrap()))
        .clone()
}

fn corpus() -> Vec<Headline> {
    test_fixtures::load_fixture("corpus/sample_headlines.json")
}

fn run(headlines: &[Headline], parallel: bool, batch_size: usize) -> MacrographEngine {
    let mut config = MacrographConfig::default();
    config.pipeline.parallel = parallel;
    config.pipeline.batch_size = batch_size;
    let mut engine = MacrographEngine::new(lexicon(), config);
    engine.process_all(headlines);
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_order_any_chunking_same_graph(
        shuffled in Just(corpus()).prop_shuffle(),
        parallel in any::<bool>(),
        batch_size in 1usize..16,
    ) {
        let baseline = run(&corpus(), false, 1_024).snapshot();
        let candidate = run(&shuffled, parallel, batch_size).snapshot();
        prop_assert_eq!(baseline, candidate);
    }

    #[test]
    fn duplicated_run_doubles_counts(batch_size in 1usize..16) {
        let headlines = corpus();
        let once = run(&headlines, false, batch_size).snapshot();

        let mut doubled = headlines.clone();
        doubled.extend(headlines);
        let twice = run(&doubled, true, batch_size).snapshot();

        prop_assert_eq!(once.edge_count(), twice.edge_count());
        prop_assert_eq!(once.node_count(), twice.node_count());
        for (a, b) in once.edges.iter().zip(&twice.edges) {
            prop_assert_eq!(&a.id, &b.id);
            prop_assert_eq!(a.record.evidence_count * 2, b.record.evidence_count);
        }
    }
}
