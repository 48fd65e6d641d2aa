//! Detect → resolve → build for one headline.

use macrograph_core::config::ExtractionConfig;
use macrograph_core::{CandidateBatch, Headline};
use macrograph_lexicon::Lexicon;
use tracing::debug;

use crate::builder::RelationshipBuilder;
use crate::detector::{DetectedSignals, SignalDetector};
use crate::resolver::PatternResolver;

/// The three stateless stages bound to one lexicon. Cheap to construct and
/// `Copy`, so each worker thread can hold its own.
#[derive(Debug, Clone, Copy)]
pub struct HeadlineExtractor<'a> {
    detector: SignalDetector<'a>,
    resolver: PatternResolver<'a>,
    builder: RelationshipBuilder<'a>,
}

impl<'a> HeadlineExtractor<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &ExtractionConfig) -> Self {
        Self {
            detector: SignalDetector::new(lexicon),
            resolver: PatternResolver::new(lexicon.catalog()),
            builder: RelationshipBuilder::new(lexicon, config.event_pairing),
        }
    }

    pub fn detect(&self, headline: &Headline) -> DetectedSignals {
        self.detector.detect(&headline.title)
    }

    /// Run all three stages. Never fails: a headline that matches nothing
    /// yields an empty batch.
    pub fn extract(&self, headline: &Headline) -> CandidateBatch {
        let signals = self.detect(headline);
        let pattern = if signals.empty_text {
            PatternResolver::general_context()
        } else {
            self.resolver.resolve(headline.title.trim(), &signals)
        };
        let candidates = self.builder.build(&signals, &pattern);

        debug!(
            events = signals.events.len(),
            mechanisms = signals.mechanisms.len(),
            assets = signals.assets.len(),
            polarity = %signals.polarity,
            pattern = %pattern.name,
            candidates = candidates.len(),
            "headline extracted"
        );

        CandidateBatch {
            evidence: headline.evidence(&pattern.name),
            polarity: signals.polarity,
            summary: signals.summary(),
            pattern,
            candidates,
        }
    }
}
