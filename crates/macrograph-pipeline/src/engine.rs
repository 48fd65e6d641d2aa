//! The engine facade: one lexicon, one config, one aggregator.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use macrograph_core::errors::MacrographErrorCode;
use macrograph_core::traits::OutcomeProvider;
use macrograph_core::{
    CandidateBatch, EntityId, Headline, MacrographConfig, MacrographResult, NodeKind,
};
use macrograph_extraction::HeadlineExtractor;
use macrograph_graph::{
    ExportView, ExtractionStats, GraphAggregator, KnowledgeGraph, KnowledgeGraphAssembler,
    PatternRanking,
};
use macrograph_lexicon::Lexicon;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tracing_setup::events;

/// Totals for one `process_all` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub headlines: usize,
    /// Headlines that produced at least one candidate.
    pub extracted: usize,
    pub candidates: usize,
    pub duration_ms: u64,
}

/// Headline-to-graph engine.
///
/// The lexicon is shared immutably (`Arc`) so several engines, or a host
/// holding its own handle, never copy the compiled matchers.
#[derive(Debug)]
pub struct MacrographEngine {
    lexicon: Arc<Lexicon>,
    config: MacrographConfig,
    aggregator: GraphAggregator,
}

impl MacrographEngine {
    pub fn new(lexicon: Arc<Lexicon>, config: MacrographConfig) -> Self {
        let ranking = PatternRanking::from_names(lexicon.catalog().ranked_names());
        let aggregator = GraphAggregator::new(ranking, config.aggregation.evidence);
        Self {
            lexicon,
            config,
            aggregator,
        }
    }

    /// Validate `config` and load the lexicon it names, or the built-in one.
    /// Lexicon problems surface here, before any headline is seen.
    pub fn from_config(config: MacrographConfig) -> MacrographResult<Self> {
        Self::bind(config).inspect_err(|e| events::setup_failed(e.error_code(), e))
    }

    fn bind(config: MacrographConfig) -> MacrographResult<Self> {
        config.validate()?;
        let (lexicon, origin) = match config.lexicon.path.as_deref() {
            Some(path) => (Lexicon::from_file(Path::new(path))?, path.to_string()),
            None => (Lexicon::builtin()?, "builtin".to_string()),
        };
        events::lexicon_bound(lexicon.version(), &origin, lexicon.catalog().len());
        Ok(Self::new(Arc::new(lexicon), config))
    }

    /// Built-in lexicon, default config.
    pub fn with_defaults() -> MacrographResult<Self> {
        Self::from_config(MacrographConfig::default())
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn config(&self) -> &MacrographConfig {
        &self.config
    }

    /// Run the stateless stages only. The graph is untouched.
    pub fn extract(&self, headline: &Headline) -> CandidateBatch {
        HeadlineExtractor::new(&self.lexicon, &self.config.extraction).extract(headline)
    }

    /// Extract and ingest one headline. Returns the number of candidates.
    pub fn process(&mut self, headline: &Headline) -> usize {
        let batch = HeadlineExtractor::new(&self.lexicon, &self.config.extraction).extract(headline);
        self.aggregator.ingest(&batch);
        batch.len()
    }

    /// Process a headline set. With `pipeline.parallel`, each chunk is
    /// extracted on the rayon pool and then ingested serially in input order.
    pub fn process_all(&mut self, headlines: &[Headline]) -> RunSummary {
        let parallel = self.config.pipeline.parallel;
        let span = crate::run_span!(headlines.len(), parallel);
        let _guard = span.enter();
        let started = Instant::now();

        let extractor = HeadlineExtractor::new(&self.lexicon, &self.config.extraction);
        let chunk_size = self.config.pipeline.batch_size.max(1);
        let mut summary = RunSummary {
            headlines: headlines.len(),
            ..RunSummary::default()
        };

        for (index, chunk) in headlines.chunks(chunk_size).enumerate() {
            let chunk_span = crate::chunk_span!(index, chunk.len());
            let _chunk_guard = chunk_span.enter();

            let batches: Vec<CandidateBatch> = if parallel {
                chunk.par_iter().map(|h| extractor.extract(h)).collect()
            } else {
                chunk.iter().map(|h| extractor.extract(h)).collect()
            };

            for batch in &batches {
                if !batch.is_empty() {
                    summary.extracted += 1;
                    summary.candidates += batch.len();
                }
            }
            self.aggregator.ingest_all(&batches);
            debug!(chunk = index, batches = batches.len(), "chunk ingested");
        }

        summary.duration_ms = started.elapsed().as_millis() as u64;
        events::run_completed(
            summary.headlines,
            summary.candidates,
            self.aggregator.node_count(),
            self.aggregator.edge_count(),
            summary.duration_ms,
        );
        summary
    }

    /// Point-in-time graph. Further processing does not affect it.
    pub fn snapshot(&self) -> KnowledgeGraph {
        self.aggregator.snapshot()
    }

    /// Snapshot and assemble the layered export, attaching asset aliases
    /// from the lexicon.
    pub fn assemble(
        &self,
        outcomes: Option<&dyn OutcomeProvider>,
    ) -> MacrographResult<ExportView> {
        let graph = self.snapshot();
        let span = crate::assembly_span!(graph.node_count(), graph.edge_count());
        let _guard = span.enter();

        let view = KnowledgeGraphAssembler::new(&self.config.assembly)
            .with_aliases(self.asset_aliases())
            .assemble(&graph, outcomes)?;
        Ok(view)
    }

    pub fn stats(&self) -> &ExtractionStats {
        self.aggregator.stats()
    }

    pub fn aggregator(&self) -> &GraphAggregator {
        &self.aggregator
    }

    /// Drop all accumulated state, keeping lexicon and config.
    pub fn reset(&mut self) {
        self.aggregator = GraphAggregator::new(
            self.aggregator.ranking().clone(),
            self.aggregator.evidence_policy(),
        );
    }

    fn asset_aliases(&self) -> BTreeMap<EntityId, Vec<String>> {
        self.lexicon
            .assets()
            .iter()
            .filter(|asset| !asset.aliases.is_empty())
            .map(|asset| {
                (
                    EntityId::new(NodeKind::Asset, &asset.id),
                    asset.aliases.clone(),
                )
            })
            .collect()
    }
}
