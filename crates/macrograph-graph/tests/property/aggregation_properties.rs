//! Property tests for cross-headline aggregation.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use macrograph_core::config::EvidencePolicy;
use macrograph_core::{
    CandidateBatch, EdgeCandidate, EdgeRelation, EntityId, Headline, NodeRef, Polarity,
    ResolvedPattern, SignalSummary,
};
use macrograph_graph::{GraphAggregator, PatternRanking};
use proptest::prelude::*;

const SOURCES: &[&str] = &["event:rate_cut", "event:employment", "mech:rate_cut_bets", "mech:wage_pressure"];
const TARGETS: &[&str] = &["mech:rate_cut_bets", "asset:stocks", "asset:gold", "asset:dollar"];
const PATTERNS: &[&str] = &["explicit_on_after", "movement_before", "asset_event_simple_cooccur", "general_context"];
const PUBLISHERS: &[&str] = &["Reuters", "CNBC", "Bloomberg"];

fn node(raw: &str) -> NodeRef {
    let id = EntityId::parse(raw).unwrap();
    let kind = id.kind().unwrap();
    NodeRef::new(kind, id.slug(), id.slug(), kind.label())
}

fn polarity_strategy() -> impl Strategy<Value = Polarity> {
    prop::sample::select(vec![Polarity::Positive, Polarity::Negative, Polarity::Neutral])
}

fn batch_strategy() -> impl Strategy<Value = CandidateBatch> {
    (
        0u32..12,
        prop::option::of(prop::sample::select(PUBLISHERS)),
        prop::option::of(1u32..28),
        prop::sample::select(PATTERNS),
        polarity_strategy(),
        prop::collection::vec((0..SOURCES.len(), 0..TARGETS.len(), polarity_strategy()), 0..6),
    )
        .prop_map(|(title, publisher, day, pattern, polarity, pairs)| {
            let mut headline = Headline::new(format!("headline {title}"));
            if let Some(p) = publisher {
                headline = headline.with_source(p);
            }
            if let Some(d) = day.and_then(|d| NaiveDate::from_ymd_opt(2024, 5, d)) {
                headline = headline.with_date(d);
            }

            let mut seen = BTreeSet::new();
            let mut candidates = Vec::new();
            for (s, t, p) in pairs {
                let (source, target) = (SOURCES[s], TARGETS[t]);
                if source == target {
                    continue;
                }
                let (relation, p) = if target.starts_with("mech:") {
                    (EdgeRelation::Triggers, polarity)
                } else {
                    (EdgeRelation::impact(p), p)
                };
                if !seen.insert((source, target, relation)) {
                    continue;
                }
                candidates.push(EdgeCandidate {
                    source: node(source),
                    target: node(target),
                    relation,
                    polarity: p,
                    pattern: pattern.to_string(),
                });
            }

            CandidateBatch {
                evidence: headline.evidence(pattern),
                polarity,
                pattern: ResolvedPattern {
                    name: pattern.to_string(),
                    priority: 5,
                    fallback: pattern == "general_context",
                },
                summary: SignalSummary {
                    events: 1,
                    mechanisms: 1,
                    assets: 1,
                    empty_text: false,
                },
                candidates,
            }
        })
}

fn aggregator() -> GraphAggregator {
    GraphAggregator::new(
        PatternRanking::from_names(PATTERNS.iter().copied()),
        EvidencePolicy::Sample { size: 3 },
    )
}

fn aggregate(batches: &[CandidateBatch]) -> GraphAggregator {
    let mut agg = aggregator();
    agg.ingest_all(batches);
    agg
}

proptest! {
    #[test]
    fn ingestion_order_does_not_matter(
        (batches, shuffled) in prop::collection::vec(batch_strategy(), 0..20)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(aggregate(&batches).snapshot(), aggregate(&shuffled).snapshot());
    }

    #[test]
    fn evidence_is_conserved_per_pattern(batches in prop::collection::vec(batch_strategy(), 0..20)) {
        let graph = aggregate(&batches).snapshot();

        let mut expected: HashMap<&str, u64> = HashMap::new();
        for batch in &batches {
            for c in &batch.candidates {
                *expected.entry(c.pattern.as_str()).or_insert(0) += 1;
            }
        }
        for pattern in PATTERNS {
            let observed: u64 = graph
                .edges
                .iter()
                .filter_map(|e| e.record.pattern_distribution.get(*pattern))
                .sum();
            prop_assert_eq!(observed, expected.get(pattern).copied().unwrap_or(0));
        }

        let total: u64 = graph.edges.iter().map(|e| e.record.evidence_count).sum();
        let candidates: usize = batches.iter().map(|b| b.len()).sum();
        prop_assert_eq!(total, candidates as u64);
        for edge in &graph.edges {
            prop_assert_eq!(edge.record.pattern_distribution.values().sum::<u64>(), edge.record.evidence_count);
            prop_assert!(edge.record.evidence.len() <= 3);
        }
    }

    #[test]
    fn one_node_per_id_counted_once_per_headline(batches in prop::collection::vec(batch_strategy(), 0..20)) {
        let graph = aggregate(&batches).snapshot();

        let mut expected: BTreeMap<EntityId, u64> = BTreeMap::new();
        for batch in &batches {
            let ids: BTreeSet<&EntityId> = batch
                .candidates
                .iter()
                .flat_map(|c| [&c.source.id, &c.target.id])
                .collect();
            for id in ids {
                *expected.entry(id.clone()).or_insert(0) += 1;
            }
        }

        prop_assert_eq!(graph.nodes.len(), expected.len());
        for node in &graph.nodes {
            prop_assert_eq!(Some(&node.mention_count), expected.get(&node.id));
            prop_assert_eq!(node.tally.total(), node.mention_count);
        }
    }

    #[test]
    fn merge_is_associative(
        batches in prop::collection::vec(batch_strategy(), 0..20),
        a in 0usize..20,
        b in 0usize..20,
    ) {
        let (i, j) = (a.min(b).min(batches.len()), a.max(b).min(batches.len()));
        let (x, y, z) = (&batches[..i], &batches[i..j], &batches[j..]);

        let mut left = aggregate(x);
        left.merge(aggregate(y));
        left.merge(aggregate(z));

        let mut right_tail = aggregate(y);
        right_tail.merge(aggregate(z));
        let mut right = aggregate(x);
        right.merge(right_tail);

        let whole = aggregate(&batches).snapshot();
        prop_assert_eq!(left.snapshot(), whole.clone());
        prop_assert_eq!(right.snapshot(), whole);
    }
}
