//! Edge-candidate construction for a single headline.

use macrograph_core::config::EventPairing;
use macrograph_core::{EdgeCandidate, EdgeRelation, NodeKind, NodeRef, ResolvedPattern};
use macrograph_lexicon::Lexicon;

use crate::detector::DetectedSignals;

/// Turns one headline's signals into its complete candidate list in one go:
/// event→mechanism, mechanism→asset, and event→asset when no mechanism was found.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipBuilder<'a> {
    lexicon: &'a Lexicon,
    pairing: EventPairing,
}

impl<'a> RelationshipBuilder<'a> {
    pub fn new(lexicon: &'a Lexicon, pairing: EventPairing) -> Self {
        Self { lexicon, pairing }
    }

    pub fn build(&self, signals: &DetectedSignals, pattern: &ResolvedPattern) -> Vec<EdgeCandidate> {
        let events = self.event_sources(signals);
        let mechanisms: Vec<NodeRef> = signals
            .mechanisms
            .iter()
            .filter_map(|id| self.mechanism_ref(id))
            .collect();
        let assets: Vec<(NodeRef, &str)> = signals
            .assets
            .iter()
            .filter_map(|id| self.asset_ref(id).map(|r| (r, id.as_str())))
            .collect();

        let mut candidates = Vec::with_capacity(
            events.len() * mechanisms.len() + mechanisms.len().max(events.len()) * assets.len(),
        );

        for event in &events {
            for mechanism in &mechanisms {
                candidates.push(EdgeCandidate {
                    source: event.clone(),
                    target: mechanism.clone(),
                    relation: EdgeRelation::Triggers,
                    polarity: signals.polarity,
                    pattern: pattern.name.clone(),
                });
            }
        }

        // Path B: no mechanism, so events point straight at assets.
        let impact_sources = if mechanisms.is_empty() { &events } else { &mechanisms };
        for source in impact_sources {
            for (asset, asset_id) in &assets {
                let polarity = signals.polarity_for(asset_id);
                candidates.push(EdgeCandidate {
                    source: source.clone(),
                    target: asset.clone(),
                    relation: EdgeRelation::impact(polarity),
                    polarity,
                    pattern: pattern.name.clone(),
                });
            }
        }

        candidates
    }

    fn event_sources(&self, signals: &DetectedSignals) -> Vec<NodeRef> {
        match self.pairing {
            EventPairing::Primary => signals
                .primary_event
                .iter()
                .filter_map(|id| self.event_ref(id))
                .collect(),
            EventPairing::All => signals.events.iter().filter_map(|id| self.event_ref(id)).collect(),
        }
    }

    fn event_ref(&self, id: &str) -> Option<NodeRef> {
        self.lexicon
            .event(id)
            .map(|e| NodeRef::new(NodeKind::Event, &e.id, &e.name, &e.class))
    }

    fn mechanism_ref(&self, id: &str) -> Option<NodeRef> {
        self.lexicon
            .mechanism(id)
            .map(|m| NodeRef::new(NodeKind::Mechanism, &m.id, &m.name, &m.mechanism_type))
    }

    fn asset_ref(&self, id: &str) -> Option<NodeRef> {
        self.lexicon
            .asset(id)
            .map(|a| NodeRef::new(NodeKind::Asset, &a.id, &a.name, &a.class))
    }
}
