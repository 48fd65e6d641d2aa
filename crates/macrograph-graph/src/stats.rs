//! Run-level counters and per-publisher provenance.

use chrono::NaiveDate;
use macrograph_core::models::slugify;
use macrograph_core::{CandidateBatch, EntityId, NodeKind};
use serde::{Deserialize, Serialize};

/// Headline-level extraction counters, kept for the reporting collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub total_headlines: u64,
    pub empty_texts: u64,
    pub with_events: u64,
    pub with_mechanisms: u64,
    pub with_assets: u64,
    pub with_events_and_assets: u64,
    /// Headlines that produced at least one candidate.
    pub extracted: u64,
    pub no_relationship: u64,
    pub total_candidates: u64,
}

impl ExtractionStats {
    pub fn record(&mut self, batch: &CandidateBatch) {
        let summary = &batch.summary;
        self.total_headlines += 1;
        self.empty_texts += u64::from(summary.empty_text);
        self.with_events += u64::from(summary.events > 0);
        self.with_mechanisms += u64::from(summary.mechanisms > 0);
        self.with_assets += u64::from(summary.assets > 0);
        self.with_events_and_assets += u64::from(summary.events > 0 && summary.assets > 0);
        if batch.is_empty() {
            self.no_relationship += 1;
        } else {
            self.extracted += 1;
        }
        self.total_candidates += batch.len() as u64;
    }

    pub fn merge(&mut self, other: &ExtractionStats) {
        self.total_headlines += other.total_headlines;
        self.empty_texts += other.empty_texts;
        self.with_events += other.with_events;
        self.with_mechanisms += other.with_mechanisms;
        self.with_assets += other.with_assets;
        self.with_events_and_assets += other.with_events_and_assets;
        self.extracted += other.extracted;
        self.no_relationship += other.no_relationship;
        self.total_candidates += other.total_candidates;
    }

    /// Share of headlines that produced at least one candidate.
    pub fn extraction_rate(&self) -> f64 {
        if self.total_headlines == 0 {
            0.0
        } else {
            self.extracted as f64 / self.total_headlines as f64
        }
    }
}

/// A publisher whose headlines contributed edges (layer 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    pub id: EntityId,
    pub name: String,
    pub headline_count: u64,
    pub first_seen: Option<NaiveDate>,
    pub last_seen: Option<NaiveDate>,
}

impl ProvenanceRecord {
    /// Provenance for a publisher name, or `None` when the name has no
    /// usable characters.
    pub fn for_publisher(name: &str) -> Option<Self> {
        let slug = slugify(name);
        if slug.is_empty() {
            return None;
        }
        Some(Self {
            id: EntityId::new(NodeKind::Provenance, &slug),
            name: name.trim().to_string(),
            headline_count: 0,
            first_seen: None,
            last_seen: None,
        })
    }

    pub fn record(&mut self, date: Option<NaiveDate>) {
        self.headline_count += 1;
        self.observe(date, date);
    }

    pub fn merge(&mut self, other: &ProvenanceRecord) {
        self.headline_count += other.headline_count;
        self.observe(other.first_seen, other.last_seen);
    }

    fn observe(&mut self, first: Option<NaiveDate>, last: Option<NaiveDate>) {
        self.first_seen = min_date(self.first_seen, first);
        self.last_seen = max_date(self.last_seen, last);
    }
}

fn min_date(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn max_date(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    a.max(b)
}
