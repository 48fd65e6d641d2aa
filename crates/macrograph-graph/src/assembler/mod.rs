//! Knowledge graph assembly: partition a snapshot into layers for export.

mod view;

use std::collections::{BTreeMap, HashSet};

use macrograph_core::config::{AssemblyConfig, LayerRule};
use macrograph_core::errors::AssemblyError;
use macrograph_core::traits::{OutcomeProvider, OutcomeRecord};
use macrograph_core::{EntityId, NodeKind};
use tracing::{info, warn};

use crate::snapshot::KnowledgeGraph;

pub use view::{ExportEdge, ExportMetadata, ExportNode, ExportView, LayerSummary};

/// Edge type of every edge the assembler emits.
pub const CAUSAL_EDGE_TYPE: &str = "Causal";

/// Stateless given its inputs: the same snapshot, config, and outcomes always
/// assemble to the same view.
#[derive(Debug, Clone)]
pub struct KnowledgeGraphAssembler<'a> {
    config: &'a AssemblyConfig,
    aliases: BTreeMap<EntityId, Vec<String>>,
}

impl<'a> KnowledgeGraphAssembler<'a> {
    pub fn new(config: &'a AssemblyConfig) -> Self {
        Self {
            config,
            aliases: BTreeMap::new(),
        }
    }

    /// Alias lists attached to asset nodes in the export.
    pub fn with_aliases(mut self, aliases: BTreeMap<EntityId, Vec<String>>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn assemble(
        &self,
        graph: &KnowledgeGraph,
        outcomes: Option<&dyn OutcomeProvider>,
    ) -> Result<ExportView, AssemblyError> {
        self.check_rules()?;

        let mut nodes = Vec::with_capacity(graph.node_count());

        if self.config.include_provenance {
            for source in &graph.provenance {
                let rule = self.rule(&source.id)?;
                nodes.push(ExportNode {
                    id: source.id.clone(),
                    node_type: NodeKind::Provenance.label().to_string(),
                    name: source.name.clone(),
                    layer: rule.layer,
                    classification: "Publisher".to_string(),
                    mention_count: source.headline_count,
                    polarity: None,
                    polarity_stats: None,
                    aliases: Vec::new(),
                    attached_to: None,
                    first_seen: source.first_seen,
                    last_seen: source.last_seen,
                    metrics: BTreeMap::new(),
                });
            }
        }

        for node in &graph.nodes {
            let rule = self.rule(&node.id)?;
            nodes.push(ExportNode {
                id: node.id.clone(),
                node_type: node.kind.label().to_string(),
                name: node.name.clone(),
                layer: rule.layer,
                classification: node.classification.clone(),
                mention_count: node.mention_count,
                polarity: Some(node.polarity()),
                polarity_stats: Some(node.tally),
                aliases: self.aliases.get(&node.id).cloned().unwrap_or_default(),
                attached_to: None,
                first_seen: None,
                last_seen: None,
                metrics: BTreeMap::new(),
            });
        }

        if self.config.include_outcomes {
            if let Some(provider) = outcomes {
                for outcome in self.accepted_outcomes(graph, provider) {
                    let rule = self.rule(&outcome.id)?;
                    nodes.push(ExportNode {
                        id: outcome.id,
                        node_type: NodeKind::Outcome.label().to_string(),
                        name: outcome.name,
                        layer: rule.layer,
                        classification: "MarketOutcome".to_string(),
                        mention_count: 0,
                        polarity: None,
                        polarity_stats: None,
                        aliases: Vec::new(),
                        attached_to: Some(outcome.asset),
                        first_seen: None,
                        last_seen: None,
                        metrics: outcome.metrics,
                    });
                }
            }
        }

        nodes.sort_by(|a, b| a.layer.cmp(&b.layer).then_with(|| a.id.cmp(&b.id)));

        let edges: Vec<ExportEdge> = graph
            .edges
            .iter()
            .map(|edge| {
                let record = &edge.record;
                ExportEdge {
                    id: edge.id.clone(),
                    edge_type: CAUSAL_EDGE_TYPE.to_string(),
                    source: record.source.clone(),
                    target: record.target.clone(),
                    relation: record.relation,
                    polarity: record.polarity(),
                    evidence_count: record.evidence_count,
                    primary_pattern: record.primary_pattern.clone(),
                    pattern_distribution: record.pattern_distribution.clone(),
                    evidence: record.evidence.clone(),
                    polarity_stats: record.tally,
                }
            })
            .collect();

        let metadata = ExportMetadata {
            total_nodes: nodes.len(),
            total_edges: edges.len(),
            layers: self.layer_summaries(&nodes),
            stats: graph.stats,
        };

        info!(
            nodes = metadata.total_nodes,
            edges = metadata.total_edges,
            "knowledge graph assembled"
        );

        Ok(ExportView {
            metadata,
            nodes,
            edges,
        })
    }

    fn check_rules(&self) -> Result<(), AssemblyError> {
        let mut seen = HashSet::new();
        for rule in &self.config.layers {
            if !seen.insert(rule.prefix.as_str()) {
                return Err(AssemblyError::DuplicatePrefix {
                    prefix: rule.prefix.clone(),
                });
            }
        }
        Ok(())
    }

    fn rule(&self, id: &EntityId) -> Result<&LayerRule, AssemblyError> {
        self.config
            .rule_for(id.prefix())
            .ok_or_else(|| AssemblyError::UnassignedPrefix {
                id: id.to_string(),
                prefix: id.prefix().to_string(),
            })
    }

    /// Outcomes attached to assets present in the graph, sorted by id.
    fn accepted_outcomes(
        &self,
        graph: &KnowledgeGraph,
        provider: &dyn OutcomeProvider,
    ) -> Vec<OutcomeRecord> {
        let assets: Vec<EntityId> = graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Asset)
            .map(|n| n.id.clone())
            .collect();

        let mut accepted: BTreeMap<EntityId, OutcomeRecord> = BTreeMap::new();
        for outcome in provider.outcomes(&assets) {
            if assets.binary_search(&outcome.asset).is_err() {
                warn!(
                    outcome = %outcome.id,
                    asset = %outcome.asset,
                    "dropping outcome for asset not in graph"
                );
                continue;
            }
            accepted.entry(outcome.id.clone()).or_insert(outcome);
        }
        accepted.into_values().collect()
    }

    fn layer_summaries(&self, nodes: &[ExportNode]) -> Vec<LayerSummary> {
        let mut rules: Vec<&LayerRule> = self.config.layers.iter().collect();
        rules.sort_by(|a, b| a.layer.cmp(&b.layer).then_with(|| a.prefix.cmp(&b.prefix)));
        rules
            .into_iter()
            .map(|rule| LayerSummary {
                layer: rule.layer,
                label: rule.label.clone(),
                prefix: rule.prefix.clone(),
                node_count: nodes.iter().filter(|n| n.id.prefix() == rule.prefix).count(),
            })
            .collect()
    }
}

/// Assemble `graph` under `config` without asset aliases.
pub fn assemble(
    graph: &KnowledgeGraph,
    config: &AssemblyConfig,
    outcomes: Option<&dyn OutcomeProvider>,
) -> Result<ExportView, AssemblyError> {
    KnowledgeGraphAssembler::new(config).assemble(graph, outcomes)
}

