//! Tests for macrograph-extraction: detection, resolution, and candidate building.

use macrograph_core::config::{EventPairing, ExtractionConfig};
use macrograph_core::{EdgeRelation, Headline, LaborStrength, Polarity};
use macrograph_extraction::{DirectionSource, HeadlineExtractor, PatternResolver, SignalDetector};
use macrograph_lexicon::{Lexicon, BUILTIN_LEXICON};

fn builtin() -> Lexicon {
    Lexicon::builtin().unwrap()
}

fn set(items: &[&str]) -> std::collections::BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn extract(lexicon: &Lexicon, title: &str) -> macrograph_core::CandidateBatch {
    HeadlineExtractor::new(lexicon, &ExtractionConfig::default()).extract(&Headline::new(title))
}

// =============================================================================
// Acceptance scenarios
// =============================================================================

#[test]
fn strong_jobs_and_cut_bets_lift_wall_street() {
    let lexicon = builtin();
    let title = "Wall Street jumps on strong jobs report as rate cut bets intensify";
    let signals = SignalDetector::new(&lexicon).detect(title);

    assert_eq!(signals.events, set(&["employment", "rate_cut"]));
    assert_eq!(signals.primary_event.as_deref(), Some("rate_cut"));
    assert_eq!(signals.mechanisms, set(&["rate_cut_bets", "unemployment_low"]));
    assert!(!signals.implied_mechanisms);
    assert_eq!(signals.assets, set(&["stocks"]));
    assert_eq!(signals.polarity, Polarity::Positive);

    let batch = extract(&lexicon, title);
    assert_eq!(batch.len(), 4);
    let triggers: Vec<_> = batch
        .candidates
        .iter()
        .filter(|c| c.relation == EdgeRelation::Triggers)
        .collect();
    assert_eq!(triggers.len(), 2);
    assert!(triggers.iter().all(|c| c.source.id.as_str() == "event:rate_cut"));
    let impacts: Vec<_> = batch
        .candidates
        .iter()
        .filter(|c| c.relation == EdgeRelation::PositivelyImpacts)
        .collect();
    assert_eq!(impacts.len(), 2);
    assert!(impacts.iter().all(|c| c.target.id.as_str() == "asset:stocks"));
    assert_eq!(batch.pattern.name, "explicit_on_after");
    assert!(batch.candidates.iter().all(|c| c.pattern == "explicit_on_after"));
}

#[test]
fn fed_cut_implies_cut_bets() {
    let lexicon = builtin();
    let title = "Fed cuts rates as stocks surge";
    let signals = SignalDetector::new(&lexicon).detect(title);

    assert_eq!(signals.events, set(&["rate_cut"]));
    assert_eq!(signals.mechanisms, set(&["rate_cut_bets"]));
    assert!(signals.implied_mechanisms);
    assert_eq!(signals.assets, set(&["stocks"]));

    let batch = extract(&lexicon, title);
    assert_eq!(batch.len(), 2);
    let keys: Vec<String> = batch.candidates.iter().map(|c| c.key().to_string()).collect();
    assert!(keys.contains(&"event:rate_cut -[TRIGGERS]-> mech:rate_cut_bets".to_string()));
    assert!(keys.contains(&"mech:rate_cut_bets -[POSITIVELY_IMPACTS]-> asset:stocks".to_string()));
    assert_eq!(batch.pattern.name, "policy_action_as_market_moves");
}

#[test]
fn assets_alone_build_nothing() {
    let lexicon = builtin();
    let batch = extract(&lexicon, "Gold steadies in quiet trade");
    assert_eq!(batch.summary.assets, 1);
    assert_eq!(batch.summary.events, 0);
    assert_eq!(batch.summary.mechanisms, 0);
    assert!(batch.is_empty());
}

// =============================================================================
// Detection details
// =============================================================================

#[test]
fn blank_headline_matches_nothing() {
    let lexicon = builtin();
    let batch = extract(&lexicon, "   ");
    assert!(batch.is_empty());
    assert!(batch.summary.empty_text);
    assert_eq!(batch.pattern.name, "general_context");
    assert!(batch.pattern.fallback);
}

#[test]
fn explicit_mechanism_suppresses_implied_ones() {
    let lexicon = builtin();
    let signals = SignalDetector::new(&lexicon).detect("Fed cuts rates, dovish pivot lifts gold");
    assert_eq!(signals.events, set(&["rate_cut"]));
    assert_eq!(signals.mechanisms, set(&["dovish_repricing"]));
    assert!(!signals.implied_mechanisms);
}

#[test]
fn weak_jobs_override_applies_per_asset() {
    let lexicon = builtin();
    let title = "Dollar slides, gold rallies as weak jobs report fuels rate cut bets";
    let signals = SignalDetector::new(&lexicon).detect(title);

    assert_eq!(signals.polarity, Polarity::Positive);
    assert_eq!(signals.labor_strength, Some(LaborStrength::Weak));
    assert_eq!(
        signals.mechanisms,
        set(&["dovish_repricing", "rate_cut_bets", "unemployment_high"])
    );
    assert_eq!(signals.polarity_for("dollar"), Polarity::Negative);
    assert_eq!(signals.polarity_for("gold"), Polarity::Positive);

    let batch = extract(&lexicon, title);
    // 1 primary event × 3 mechanisms + 3 mechanisms × 2 assets.
    assert_eq!(batch.len(), 9);
    for c in batch.candidates.iter().filter(|c| c.target.id.as_str() == "asset:dollar") {
        assert_eq!(c.relation, EdgeRelation::NegativelyImpacts);
        assert_eq!(c.polarity, Polarity::Negative);
    }
    // The headline-level polarity itself is untouched.
    assert_eq!(batch.polarity, Polarity::Positive);
}

#[test]
fn volatility_follows_its_own_clause() {
    let lexicon = builtin();
    let batch = extract(&lexicon, "Stocks tumble, VIX climbs as hawkish Fed spooks markets");
    assert_eq!(batch.polarity, Polarity::Negative);
    assert_eq!(batch.len(), 2);
    let vix = batch
        .candidates
        .iter()
        .find(|c| c.target.id.as_str() == "asset:vix")
        .unwrap();
    assert_eq!(vix.relation, EdgeRelation::PositivelyImpacts);
    let stocks = batch
        .candidates
        .iter()
        .find(|c| c.target.id.as_str() == "asset:stocks")
        .unwrap();
    assert_eq!(stocks.relation, EdgeRelation::NegativelyImpacts);
}

// =============================================================================
// Per-asset direction
// =============================================================================

fn impacts_on<'a>(
    batch: &'a macrograph_core::CandidateBatch,
    asset: &'a str,
) -> impl Iterator<Item = &'a macrograph_core::EdgeCandidate> + 'a {
    batch
        .candidates
        .iter()
        .filter(move |c| c.relation.is_impact() && c.target.id.as_str() == asset)
}

#[test]
fn opposite_moves_split_by_but() {
    let lexicon = builtin();
    let title = "Dollar falls but stocks rally after Fed rate cut";
    let signals = SignalDetector::new(&lexicon).detect(title);

    assert_eq!(signals.assets, set(&["dollar", "stocks"]));
    assert_eq!(signals.polarity, Polarity::Positive);
    assert_eq!(signals.polarity_for("dollar"), Polarity::Negative);
    assert_eq!(signals.polarity_for("stocks"), Polarity::Positive);
    assert_eq!(signals.asset_directions["dollar"].source, DirectionSource::Clause);

    let batch = extract(&lexicon, title);
    assert!(impacts_on(&batch, "asset:dollar").count() > 0);
    assert!(impacts_on(&batch, "asset:dollar").all(|c| c.relation == EdgeRelation::NegativelyImpacts));
    assert!(impacts_on(&batch, "asset:stocks").all(|c| c.relation == EdgeRelation::PositivelyImpacts));
    // TRIGGERS edges keep the headline polarity.
    let trigger = batch
        .candidates
        .iter()
        .find(|c| c.relation == EdgeRelation::Triggers)
        .unwrap();
    assert_eq!(trigger.polarity, Polarity::Positive);
}

#[test]
fn opposite_moves_split_by_while() {
    let lexicon = builtin();
    let signals =
        SignalDetector::new(&lexicon).detect("Gold soars while stocks crash after jobs report");
    assert_eq!(signals.assets, set(&["gold", "stocks"]));
    assert_eq!(signals.polarity_for("gold"), Polarity::Positive);
    assert_eq!(signals.polarity_for("stocks"), Polarity::Negative);
}

#[test]
fn explicit_volatility_move_is_not_inverted() {
    let lexicon = builtin();
    for title in [
        "VIX surges as rate cut bets fade",
        "Wall Street fear gauge VIX jumps after weak jobs report",
    ] {
        let signals = SignalDetector::new(&lexicon).detect(title);
        assert!(signals.asset_directions["vix"].is_explicit(), "{title}");
        assert_eq!(signals.polarity_for("vix"), Polarity::Positive, "{title}");
    }

    let batch = extract(&lexicon, "VIX surges as rate cut bets fade");
    assert!(impacts_on(&batch, "asset:vix").count() > 0);
    assert!(impacts_on(&batch, "asset:vix").all(|c| c.relation == EdgeRelation::PositivelyImpacts));
}

#[test]
fn inherited_volatility_move_is_inverted() {
    let lexicon = builtin();
    let signals = SignalDetector::new(&lexicon).detect("VIX at 20 as stocks plunge");
    assert_eq!(signals.asset_directions["vix"].source, DirectionSource::Proximity);
    assert_eq!(signals.asset_directions["vix"].polarity, Polarity::Negative);
    assert_eq!(signals.polarity_for("vix"), Polarity::Positive);
    assert_eq!(signals.polarity_for("stocks"), Polarity::Negative);
}

#[test]
fn without_separators_the_headline_is_one_clause() {
    let toml = BUILTIN_LEXICON.replace(
        "[clauses]\nseparators = [",
        "[clauses]\nseparators = []\nunused = [",
    );
    let lexicon = Lexicon::from_toml(&toml).unwrap();
    assert!(lexicon.clause_splitter().is_none());
    // One shared clause: each asset takes its nearest term.
    let signals = SignalDetector::new(&lexicon).detect("Dollar falls but stocks rally");
    assert_eq!(signals.polarity_for("dollar"), Polarity::Negative);
    assert_eq!(signals.polarity_for("stocks"), Polarity::Positive);
}

// =============================================================================
// Building
// =============================================================================

#[test]
fn event_without_mechanism_links_assets_directly() {
    let lexicon = builtin();
    let batch = extract(&lexicon, "Stocks edge up with unemployment in focus");
    assert_eq!(batch.summary.mechanisms, 0);
    assert_eq!(batch.len(), 1);
    let c = &batch.candidates[0];
    assert_eq!(c.source.id.as_str(), "event:employment");
    assert_eq!(c.target.id.as_str(), "asset:stocks");
    assert_eq!(c.relation, EdgeRelation::PositivelyImpacts);
}

#[test]
fn mechanism_without_event_still_reaches_assets() {
    let lexicon = builtin();
    let batch = extract(&lexicon, "Dovish tilt lifts gold");
    assert_eq!(batch.summary.events, 0);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.candidates[0].source.id.as_str(), "mech:dovish_repricing");
    assert_eq!(batch.candidates[0].target.id.as_str(), "asset:gold");
}

#[test]
fn all_events_pairing_forms_the_full_cross_product() {
    let lexicon = builtin();
    let config = ExtractionConfig {
        event_pairing: EventPairing::All,
    };
    let batch = HeadlineExtractor::new(&lexicon, &config).extract(&Headline::new(
        "Wall Street jumps on strong jobs report as rate cut bets intensify",
    ));
    // 2 events × 2 mechanisms + 2 mechanisms × 1 asset.
    assert_eq!(batch.len(), 6);
}

#[test]
fn candidates_carry_node_metadata() {
    let lexicon = builtin();
    let batch = extract(&lexicon, "Fed cuts rates as stocks surge");
    let trigger = batch
        .candidates
        .iter()
        .find(|c| c.relation == EdgeRelation::Triggers)
        .unwrap();
    assert_eq!(trigger.source.name, "US Rate Cut");
    assert_eq!(trigger.source.classification, "MonetaryPolicy");
    assert_eq!(trigger.target.name, "Rate Cut Expectations");
    assert_eq!(trigger.target.classification, "Policy_Expectation");
}

#[test]
fn evidence_keeps_headline_metadata() {
    let lexicon = builtin();
    let date = chrono::NaiveDate::from_ymd_opt(2024, 9, 18).unwrap();
    let headline = Headline::new("Fed cuts rates as stocks surge")
        .with_date(date)
        .with_source("Reuters");
    let batch = HeadlineExtractor::new(&lexicon, &ExtractionConfig::default()).extract(&headline);
    assert_eq!(batch.evidence.date, Some(date));
    assert_eq!(batch.evidence.source.as_deref(), Some("Reuters"));
    assert_eq!(batch.evidence.url, None);
    assert_eq!(batch.evidence.pattern, batch.pattern.name);
}

// =============================================================================
// Resolution
// =============================================================================

const TIE_LEXICON: &str = r#"
[[events]]
id = "metals"
name = "Metals"
class = "Commodity"
keywords = ["metals"]

[[assets]]
id = "gold"
name = "Gold"
class = "Commodity"
keywords = ["gold"]

[[assets]]
id = "silver"
name = "Silver"
class = "Commodity"
keywords = ["silver"]

[[assets]]
id = "copper"
name = "Copper"
class = "Commodity"
keywords = ["copper"]

[[movement]]
bucket = "positive"
polarity = "positive"
strength = 1
terms = ["rise"]

[[patterns]]
name = "first_gold"
pattern = 'gold'
priority = 8

[[patterns]]
name = "second_gold_or_silver"
pattern = 'gold|silver'
priority = 8

[[patterns]]
name = "silver_moves"
pattern = 'silver'
priority = 9
requires_movement = true
"#;

fn resolve(lexicon: &Lexicon, text: &str) -> macrograph_core::ResolvedPattern {
    let signals = SignalDetector::new(lexicon).detect(text);
    PatternResolver::new(lexicon.catalog()).resolve(text, &signals)
}

#[test]
fn equal_priorities_resolve_to_the_first_declared() {
    let lexicon = Lexicon::from_toml(TIE_LEXICON).unwrap();
    assert_eq!(resolve(&lexicon, "Gold and silver").name, "first_gold");
    assert_eq!(resolve(&lexicon, "Silver quiet").name, "second_gold_or_silver");
}

#[test]
fn movement_gated_templates_need_movement() {
    let lexicon = Lexicon::from_toml(TIE_LEXICON).unwrap();
    let moved = resolve(&lexicon, "Silver rises");
    assert_eq!(moved.name, "silver_moves");
    assert_eq!(moved.priority, 9);
}

#[test]
fn unmatched_text_falls_back_to_general_context() {
    let lexicon = Lexicon::from_toml(TIE_LEXICON).unwrap();
    let fallback = resolve(&lexicon, "Copper steady");
    assert_eq!(fallback.name, "general_context");
    assert_eq!(fallback.priority, 0);
    assert!(fallback.fallback);
}
