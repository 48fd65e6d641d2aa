//! Structured event types emitted by the engine.

use tracing::{error, info};

/// The engine bound a lexicon.
pub fn lexicon_bound(version: &str, origin: &str, patterns: usize) {
    info!(
        event = "lexicon_bound",
        version = %version,
        origin = %origin,
        patterns = patterns,
        "lexicon bound to engine"
    );
}

/// Engine setup failed before any headline was seen.
pub fn setup_failed(code: &str, err: &dyn std::error::Error) {
    error!(
        event = "setup_failed",
        code = code,
        error = %err,
        "engine setup failed"
    );
}

/// A batch run finished.
pub fn run_completed(
    headlines: usize,
    candidates: usize,
    nodes: usize,
    edges: usize,
    duration_ms: u64,
) {
    info!(
        event = "run_completed",
        headlines = headlines,
        candidates = candidates,
        nodes = nodes,
        edges = edges,
        duration_ms = duration_ms,
        "run completed"
    );
}
