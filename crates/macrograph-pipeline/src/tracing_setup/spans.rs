//! Span definitions for the pipeline.

/// Span for a whole batch run.
#[macro_export]
macro_rules! run_span {
    ($headlines:expr, $parallel:expr) => {
        tracing::info_span!(
            "macrograph.run",
            headlines = $headlines,
            parallel = $parallel
        )
    };
}

/// Span for one extraction chunk.
#[macro_export]
macro_rules! chunk_span {
    ($index:expr, $len:expr) => {
        tracing::debug_span!("macrograph.chunk", index = $index, len = $len)
    };
}

/// Span for export assembly.
#[macro_export]
macro_rules! assembly_span {
    ($nodes:expr, $edges:expr) => {
        tracing::info_span!("macrograph.assembly", nodes = $nodes, edges = $edges)
    };
}

/// Span names as constants for filtering.
pub mod names {
    pub const RUN: &str = "macrograph.run";
    pub const CHUNK: &str = "macrograph.chunk";
    pub const ASSEMBLY: &str = "macrograph.assembly";
}
