// Single source of truth for all default values.

// --- Lexicon ---
pub const LEXICON_PATH_ENV: &str = "MACROGRAPH_LEXICON";

// --- Resolution ---
pub const GENERAL_CONTEXT_PATTERN: &str = "general_context";
pub const GENERAL_CONTEXT_PRIORITY: u8 = 0;

// --- Aggregation ---
pub const DEFAULT_EVIDENCE_SAMPLE_SIZE: usize = 10;

// --- Assembly ---
pub const DEFAULT_INCLUDE_PROVENANCE: bool = true;
pub const DEFAULT_INCLUDE_OUTCOMES: bool = true;
pub const EDGE_ROW_TITLE_LIMIT: usize = 5;
pub const EDGE_ROW_TITLE_CHARS: usize = 80;
pub const EDGE_ROW_TITLE_SEPARATOR: &str = " | ";

// --- Pipeline ---
pub const DEFAULT_PARALLEL: bool = false;
pub const DEFAULT_BATCH_SIZE: usize = 1_024;

// --- Observability ---
pub const LOG_ENV: &str = "MACROGRAPH_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
