use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the SkillSwap core.
///
/// Domain operations (skill edits, wizard transitions, query derivation) are
/// total and never fail; errors arise only where the core parses boundary
/// input — query tokens typed by a user, listing documents handed in by a
/// catalog supplier — or where an external collaborator reports a failure.
#[derive(Debug, Error)]
pub enum SwapError {
    // ── Query configuration ─────────────────────────────────────────────
    #[error("query: {0}")]
    Query(#[from] QueryError),

    // ── Listing catalog ─────────────────────────────────────────────────
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    // ── Generic fallthrough (wraps anyhow for collaborator interop) ─────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Query configuration errors ─────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),

    #[error("unknown skill level: {0}")]
    UnknownLevel(String),
}

// ─── Listing catalog errors ─────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed listing document: {0}")]
    Parse(#[from] serde_json::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, SwapError>;
