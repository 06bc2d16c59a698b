//! Error types for the allocation engine.
//!
//! Business-logic edge cases never surface here: the engine degrades to safe
//! defaults instead. Only contract violations and I/O or parse failures at the
//! input boundary are reported as errors.

/// Contract violations raised by the engine.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EngineError {
    #[error("invalid engine config: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid task '{task}': {reason}")]
    InvalidTask { task: String, reason: String },

    #[error("duplicate worker name in roster: {name}")]
    DuplicateWorker { name: String },
}

/// Errors loading rosters and task batches.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported file format: {path} (expected {expected})")]
    UnsupportedFormat {
        path: String,
        expected: &'static str,
    },
}

/// Errors loading a role-to-skill knowledge base.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid knowledge base TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported knowledge base version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
