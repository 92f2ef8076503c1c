use strum_macros::Display;
use thiserror::Error;

/// The entity classes a lookup can fail to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntityKind {
    Quiz,
    Engine,
    Response,
}

#[derive(Error, Debug)]
pub enum VerdictError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Engine '{engine_id}' targets quiz '{expected}', got quiz '{actual}'")]
    EngineQuizMismatch {
        engine_id: String,
        expected: String,
        actual: String,
    },

    #[error("Response '{response_id}' belongs to quiz '{expected}', got quiz '{actual}'")]
    ResponseQuizMismatch {
        response_id: String,
        expected: String,
        actual: String,
    },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type VdResult<T> = Result<T, VerdictError>;
