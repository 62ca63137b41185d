//! Error taxonomy of the plotting core.
//!
//! Nothing here is fatal to the process: a failed expression is reported for its
//! own input line, a malformed document aborts only the load, and cancellations
//! are outcomes rather than errors.
use crate::entries::SlotId;
use crate::symbolic::parse_expr::ParseError;
use std::path::PathBuf;

/// Malformed domain parameters or configuration values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("step must be positive, got {step}")]
    StepNotPositive { step: f64 },
    #[error("empty domain: min {min} must be less than max {max}")]
    EmptyInterval { min: f64, max: f64 },
    #[error("domain bounds must be finite, got [{min}, {max})")]
    NonFiniteBound { min: f64, max: f64 },
    #[error("the domain variable name must not be empty")]
    EmptyVariable,
    #[error("domain would hold {points} points, at most {limit} are allowed")]
    TooManyPoints { points: f64, limit: usize },
}

/// Why a single expression could not be turned into a curve.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EvaluationFailure {
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error("unknown symbol `{symbol}`")]
    UnknownSymbol { symbol: String },
    #[error("{count} of {total} samples are not finite")]
    NonFinite { count: usize, total: usize },
}

/// Evaluation failure attributed to the input line it came from.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("line {line} `{expression}`: {reason}")]
pub struct EvaluationError {
    pub slot: SlotId,
    /// 1-based position of the slot at plot time
    pub line: usize,
    pub expression: String,
    #[source]
    pub reason: EvaluationFailure,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed document: {reason}")]
pub struct MalformedDocumentError {
    pub reason: String,
}

impl From<serde_json::Error> for MalformedDocumentError {
    fn from(err: serde_json::Error) -> Self {
        MalformedDocumentError {
            reason: err.to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Malformed(#[from] MalformedDocumentError),
    #[error("json error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("drawing backend error: {0}")]
    Backend(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("no input line with id {0}")]
    UnknownSlot(SlotId),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Umbrella error of the workbench commands.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}
