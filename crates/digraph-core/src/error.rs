//! Error types and exit codes for digraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (graph contract violations, malformed edge lists)

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the digraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph contract violated, bad edge list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum DigraphError {
    // Graph contract errors (exit code 3)
    #[error("vertex {vertex} does not exist")]
    VertexNotFound { vertex: VertexId },

    #[error("vertex {vertex} already exists")]
    VertexAlreadyExists { vertex: VertexId },

    #[error("edge ({from}, {to}) does not exist")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("edge ({from}, {to}) already exists")]
    EdgeAlreadyExists { from: VertexId, to: VertexId },

    #[error("the graph has negative cost cycles")]
    NegativeCycleDetected,

    #[error("the graph is not a DAG")]
    NotADag,

    #[error("edge list line {line}: {reason}")]
    Parse { line: usize, reason: String },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl DigraphError {
    /// Create an error for a missing vertex
    pub fn vertex_not_found(vertex: VertexId) -> Self {
        DigraphError::VertexNotFound { vertex }
    }

    /// Create an error for a missing edge
    pub fn edge_not_found(from: VertexId, to: VertexId) -> Self {
        DigraphError::EdgeNotFound { from, to }
    }

    /// Create an error for a malformed edge-list line
    pub fn parse(line: usize, reason: impl std::fmt::Display) -> Self {
        DigraphError::Parse {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        DigraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        DigraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DigraphError::UnknownFormat(_)
            | DigraphError::UsageError(_)
            | DigraphError::InvalidValue { .. } => ExitCode::Usage,

            DigraphError::VertexNotFound { .. }
            | DigraphError::VertexAlreadyExists { .. }
            | DigraphError::EdgeNotFound { .. }
            | DigraphError::EdgeAlreadyExists { .. }
            | DigraphError::NegativeCycleDetected
            | DigraphError::NotADag
            | DigraphError::Parse { .. } => ExitCode::Data,

            DigraphError::Io(_)
            | DigraphError::Json(_)
            | DigraphError::Toml(_)
            | DigraphError::FailedOperationWithTarget { .. }
            | DigraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DigraphError::VertexNotFound { .. } => "vertex_not_found",
            DigraphError::VertexAlreadyExists { .. } => "vertex_already_exists",
            DigraphError::EdgeNotFound { .. } => "edge_not_found",
            DigraphError::EdgeAlreadyExists { .. } => "edge_already_exists",
            DigraphError::NegativeCycleDetected => "negative_cycle_detected",
            DigraphError::NotADag => "not_a_dag",
            DigraphError::Parse { .. } => "parse_error",
            DigraphError::UnknownFormat(_) => "unknown_format",
            DigraphError::UsageError(_) => "usage_error",
            DigraphError::InvalidValue { .. } => "invalid_value",
            DigraphError::Io(_) => "io_error",
            DigraphError::Json(_) => "json_error",
            DigraphError::Toml(_) => "toml_error",
            DigraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            DigraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for digraph operations
pub type Result<T> = std::result::Result<T, DigraphError>;
