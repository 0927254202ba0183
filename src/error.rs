use thiserror::Error;

/// Errors that can occur when converting wire or custom data into a `WorkflowDefinition`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("{entity} id {id} is not a valid backend id (must be positive)")]
    InvalidId { entity: &'static str, id: i64 },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised by a `WorkflowSource` while fetching one of its payloads.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Could not read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {payload} JSON: {message}")]
    Parse {
        payload: &'static str,
        message: String,
    },

    #[error("Workflow {0} is not available from this source")]
    WorkflowNotFound(u64),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors that can occur while saving or loading a resolved workflow artifact.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArtifactError {
    #[error("Artifact I/O failed for '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),
}

/// Errors that prevent a player from being created for a graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    #[error("Graph has no root path: every path is entered from a parent block")]
    NoRootPath,
}
