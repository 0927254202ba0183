use crate::api::{ApiPath, ApiStrokeLine, WorkflowMeta};
use crate::error::{ConversionError, SourceError};
use serde::{Deserialize, Serialize};
use std::fs;

/// One workflow's API responses bundled in a single JSON document.
///
/// ```json
/// { "workflow": { ... }, "paths": [ ... ], "stroke_lines": [ ... ] }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowSnapshot {
    pub workflow: WorkflowMeta,
    pub paths: Vec<ApiPath>,
    #[serde(default)]
    pub stroke_lines: Vec<ApiStrokeLine>,
}

impl WorkflowSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|e| SourceError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        serde_json::from_str(json).map_err(|e| SourceError::Parse {
            payload: "snapshot",
            message: e.to_string(),
        })
    }

    /// The id of the bundled workflow. Backend ids are positive.
    pub fn workflow_id(&self) -> Result<u64, ConversionError> {
        u64::try_from(self.workflow.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(ConversionError::InvalidId {
                entity: "workflow",
                id: self.workflow.id,
            })
    }
}
