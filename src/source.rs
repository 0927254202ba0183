use crate::api::{ApiStrokeLine, PathsResponse, WorkflowMeta, WorkflowPayload};
use crate::data::WorkflowSnapshot;
use crate::error::SourceError;
use crate::model::{IntoWorkflow, WorkflowDefinition};

/// Something that can deliver the backend payloads for a workflow.
///
/// The REST client of a viewer, a snapshot on disk or a test double all
/// implement this; the engine never talks to the network itself.
pub trait WorkflowSource {
    fn fetch_workflow(&self, workflow_id: u64) -> Result<WorkflowMeta, SourceError>;

    fn fetch_paths(&self, workflow_id: u64) -> Result<PathsResponse, SourceError>;

    fn fetch_stroke_lines(&self, workflow_id: u64) -> Result<Vec<ApiStrokeLine>, SourceError>;
}

/// Fetches paths, then stroke lines, and converts both into a builder input.
///
/// The stroke-line fetch only starts once the paths are in, so the builder never
/// sees one without the other.
pub fn load_definition<S: WorkflowSource + ?Sized>(
    source: &S,
    workflow_id: u64,
) -> Result<WorkflowDefinition, SourceError> {
    let paths = source.fetch_paths(workflow_id)?;
    let stroke_lines = source.fetch_stroke_lines(workflow_id)?;
    tracing::debug!(
        workflow_id,
        paths = paths.paths.len(),
        stroke_lines = stroke_lines.len(),
        "fetched workflow payloads"
    );
    let definition = WorkflowPayload {
        workflow_id,
        paths,
        stroke_lines,
    }
    .into_workflow()?;
    Ok(definition)
}

impl WorkflowSnapshot {
    fn ensure_workflow(&self, workflow_id: u64) -> Result<(), SourceError> {
        if self.workflow_id()? == workflow_id {
            Ok(())
        } else {
            Err(SourceError::WorkflowNotFound(workflow_id))
        }
    }
}

impl WorkflowSource for WorkflowSnapshot {
    fn fetch_workflow(&self, workflow_id: u64) -> Result<WorkflowMeta, SourceError> {
        self.ensure_workflow(workflow_id)?;
        Ok(self.workflow.clone())
    }

    fn fetch_paths(&self, workflow_id: u64) -> Result<PathsResponse, SourceError> {
        self.ensure_workflow(workflow_id)?;
        Ok(PathsResponse {
            paths: self.paths.clone(),
        })
    }

    fn fetch_stroke_lines(&self, workflow_id: u64) -> Result<Vec<ApiStrokeLine>, SourceError> {
        self.ensure_workflow(workflow_id)?;
        Ok(self
            .stroke_lines
            .iter()
            .filter(|line| u64::try_from(line.workflow_id).ok() == Some(workflow_id))
            .cloned()
            .collect())
    }
}
