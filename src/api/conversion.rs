use super::types::{ApiBlock, ApiLink, ApiPath, ApiStrokeLine, PathsResponse};
use crate::error::ConversionError;
use crate::model::{
    Block, ChildPath, Delay, Id, IntoWorkflow, ParentBlock, Path, StrokeLine, WorkflowDefinition,
};

/// The two payloads the builder needs, as fetched for one workflow.
#[derive(Debug, Clone)]
pub struct WorkflowPayload {
    pub workflow_id: u64,
    pub paths: PathsResponse,
    pub stroke_lines: Vec<ApiStrokeLine>,
}

fn real_id(entity: &'static str, id: i64) -> Result<Id, ConversionError> {
    u64::try_from(id)
        .ok()
        .filter(|n| *n > 0)
        .map(Id::Real)
        .ok_or(ConversionError::InvalidId { entity, id })
}

fn convert_block(raw: ApiBlock, owner: Id) -> Result<Block, ConversionError> {
    let id = real_id("block", raw.id)?;
    let declared = real_id("path", raw.path_id)?;
    if declared != owner {
        tracing::debug!(block = %id, %declared, %owner, "block delivered under another path");
    }

    let delay = (raw.delay_type.is_some() || raw.delay_seconds.is_some() || raw.delay_event.is_some())
        .then(|| Delay {
            delay_type: raw.delay_type,
            seconds: raw.delay_seconds,
            event: raw.delay_event,
        });
    let child_paths = raw
        .child_paths
        .into_iter()
        .map(|link| {
            Ok(ChildPath {
                path_id: real_id("child path", link.path_id)?,
                block_id: real_id("block", link.block_id)?,
            })
        })
        .collect::<Result<_, ConversionError>>()?;
    let original_id = raw
        .original_id
        .map(|o| real_id("original block", o))
        .transpose()?;

    Ok(Block {
        id,
        block_type: raw.block_type,
        path_id: owner,
        position: raw.position,
        title: raw.title,
        description: raw.description,
        image: raw.image,
        icon: raw.icon,
        delay,
        child_paths,
        original_id,
    })
}

fn convert_parent(link: ApiLink) -> Result<ParentBlock, ConversionError> {
    Ok(ParentBlock {
        path_id: real_id("path", link.path_id)?,
        block_id: real_id("parent block", link.block_id)?,
    })
}

fn convert_path(raw: ApiPath) -> Result<Path, ConversionError> {
    let id = real_id("path", raw.id)?;
    let workflow_id = raw.workflow_id.and_then(|w| u64::try_from(w).ok());
    let mut blocks = raw
        .blocks
        .into_iter()
        .map(|b| convert_block(b, id))
        .collect::<Result<Vec<_>, _>>()?;
    blocks.sort_by_key(|b| b.position);
    let parent_blocks = raw
        .parent_blocks
        .into_iter()
        .map(convert_parent)
        .collect::<Result<_, _>>()?;

    Ok(Path {
        id,
        name: raw.name,
        workflow_id,
        blocks,
        parent_blocks,
    })
}

fn convert_stroke_line(raw: ApiStrokeLine) -> Result<StrokeLine, ConversionError> {
    let workflow_id = u64::try_from(raw.workflow_id).map_err(|_| ConversionError::InvalidId {
        entity: "workflow",
        id: raw.workflow_id,
    })?;
    Ok(StrokeLine {
        source_block_id: real_id("stroke line source block", raw.source_block_id)?,
        target_block_id: real_id("stroke line target block", raw.target_block_id)?,
        workflow_id,
        label: raw.label.unwrap_or_default(),
    })
}

impl IntoWorkflow for WorkflowPayload {
    fn into_workflow(self) -> Result<WorkflowDefinition, ConversionError> {
        let paths = self
            .paths
            .paths
            .into_iter()
            .map(convert_path)
            .collect::<Result<_, _>>()?;
        let stroke_lines = self
            .stroke_lines
            .into_iter()
            .map(convert_stroke_line)
            .collect::<Result<_, _>>()?;

        Ok(WorkflowDefinition {
            workflow_id: self.workflow_id,
            paths,
            stroke_lines,
        })
    }
}
