use super::block::Block;
use super::id::{BlockId, PathId};
use super::path::Path;
use super::stroke::StrokeLine;
use serde::{Deserialize, Serialize};

/// The un-resolved input of the graph builder, as delivered by the backend.
/// This is the target structure for any wire format conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub workflow_id: u64,
    pub paths: Vec<Path>,
    pub stroke_lines: Vec<StrokeLine>,
}

/// A resolved, displayable set of paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathGraph {
    pub paths: Vec<Path>,
}

impl PathGraph {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    /// The first path nothing leads into.
    pub fn root(&self) -> Option<&Path> {
        self.paths.iter().find(|p| p.is_root())
    }

    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// First occurrence of a block together with the path holding it.
    pub fn find_block(&self, id: BlockId) -> Option<(&Path, &Block)> {
        self.paths
            .iter()
            .find_map(|p| p.block(id).map(|b| (p, b)))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn block_count(&self) -> usize {
        self.paths.iter().map(|p| p.blocks.len()).sum()
    }
}
