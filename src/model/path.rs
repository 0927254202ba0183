use super::block::Block;
use super::id::{BlockId, PathId};
use serde::{Deserialize, Serialize};

/// Link row: path `path_id` is entered from the block `block_id`.
///
/// `path_id` is the owning (child) path, so copies of a path re-point it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentBlock {
    pub path_id: PathId,
    pub block_id: BlockId,
}

/// An ordered, linear branch of a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub id: PathId,
    pub name: String,
    pub workflow_id: Option<u64>,
    pub blocks: Vec<Block>,
    /// Empty only for the root path.
    pub parent_blocks: Vec<ParentBlock>,
}

impl Path {
    pub fn new(id: PathId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            workflow_id: None,
            blocks: Vec::new(),
            parent_blocks: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_blocks.is_empty()
    }

    pub fn block_index(&self, block_id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == block_id)
    }

    pub fn contains_block(&self, block_id: BlockId) -> bool {
        self.block_index(block_id).is_some()
    }

    pub fn block(&self, block_id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    pub fn block_mut(&mut self, block_id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == block_id)
    }

    /// Keeps blocks up to and including `index`. Returns the removed tail.
    pub fn split_after(&mut self, index: usize) -> Vec<Block> {
        if index + 1 >= self.blocks.len() {
            return Vec::new();
        }
        self.blocks.split_off(index + 1)
    }

    /// Re-tags every block as owned by this path.
    pub fn adopt_blocks(&mut self) {
        for block in &mut self.blocks {
            block.path_id = self.id;
        }
    }
}
