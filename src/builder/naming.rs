use crate::model::{Block, BlockType, Path};

pub const COMPLETE_PROCESS: &str = "Complete process";

/// Decides the display name of a continuation path from its first block.
pub trait ContinuationNamer: Send + Sync {
    fn name(&self, first_block: &Block, paths: &[Path]) -> String;
}

/// The stock naming policy, see [`name_for_continuation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNamer;

impl ContinuationNamer for DefaultNamer {
    fn name(&self, first_block: &Block, paths: &[Path]) -> String {
        name_for_continuation(first_block, paths)
    }
}

/// Names a continuation after the block it starts with.
///
/// A MERGE that already points at a child path is named after that child's
/// second block (the first one after its BEGIN). Otherwise the block's title
/// wins, terminal blocks read "Complete process" and anything else falls back to
/// its type, e.g. "Delay Block".
pub fn name_for_continuation(first_block: &Block, paths: &[Path]) -> String {
    if first_block.block_type == BlockType::Merge {
        let merged = first_block
            .child_paths
            .first()
            .and_then(|child| paths.iter().find(|p| p.id == child.path_id))
            .and_then(|path| path.blocks.get(1));
        if let Some(block) = merged {
            return block_label(block);
        }
    }
    block_label(first_block)
}

fn block_label(block: &Block) -> String {
    if let Some(title) = block.display_title() {
        title.to_string()
    } else if block.block_type.is_terminal() {
        COMPLETE_PROCESS.to_string()
    } else {
        format!("{} Block", block.block_type.label())
    }
}
