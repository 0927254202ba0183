use super::context::BuildContext;
use crate::model::{Block, BlockId, ParentBlock, Path, PathId};

/// Copies `block` under a fresh synthetic id.
///
/// `original_id` always points at the root of the clone family. When the block
/// being copied is `seed`, the copy is recorded so `child_paths` discovered later
/// on the seed can be propagated to it.
pub fn clone_block(block: &Block, seed: Option<BlockId>, ctx: &mut BuildContext) -> Block {
    let mut copy = block.clone();
    copy.id = ctx.fresh_id();
    copy.original_id = Some(block.original_id.unwrap_or(block.id));
    if seed == Some(block.id) {
        ctx.record_clone(block.id, copy.id);
    }
    copy
}

/// Clones each block and re-tags it as owned by `path_id`.
pub fn clone_blocks(
    blocks: &[Block],
    path_id: PathId,
    seed: Option<BlockId>,
    ctx: &mut BuildContext,
) -> Vec<Block> {
    blocks
        .iter()
        .map(|block| {
            let mut copy = clone_block(block, seed, ctx);
            copy.path_id = path_id;
            copy
        })
        .collect()
}

/// Copies a whole path: fresh path id, every block cloned, parent links re-pointed.
pub fn clone_path(path: &Path, seed: Option<BlockId>, ctx: &mut BuildContext) -> Path {
    let id = ctx.fresh_id();
    Path {
        id,
        name: path.name.clone(),
        workflow_id: path.workflow_id,
        blocks: clone_blocks(&path.blocks, id, seed, ctx),
        parent_blocks: path
            .parent_blocks
            .iter()
            .map(|parent| ParentBlock {
                path_id: id,
                block_id: parent.block_id,
            })
            .collect(),
    }
}
