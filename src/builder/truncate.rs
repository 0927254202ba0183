use crate::model::{Block, Path};

/// Cuts every path right after its first branching block.
///
/// Blocks past a branch point are only reachable once the viewer picks a branch,
/// at which point the player appends the chosen path. Returns the number of
/// paths that lost blocks; a second run on the output always returns 0.
pub fn truncate_at_branches(paths: &mut [Path]) -> usize {
    let mut truncated = 0;
    for path in paths.iter_mut() {
        if let Some(index) = path.blocks.iter().position(Block::has_children) {
            if !path.split_after(index).is_empty() {
                truncated += 1;
            }
        }
    }
    tracing::debug!(truncated, "truncated paths at branch points");
    truncated
}
