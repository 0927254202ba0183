use super::clone::clone_blocks;
use super::context::{BuildContext, StrokeSkipReason};
use super::naming::ContinuationNamer;
use crate::model::{BlockId, ChildPath, ParentBlock, Path, StrokeLine};
use ahash::{AHashMap, AHashSet};

/// Materializes every stroke line as path splits and clones, then propagates
/// `child_paths` onto the clones created along the way.
///
/// Lines pointing at blocks that are not in `paths` are skipped and reported in
/// `ctx.diagnostics`; the pass itself never fails.
pub fn resolve_stroke_lines(
    paths: &mut Vec<Path>,
    stroke_lines: &[StrokeLine],
    namer: &dyn ContinuationNamer,
    ctx: &mut BuildContext,
) {
    for line in stroke_lines {
        resolve_stroke_line(paths, line, namer, ctx);
    }
    propagate_clone_pairs(paths, ctx);
    propagate_original_ids(paths);
}

/// `(path index, block index)` of the first path currently holding `block_id`.
fn locate(paths: &[Path], block_id: BlockId) -> Option<(usize, usize)> {
    paths
        .iter()
        .enumerate()
        .find_map(|(pi, path)| path.block_index(block_id).map(|bi| (pi, bi)))
}

fn resolve_stroke_line(
    paths: &mut Vec<Path>,
    line: &StrokeLine,
    namer: &dyn ContinuationNamer,
    ctx: &mut BuildContext,
) {
    let source = line.source_block_id;
    let target = line.target_block_id;

    let Some((source_path, source_index)) = locate(paths, source) else {
        ctx.skip_stroke_line(source, target, StrokeSkipReason::MissingSourceBlock);
        return;
    };
    let Some((mut target_path, _)) = locate(paths, target) else {
        ctx.skip_stroke_line(source, target, StrokeSkipReason::MissingTargetBlock);
        return;
    };

    // Everything after the source block moves into a continuation path.
    let mut continuation = None;
    if source_index + 1 < paths[source_path].blocks.len() {
        let id = ctx.fresh_id();
        let name = namer.name(
            &paths[source_path].blocks[source_index + 1],
            paths.as_slice(),
        );
        let workflow_id = paths[source_path].workflow_id;
        let tail = paths[source_path].split_after(source_index);

        let mut path = Path {
            id,
            name,
            workflow_id,
            blocks: tail,
            parent_blocks: vec![ParentBlock {
                path_id: id,
                block_id: source,
            }],
        };
        path.adopt_blocks();
        paths[source_path].blocks[source_index]
            .child_paths
            .push(ChildPath {
                path_id: id,
                block_id: source,
            });
        tracing::debug!(source = %source, continuation = %id, blocks = path.blocks.len(), "split path");
        paths.push(path);
        continuation = Some(paths.len() - 1);
    }

    // A target behind the source in the same path now lives in the continuation.
    if target_path == source_path {
        if let Some(index) = continuation {
            target_path = index;
        }
    }

    let Some(target_index) = paths[target_path].block_index(target) else {
        ctx.skip_stroke_line(source, target, StrokeSkipReason::TargetNotReachable);
        return;
    };

    let id = ctx.fresh_id();
    let blocks = clone_blocks(
        &paths[target_path].blocks[target_index..],
        id,
        Some(source),
        ctx,
    );
    let workflow_id = paths[target_path].workflow_id;
    tracing::debug!(source = %source, target = %target, redirect = %id, blocks = blocks.len(), "cloned stroke line target");
    paths.push(Path {
        id,
        name: line.label.clone(),
        workflow_id,
        blocks,
        parent_blocks: vec![ParentBlock {
            path_id: id,
            block_id: source,
        }],
    });
    paths[source_path].blocks[source_index]
        .child_paths
        .push(ChildPath {
            path_id: id,
            block_id: source,
        });
}

/// Copies the branches of each stroke-line source onto the clones of it.
fn propagate_clone_pairs(paths: &mut [Path], ctx: &BuildContext) {
    if ctx.clone_pairs.is_empty() {
        return;
    }

    let mut branches: AHashMap<BlockId, Vec<ChildPath>> = AHashMap::new();
    for block in paths.iter().flat_map(|p| p.blocks.iter()) {
        if ctx.clone_pairs.contains_key(&block.id) {
            branches
                .entry(block.id)
                .or_insert_with(|| block.child_paths.clone());
        }
    }

    let mut owners: AHashMap<BlockId, BlockId> = AHashMap::new();
    for (original, clones) in &ctx.clone_pairs {
        for clone in clones {
            owners.insert(*clone, *original);
        }
    }

    let mut added = 0;
    for block in paths.iter_mut().flat_map(|p| p.blocks.iter_mut()) {
        if let Some(children) = owners.get(&block.id).and_then(|o| branches.get(o)) {
            added += block.adopt_children(children);
        }
    }
    tracing::debug!(added, "propagated branches to stroke-line clones");
}

/// Keeps clone families in sync: every block carrying `original_id` gets the
/// branches of the block it was copied from.
fn propagate_original_ids(paths: &mut [Path]) {
    let originals: AHashSet<BlockId> = paths
        .iter()
        .flat_map(|p| p.blocks.iter())
        .filter_map(|b| b.original_id)
        .collect();
    if originals.is_empty() {
        return;
    }

    let mut branches: AHashMap<BlockId, Vec<ChildPath>> = AHashMap::new();
    for block in paths.iter().flat_map(|p| p.blocks.iter()) {
        if originals.contains(&block.id) && block.has_children() {
            branches
                .entry(block.id)
                .or_insert_with(|| block.child_paths.clone());
        }
    }

    let mut added = 0;
    for block in paths.iter_mut().flat_map(|p| p.blocks.iter_mut()) {
        if let Some(children) = block.original_id.and_then(|o| branches.get(&o)) {
            added += block.adopt_children(children);
        }
    }
    tracing::debug!(added, "propagated branches within clone families");
}
