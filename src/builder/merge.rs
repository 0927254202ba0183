use super::context::BuildContext;
use super::MergeStrategy;
use crate::model::{Block, BlockType, Path, PathId};
use ahash::AHashSet;

enum MergeStep {
    /// Child blocks were spliced in at this index.
    Inlined(usize),
    /// The MERGE at this index points at a path that does not exist.
    Dangling(usize),
    /// The MERGE at this index points at a path already inlined into this one.
    Cyclic(usize),
    Done,
}

/// Replaces MERGE blocks with the blocks of the path they point at.
///
/// With `MergeStrategy::SinglePass` only the first resolvable MERGE of every path
/// is handled, so nested merges need another build. `FixedPoint` keeps going
/// until a path holds no resolvable MERGE or `round_limit` splices were made.
/// A MERGE leading back to the path itself, or to a path already inlined into
/// it during the same run, stops the run for that path.
pub fn inline_merges(
    paths: &mut [Path],
    strategy: MergeStrategy,
    round_limit: usize,
    ctx: &mut BuildContext,
) {
    for index in 0..paths.len() {
        match strategy {
            MergeStrategy::SinglePass => {
                inline_next_merge(paths, index, 0, None, ctx);
            }
            MergeStrategy::FixedPoint => {
                let mut inlined: AHashSet<PathId> = AHashSet::new();
                inlined.insert(paths[index].id);
                let mut start = 0;
                let mut rounds = 0;
                loop {
                    match inline_next_merge(paths, index, start, Some(&mut inlined), ctx) {
                        MergeStep::Inlined(at) => {
                            rounds += 1;
                            start = at;
                            if rounds >= round_limit {
                                tracing::warn!(path = %paths[index].id, rounds, "merge chain did not settle");
                                ctx.diagnostics.unresolved_merges.push(paths[index].id);
                                break;
                            }
                        }
                        MergeStep::Dangling(at) => start = at + 1,
                        MergeStep::Cyclic(at) => {
                            tracing::warn!(path = %paths[index].id, merge = %paths[index].blocks[at].id, "merge leads back into its own path");
                            ctx.diagnostics.unresolved_merges.push(paths[index].id);
                            break;
                        }
                        MergeStep::Done => break,
                    }
                }
            }
        }
    }
}

fn inline_next_merge(
    paths: &mut [Path],
    index: usize,
    start: usize,
    inlined: Option<&mut AHashSet<PathId>>,
    ctx: &mut BuildContext,
) -> MergeStep {
    let Some(offset) = paths[index]
        .blocks
        .iter()
        .skip(start)
        .position(|b| b.block_type == BlockType::Merge && b.has_children())
    else {
        return MergeStep::Done;
    };
    let at = start + offset;
    let merge = &paths[index].blocks[at];
    let child_id = merge.child_paths[0].path_id;

    let Some(child) = paths.iter().find(|p| p.id == child_id) else {
        tracing::warn!(merge = %merge.id, child = %child_id, "merge points at a missing path");
        ctx.diagnostics.dangling_merges.push(merge.id);
        return MergeStep::Dangling(at);
    };
    if let Some(inlined) = inlined {
        if !inlined.insert(child_id) {
            return MergeStep::Cyclic(at);
        }
    }

    let owner = paths[index].id;
    let spliced: Vec<Block> = child
        .blocks
        .iter()
        .filter(|b| !matches!(b.block_type, BlockType::Begin | BlockType::End))
        .map(|b| Block {
            path_id: owner,
            ..b.clone()
        })
        .collect();
    tracing::debug!(path = %owner, child = %child_id, blocks = spliced.len(), "inlined merge");
    paths[index].blocks.splice(at..=at, spliced);
    MergeStep::Inlined(at)
}
