use super::ids::IdAllocator;
use crate::model::{BlockId, Id, PathId};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Why a stroke line produced no (or only part of its) effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeSkipReason {
    MissingSourceBlock,
    MissingTargetBlock,
    /// The target precedes the split point in the source's own path.
    TargetNotReachable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedStrokeLine {
    pub source_block_id: BlockId,
    pub target_block_id: BlockId,
    pub reason: StrokeSkipReason,
}

/// Data-quality findings collected while building a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub skipped_stroke_lines: Vec<SkippedStrokeLine>,
    /// MERGE blocks whose child path is not part of the graph.
    pub dangling_merges: Vec<BlockId>,
    /// Paths still holding a MERGE after the fixed-point iteration cap.
    pub unresolved_merges: Vec<PathId>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.skipped_stroke_lines.is_empty()
            && self.dangling_merges.is_empty()
            && self.unresolved_merges.is_empty()
    }
}

/// Working state threaded through every builder stage.
#[derive(Debug, Default)]
pub struct BuildContext {
    pub ids: IdAllocator,
    /// `source block -> clones of it`, filled while cloning stroke-line targets.
    pub clone_pairs: AHashMap<BlockId, Vec<BlockId>>,
    pub diagnostics: Diagnostics,
}

impl BuildContext {
    pub fn new(ids: IdAllocator) -> Self {
        Self {
            ids,
            clone_pairs: AHashMap::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn fresh_id(&mut self) -> Id {
        self.ids.next_id()
    }

    pub fn record_clone(&mut self, original: BlockId, clone: BlockId) {
        self.clone_pairs.entry(original).or_default().push(clone);
    }

    pub fn skip_stroke_line(
        &mut self,
        source_block_id: BlockId,
        target_block_id: BlockId,
        reason: StrokeSkipReason,
    ) {
        tracing::warn!(
            source = %source_block_id,
            target = %target_block_id,
            ?reason,
            "skipping stroke line"
        );
        self.diagnostics.skipped_stroke_lines.push(SkippedStrokeLine {
            source_block_id,
            target_block_id,
            reason,
        });
    }
}
