use crate::builder::{BuildContext, BuildOutput, IdAllocator, clone_path};
use crate::error::PlayerError;
use crate::model::{Block, BlockId, Id, ParentBlock, Path, PathGraph, PathId};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

mod card;
mod steps;
mod view;

pub use card::{CardEffect, CardState};
pub use steps::{StepCursor, StepMove};
pub use view::WorkflowView;

/// A branch the viewer picked: path `path_id` continues after block `block_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub path_id: PathId,
    pub block_id: BlockId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionSkipReason {
    /// No known path has the requested option id.
    UnknownOptionPath,
    /// The branching block is not part of the displayed sequence.
    BlockNotDisplayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSelection {
    pub path_id: PathId,
    pub block_id: BlockId,
    pub reason: SelectionSkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The option was appended as a fresh copy with this id.
    Selected { path_id: PathId },
    AlreadySelected,
    Skipped(SelectionSkipReason),
}

/// One choice under a branching block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchOption {
    pub path_id: PathId,
    pub name: String,
    pub selected: bool,
}

/// Walks an end user through a resolved graph.
///
/// The player owns the displayed sequence (always starting with the root path),
/// the selections made so far and a growing working copy of every known path.
/// Picking an option appends a fresh copy of the chosen path, so the same path
/// can appear several times in one walk without sharing ids.
#[derive(Debug)]
pub struct Player {
    root: Path,
    paths_to_display: Vec<Path>,
    selected_options: Vec<Selection>,
    copy_paths: Vec<Path>,
    /// Ids of the paths that came out of the build, never replaced in `copy_paths`.
    resolved: AHashSet<PathId>,
    ctx: BuildContext,
    cursor: isize,
    expanded: AHashSet<BlockId>,
    skipped_selections: Vec<SkippedSelection>,
}

impl Player {
    /// Creates a player, seeding synthetic ids past those already in the graph.
    pub fn new(graph: PathGraph) -> Result<Self, PlayerError> {
        let ids = IdAllocator::seeded_from(&graph.paths);
        Self::with_ids(graph, ids)
    }

    pub fn from_output(output: BuildOutput) -> Result<Self, PlayerError> {
        Self::with_ids(output.graph, output.ids)
    }

    pub fn with_ids(graph: PathGraph, mut ids: IdAllocator) -> Result<Self, PlayerError> {
        let root = graph.root().cloned().ok_or(PlayerError::NoRootPath)?;
        ids.exclude(Id::Synthetic(
            IdAllocator::seeded_from(&graph.paths).watermark(),
        ));
        let resolved = graph.paths.iter().map(|p| p.id).collect();
        Ok(Self {
            paths_to_display: vec![root.clone()],
            root,
            selected_options: Vec::new(),
            copy_paths: graph.paths,
            resolved,
            ctx: BuildContext::new(ids),
            cursor: -1,
            expanded: AHashSet::new(),
            skipped_selections: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn paths_to_display(&self) -> &[Path] {
        &self.paths_to_display
    }

    pub fn selected_options(&self) -> &[Selection] {
        &self.selected_options
    }

    pub fn copy_paths(&self) -> &[Path] {
        &self.copy_paths
    }

    pub fn skipped_selections(&self) -> &[SkippedSelection] {
        &self.skipped_selections
    }

    pub fn is_selected(&self, block_id: BlockId) -> bool {
        self.selected_options.iter().any(|s| s.block_id == block_id)
    }

    /// First displayed occurrence of a block.
    pub fn displayed_block(&self, block_id: BlockId) -> Option<&Block> {
        self.paths_to_display
            .iter()
            .find_map(|p| p.block(block_id))
    }

    /// The choices offered under a displayed block, in authoring order.
    /// Options whose path is unknown are left out.
    pub fn options_for(&self, block_id: BlockId) -> Vec<BranchOption> {
        let Some(block) = self.displayed_block(block_id) else {
            return Vec::new();
        };
        block
            .child_paths
            .iter()
            .filter_map(|child| {
                let path = self.copy_paths.iter().find(|p| p.id == child.path_id)?;
                Some(BranchOption {
                    path_id: path.id,
                    name: path.name.clone(),
                    selected: self.selected_options.contains(&Selection {
                        path_id: path.id,
                        block_id,
                    }),
                })
            })
            .collect()
    }

    /// Picks `option_path_id` as the continuation after `block_id`.
    ///
    /// Re-deciding a block drops the previously chosen continuation and every
    /// path displayed after it, along with the selections made inside them.
    pub fn select_option(&mut self, option_path_id: PathId, block_id: BlockId) -> SelectionOutcome {
        let requested = Selection {
            path_id: option_path_id,
            block_id,
        };
        if self.selected_options.contains(&requested) {
            return SelectionOutcome::AlreadySelected;
        }

        let Some(path_to_add) = self
            .copy_paths
            .iter()
            .find(|p| p.id == option_path_id)
            .cloned()
        else {
            return self.skip(requested, SelectionSkipReason::UnknownOptionPath);
        };
        let Some(holder) = self
            .paths_to_display
            .iter()
            .position(|p| p.contains_block(block_id))
        else {
            return self.skip(requested, SelectionSkipReason::BlockNotDisplayed);
        };

        let prior = self
            .selected_options
            .iter()
            .position(|s| s.block_id == block_id);
        let replace_index = prior.map(|_| holder);
        if let Some(prior) = prior {
            let previous = self.selected_options.remove(prior);
            self.paths_to_display.retain(|p| p.id != previous.path_id);
        }

        let mut copy = clone_path(&path_to_add, None, &mut self.ctx);
        copy.parent_blocks = vec![ParentBlock {
            path_id: copy.id,
            block_id,
        }];
        let copy_id = copy.id;

        match self.copy_paths.iter().position(|p| p.id == path_to_add.id) {
            Some(index) if !self.resolved.contains(&path_to_add.id) => {
                self.copy_paths[index] = copy.clone();
            }
            _ => self.copy_paths.push(copy.clone()),
        }
        self.repoint_option(block_id, option_path_id, copy_id);

        match replace_index {
            Some(index) => {
                self.paths_to_display.truncate(index + 1);
                let retained: AHashSet<BlockId> = self
                    .paths_to_display
                    .iter()
                    .flat_map(|p| p.blocks.iter().map(|b| b.id))
                    .collect();
                self.selected_options
                    .retain(|s| retained.contains(&s.block_id));
                self.paths_to_display.push(copy);
            }
            None => self.paths_to_display.push(copy),
        }
        self.selected_options.push(Selection {
            path_id: copy_id,
            block_id,
        });
        self.clamp_cursor();

        tracing::debug!(block = %block_id, option = %option_path_id, path = %copy_id, "option selected");
        SelectionOutcome::Selected { path_id: copy_id }
    }

    /// Back to the root path with nothing selected and no step started.
    pub fn restart(&mut self) {
        self.paths_to_display = vec![self.root.clone()];
        self.selected_options.clear();
        self.cursor = -1;
        self.expanded.clear();
    }

    fn skip(&mut self, requested: Selection, reason: SelectionSkipReason) -> SelectionOutcome {
        tracing::warn!(block = %requested.block_id, option = %requested.path_id, ?reason, "ignoring selection");
        self.skipped_selections.push(SkippedSelection {
            path_id: requested.path_id,
            block_id: requested.block_id,
            reason,
        });
        SelectionOutcome::Skipped(reason)
    }

    /// Points the branching block's entry for `from` at `to`, in every copy of it.
    fn repoint_option(&mut self, block_id: BlockId, from: PathId, to: PathId) {
        let blocks = self
            .paths_to_display
            .iter_mut()
            .chain(self.copy_paths.iter_mut())
            .flat_map(|p| p.blocks.iter_mut())
            .filter(|b| b.id == block_id);
        for block in blocks {
            for child in block.child_paths.iter_mut().filter(|c| c.path_id == from) {
                child.path_id = to;
            }
        }
    }
}
