use crate::model::{Id, Path};
use serde::{Deserialize, Serialize};

/// Hands out session-unique synthetic identities.
///
/// Ids only ever grow, so anything issued by one allocator is excluded from every
/// later call. An allocator can be seeded past the synthetic ids already present
/// in a set of paths, which is how the player continues where the builder stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> Id {
        self.last += 1;
        Id::Synthetic(self.last)
    }

    /// Makes sure `id` is never handed out.
    pub fn exclude(&mut self, id: Id) {
        if let Id::Synthetic(n) = id {
            self.last = self.last.max(n);
        }
    }

    /// Number of the most recently issued (or excluded) synthetic id.
    pub fn watermark(&self) -> u64 {
        self.last
    }

    pub fn seeded_from<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut ids = Self::new();
        for path in paths {
            ids.exclude(path.id);
            for parent in &path.parent_blocks {
                ids.exclude(parent.path_id);
                ids.exclude(parent.block_id);
            }
            for block in &path.blocks {
                ids.exclude(block.id);
                ids.exclude(block.path_id);
                if let Some(original) = block.original_id {
                    ids.exclude(original);
                }
                for child in &block.child_paths {
                    ids.exclude(child.path_id);
                    ids.exclude(child.block_id);
                }
            }
        }
        ids
    }
}
