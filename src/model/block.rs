use super::id::{BlockId, PathId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a block inside a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Begin,
    Step,
    Path,
    Delay,
    Merge,
    Last,
    End,
    #[serde(other)]
    Unknown,
}

impl BlockType {
    /// Bookend markers that are never shown as steps.
    pub fn is_marker(&self) -> bool {
        matches!(self, BlockType::Begin | BlockType::Last | BlockType::End)
    }

    /// Blocks that close a process.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BlockType::Last | BlockType::End)
    }

    /// Title-cased label, e.g. `Delay` for `DELAY`.
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Begin => "Begin",
            BlockType::Step => "Step",
            BlockType::Path => "Path",
            BlockType::Delay => "Delay",
            BlockType::Merge => "Merge",
            BlockType::Last => "Last",
            BlockType::End => "End",
            BlockType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelayType {
    FixedDuration,
    EventBased,
    #[serde(other)]
    Unknown,
}

/// Wait configuration carried by `DELAY` blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delay {
    pub delay_type: Option<DelayType>,
    pub seconds: Option<u64>,
    pub event: Option<String>,
}

/// An outgoing branch: `path_id` is reachable from the block `block_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChildPath {
    pub path_id: PathId,
    pub block_id: BlockId,
}

/// A single node of a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub block_type: BlockType,
    pub path_id: PathId,
    pub position: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub delay: Option<Delay>,
    pub child_paths: Vec<ChildPath>,
    /// Set on clones; always points at the first block of the clone family.
    pub original_id: Option<BlockId>,
}

impl Block {
    pub fn new(id: BlockId, block_type: BlockType, path_id: PathId) -> Self {
        Self {
            id,
            block_type,
            path_id,
            position: 0,
            title: None,
            description: None,
            image: None,
            icon: None,
            delay: None,
            child_paths: Vec::new(),
            original_id: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn with_child(mut self, path_id: PathId) -> Self {
        self.child_paths.push(ChildPath {
            path_id,
            block_id: self.id,
        });
        self
    }

    pub fn has_children(&self) -> bool {
        !self.child_paths.is_empty()
    }

    pub fn has_child(&self, path_id: PathId) -> bool {
        self.child_paths.iter().any(|c| c.path_id == path_id)
    }

    /// The title if it carries any visible text.
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Copies every entry of `source` whose target path is not yet present,
    /// re-pointing it at this block. Returns how many entries were added.
    pub fn adopt_children(&mut self, source: &[ChildPath]) -> usize {
        let mut added = 0;
        for child in source {
            if !self.has_child(child.path_id) {
                self.child_paths.push(ChildPath {
                    path_id: child.path_id,
                    block_id: self.id,
                });
                added += 1;
            }
        }
        added
    }
}
