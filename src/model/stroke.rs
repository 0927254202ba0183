use super::id::BlockId;
use serde::{Deserialize, Serialize};

/// An authored cross-path edge: flow continues from `source_block_id` at
/// `target_block_id`, possibly in another path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeLine {
    pub source_block_id: BlockId,
    pub target_block_id: BlockId,
    pub workflow_id: u64,
    pub label: String,
}
