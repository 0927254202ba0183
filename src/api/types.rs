use crate::model::{BlockType, DelayType};
use serde::{Deserialize, Serialize};

/// `GET /api/workflow/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkflowMeta {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub folder: Option<serde_json::Value>,
    #[serde(alias = "workspaceId")]
    pub workspace_id: i64,
    #[serde(default, alias = "isPublic")]
    pub is_public: bool,
    #[serde(default, alias = "publicAccessId")]
    pub public_access_id: Option<String>,
    /// Shape owned by the user service; carried through untouched.
    #[serde(default)]
    pub author: Option<serde_json::Value>,
}

/// `GET /api/workspace/{workspaceId}/paths?workflow_id={id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PathsResponse {
    pub paths: Vec<ApiPath>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiPath {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "workflowId")]
    pub workflow_id: Option<i64>,
    #[serde(default)]
    pub blocks: Vec<ApiBlock>,
    #[serde(default, alias = "parentBlocks")]
    pub parent_blocks: Vec<ApiLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiBlock {
    pub id: i64,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(alias = "pathId")]
    pub path_id: i64,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, alias = "delayType")]
    pub delay_type: Option<DelayType>,
    #[serde(default, alias = "delay")]
    pub delay_seconds: Option<u64>,
    #[serde(default, alias = "delayEvent")]
    pub delay_event: Option<String>,
    #[serde(default, alias = "childPaths")]
    pub child_paths: Vec<ApiLink>,
    #[serde(default, alias = "originalId")]
    pub original_id: Option<i64>,
}

/// A `(path_id, block_id)` link row, used for both `child_paths` and `parent_blocks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiLink {
    #[serde(alias = "pathId")]
    pub path_id: i64,
    #[serde(alias = "blockId")]
    pub block_id: i64,
}

/// `GET /api/stroke-lines?workflow_id={id}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiStrokeLine {
    #[serde(alias = "sourceBlockId")]
    pub source_block_id: i64,
    #[serde(alias = "targetBlockId")]
    pub target_block_id: i64,
    #[serde(alias = "workflowId")]
    pub workflow_id: i64,
    #[serde(default)]
    pub label: Option<String>,
}
