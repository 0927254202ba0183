//! Common test utilities for building workflow definitions and snapshots.
use processflow::prelude::*;

/// Shorthand for a block with a real id.
#[allow(dead_code)]
pub fn block(id: u64, block_type: BlockType, path: u64) -> Block {
    Block::new(Id::Real(id), block_type, Id::Real(path))
}

/// Shorthand for a titled STEP block.
#[allow(dead_code)]
pub fn step(id: u64, title: &str, path: u64) -> Block {
    block(id, BlockType::Step, path).with_title(title)
}

/// A path with real ids, positions numbered in order.
#[allow(dead_code)]
pub fn path(id: u64, name: &str, blocks: Vec<Block>) -> Path {
    let mut path = Path::new(Id::Real(id), name);
    path.blocks = blocks;
    for (position, block) in path.blocks.iter_mut().enumerate() {
        block.position = position as i32;
    }
    path
}

/// Marks `path` as reachable from `block_id`.
#[allow(dead_code)]
pub fn child_of(mut path: Path, block_id: u64) -> Path {
    path.parent_blocks.push(ParentBlock {
        path_id: path.id,
        block_id: Id::Real(block_id),
    });
    path
}

#[allow(dead_code)]
pub fn stroke_line(source: u64, target: u64, label: &str) -> StrokeLine {
    StrokeLine {
        source_block_id: Id::Real(source),
        target_block_id: Id::Real(target),
        workflow_id: 1,
        label: label.to_string(),
    }
}

#[allow(dead_code)]
pub fn definition(paths: Vec<Path>, stroke_lines: Vec<StrokeLine>) -> WorkflowDefinition {
    WorkflowDefinition {
        workflow_id: 1,
        paths,
        stroke_lines,
    }
}

#[allow(dead_code)]
pub fn resolve(definition: WorkflowDefinition) -> BuildOutput {
    GraphBuilder::builder(definition).build().resolve()
}

/// A root path with one decision and two options.
///
/// ```text
/// 1 "Main":  BEGIN(10) Intro(11) Approved?(12 -> 2 | 3) After(13) LAST(14)
/// 2 "Yes":   BEGIN(20) Ship(21, image) END(22)
/// 3 "No":    BEGIN(30) Reject(31) END(32)
/// ```
#[allow(dead_code)]
pub fn create_branching_workflow() -> WorkflowDefinition {
    let main = path(
        1,
        "Main",
        vec![
            block(10, BlockType::Begin, 1),
            step(11, "Intro", 1),
            block(12, BlockType::Path, 1)
                .with_title("Approved?")
                .with_child(Id::Real(2))
                .with_child(Id::Real(3)),
            step(13, "After", 1),
            block(14, BlockType::Last, 1),
        ],
    );
    let yes = child_of(
        path(
            2,
            "Yes",
            vec![
                block(20, BlockType::Begin, 2),
                step(21, "Ship", 2).with_image("https://cdn.example.com/ship.png"),
                block(22, BlockType::End, 2),
            ],
        ),
        12,
    );
    let no = child_of(
        path(
            3,
            "No",
            vec![
                block(30, BlockType::Begin, 3),
                step(31, "Reject", 3),
                block(32, BlockType::End, 3),
            ],
        ),
        12,
    );
    definition(vec![main, yes, no], Vec::new())
}

/// Every id, real or synthetic, that occurs anywhere in `paths`.
#[allow(dead_code)]
pub fn all_ids(paths: &[Path]) -> Vec<Id> {
    let mut ids = Vec::new();
    for path in paths {
        ids.push(path.id);
        for block in &path.blocks {
            ids.push(block.id);
        }
    }
    ids
}

/// Snapshot of workflow 7 as the REST endpoints deliver it.
///
/// The "No" branch carries a delay and a stroke line back to the first step of
/// the root path; "Yes" merges into the shared "Welcome" path.
#[allow(dead_code)]
pub const ONBOARDING_SNAPSHOT_JSON: &str = r#"{
    "workflow": {
        "id": 7,
        "name": "Customer onboarding",
        "icon": "rocket",
        "description": "From sign-up to first login",
        "workspaceId": 3,
        "isPublic": true,
        "publicAccessId": "a1b2c3"
    },
    "paths": [
        {
            "id": 1,
            "name": "Onboarding",
            "workflow_id": 7,
            "blocks": [
                { "id": 13, "type": "LAST", "path_id": 1, "position": 3 },
                { "id": 10, "type": "BEGIN", "path_id": 1, "position": 0 },
                { "id": 11, "type": "STEP", "path_id": 1, "position": 1, "title": "Collect documents" },
                {
                    "id": 12, "type": "PATH", "path_id": 1, "position": 2,
                    "title": "Documents complete?",
                    "childPaths": [
                        { "pathId": 2, "blockId": 12 },
                        { "pathId": 3, "blockId": 12 }
                    ]
                }
            ],
            "parent_blocks": []
        },
        {
            "id": 2,
            "name": "Yes",
            "workflow_id": 7,
            "blocks": [
                { "id": 20, "type": "BEGIN", "path_id": 2, "position": 0 },
                {
                    "id": 21, "type": "STEP", "path_id": 2, "position": 1,
                    "title": "Create account",
                    "image": "https://cdn.example.com/account.png"
                },
                {
                    "id": 22, "type": "MERGE", "path_id": 2, "position": 2,
                    "child_paths": [{ "path_id": 4, "block_id": 22 }]
                },
                { "id": 23, "type": "END", "path_id": 2, "position": 3 }
            ],
            "parent_blocks": [{ "path_id": 2, "block_id": 12 }]
        },
        {
            "id": 3,
            "name": "No",
            "workflow_id": 7,
            "blocks": [
                { "id": 30, "type": "BEGIN", "path_id": 3, "position": 0 },
                {
                    "id": 31, "type": "DELAY", "path_id": 3, "position": 1,
                    "delay_type": "FIXED_DURATION", "delay_seconds": 3600
                },
                { "id": 32, "type": "END", "path_id": 3, "position": 2 }
            ],
            "parentBlocks": [{ "pathId": 3, "blockId": 12 }]
        },
        {
            "id": 4,
            "name": "Welcome",
            "workflow_id": 7,
            "blocks": [
                { "id": 40, "type": "BEGIN", "path_id": 4, "position": 0 },
                { "id": 41, "type": "STEP", "path_id": 4, "position": 1, "title": "Send welcome mail" },
                { "id": 42, "type": "END", "path_id": 4, "position": 2 }
            ],
            "parent_blocks": [{ "path_id": 4, "block_id": 22 }]
        }
    ],
    "stroke_lines": [
        { "source_block_id": 31, "target_block_id": 11, "workflow_id": 7, "label": "Try again" },
        { "source_block_id": 41, "target_block_id": 10, "workflow_id": 8, "label": "Other workflow" }
    ]
}"#;
