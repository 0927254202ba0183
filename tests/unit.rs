//! Unit tests for model types, loading and naming.
mod common;
use common::*;
use processflow::api::{ApiBlock, ApiPath};
use processflow::prelude::*;

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(Id::Real(12).to_string(), "12");
        assert_eq!(Id::Synthetic(3).to_string(), "~3");
        assert_ne!(Id::Real(3), Id::Synthetic(3));
    }

    #[test]
    fn test_block_type_from_wire() {
        let types: Vec<BlockType> =
            serde_json::from_str(r#"["BEGIN", "MERGE", "LAST", "CHECKLIST"]"#).unwrap();
        assert_eq!(
            types,
            vec![
                BlockType::Begin,
                BlockType::Merge,
                BlockType::Last,
                BlockType::Unknown
            ]
        );
        assert!(BlockType::Begin.is_marker());
        assert!(!BlockType::Merge.is_marker());
        assert_eq!(BlockType::Delay.to_string(), "DELAY");
    }

    #[test]
    fn test_split_after_moves_the_tail() {
        let mut main = path(
            1,
            "Main",
            vec![
                block(10, BlockType::Begin, 1),
                step(11, "A", 1),
                block(12, BlockType::Last, 1),
            ],
        );
        let tail = main.split_after(1);
        assert_eq!(tail.len(), 1);
        assert_eq!(main.blocks.len(), 2);
        assert!(main.split_after(1).is_empty());
    }

    #[test]
    fn test_graph_without_root() {
        let looped = child_of(path(1, "Loop", vec![step(10, "A", 1)]), 10);
        let err = Player::new(PathGraph::new(vec![looped])).unwrap_err();
        assert_eq!(err, PlayerError::NoRootPath);
    }
}

#[cfg(test)]
mod loading_tests {
    use super::*;

    fn raw_block(id: i64, block_type: BlockType, path_id: i64) -> ApiBlock {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": block_type,
            "path_id": path_id,
        }))
        .unwrap()
    }

    #[test]
    fn test_invalid_ids_fail_loading() {
        let mut snapshot = WorkflowSnapshot::from_json(ONBOARDING_SNAPSHOT_JSON).unwrap();
        snapshot.paths.push(ApiPath {
            id: 0,
            name: "Broken".to_string(),
            workflow_id: Some(7),
            blocks: vec![raw_block(90, BlockType::Step, 0)],
            parent_blocks: Vec::new(),
        });

        let err = load_definition(&snapshot, 7).unwrap_err();
        assert_eq!(
            err,
            SourceError::Conversion(ConversionError::InvalidId {
                entity: "path",
                id: 0
            })
        );
    }

    #[test]
    fn test_negative_workflow_id_is_rejected() {
        let mut snapshot = WorkflowSnapshot::from_json(ONBOARDING_SNAPSHOT_JSON).unwrap();
        snapshot.workflow.id = -3;
        let invalid = ConversionError::InvalidId {
            entity: "workflow",
            id: -3,
        };

        assert_eq!(snapshot.workflow_id(), Err(invalid.clone()));
        assert_eq!(
            load_definition(&snapshot, 0).unwrap_err(),
            SourceError::Conversion(invalid)
        );
    }

    #[test]
    fn test_malformed_snapshot() {
        let err = WorkflowSnapshot::from_json(r#"{ "workflow": 7 }"#).unwrap_err();
        assert!(matches!(err, SourceError::Parse { payload: "snapshot", .. }));
    }

    #[test]
    fn test_custom_conversion() {
        struct Checklist(Vec<&'static str>);

        impl IntoWorkflow for Checklist {
            fn into_workflow(self) -> std::result::Result<WorkflowDefinition, ConversionError> {
                if self.0.is_empty() {
                    return Err(ConversionError::ValidationError(
                        "a checklist needs at least one item".to_string(),
                    ));
                }
                let mut blocks = vec![block(1, BlockType::Begin, 100)];
                for (n, item) in self.0.iter().enumerate() {
                    blocks.push(step(2 + n as u64, item, 100));
                }
                blocks.push(block(99, BlockType::Last, 100));
                Ok(definition(vec![path(100, "Checklist", blocks)], Vec::new()))
            }
        }

        assert!(Checklist(Vec::new()).into_workflow().is_err());
        let output = resolve(Checklist(vec!["Wash", "Dry"]).into_workflow().unwrap());
        let player = Player::from_output(output).unwrap();
        assert_eq!(player.steps().len(), 2);
    }
}

#[cfg(test)]
mod naming_tests {
    use super::*;

    struct Numbered;

    impl ContinuationNamer for Numbered {
        fn name(&self, first_block: &Block, _paths: &[Path]) -> String {
            format!("Continue at {}", first_block.id)
        }
    }

    fn continuation_name(output: &BuildOutput) -> String {
        let a = output
            .graph
            .find_block(Id::Real(11))
            .map(|(_, b)| b.clone())
            .expect("source block");
        output
            .graph
            .path(a.child_paths[0].path_id)
            .expect("continuation")
            .name
            .clone()
    }

    fn split_at_a() -> WorkflowDefinition {
        let main = path(
            1,
            "Main",
            vec![
                block(10, BlockType::Begin, 1),
                step(11, "A", 1),
                block(12, BlockType::Delay, 1),
                block(13, BlockType::Last, 1),
            ],
        );
        let other = child_of(
            path(2, "Other", vec![step(20, "Z", 2), block(21, BlockType::End, 2)]),
            99,
        );
        definition(vec![main, other], vec![stroke_line(11, 20, "To Z")])
    }

    #[test]
    fn test_default_naming() {
        assert_eq!(continuation_name(&resolve(split_at_a())), "Delay Block");
    }

    #[test]
    fn test_custom_namer() {
        let output = GraphBuilder::builder(split_at_a())
            .with_namer(Box::new(Numbered))
            .build()
            .resolve();
        assert_eq!(continuation_name(&output), "Continue at 12");
    }
}
