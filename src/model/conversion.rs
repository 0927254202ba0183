use super::definition::WorkflowDefinition;
use crate::error::ConversionError;

/// A trait for wire or storage formats that can be converted into a
/// `WorkflowDefinition`.
///
/// The graph builder only ever sees the canonical model. Anything that fetches
/// paths and stroke lines (the REST payloads in `crate::api`, a test fixture,
/// a database export) implements this trait to get there.
///
/// # Example
///
/// ```rust,no_run
/// use processflow::prelude::*;
/// use processflow::error::ConversionError;
///
/// struct Export { steps: Vec<(u64, String)> }
///
/// impl IntoWorkflow for Export {
///     fn into_workflow(self) -> std::result::Result<WorkflowDefinition, ConversionError> {
///         let mut path = Path::new(Id::Real(1), "Main");
///         for (id, title) in self.steps {
///             path.blocks.push(Block::new(Id::Real(id), BlockType::Step, path.id).with_title(&title));
///         }
///         Ok(WorkflowDefinition { workflow_id: 1, paths: vec![path], stroke_lines: vec![] })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into the builder's input model.
    fn into_workflow(self) -> Result<WorkflowDefinition, ConversionError>;
}

impl IntoWorkflow for WorkflowDefinition {
    fn into_workflow(self) -> Result<WorkflowDefinition, ConversionError> {
        Ok(self)
    }
}
