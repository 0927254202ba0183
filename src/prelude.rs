//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! processflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use processflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let snapshot = WorkflowSnapshot::from_file("path/to/workflow.json")?;
//! let definition = load_definition(&snapshot, snapshot.workflow_id()?)?;
//! let mut player = Player::from_output(GraphBuilder::builder(definition).build().resolve())?;
//! player.next_step();
//! println!("{:?}", player.current_step());
//! # Ok(())
//! # }
//! ```

// Graph construction
pub use crate::builder::{
    BuildOptions, BuildOutput, ContinuationNamer, Diagnostics, GraphBuilder, IdAllocator,
    MergeStrategy,
};

// Traversal
pub use crate::player::{
    BranchOption, CardEffect, CardState, Player, Selection, SelectionOutcome, StepCursor,
    StepMove, WorkflowView,
};

// Model
pub use crate::model::{
    Block, BlockId, BlockType, ChildPath, Id, IntoWorkflow, ParentBlock, Path, PathGraph,
    PathId, ResolvedWorkflow, StrokeLine, WorkflowDefinition,
};

// Loading
pub use crate::data::WorkflowSnapshot;
pub use crate::source::{WorkflowSource, load_definition};

// Error types
pub use crate::error::{ArtifactError, ConversionError, PlayerError, SourceError};

// Presentation
pub use crate::outline::GraphFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
