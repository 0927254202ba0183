//! # ProcessFlow - Path Graph Engine
//!
//! **ProcessFlow** documents business processes as branching flows. Authors draw
//! linear *paths* of blocks and connect them with *stroke lines*; viewers walk
//! through the result one step at a time, choosing a branch whenever the process
//! forks. This crate is the engine behind the read view.
//!
//! ## Core Workflow
//!
//! 1.  **Fetch**: Get the raw paths and stroke lines of a workflow, through a
//!     [`source::WorkflowSource`] or your own loader.
//! 2.  **Convert**: Turn them into a [`model::WorkflowDefinition`]. The REST payloads
//!     in [`api`] already implement [`model::IntoWorkflow`].
//! 3.  **Resolve**: Run [`builder::GraphBuilder`]. It splits and clones paths so every
//!     stroke line becomes an ordinary branch, inlines MERGE blocks and cuts each
//!     path at its first branch point.
//! 4.  **Play**: Hand the result to a [`player::Player`], which keeps the displayed
//!     sequence, the selections and the step cursor.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use processflow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let snapshot = WorkflowSnapshot::from_file("workflow.json")?;
//!     let definition = load_definition(&snapshot, snapshot.workflow_id()?)?;
//!
//!     let output = GraphBuilder::builder(definition)
//!         .with_merge_strategy(MergeStrategy::SinglePass)
//!         .build()
//!         .resolve();
//!     for skipped in &output.diagnostics.skipped_stroke_lines {
//!         println!("skipped stroke line: {:?}", skipped);
//!     }
//!
//!     let mut player = Player::from_output(output)?;
//!     while let StepMove::Moved(_) = player.next_step() {}
//!
//!     if let Some(block) = player.current_step() {
//!         // The walk stopped at a branch; pick the first option.
//!         let block_id = block.id;
//!         if let Some(option) = player.options_for(block_id).first() {
//!             player.select_option(option.path_id, block_id);
//!         }
//!     }
//!     println!("{}", GraphFormatter::format_sequence(player.paths_to_display()));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod builder;
pub mod data;
pub mod error;
pub mod model;
pub mod outline;
pub mod player;
pub mod prelude;
pub mod source;
