use crate::model::{Id, PathGraph, ResolvedWorkflow, WorkflowDefinition};
use serde::{Deserialize, Serialize};

mod clone;
mod context;
mod ids;
mod merge;
pub mod naming;
mod stroke;
mod truncate;

pub use clone::{clone_block, clone_blocks, clone_path};
pub use context::{BuildContext, Diagnostics, SkippedStrokeLine, StrokeSkipReason};
pub use ids::IdAllocator;
pub use merge::inline_merges;
pub use naming::{ContinuationNamer, DefaultNamer, name_for_continuation};
pub use stroke::resolve_stroke_lines;
pub use truncate::truncate_at_branches;

/// How MERGE blocks are inlined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// First resolvable MERGE per path, once.
    #[default]
    SinglePass,
    /// Repeat per path until no resolvable MERGE is left.
    FixedPoint,
}

/// Tunables for a build, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub merge_strategy: MergeStrategy,
    /// Upper bound on splices per path under `MergeStrategy::FixedPoint`.
    pub merge_round_limit: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            merge_strategy: MergeStrategy::SinglePass,
            merge_round_limit: 256,
        }
    }
}

/// Everything a build produces.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub workflow_id: u64,
    pub graph: PathGraph,
    pub diagnostics: Diagnostics,
    /// Allocator state after the build; hand it to the player to keep ids unique.
    pub ids: IdAllocator,
}

impl BuildOutput {
    pub fn into_artifact(self) -> ResolvedWorkflow {
        ResolvedWorkflow::new(self.workflow_id, self.graph, self.diagnostics)
    }
}

/// Reconstructs a displayable path graph from fetched paths and stroke lines.
pub struct GraphBuilder {
    definition: WorkflowDefinition,
    options: BuildOptions,
    namer: Box<dyn ContinuationNamer>,
    ids: Option<IdAllocator>,
}

pub struct GraphBuilderConfig {
    definition: WorkflowDefinition,
    options: BuildOptions,
    namer: Box<dyn ContinuationNamer>,
    ids: Option<IdAllocator>,
}

impl GraphBuilderConfig {
    pub fn new(definition: WorkflowDefinition) -> Self {
        Self {
            definition,
            options: BuildOptions::default(),
            namer: Box::new(DefaultNamer),
            ids: None,
        }
    }
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }
    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.options.merge_strategy = strategy;
        self
    }
    pub fn with_namer(mut self, namer: Box<dyn ContinuationNamer>) -> Self {
        self.namer = namer;
        self
    }
    /// Continue an existing id sequence instead of seeding from the input.
    pub fn with_ids(mut self, ids: IdAllocator) -> Self {
        self.ids = Some(ids);
        self
    }
    pub fn build(self) -> GraphBuilder {
        GraphBuilder {
            definition: self.definition,
            options: self.options,
            namer: self.namer,
            ids: self.ids,
        }
    }
}

impl GraphBuilder {
    pub fn builder(definition: WorkflowDefinition) -> GraphBuilderConfig {
        GraphBuilderConfig::new(definition)
    }

    /// Runs stroke-line resolution, merge inlining and truncation, in that order.
    pub fn resolve(self) -> BuildOutput {
        let WorkflowDefinition {
            workflow_id,
            mut paths,
            stroke_lines,
        } = self.definition;

        // A caller-supplied allocator may predate synthetic ids in the input.
        let seeded = IdAllocator::seeded_from(&paths);
        let ids = match self.ids {
            Some(mut ids) => {
                ids.exclude(Id::Synthetic(seeded.watermark()));
                ids
            }
            None => seeded,
        };
        let mut ctx = BuildContext::new(ids);

        tracing::debug!(
            workflow_id,
            paths = paths.len(),
            stroke_lines = stroke_lines.len(),
            "resolving path graph"
        );

        resolve_stroke_lines(&mut paths, &stroke_lines, self.namer.as_ref(), &mut ctx);
        inline_merges(
            &mut paths,
            self.options.merge_strategy,
            self.options.merge_round_limit,
            &mut ctx,
        );
        truncate_at_branches(&mut paths);

        tracing::debug!(
            workflow_id,
            paths = paths.len(),
            skipped = ctx.diagnostics.skipped_stroke_lines.len(),
            "path graph resolved"
        );

        BuildOutput {
            workflow_id,
            graph: PathGraph::new(paths),
            diagnostics: ctx.diagnostics,
            ids: ctx.ids,
        }
    }
}
