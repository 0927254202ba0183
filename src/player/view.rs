use super::Player;
use crate::api::WorkflowMeta;
use crate::builder::{BuildOptions, Diagnostics, GraphBuilder};
use crate::source::{WorkflowSource, load_definition};

/// The read view of one workflow: metadata plus a player over its resolved graph.
///
/// A failed fetch never clears what is already shown; the view keeps its previous
/// state and the failure is logged.
pub struct WorkflowView {
    workflow_id: u64,
    options: BuildOptions,
    meta: Option<WorkflowMeta>,
    player: Option<Player>,
    diagnostics: Diagnostics,
}

impl WorkflowView {
    pub fn new(workflow_id: u64, options: BuildOptions) -> Self {
        Self {
            workflow_id,
            options,
            meta: None,
            player: None,
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn workflow_id(&self) -> u64 {
        self.workflow_id
    }

    pub fn meta(&self) -> Option<&WorkflowMeta> {
        self.meta.as_ref()
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Still waiting for a first successful load.
    pub fn is_loading(&self) -> bool {
        self.player.is_none()
    }

    /// Refetches and rebuilds. Returns whether a new player is in place.
    pub fn reload<S: WorkflowSource + ?Sized>(&mut self, source: &S) -> bool {
        match source.fetch_workflow(self.workflow_id) {
            Ok(meta) => self.meta = Some(meta),
            Err(e) => tracing::warn!(workflow_id = self.workflow_id, error = %e, "failed to fetch workflow"),
        }

        let definition = match load_definition(source, self.workflow_id) {
            Ok(definition) => definition,
            Err(e) => {
                tracing::warn!(workflow_id = self.workflow_id, error = %e, "failed to fetch paths");
                return false;
            }
        };

        let output = GraphBuilder::builder(definition)
            .with_options(self.options.clone())
            .build()
            .resolve();
        let diagnostics = output.diagnostics.clone();
        match Player::from_output(output) {
            Ok(player) => {
                self.player = Some(player);
                self.diagnostics = diagnostics;
                true
            }
            Err(e) => {
                tracing::warn!(workflow_id = self.workflow_id, error = %e, "resolved graph is not playable");
                false
            }
        }
    }
}
