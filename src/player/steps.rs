use super::Player;
use crate::model::{Block, BlockId};

/// Where the viewer is in the flattened step list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCursor {
    NotStarted,
    At(usize),
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMove {
    Moved(StepCursor),
    /// The current block branches and no option has been picked for it yet.
    Blocked { block_id: BlockId },
    /// Already at the first or last position.
    AtBoundary,
}

impl Player {
    /// Every displayed block a viewer steps through, without BEGIN/LAST/END.
    pub fn steps(&self) -> Vec<&Block> {
        self.paths_to_display
            .iter()
            .flat_map(|p| p.blocks.iter())
            .filter(|b| !b.block_type.is_marker())
            .collect()
    }

    /// Raw position in `[-1, steps().len()]`.
    pub fn cursor_index(&self) -> isize {
        self.cursor.clamp(-1, self.steps().len() as isize)
    }

    pub fn cursor(&self) -> StepCursor {
        let len = self.steps().len() as isize;
        match self.cursor_index() {
            -1 => StepCursor::NotStarted,
            i if i >= len => StepCursor::Completed,
            i => StepCursor::At(i as usize),
        }
    }

    pub fn current_step(&self) -> Option<&Block> {
        match self.cursor() {
            StepCursor::At(i) => self.steps().get(i).copied(),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.cursor() == StepCursor::Completed
    }

    pub fn next_step(&mut self) -> StepMove {
        let len = self.steps().len() as isize;
        let at = self.cursor_index();
        if at >= len {
            return StepMove::AtBoundary;
        }
        if let Some(block) = self.current_step() {
            if block.has_children() && !self.is_selected(block.id) {
                return StepMove::Blocked { block_id: block.id };
            }
        }
        self.cursor = at + 1;
        StepMove::Moved(self.cursor())
    }

    pub fn previous_step(&mut self) -> StepMove {
        let at = self.cursor_index();
        if at <= -1 {
            return StepMove::AtBoundary;
        }
        self.cursor = at - 1;
        StepMove::Moved(self.cursor())
    }

    /// Keeps the stored cursor inside the (possibly shorter) step list.
    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor_index();
    }
}
