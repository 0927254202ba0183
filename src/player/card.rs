use super::Player;
use crate::model::BlockId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
}

/// Side effect a front end should perform after a toggle. Toggling never
/// changes the displayed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    ScrollIntoView(BlockId),
    None,
}

impl Player {
    pub fn card_state(&self, block_id: BlockId) -> CardState {
        if self.expanded.contains(&block_id) {
            CardState::Expanded
        } else {
            CardState::Collapsed
        }
    }

    /// Flips a step card. Only displayed blocks with an image can expand.
    pub fn toggle_card(&mut self, block_id: BlockId) -> CardEffect {
        let expandable = self
            .displayed_block(block_id)
            .is_some_and(|b| b.image.is_some());
        if !expandable {
            return CardEffect::None;
        }
        if self.expanded.remove(&block_id) {
            CardEffect::None
        } else {
            self.expanded.insert(block_id);
            CardEffect::ScrollIntoView(block_id)
        }
    }
}
