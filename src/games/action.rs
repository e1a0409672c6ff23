//! Player input dispatched to the active game.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, GameVariant, ItemId, PairId};

/// A single player interaction.
///
/// Every action belongs to one variant; dispatching it to a session of a
/// different variant is a no-op.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Matching: select a term.
    SelectTerm { pair: PairId },
    /// Matching: pick a definition for the selected term.
    SelectDefinition { pair: PairId },
    /// Memory: turn a card face-up.
    Flip { card: CardId },
    /// Sorting: move an item to a new position.
    MoveItem { item: ItemId, to: usize },
    /// Sorting: check the current order.
    Check,
    /// Sorting: re-shuffle the set.
    Reshuffle,
    /// Speed quiz: pick an option.
    Answer { option: usize },
    /// Speed quiz: give up on the current question.
    Timeout,
    /// Fill-in-the-blank: pick a word.
    FillIn { text: String },
}

impl PlayerAction {
    /// The variant this action is meant for.
    #[must_use]
    pub fn variant(&self) -> GameVariant {
        match self {
            PlayerAction::SelectTerm { .. } | PlayerAction::SelectDefinition { .. } => {
                GameVariant::Matching
            }
            PlayerAction::Flip { .. } => GameVariant::Memory,
            PlayerAction::MoveItem { .. } | PlayerAction::Check | PlayerAction::Reshuffle => {
                GameVariant::Sorting
            }
            PlayerAction::Answer { .. } | PlayerAction::Timeout => GameVariant::SpeedQuiz,
            PlayerAction::FillIn { .. } => GameVariant::FillBlank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_variant() {
        assert_eq!(PlayerAction::Check.variant(), GameVariant::Sorting);
        assert_eq!(PlayerAction::Flip { card: CardId::new(0) }.variant(), GameVariant::Memory);
        let fill = PlayerAction::FillIn { text: "pyramidal".into() };
        assert_eq!(fill.variant(), GameVariant::FillBlank);
    }

    #[test]
    fn test_action_serde() {
        let json = r#"{"action": "move_item", "item": 2, "to": 0}"#;
        let action: PlayerAction = serde_json::from_str(json).unwrap();
        assert_eq!(action, PlayerAction::MoveItem { item: ItemId::new(2), to: 0 });
    }
}
