//! Error taxonomy for the game core.
//!
//! Every variant is recoverable: the presentation layer reports it and the
//! simulation carries on. Invalid interactions (wrong tool, already searched
//! container) are not errors, see [`crate::systems::InteractionOutcome`].

use crate::items::ItemKind;

/// One missing ingredient of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub item: ItemKind,
    pub required: u32,
    pub available: u32,
}

impl Shortfall {
    /// How many more units are needed.
    pub fn missing(&self) -> u32 {
        self.required.saturating_sub(self.available)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("unknown item kind '{0}'")]
    UnknownItemKind(String),

    #[error("not enough {kind}: requested {requested}, holding {available}")]
    InsufficientQuantity {
        kind: ItemKind,
        requested: u32,
        available: u32,
    },

    #[error("not enough resources to craft {item} ({} ingredient(s) short)", missing.len())]
    InsufficientResources {
        item: ItemKind,
        missing: Vec<Shortfall>,
    },

    #[error("quick slot index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("quick bar is full")]
    QuickBarFull,

    #[error("no recipe for {0}")]
    UnknownRecipe(ItemKind),

    #[error("{0} cannot be cooked")]
    NotCookable(ItemKind),

    #[error("{0} cannot be placed in the world")]
    NotPlaceable(ItemKind),

    #[error("world object no longer exists")]
    NoSuchObject,

    #[error("invalid balance config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortfall_missing() {
        let s = Shortfall {
            item: ItemKind::Wood,
            required: 3,
            available: 1,
        };
        assert_eq!(s.missing(), 2);
    }

    #[test]
    fn test_error_messages_name_items() {
        let err = GameError::InsufficientQuantity {
            kind: ItemKind::RawMeat,
            requested: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "not enough raw_meat: requested 2, holding 1"
        );
        assert_eq!(
            GameError::UnknownRecipe(ItemKind::Wood).to_string(),
            "no recipe for wood"
        );
    }
}
