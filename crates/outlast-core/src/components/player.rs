//! The player: position, inventory and survival stats.

use serde::{Deserialize, Serialize};

use super::common::Vec3;
use crate::config::StartingKit;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::items::Catalog;

/// Upper bound for every survival stat
pub const MAX_STAT: f32 = 100.0;

/// Survival stats, each kept in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: f32,
    pub hunger: f32,
    pub thirst: f32,
    pub stamina: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            health: MAX_STAT,
            hunger: MAX_STAT,
            thirst: MAX_STAT,
            stamina: MAX_STAT,
        }
    }
}

impl Vitals {
    pub fn clamp(&mut self) {
        self.health = self.health.clamp(0.0, MAX_STAT);
        self.hunger = self.hunger.clamp(0.0, MAX_STAT);
        self.thirst = self.thirst.clamp(0.0, MAX_STAT);
        self.stamina = self.stamina.clamp(0.0, MAX_STAT);
    }

    pub fn in_range(&self) -> bool {
        [self.health, self.hunger, self.thirst, self.stamina]
            .iter()
            .all(|v| (0.0..=MAX_STAT).contains(v))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub inventory: Inventory,
    pub vitals: Vitals,
    /// Sprint key held
    pub sprinting: bool,
}

impl Player {
    /// Fresh player holding the starting tools and the preset resources.
    pub fn with_kit(catalog: &Catalog, kit: StartingKit) -> Result<Self> {
        let mut player = Self::default();
        for tool in StartingKit::TOOLS {
            player.inventory.add(catalog, tool, 1)?;
        }
        for (kind, count) in kit.resources() {
            player.inventory.add(catalog, *kind, *count)?;
        }
        Ok(player)
    }
}
