//! Balance configuration - every tunable rate and duration in one place.
//!
//! Defaults are the reference balance. Any section (or any field) may be
//! omitted from a JSON document; missing values fall back to the defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::items::{ItemKind, Recipe};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub needs: NeedsRates,
    pub cooking: CookingConfig,
    pub interaction: InteractionConfig,
    pub wander: WanderConfig,
    pub consumption: ConsumptionConfig,
    pub starting_kit: StartingKit,
    /// Recipe replacements applied on top of the standard catalog.
    pub recipes: BTreeMap<ItemKind, Recipe>,
}

impl BalanceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Survival stat rates. Hunger, thirst, damage and healing are per minute;
/// stamina is per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedsRates {
    pub hunger_per_min: f32,
    pub thirst_per_min: f32,
    pub damage_per_min: f32,
    pub heal_per_min: f32,
    /// Hunger and thirst must both be above this for health to regenerate.
    pub heal_threshold: f32,
    pub stamina_regen_per_sec: f32,
    pub stamina_drain_per_sec: f32,
    /// Sprinting needs stamina strictly above this.
    pub sprint_min_stamina: f32,
    pub sprint_multiplier: f32,
    pub respawn_health: f32,
    pub respawn_hunger: f32,
    pub respawn_thirst: f32,
}

impl Default for NeedsRates {
    fn default() -> Self {
        Self {
            hunger_per_min: 3.0,
            thirst_per_min: 4.5,
            damage_per_min: 5.0,
            heal_per_min: 2.0,
            heal_threshold: 50.0,
            stamina_regen_per_sec: 5.0,
            stamina_drain_per_sec: 10.0,
            sprint_min_stamina: 10.0,
            sprint_multiplier: 1.5,
            respawn_health: 100.0,
            respawn_hunger: 70.0,
            respawn_thirst: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookingConfig {
    /// Seconds to turn raw meat into cooked meat.
    pub cook_seconds: f64,
    /// Seconds to turn water into purified water.
    pub boil_seconds: f64,
    /// The player is near a campfire within `size + proximity_bonus`.
    pub proximity_bonus: f32,
}

impl Default for CookingConfig {
    fn default() -> Self {
        Self {
            cook_seconds: 30.0,
            boil_seconds: 30.0,
            proximity_bonus: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Objects are reachable within `size + range_bonus`.
    pub range_bonus: f32,
    /// Player footprint used for movement blocking.
    pub player_radius: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            range_bonus: 2.0,
            player_radius: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderConfig {
    /// Walking speed range in units per second.
    pub min_speed: f32,
    pub max_speed: f32,
    /// How long a heading is held, in seconds.
    pub min_hold_secs: f32,
    pub max_hold_secs: f32,
    /// Two objects collide within `(size_a + size_b) * collision_factor`.
    pub collision_factor: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            min_speed: 0.6,
            max_speed: 3.0,
            min_hold_secs: 3.0,
            max_hold_secs: 10.0,
            collision_factor: 0.8,
        }
    }
}

/// Stat changes from consuming one unit of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Restoration {
    pub hunger: f32,
    pub thirst: f32,
    pub health: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionConfig {
    pub effects: BTreeMap<ItemKind, Restoration>,
}

impl ConsumptionConfig {
    pub fn effect(&self, kind: ItemKind) -> Option<Restoration> {
        self.effects.get(&kind).copied()
    }
}

impl Default for ConsumptionConfig {
    fn default() -> Self {
        let effects = [
            (
                ItemKind::CookedMeat,
                Restoration {
                    hunger: 30.0,
                    ..Default::default()
                },
            ),
            (
                ItemKind::RawMeat,
                Restoration {
                    hunger: 10.0,
                    health: -5.0,
                    ..Default::default()
                },
            ),
            (
                ItemKind::PurifiedWater,
                Restoration {
                    thirst: 30.0,
                    ..Default::default()
                },
            ),
            (
                ItemKind::Water,
                Restoration {
                    thirst: 15.0,
                    health: -3.0,
                    ..Default::default()
                },
            ),
        ];
        Self {
            effects: effects.into_iter().collect(),
        }
    }
}

/// Resource preset handed to a new player on top of the starting tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingKit {
    #[default]
    None,
    Some,
    Plenty,
}

impl StartingKit {
    /// Tools every player starts with, in quick-bar order.
    pub const TOOLS: [ItemKind; 4] = [
        ItemKind::Axe,
        ItemKind::Pickaxe,
        ItemKind::Knife,
        ItemKind::Canteen,
    ];

    pub fn resources(&self) -> &'static [(ItemKind, u32)] {
        match self {
            Self::None => &[(ItemKind::Wood, 5), (ItemKind::Stone, 3)],
            Self::Some => &[
                (ItemKind::Wood, 10),
                (ItemKind::Stone, 10),
                (ItemKind::Water, 5),
            ],
            Self::Plenty => &[
                (ItemKind::Wood, 25),
                (ItemKind::Stone, 25),
                (ItemKind::Water, 10),
                (ItemKind::RawMeat, 5),
                (ItemKind::Rope, 3),
            ],
        }
    }
}
