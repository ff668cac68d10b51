//! World object components: kinds, the behavior table, and per-object state.

use hecs::Entity;
use serde::{Deserialize, Serialize};

use super::common::Vec3;
use crate::items::ItemKind;

/// Closed set of object kinds found in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Tree,
    Rock,
    Grass,
    Scrap,
    Nails,
    Water,
    Animal,
    Barrel,
    Container,
    Campfire,
    CraftingTable,
    Forge,
    Building,
}

/// Quantity range for one item, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootRange {
    pub item: ItemKind,
    pub min: u32,
    pub max: u32,
}

impl LootRange {
    pub const fn new(item: ItemKind, min: u32, max: u32) -> Self {
        Self { item, min, max }
    }

    /// Draw a quantity. Ranges given upside down are read as `max..=min`.
    pub fn roll(&self, rng: &mut impl rand::Rng) -> u32 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        rng.gen_range(lo..=hi)
    }
}

/// What a resource node gives up when depleted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceYield {
    pub hits: u32,
    pub tool: Option<ItemKind>,
    pub output: LootRange,
}

/// How the player can act on a kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionRole {
    Resource(ResourceYield),
    Water,
    Animal {
        health: i32,
        loot: &'static [LootRange],
    },
    Container {
        loot: &'static [LootRange],
    },
    Campfire,
    /// Collision only. Crafting stations and buildings.
    Structure,
}

/// Static per-kind data looked up at spawn and interaction time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectBehavior {
    pub size: f32,
    pub blocks_movement: bool,
    pub interactable: bool,
    pub role: InteractionRole,
}

const DEER_LOOT: &[LootRange] = &[
    LootRange::new(ItemKind::RawMeat, 2, 4),
    LootRange::new(ItemKind::Leather, 1, 3),
    LootRange::new(ItemKind::Fat, 1, 2),
];

const BARREL_LOOT: &[LootRange] = &[
    LootRange::new(ItemKind::ScrapMetal, 1, 3),
    LootRange::new(ItemKind::Nails, 2, 6),
    LootRange::new(ItemKind::Canteen, 0, 1),
];

const CONTAINER_LOOT: &[LootRange] = &[
    LootRange::new(ItemKind::RawMeat, 0, 2),
    LootRange::new(ItemKind::Fat, 0, 3),
    LootRange::new(ItemKind::Nails, 3, 8),
    LootRange::new(ItemKind::Wood, 0, 5),
];

impl ObjectKind {
    pub fn all() -> &'static [ObjectKind] {
        &[
            Self::Tree,
            Self::Rock,
            Self::Grass,
            Self::Scrap,
            Self::Nails,
            Self::Water,
            Self::Animal,
            Self::Barrel,
            Self::Container,
            Self::Campfire,
            Self::CraftingTable,
            Self::Forge,
            Self::Building,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Rock => "rock",
            Self::Grass => "grass",
            Self::Scrap => "scrap",
            Self::Nails => "nails",
            Self::Water => "water",
            Self::Animal => "animal",
            Self::Barrel => "barrel",
            Self::Container => "container",
            Self::Campfire => "campfire",
            Self::CraftingTable => "crafting_table",
            Self::Forge => "forge",
            Self::Building => "building",
        }
    }

    pub fn behavior(&self) -> ObjectBehavior {
        let (size, blocks_movement, interactable, role) = match self {
            Self::Tree => (2.0, true, true, resource(5, Some(ItemKind::Axe), ItemKind::Wood, 2, 5)),
            Self::Rock => (1.0, true, true, resource(4, Some(ItemKind::Pickaxe), ItemKind::Stone, 1, 4)),
            Self::Grass => (0.5, false, true, resource(1, None, ItemKind::Grass, 1, 3)),
            Self::Scrap => (0.5, false, true, resource(2, None, ItemKind::ScrapMetal, 1, 3)),
            Self::Nails => (0.2, false, true, resource(1, None, ItemKind::Nails, 1, 3)),
            Self::Water => (5.0, false, true, InteractionRole::Water),
            Self::Animal => (
                1.0,
                true,
                true,
                InteractionRole::Animal {
                    health: 50,
                    loot: DEER_LOOT,
                },
            ),
            Self::Barrel => (1.0, true, true, InteractionRole::Container { loot: BARREL_LOOT }),
            Self::Container => (0.8, false, true, InteractionRole::Container { loot: CONTAINER_LOOT }),
            Self::Campfire => (1.0, false, true, InteractionRole::Campfire),
            Self::CraftingTable => (1.0, true, false, InteractionRole::Structure),
            Self::Forge => (1.5, true, false, InteractionRole::Structure),
            Self::Building => (5.0, true, false, InteractionRole::Structure),
        };
        ObjectBehavior {
            size,
            blocks_movement,
            interactable,
            role,
        }
    }

    /// Kind spawned when a placeable item is put down.
    pub fn from_placeable(item: ItemKind) -> Option<ObjectKind> {
        match item {
            ItemKind::Campfire => Some(Self::Campfire),
            ItemKind::CraftingTable => Some(Self::CraftingTable),
            ItemKind::Forge => Some(Self::Forge),
            _ => None,
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn resource(hits: u32, tool: Option<ItemKind>, item: ItemKind, min: u32, max: u32) -> InteractionRole {
    InteractionRole::Resource(ResourceYield {
        hits,
        tool,
        output: LootRange::new(item, min, max),
    })
}

/// Damage dealt to an animal by one hit with `weapon`. `None` for anything
/// that is not a weapon.
pub fn weapon_damage(weapon: ItemKind) -> Option<i32> {
    match weapon {
        ItemKind::Knife => Some(15),
        ItemKind::Axe => Some(25),
        ItemKind::Pickaxe => Some(20),
        _ => None,
    }
}

/// Identity and shape of a world object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldObject {
    pub kind: ObjectKind,
    /// Collision and interaction radius
    pub size: f32,
    pub blocks_movement: bool,
    pub interactable: bool,
}

impl WorldObject {
    pub fn new(kind: ObjectKind) -> Self {
        let behavior = kind.behavior();
        Self {
            kind,
            size: behavior.size,
            blocks_movement: behavior.blocks_movement,
            interactable: behavior.interactable,
        }
    }
}

/// Remaining hit points. Resource nodes lose one per hit, animals lose
/// weapon damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durability {
    pub remaining: i32,
}

impl Durability {
    pub fn new(remaining: i32) -> Self {
        Self { remaining }
    }

    pub fn is_depleted(&self) -> bool {
        self.remaining <= 0
    }
}

/// Loot table of a searchable container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loot {
    pub lines: Vec<LootRange>,
    pub searched: bool,
}

impl Loot {
    pub fn new(lines: impl IntoIterator<Item = LootRange>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            searched: false,
        }
    }
}

/// Random-walk state for animals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wander {
    /// Unit heading on the ground plane
    pub direction: Vec3,
    pub speed: f32,
    /// Sim time of the last heading change
    pub changed_at: f64,
    /// Seconds to hold the current heading
    pub hold_for: f64,
}

impl Wander {
    /// Standing still, due for a heading on the first tick.
    pub fn idle() -> Self {
        Self {
            direction: Vec3::ZERO,
            speed: 0.0,
            changed_at: 0.0,
            hold_for: 0.0,
        }
    }

    pub fn is_due(&self, now: f64) -> bool {
        now - self.changed_at >= self.hold_for
    }
}

/// Structure owning the containers generated inside it
#[derive(Debug, Clone, Default)]
pub struct Building {
    pub containers: Vec<Entity>,
}
