//! Item catalog - every item kind, its category and its crafting recipe.
//!
//! The standard catalog is a static table, defined once at startup and never
//! mutated afterwards. A catalog can also be built from a subset of kinds, in
//! which case items outside it are rejected with
//! [`GameError::UnknownItemKind`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Ingredient counts required to craft one unit of an item.
pub type Recipe = BTreeMap<ItemKind, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Wood,
    Stone,
    Grass,
    Rope,
    ScrapMetal,
    Nails,
    RawMeat,
    CookedMeat,
    Leather,
    Fat,
    Water,
    PurifiedWater,
    Axe,
    Pickaxe,
    Knife,
    Canteen,
    Campfire,
    CraftingTable,
    Forge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Tool,
    Material,
    Food,
    Placeable,
}

impl ItemKind {
    pub fn all() -> &'static [ItemKind] {
        &[
            Self::Wood,
            Self::Stone,
            Self::Grass,
            Self::Rope,
            Self::ScrapMetal,
            Self::Nails,
            Self::RawMeat,
            Self::CookedMeat,
            Self::Leather,
            Self::Fat,
            Self::Water,
            Self::PurifiedWater,
            Self::Axe,
            Self::Pickaxe,
            Self::Knife,
            Self::Canteen,
            Self::Campfire,
            Self::CraftingTable,
            Self::Forge,
        ]
    }

    /// Stable snake_case id, the same string serde uses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Stone => "stone",
            Self::Grass => "grass",
            Self::Rope => "rope",
            Self::ScrapMetal => "scrap_metal",
            Self::Nails => "nails",
            Self::RawMeat => "raw_meat",
            Self::CookedMeat => "cooked_meat",
            Self::Leather => "leather",
            Self::Fat => "fat",
            Self::Water => "water",
            Self::PurifiedWater => "purified_water",
            Self::Axe => "axe",
            Self::Pickaxe => "pickaxe",
            Self::Knife => "knife",
            Self::Canteen => "canteen",
            Self::Campfire => "campfire",
            Self::CraftingTable => "crafting_table",
            Self::Forge => "forge",
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self {
            Self::Axe | Self::Pickaxe | Self::Knife | Self::Canteen => ItemCategory::Tool,
            Self::RawMeat | Self::CookedMeat | Self::Water | Self::PurifiedWater => {
                ItemCategory::Food
            }
            Self::Campfire | Self::CraftingTable | Self::Forge => ItemCategory::Placeable,
            _ => ItemCategory::Material,
        }
    }

    /// Recipe in the standard catalog. `None` for gathered or looted items.
    pub fn standard_recipe(&self) -> Option<Recipe> {
        let pairs: &[(ItemKind, u32)] = match self {
            Self::Axe => &[(Self::Wood, 3), (Self::Stone, 2)],
            Self::Pickaxe => &[(Self::Wood, 2), (Self::Stone, 3)],
            Self::Campfire => &[(Self::Wood, 10), (Self::Stone, 5)],
            Self::CraftingTable => &[(Self::Wood, 15)],
            Self::Forge => &[(Self::Stone, 20), (Self::Wood, 5)],
            Self::Rope => &[(Self::Grass, 5)],
            _ => return None,
        };
        Some(pairs.iter().copied().collect())
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GameError::UnknownItemKind(s.to_string()))
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub kind: ItemKind,
    pub category: ItemCategory,
    pub recipe: Option<Recipe>,
}

impl ItemDefinition {
    pub fn standard(kind: ItemKind) -> Self {
        Self {
            kind,
            category: kind.category(),
            recipe: kind.standard_recipe(),
        }
    }
}

/// Registry of the item kinds that exist in a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    definitions: BTreeMap<ItemKind, ItemDefinition>,
}

impl Catalog {
    /// Every item kind with its standard recipe.
    pub fn standard() -> Self {
        Self::from_definitions(ItemKind::all().iter().map(|k| ItemDefinition::standard(*k)))
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            definitions: definitions.into_iter().map(|d| (d.kind, d)).collect(),
        }
    }

    /// Replace recipes for kinds already in the catalog. Overrides for kinds
    /// outside the catalog are rejected.
    pub fn with_recipe_overrides(mut self, overrides: &BTreeMap<ItemKind, Recipe>) -> Result<Self> {
        for (kind, recipe) in overrides {
            let def = self
                .definitions
                .get_mut(kind)
                .ok_or_else(|| GameError::UnknownItemKind(kind.to_string()))?;
            def.recipe = Some(recipe.clone());
        }
        Ok(self)
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        self.definitions.contains_key(&kind)
    }

    pub fn get(&self, kind: ItemKind) -> Result<&ItemDefinition> {
        self.definitions
            .get(&kind)
            .ok_or_else(|| GameError::UnknownItemKind(kind.to_string()))
    }

    /// Recipe for `kind`, failing with `UnknownRecipe` for uncraftable items.
    pub fn recipe(&self, kind: ItemKind) -> Result<&Recipe> {
        self.definitions
            .get(&kind)
            .and_then(|d| d.recipe.as_ref())
            .ok_or(GameError::UnknownRecipe(kind))
    }

    /// All craftable kinds with their recipes, in catalog order.
    pub fn recipes(&self) -> impl Iterator<Item = (ItemKind, &Recipe)> {
        self.definitions
            .values()
            .filter_map(|d| d.recipe.as_ref().map(|r| (d.kind, r)))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
