//! Crafting - recipe checks and the all-or-nothing craft transaction.

use crate::error::{GameError, Result, Shortfall};
use crate::inventory::Inventory;
use crate::items::{Catalog, ItemKind, Recipe};

/// Every ingredient of `recipe` the inventory is short on. Empty when the
/// recipe is affordable.
pub fn shortfall(recipe: &Recipe, inventory: &Inventory) -> Vec<Shortfall> {
    recipe
        .iter()
        .filter_map(|(item, required)| {
            let available = inventory.count(*item);
            (available < *required).then_some(Shortfall {
                item: *item,
                required: *required,
                available,
            })
        })
        .collect()
}

/// Craft one unit of `kind`.
///
/// Every ingredient is checked before any is taken, so a failed craft leaves
/// the inventory untouched. On success the output lands on the quick bar if
/// a slot is free.
pub fn try_craft(catalog: &Catalog, inventory: &mut Inventory, kind: ItemKind) -> Result<()> {
    let recipe = catalog.recipe(kind)?;
    let missing = shortfall(recipe, inventory);
    if !missing.is_empty() {
        return Err(GameError::InsufficientResources {
            item: kind,
            missing,
        });
    }

    for (item, required) in recipe {
        inventory.remove(*item, *required)?;
    }
    inventory.add(catalog, kind, 1)?;
    if let Err(e) = inventory.move_to_quick_bar(kind) {
        log::debug!("crafted {kind} stays off the quick bar: {e}");
    }

    log::info!("crafted {kind}");
    Ok(())
}

/// Kinds whose recipe the inventory can currently pay for, in catalog order.
pub fn craftable(catalog: &Catalog, inventory: &Inventory) -> Vec<ItemKind> {
    catalog
        .recipes()
        .filter(|(_, recipe)| shortfall(recipe, inventory).is_empty())
        .map(|(kind, _)| kind)
        .collect()
}
