//! Needs system - decays hunger and thirst, drives health, handles sprint
//! stamina and eating/drinking.

use crate::components::{Player, Vitals, MAX_STAT};
use crate::config::{ConsumptionConfig, NeedsRates, Restoration};
use crate::error::Result;
use crate::items::ItemKind;

/// Result of one needs tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedsTick {
    /// Health hit zero this tick; vitals were already reset.
    pub died: bool,
    /// Movement speed factor, above 1.0 only while actually sprinting.
    pub speed_multiplier: f32,
}

/// Advance the player's needs by `dt` seconds. Negative `dt` counts as zero.
pub fn needs_system(player: &mut Player, rates: &NeedsRates, dt: f32) -> NeedsTick {
    tick_vitals(&mut player.vitals, rates, dt, player.sprinting)
}

pub fn tick_vitals(vitals: &mut Vitals, rates: &NeedsRates, dt: f32, sprinting: bool) -> NeedsTick {
    let dt = dt.max(0.0);
    let minutes = dt / 60.0;

    vitals.thirst -= rates.thirst_per_min * minutes;
    vitals.hunger -= rates.hunger_per_min * minutes;
    vitals.thirst = vitals.thirst.clamp(0.0, MAX_STAT);
    vitals.hunger = vitals.hunger.clamp(0.0, MAX_STAT);

    if vitals.thirst <= 0.0 || vitals.hunger <= 0.0 {
        vitals.health -= rates.damage_per_min * minutes;
    } else if vitals.thirst > rates.heal_threshold
        && vitals.hunger > rates.heal_threshold
        && vitals.health < MAX_STAT
    {
        vitals.health += rates.heal_per_min * minutes;
    }
    vitals.health = vitals.health.clamp(0.0, MAX_STAT);

    let died = vitals.health <= 0.0;
    if died {
        log::info!(
            "player died (hunger {:.1}, thirst {:.1}), respawning",
            vitals.hunger,
            vitals.thirst
        );
        vitals.health = rates.respawn_health;
        vitals.hunger = rates.respawn_hunger;
        vitals.thirst = rates.respawn_thirst;
    }

    let speed_multiplier = if sprinting && vitals.stamina > rates.sprint_min_stamina {
        vitals.stamina -= rates.stamina_drain_per_sec * dt;
        rates.sprint_multiplier
    } else {
        vitals.stamina += rates.stamina_regen_per_sec * dt;
        1.0
    };

    vitals.clamp();
    NeedsTick {
        died,
        speed_multiplier,
    }
}

/// Eat or drink one unit of `kind`. Items without a configured effect are
/// left in the inventory and yield `None`.
pub fn consume(
    player: &mut Player,
    consumption: &ConsumptionConfig,
    kind: ItemKind,
) -> Result<Option<Restoration>> {
    let Some(effect) = consumption.effect(kind) else {
        return Ok(None);
    };
    player.inventory.remove(kind, 1)?;

    let vitals = &mut player.vitals;
    vitals.hunger += effect.hunger;
    vitals.thirst += effect.thirst;
    vitals.health += effect.health;
    vitals.clamp();

    log::debug!("consumed {kind}");
    Ok(Some(effect))
}
