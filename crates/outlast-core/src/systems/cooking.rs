//! Cooking - deadline-polled cook and boil jobs at campfires

use hecs::Entity;

use crate::config::CookingConfig;
use crate::error::{GameError, Result};
use crate::inventory::Inventory;
use crate::items::{Catalog, ItemKind};

/// What a raw item turns into over a fire.
pub fn cook_output(item: ItemKind) -> Option<ItemKind> {
    match item {
        ItemKind::RawMeat => Some(ItemKind::CookedMeat),
        ItemKind::Water => Some(ItemKind::PurifiedWater),
        _ => None,
    }
}

/// One item on a campfire
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookJob {
    pub item: ItemKind,
    pub campfire: Entity,
    /// Sim time at which the job resolves
    pub deadline: f64,
}

impl CookJob {
    pub fn is_complete(&self, now: f64) -> bool {
        now >= self.deadline
    }

    pub fn output(&self) -> Option<ItemKind> {
        cook_output(self.item)
    }
}

/// Pending cook jobs. Jobs for the same item and campfire stack as
/// independent entries.
#[derive(Debug, Clone)]
pub struct CookingScheduler {
    jobs: Vec<CookJob>,
    cook_seconds: f64,
    boil_seconds: f64,
}

impl CookingScheduler {
    pub fn new(config: &CookingConfig) -> Self {
        Self {
            jobs: Vec::new(),
            cook_seconds: config.cook_seconds,
            boil_seconds: config.boil_seconds,
        }
    }

    pub fn duration(&self, item: ItemKind) -> Option<f64> {
        match item {
            ItemKind::RawMeat => Some(self.cook_seconds),
            ItemKind::Water => Some(self.boil_seconds),
            _ => None,
        }
    }

    /// Put one unit of `item` on `campfire`, due at `now + duration(item)`.
    pub fn enqueue(&mut self, item: ItemKind, campfire: Entity, now: f64) -> Result<()> {
        let duration = self.duration(item).ok_or(GameError::NotCookable(item))?;
        let deadline = now + duration;
        self.jobs.push(CookJob {
            item,
            campfire,
            deadline,
        });
        log::debug!("{item} on the fire, done at t={deadline:.1}");
        Ok(())
    }

    /// Remove every job due at `now` and return their outputs, each exactly
    /// once.
    pub fn tick(&mut self, now: f64) -> Vec<ItemKind> {
        let mut done = Vec::new();
        self.jobs.retain(|job| {
            if job.is_complete(now) {
                done.extend(job.output());
                false
            } else {
                true
            }
        });
        done
    }

    pub fn pending(&self) -> &[CookJob] {
        &self.jobs
    }

    pub fn pending_at(&self, campfire: Entity) -> impl Iterator<Item = &CookJob> {
        self.jobs.iter().filter(move |j| j.campfire == campfire)
    }

    pub fn is_idle(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Resolve due jobs into the player's inventory. Returns what was credited.
pub fn cooking_system(
    scheduler: &mut CookingScheduler,
    inventory: &mut Inventory,
    catalog: &Catalog,
    now: f64,
) -> Result<Vec<ItemKind>> {
    let done = scheduler.tick(now);
    for output in &done {
        inventory.add(catalog, *output, 1)?;
        log::info!("{output} is ready");
    }
    Ok(done)
}
