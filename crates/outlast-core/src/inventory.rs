//! Player inventory - item counts plus the quick bar that decides what is
//! equipped.
//!
//! Quick slots are weak references: they hold an [`ItemKind`] key, never an
//! owned item. Every non-empty slot names a kind with a positive count, and
//! [`Inventory::remove`] clears any slot whose kind runs out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::items::{Catalog, ItemKind};

/// Number of quick-access slots.
pub const QUICK_BAR_SLOTS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    counts: BTreeMap<ItemKind, u32>,
    quick_bar: [Option<ItemKind>; QUICK_BAR_SLOTS],
    selected: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` units. The first unit of a previously absent kind takes
    /// the first free quick slot, if any.
    pub fn add(&mut self, catalog: &Catalog, kind: ItemKind, count: u32) -> Result<()> {
        catalog.get(kind)?;
        if count == 0 {
            return Ok(());
        }

        let entry = self.counts.entry(kind).or_insert(0);
        let newly_held = *entry == 0;
        *entry = entry.saturating_add(count);

        if newly_held && !self.on_quick_bar(kind) {
            if let Some(slot) = self.first_free_slot() {
                self.quick_bar[slot] = Some(kind);
            }
        }
        Ok(())
    }

    /// Remove `count` units. Removing the last unit drops the entry and
    /// clears every quick slot that referenced the kind.
    pub fn remove(&mut self, kind: ItemKind, count: u32) -> Result<()> {
        let available = self.count(kind);
        if available < count {
            return Err(GameError::InsufficientQuantity {
                kind,
                requested: count,
                available,
            });
        }
        if count == 0 {
            return Ok(());
        }

        let remaining = available - count;
        if remaining == 0 {
            self.counts.remove(&kind);
            for slot in self.quick_bar.iter_mut() {
                if *slot == Some(kind) {
                    *slot = None;
                }
            }
        } else {
            self.counts.insert(kind, remaining);
        }
        Ok(())
    }

    pub fn count(&self, kind: ItemKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn has(&self, kind: ItemKind, count: u32) -> bool {
        self.count(kind) >= count
    }

    /// Held kinds and counts, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        self.counts.iter().map(|(k, c)| (*k, *c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn quick_bar(&self) -> &[Option<ItemKind>] {
        &self.quick_bar
    }

    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    pub fn select_slot(&mut self, index: usize) -> Result<()> {
        if index >= QUICK_BAR_SLOTS {
            return Err(GameError::IndexOutOfRange {
                index,
                len: QUICK_BAR_SLOTS,
            });
        }
        self.selected = index;
        Ok(())
    }

    /// Move the selection by `delta`, wrapping in both directions.
    pub fn cycle_slot(&mut self, delta: i32) {
        let len = QUICK_BAR_SLOTS as i64;
        self.selected = (self.selected as i64 + delta as i64).rem_euclid(len) as usize;
    }

    /// Kind in the selected quick slot.
    pub fn equipped(&self) -> Option<ItemKind> {
        self.quick_bar[self.selected]
    }

    /// Put a held kind on the quick bar. No-op when it is already there or
    /// not held at all.
    pub fn move_to_quick_bar(&mut self, kind: ItemKind) -> Result<()> {
        if self.on_quick_bar(kind) || self.count(kind) == 0 {
            return Ok(());
        }
        let slot = self.first_free_slot().ok_or(GameError::QuickBarFull)?;
        self.quick_bar[slot] = Some(kind);
        Ok(())
    }

    /// Quick slot holding `kind`, if any.
    pub fn slot_of(&self, kind: ItemKind) -> Option<usize> {
        self.quick_bar.iter().position(|s| *s == Some(kind))
    }

    fn on_quick_bar(&self, kind: ItemKind) -> bool {
        self.slot_of(kind).is_some()
    }

    fn first_free_slot(&self) -> Option<usize> {
        self.quick_bar.iter().position(|s| s.is_none())
    }
}
