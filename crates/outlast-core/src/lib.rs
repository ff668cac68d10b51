//! Outlast Core - Survival Game Economy Engine
//!
//! The rules of a single-player survival game with no renderer attached:
//! gathering from world objects, an inventory with a quick bar, survival
//! needs, crafting, campfire cooking and wandering animals.
//!
//! # Architecture
//!
//! World objects live in an ECS via `hecs`:
//! - **Entities**: trees, rocks, animals, containers, campfires, buildings
//! - **Components**: Pure data attached to entities (Position, WorldObject, Loot, etc.)
//! - **Systems**: Logic that queries and updates components
//!
//! The player, the cooking queue and the item catalog sit beside the world
//! in [`engine::GameState`], which the game loop steps once per frame.
//!
//! # Example
//!
//! ```rust,no_run
//! use outlast_core::prelude::*;
//!
//! let mut game = GameState::new(BalanceConfig::default(), 42)?;
//! game.generate(&WorldConfig::default(), &FlatTerrain::default());
//!
//! loop {
//!     let report = game.update(1.0 / 60.0)?; // 60 FPS
//!     if report.died {
//!         // move the player back to a spawn point
//!     }
//! }
//! # Ok::<(), outlast_core::error::GameError>(())
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod inventory;
pub mod items;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::{BalanceConfig, StartingKit};
    pub use crate::engine::{GameState, TickReport};
    pub use crate::error::{GameError, Result};
    pub use crate::generation::{FlatTerrain, Terrain, WorldConfig};
    pub use crate::inventory::Inventory;
    pub use crate::items::{Catalog, ItemKind};
    pub use crate::systems::{InteractionOutcome, NoEffectReason};
}
