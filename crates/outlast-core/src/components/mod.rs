//! Component definitions for the ECS world.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod common;
mod objects;
mod player;

pub use common::*;
pub use objects::*;
pub use player::*;
