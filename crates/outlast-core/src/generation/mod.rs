//! Generation - procedural creation of the world

mod world;

pub use world::*;
