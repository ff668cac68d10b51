//! Systems - logic that operates on components

mod cooking;
mod crafting;
mod interaction;
mod needs;
mod wandering;

pub use cooking::*;
pub use crafting::*;
pub use interaction::*;
pub use needs::*;
pub use wandering::*;
