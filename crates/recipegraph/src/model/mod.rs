//! Entity model: the record shapes for items, recipes, categories and icons.
//!
//! These are plain data. The on-disk shapes live next to the code that reads
//! them ([`crate::catalog`] for the game data, [`crate::session`] for saved
//! working sets) and convert into these types.

mod display;
mod item;
mod recipe;

pub use display::{Category, Icon};
pub use item::Item;
pub use recipe::{Quantities, Recipe, DEFAULT_TIME};
