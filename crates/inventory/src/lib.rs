//! Inventory domain module (Gilded Rose day advance).
//!
//! This crate contains the quality/sell-in rules for the inn's inventory,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod classify;
pub mod item;
pub mod rules;
pub mod updater;

pub use classify::{Category, ClassifiedName, classify};
pub use item::{Item, MAX_QUALITY, MIN_QUALITY};
pub use rules::adjust_quality;
pub use updater::Inventory;
