use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::classify::{Category, classify};

/// Lowest quality a non-legendary item can reach.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach.
pub const MAX_QUALITY: i32 = 50;

/// A single inventory record.
///
/// `name` decides the item's rules (see [`classify`]); `sell_in` and `quality`
/// are the two counters the day advance mutates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left before the sell-by date. Negative once it has passed.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    /// Build an item as-is.
    ///
    /// No bounds are checked: an out-of-range quality is only pulled back by
    /// the clamp applied after the next day's adjustment.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Build an item, rejecting a starting quality outside
    /// `MIN_QUALITY..=MAX_QUALITY`.
    ///
    /// Legendary items are exempt from the bound and accept any quality.
    pub fn checked(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        if item.category() != Category::Legendary
            && !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality)
        {
            return Err(DomainError::validation(format!(
                "quality of {:?} must be within {MIN_QUALITY}..={MAX_QUALITY} (got {})",
                item.name, item.quality
            )));
        }
        Ok(item)
    }

    /// Category derived from the name (recomputed on every call).
    pub fn category(&self) -> Category {
        classify(&self.name).category()
    }

    pub fn is_conjured(&self) -> bool {
        classify(&self.name).conjured
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
