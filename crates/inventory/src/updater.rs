//! Day advance over the whole working set.

use tracing::{debug, trace};

use gildedrose_core::{DomainError, DomainResult};

use crate::classify::{Category, classify};
use crate::item::{Item, MAX_QUALITY, MIN_QUALITY};

/// Ordered collection of items owned by the updater.
///
/// Items are supplied up front; the updater never adds or removes any, it only
/// rewrites `sell_in` and `quality` in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance every item by one day, in collection order.
    pub fn advance_one_day(&mut self) {
        debug!(items = self.items.len(), "advancing inventory one day");
        for item in &mut self.items {
            advance_item(item);
        }
    }

    /// Verify every non-legendary item holds a quality within bounds.
    ///
    /// Only fails when the caller supplied (or edited in) an out-of-range value
    /// and no day has pulled it back yet.
    pub fn check_bounds(&self) -> DomainResult<()> {
        for (index, item) in self.items.iter().enumerate() {
            if item.category() == Category::Legendary {
                continue;
            }
            if !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality) {
                return Err(DomainError::invariant(format!(
                    "item {index} ({}) has quality {} outside {MIN_QUALITY}..={MAX_QUALITY}",
                    item.name, item.quality
                )));
            }
        }
        Ok(())
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

fn advance_item(item: &mut Item) {
    let classified = classify(&item.name);
    let category = classified.category();

    if category == Category::Legendary {
        trace!(name = %item.name, "legendary item skipped");
        return;
    }

    // Must happen before the rule runs: it reads the new value.
    item.sell_in = item.sell_in.saturating_sub(1);
    item.quality = category.next_quality(item.quality, item.sell_in, classified.conjured);

    trace!(
        name = %item.name,
        category = %category,
        conjured = classified.conjured,
        sell_in = item.sell_in,
        quality = item.quality,
        "item advanced"
    );
}
