//! Per-category quality rules.
//!
//! Every rule takes the item's `sell_in` **after** that day's decrement; the
//! backstage brackets and the past-due doubling both read the new value.

use crate::classify::Category;
use crate::item::{MAX_QUALITY, MIN_QUALITY};

/// Apply `delta` to `quality` and clamp into `MIN_QUALITY..=MAX_QUALITY`.
///
/// The delta is doubled when the item is conjured and losing quality, and
/// doubled again when `sell_in` (already decremented) is negative.
pub fn adjust_quality(quality: i32, sell_in: i32, conjured: bool, delta: i32) -> i32 {
    let mut effective = delta;
    if conjured && delta < 0 {
        effective *= 2;
    }
    if sell_in < 0 {
        effective *= 2;
    }
    quality
        .saturating_add(effective)
        .clamp(MIN_QUALITY, MAX_QUALITY)
}

impl Category {
    /// Quality after one day, given the already-decremented `sell_in`.
    ///
    /// Legendary items keep their quality; the day advance skips them before
    /// this is ever reached.
    pub fn next_quality(self, quality: i32, sell_in: i32, conjured: bool) -> i32 {
        match self {
            Category::Legendary => quality,
            Category::AgedBrie => adjust_quality(quality, sell_in, conjured, 1),
            Category::BackstagePass => match sell_in {
                // Concert is today or over.
                i32::MIN..=0 => MIN_QUALITY,
                1..=4 => adjust_quality(quality, sell_in, conjured, 3),
                5..=9 => adjust_quality(quality, sell_in, conjured, 2),
                _ => adjust_quality(quality, sell_in, conjured, 1),
            },
            Category::Generic => adjust_quality(quality, sell_in, conjured, -1),
        }
    }
}
