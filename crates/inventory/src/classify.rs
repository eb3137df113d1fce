//! Name classification: conjured prefix + category lookup.

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Prefix marking an item as conjured.
pub const CONJURED_PREFIX: &str = "Conjured ";

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Item name split into its rule-relevant parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedName<'a> {
    /// Name with any conjured prefix removed; used for category lookup.
    pub base_name: &'a str,
    pub conjured: bool,
}

impl ValueObject for ClassifiedName<'_> {}

impl ClassifiedName<'_> {
    pub fn category(&self) -> Category {
        Category::from_base_name(self.base_name)
    }
}

/// Split `name` into base name and conjured flag.
///
/// Matching is exact and case-sensitive. Every string classifies.
pub fn classify(name: &str) -> ClassifiedName<'_> {
    match name.strip_prefix(CONJURED_PREFIX) {
        Some(base_name) => ClassifiedName {
            base_name,
            conjured: true,
        },
        None => ClassifiedName {
            base_name: name,
            conjured: false,
        },
    }
}

/// Rule family an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Generic,
    AgedBrie,
    /// Never sold, never degrades: skipped by the day advance.
    Legendary,
    BackstagePass,
}

impl ValueObject for Category {}

impl Category {
    pub fn from_base_name(base_name: &str) -> Self {
        match base_name {
            AGED_BRIE => Category::AgedBrie,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASSES => Category::BackstagePass,
            _ => Category::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Generic => "generic",
            Category::AgedBrie => "aged_brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_name_is_not_conjured() {
        let classified = classify("Aged Brie");
        assert_eq!(classified.base_name, "Aged Brie");
        assert!(!classified.conjured);
        assert_eq!(classified.category(), Category::AgedBrie);
    }

    #[test]
    fn conjured_prefix_is_stripped() {
        let classified = classify("Conjured Mana Cake");
        assert_eq!(
            classified,
            ClassifiedName {
                base_name: "Mana Cake",
                conjured: true,
            }
        );
        assert_eq!(classified.category(), Category::Generic);
    }

    #[test]
    fn conjured_legendary_is_still_legendary() {
        let classified = classify("Conjured Sulfuras, Hand of Ragnaros");
        assert!(classified.conjured);
        assert_eq!(classified.category(), Category::Legendary);
    }

    #[test]
    fn prefix_requires_trailing_space() {
        let classified = classify("ConjuredFoo");
        assert!(!classified.conjured);
        assert_eq!(classified.base_name, "ConjuredFoo");

        // Bare prefix leaves an empty base name, which is generic.
        let classified = classify("Conjured ");
        assert!(classified.conjured);
        assert_eq!(classified.base_name, "");
        assert_eq!(classified.category(), Category::Generic);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Category::from_base_name("aged brie"), Category::Generic);
        assert_eq!(
            Category::from_base_name("Sulfuras, hand of Ragnaros"),
            Category::Generic
        );
        assert!(!classify("conjured foo").conjured);
    }

    #[test]
    fn recognized_labels_map_to_categories() {
        assert_eq!(Category::from_base_name(AGED_BRIE), Category::AgedBrie);
        assert_eq!(Category::from_base_name(SULFURAS), Category::Legendary);
        assert_eq!(
            Category::from_base_name(BACKSTAGE_PASSES),
            Category::BackstagePass
        );
        assert_eq!(Category::from_base_name("foo"), Category::Generic);
    }

    #[test]
    fn category_displays_as_snake_case() {
        assert_eq!(Category::BackstagePass.to_string(), "backstage_pass");
        assert_eq!(Category::Legendary.as_str(), "legendary");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: prefixing any name with the conjured marker sets the flag
        /// and leaves the original name as the base name.
        #[test]
        fn conjured_prefix_round_trips(name in ".*") {
            let conjured = format!("{CONJURED_PREFIX}{name}");
            let classified = classify(&conjured);
            prop_assert!(classified.conjured);
            prop_assert_eq!(classified.base_name, name.as_str());
        }
    }
}
