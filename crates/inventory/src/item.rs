use serde::{Deserialize, Serialize};

use gilded_rose_core::{DomainError, DomainResult, ValueObject};

/// Name that identifies the aged brie category.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name that identifies the backstage pass category.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name that identifies the legendary category.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Closed set of item categories.
///
/// Resolved once from the item name at construction, so the daily update
/// dispatches on the variant instead of comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Anything without a special name. Degrades over time.
    Ordinary,
    /// Improves over time, twice as fast once expired.
    AgedBrie,
    /// Improves faster as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Never sold, never degrades.
    Legendary,
}

impl ItemCategory {
    /// Category for an item name (exact match, case-sensitive).
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => ItemCategory::AgedBrie,
            BACKSTAGE_PASS => ItemCategory::BackstagePass,
            SULFURAS => ItemCategory::Legendary,
            _ => ItemCategory::Ordinary,
        }
    }

    /// Canonical item name for the category (`None` for ordinary items).
    pub fn as_name(self) -> Option<&'static str> {
        match self {
            ItemCategory::Ordinary => None,
            ItemCategory::AgedBrie => Some(AGED_BRIE),
            ItemCategory::BackstagePass => Some(BACKSTAGE_PASS),
            ItemCategory::Legendary => Some(SULFURAS),
        }
    }

    pub fn is_legendary(self) -> bool {
        self == ItemCategory::Legendary
    }
}

impl ValueObject for ItemCategory {}

/// An inventory item: name, days left to sell, and quality.
///
/// The name is fixed at construction since it decides the category.
/// `sell_in` and `quality` only change through the daily update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
    category: ItemCategory,
}

impl Item {
    /// Build an item, rejecting a blank name.
    ///
    /// Quality is taken as given: legendary items routinely sit above the
    /// normal cap, and out-of-range values on other items are left for the
    /// daily update to deal with.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        let category = ItemCategory::from_name(&name);
        Ok(Self {
            name,
            sell_in,
            quality,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// True once the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item (`{"name", "sellIn", "quality"}`).
///
/// Deserializing an [`Item`] goes through this record and [`Item::new`], so
/// malformed input is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_resolved_from_exact_name() {
        assert_eq!(ItemCategory::from_name("Aged Brie"), ItemCategory::AgedBrie);
        assert_eq!(
            ItemCategory::from_name("Backstage passes to a TAFKAL80ETC concert"),
            ItemCategory::BackstagePass
        );
        assert_eq!(
            ItemCategory::from_name("Sulfuras, Hand of Ragnaros"),
            ItemCategory::Legendary
        );
        assert_eq!(ItemCategory::from_name("foo"), ItemCategory::Ordinary);
    }

    #[test]
    fn near_miss_names_are_ordinary() {
        assert_eq!(ItemCategory::from_name("aged brie"), ItemCategory::Ordinary);
        assert_eq!(ItemCategory::from_name("Aged Brie "), ItemCategory::Ordinary);
        assert_eq!(
            ItemCategory::from_name("Backstage passes to a concert"),
            ItemCategory::Ordinary
        );
        assert_eq!(ItemCategory::from_name("Sulfuras"), ItemCategory::Ordinary);
    }

    #[test]
    fn as_name_matches_from_name() {
        for category in [
            ItemCategory::AgedBrie,
            ItemCategory::BackstagePass,
            ItemCategory::Legendary,
        ] {
            let name = category.as_name().unwrap();
            assert_eq!(ItemCategory::from_name(name), category);
        }
        assert_eq!(ItemCategory::Ordinary.as_name(), None);
    }

    #[test]
    fn new_item_keeps_attributes() {
        let item = Item::new("Sulfuras, Hand of Ragnaros", 0, 80).unwrap();
        assert_eq!(item.name(), SULFURAS);
        assert_eq!(item.sell_in(), 0);
        assert_eq!(item.quality(), 80);
        assert_eq!(item.category(), ItemCategory::Legendary);
        assert!(!item.is_expired());
    }

    #[test]
    fn new_item_rejects_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let err = Item::new(name, 10, 20).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
            }
        }
    }

    #[test]
    fn out_of_range_quality_is_accepted() {
        let item = Item::new("foo", 3, 60).unwrap();
        assert_eq!(item.quality(), 60);

        let item = Item::new("foo", -4, -1).unwrap();
        assert_eq!(item.quality(), -1);
        assert!(item.is_expired());
    }

    #[test]
    fn display_renders_listing_line() {
        let item = Item::new("Aged Brie", -1, 50).unwrap();
        assert_eq!(item.to_string(), "Aged Brie, -1, 50");
    }

    #[test]
    fn record_conversion_validates_name() {
        let record = ItemRecord {
            name: " ".to_string(),
            sell_in: 1,
            quality: 1,
        };
        assert!(Item::try_from(record).is_err());

        let record = ItemRecord {
            name: "Aged Brie".to_string(),
            sell_in: 2,
            quality: 0,
        };
        let item = Item::try_from(record.clone()).unwrap();
        assert_eq!(item.category(), ItemCategory::AgedBrie);
        assert_eq!(ItemRecord::from(item), record);
    }
}
