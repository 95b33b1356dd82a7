//! Per-item daily rules.
//!
//! One day for a single item runs in three steps:
//! 1. adjust quality using the current `sell_in`
//! 2. decrement `sell_in`
//! 3. if the item is now past its sell-by date, adjust quality again
//!
//! Legendary items skip all three.

use crate::item::{Item, ItemCategory};

/// Lower bound for the quality of non-legendary items.
pub const MIN_QUALITY: i32 = 0;

/// Upper bound for the quality of non-legendary items.
pub const MAX_QUALITY: i32 = 50;

/// Backstage passes gain an extra point below this many days.
const BACKSTAGE_DOUBLE_BELOW: i32 = 11;

/// Backstage passes gain a third point below this many days.
const BACKSTAGE_TRIPLE_BELOW: i32 = 6;

/// `quality + 1`, unless already at (or above) the cap.
pub fn increase_quality(quality: i32) -> i32 {
    if quality < MAX_QUALITY {
        quality + 1
    } else {
        quality
    }
}

/// `quality - 1`, unless already at (or below) the floor.
pub fn decrease_quality(quality: i32) -> i32 {
    if quality > MIN_QUALITY {
        quality - 1
    } else {
        quality
    }
}

impl Item {
    /// Age this item by one day.
    pub fn advance_one_day(&mut self) {
        if self.category().is_legendary() {
            return;
        }

        self.adjust_before_sell_by();
        // Saturates at i32::MIN instead of overflowing.
        self.sell_in = self.sell_in.saturating_sub(1);

        if self.is_expired() {
            self.adjust_after_sell_by();
        }
    }

    fn adjust_before_sell_by(&mut self) {
        match self.category() {
            ItemCategory::Ordinary => self.quality = decrease_quality(self.quality),
            ItemCategory::AgedBrie => self.quality = increase_quality(self.quality),
            ItemCategory::BackstagePass => {
                self.quality = increase_quality(self.quality);
                if self.sell_in < BACKSTAGE_DOUBLE_BELOW {
                    self.quality = increase_quality(self.quality);
                }
                if self.sell_in < BACKSTAGE_TRIPLE_BELOW {
                    self.quality = increase_quality(self.quality);
                }
            }
            ItemCategory::Legendary => {}
        }
    }

    fn adjust_after_sell_by(&mut self) {
        match self.category() {
            ItemCategory::Ordinary => self.quality = decrease_quality(self.quality),
            ItemCategory::AgedBrie => self.quality = increase_quality(self.quality),
            // The concert is over.
            ItemCategory::BackstagePass => self.quality = MIN_QUALITY,
            ItemCategory::Legendary => {}
        }
    }
}
