//! Daily update engine.
//!
//! Runs the per-item rules over a caller-owned batch. The engine keeps no
//! state between calls; everything it needs lives in the items themselves.

use tracing::{debug, instrument, trace};

use crate::item::Item;

/// Age every item in `items` by one day, in place.
///
/// Returns the same slice so callers can chain or inspect it directly. Items
/// are independent of each other, so order only matters to the caller.
#[instrument(level = "debug", skip_all, fields(item_count = items.len()))]
pub fn advance_one_day(items: &mut [Item]) -> &mut [Item] {
    for item in items.iter_mut() {
        let sell_in_before = item.sell_in();
        let quality_before = item.quality();

        item.advance_one_day();

        trace!(
            name = %item.name(),
            category = ?item.category(),
            sell_in_before,
            quality_before,
            sell_in = item.sell_in(),
            quality = item.quality(),
            "item aged"
        );

        if sell_in_before >= 0 && item.is_expired() {
            debug!(name = %item.name(), quality = item.quality(), "item passed its sell-by date");
        }
    }

    items
}
