//! Inventory domain module.
//!
//! Items age once per simulated day. The rules are implemented as
//! deterministic domain logic (no IO, no storage): the engine borrows the
//! caller's items, updates them in place and hands the same slice back.

pub mod engine;
pub mod item;
pub mod rules;

pub use engine::advance_one_day;
pub use item::{AGED_BRIE, BACKSTAGE_PASS, Item, ItemCategory, ItemRecord, SULFURAS};
pub use rules::{MAX_QUALITY, MIN_QUALITY};
