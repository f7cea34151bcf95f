//! Array-backed associative store for VOX BOARD.
//!
//! [`ArrayMap`] stores key/value pairs in a flat growable array and looks
//! keys up by linear scan. The board catalogs it serves hold tens to low
//! hundreds of entries, where a scan is fast, fully deterministic, and
//! trivially auditable.

mod array_map;

pub use array_map::{ArrayMap, StoreKey};
