//! The line-oriented board file format.
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! img/clothing/hanger.png clothing
//! >img/clothing/shirt.png collared shirt
//! ```
//!
//! A line without a leading `>` declares a category (key, then display
//! name); a `>` line adds one item to the most recently declared category.
//! The key runs to the first space, the text is the rest of the line taken
//! verbatim. Lines with no space are skipped. Entry order is not a
//! round-trip property; content is.

use vox_types::error::Result;

use crate::catalog::Catalog;

/// Marker prefix of an item line.
pub const ITEM_MARKER: char = '>';

/// Parse a board file into a catalog.
///
/// Drives the catalog's own operations the way a user would: declare a
/// category at home, select into it, add its items. Malformed lines (no
/// space, or an empty key) and item lines with no preceding category line
/// are skipped, not fatal. The returned catalog's cursor is at home.
pub fn parse(input: &str) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for (idx, line) in input.lines().enumerate() {
        let lineno = idx + 1;
        let is_item = line.starts_with(ITEM_MARKER);
        let body = if is_item { &line[1..] } else { line };

        let Some(space) = body.find(' ') else {
            if !line.trim().is_empty() {
                log::debug!("line {lineno}: no key/text separator, skipped: {line:?}");
            }
            continue;
        };
        let (key, text) = (&body[..space], &body[space + 1..]);
        if key.is_empty() {
            log::debug!("line {lineno}: empty key, skipped: {line:?}");
            continue;
        }

        if is_item {
            if catalog.is_home() {
                log::warn!("line {lineno}: item before any category, skipped: {line:?}");
                continue;
            }
            catalog.add_item(key, text)?;
        } else {
            catalog.reset();
            catalog.add_item(key, text)?;
            catalog.select(key)?;
        }
    }
    catalog.reset();
    Ok(catalog)
}

/// Emit a catalog in the board file format.
///
/// Walks home's entries directly; the catalog (cursor included) is not
/// touched.
pub fn emit(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (loc, display) in catalog.home.iter() {
        out.push_str(loc);
        out.push(' ');
        out.push_str(display);
        out.push('\n');
        if let Ok(category) = catalog.categories.get(loc.as_str()) {
            for (item_loc, text) in category.iter() {
                out.push(ITEM_MARKER);
                out.push_str(item_loc);
                out.push(' ');
                out.push_str(text);
                out.push('\n');
            }
        }
    }
    out
}
