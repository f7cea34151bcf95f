//! A named group of items, each mapping an image key to spoken text.

use vox_store::ArrayMap;
use vox_types::error::Result;

use crate::page::Page;

/// One category of a speech board.
///
/// Owns the mapping from image key to the text spoken when that image is
/// selected. The empty name is reserved for the catalog's implicit home
/// category.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    items: ArrayMap<String, String>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: ArrayMap::new(),
        }
    }

    /// The category's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// The text spoken for `image_loc`, or `KeyNotFound`. Pure lookup.
    pub fn select(&self, image_loc: &str) -> Result<&str> {
        self.items.get(image_loc).map(String::as_str)
    }

    /// Add or overwrite one item. Rejects the empty key with `InvalidKey`.
    pub fn add_item(&mut self, image_loc: &str, text: &str) -> Result<()> {
        self.items.set(image_loc.to_string(), text.to_string())
    }

    /// Snapshot of all image keys in this category.
    pub fn image_locs(&self) -> Vec<String> {
        self.items.keys()
    }

    /// Whether `image_loc` is an item of this category.
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the category holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrowed traversal of (image key, spoken text) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.items.iter()
    }
}

impl Page for Category {
    fn select(&mut self, image_loc: &str) -> Result<String> {
        Category::select(self, image_loc).map(str::to_string)
    }

    fn image_locs(&self) -> Vec<String> {
        Category::image_locs(self)
    }

    fn category(&self) -> &str {
        self.name()
    }

    fn has_image(&self, image_loc: &str) -> bool {
        Category::has_image(self, image_loc)
    }
}
