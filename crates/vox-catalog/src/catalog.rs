//! The two-level board catalog and its navigation state machine.

use std::io;
use std::path::Path;

use vox_store::ArrayMap;
use vox_types::error::{Result, VoxError};

use crate::category::Category;
use crate::format;
use crate::page::Page;

/// Where the catalog's navigation currently points.
///
/// A `Category` cursor stores the selected category's key, not a reference
/// into the owning map; it is only ever written by a successful `select`,
/// and categories are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Home,
    Category(String),
}

/// A speech board: categories at home, items inside each category.
///
/// `home` lists every category (image key -> display name) and `categories`
/// holds the category bodies under the same keys. The two stay in lockstep:
/// a key present in one is present in the other.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) categories: ArrayMap<String, Category>,
    pub(crate) home: Category,
    cursor: Cursor,
}

impl Catalog {
    /// Create an empty catalog, cursor at home.
    pub fn new() -> Self {
        Self {
            categories: ArrayMap::new(),
            home: Category::new(""),
            cursor: Cursor::Home,
        }
    }

    fn current(&self) -> &Category {
        match &self.cursor {
            Cursor::Home => &self.home,
            Cursor::Category(key) => self.categories.get(key.as_str()).unwrap_or(&self.home),
        }
    }

    /// Whether the cursor is at home.
    pub fn is_home(&self) -> bool {
        self.cursor == Cursor::Home
    }

    /// React to the image at `image_loc` being selected.
    ///
    /// At home, selects a category: the cursor moves into it and the empty
    /// string is returned (entering a category speaks nothing); an unknown
    /// key is `NoSuchCategory`. Inside a category, returns the item's
    /// spoken text without moving the cursor; an unknown key is
    /// `KeyNotFound`.
    pub fn select(&mut self, image_loc: &str) -> Result<String> {
        match &self.cursor {
            Cursor::Home => {
                if !self.categories.has_key(image_loc) {
                    return Err(VoxError::NoSuchCategory(image_loc.to_string()));
                }
                self.cursor = Cursor::Category(image_loc.to_string());
                Ok(String::new())
            },
            Cursor::Category(key) => {
                let cat = self.categories.get(key.as_str()).unwrap_or(&self.home);
                cat.select(image_loc).map(str::to_string)
            },
        }
    }

    /// Move the cursor back to home. Never fails.
    pub fn reset(&mut self) {
        self.cursor = Cursor::Home;
    }

    /// Name of the current category; the empty string means home.
    pub fn category(&self) -> &str {
        self.current().name()
    }

    /// Image keys on the current page: category keys at home, item keys
    /// inside a category.
    pub fn image_locs(&self) -> Vec<String> {
        self.current().image_locs()
    }

    /// Whether `image_loc` is on the current page.
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.current().has_image(image_loc)
    }

    /// Add a mapping to the current page.
    ///
    /// At home this declares a top-level category: `image_loc -> text` is
    /// recorded in home's store and an empty category named `text` is
    /// created under `image_loc`. If `image_loc` already names a category,
    /// that category is renamed to `text` and its items are kept. Inside a
    /// category, adds or overwrites one item. Rejects the empty key with
    /// `InvalidKey`.
    pub fn add_item(&mut self, image_loc: &str, text: &str) -> Result<()> {
        match &self.cursor {
            Cursor::Home => {
                self.home.add_item(image_loc, text)?;
                if self.categories.has_key(image_loc) {
                    log::warn!("category {image_loc} redeclared as {text:?}; keeping its items");
                    self.categories.get_mut(image_loc)?.set_name(text);
                } else {
                    self.categories
                        .set(image_loc.to_string(), Category::new(text))?;
                }
                Ok(())
            },
            Cursor::Category(key) => self
                .categories
                .get_mut(key.as_str())?
                .add_item(image_loc, text),
        }
    }

    /// Number of top-level categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Load a catalog from a board file.
    ///
    /// Returns `FileNotFound` if the file does not exist. Either a fully
    /// populated catalog is returned or an error -- never partial state.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(VoxError::FileNotFound(path.display().to_string()));
            },
            Err(e) => return Err(e.into()),
        };
        let catalog = format::parse(&text)?;
        log::info!(
            "loaded {} categories from {}",
            catalog.category_count(),
            path.display()
        );
        Ok(catalog)
    }

    /// Write the catalog to a board file.
    ///
    /// Emits the same format `load` reads. Content round-trips; entry order
    /// is not guaranteed. Never mutates the catalog; a failed write leaves
    /// both the catalog and the cursor untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = format::emit(self);
        std::fs::write(path, text)
            .map_err(|e| VoxError::FileWrite(format!("{}: {e}", path.display())))?;
        log::info!(
            "saved {} categories to {}",
            self.category_count(),
            path.display()
        );
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for Catalog {
    fn select(&mut self, image_loc: &str) -> Result<String> {
        Catalog::select(self, image_loc)
    }

    fn image_locs(&self) -> Vec<String> {
        Catalog::image_locs(self)
    }

    fn category(&self) -> &str {
        Catalog::category(self)
    }

    fn has_image(&self, image_loc: &str) -> bool {
        Catalog::has_image(self, image_loc)
    }
}
