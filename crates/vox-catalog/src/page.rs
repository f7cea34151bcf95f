//! The page capability consumed by a rendering front end.

use vox_types::error::Result;

/// One displayable page of image keys.
///
/// Implemented by [`Category`](crate::Category) (one group of items) and
/// [`Catalog`](crate::Catalog) (the navigating whole). A front end only
/// needs this trait to drive a board: show `image_locs`, feed taps into
/// `select`, speak whatever text comes back.
pub trait Page {
    /// React to the image at `image_loc` being selected. Returns the text
    /// to speak, or the empty string when the selection only navigated.
    fn select(&mut self, image_loc: &str) -> Result<String>;

    /// All image keys currently on this page.
    fn image_locs(&self) -> Vec<String>;

    /// Name of the current category; the empty string means home.
    fn category(&self) -> &str;

    /// Whether `image_loc` is on this page.
    fn has_image(&self, image_loc: &str) -> bool;
}
