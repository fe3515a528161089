//! Portfolio gallery: a static media catalog, category filtering and a
//! lightbox with wraparound navigation.

pub mod catalog;
pub mod cursor;
pub mod media;
pub mod render;
pub mod state;

pub use catalog::{Catalog, CategoryId};
pub use cursor::WrapCursor;
pub use render::{MediaView, ViewMode};
pub use state::GalleryViewState;
