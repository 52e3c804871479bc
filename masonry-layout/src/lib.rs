//! # Masonry Layout
//!
//! Pinterest style placement of variable height images into equal width
//! columns.
//!
//! Every item's slot is as wide as a column and as tall as the column width
//! times the item's aspect ratio (height / width), plus padding above and
//! below. By default item `i` goes to column `i % columns`; the
//! [`ColumnStrategy::ShortestColumn`] alternative always fills the column
//! that is currently shortest.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use masonry_layout::{LayoutConfig, MasonryLayout, Rect};
//!
//! let mut layout = MasonryLayout::new(LayoutConfig::default());
//! layout.prepare(&[1.0, 0.5, 2.0, 1.0])?;
//!
//! let visible = layout.placements_intersecting(&Rect::new(0.0, 0.0, 390.0, 800.0));
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;

pub use config::{ColumnStrategy, LayoutConfig};
pub use error::LayoutError;
pub use geometry::{Rect, Size};
pub use layout::{MasonryLayout, Placement};
