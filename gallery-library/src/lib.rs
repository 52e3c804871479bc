//! # Gallery Library
//!
//! Named galleries of ordered images, with a recently-deleted list that
//! galleries can be restored from.
//!
//! This crate provides:
//! - [`Gallery`] and [`Image`] models, with identity based gallery equality
//! - [`GalleryLibrary`], the active / deleted partition and its four mutations
//! - Single observer notification after every successful mutation
//! - Aspect ratio decoding from raw image bytes
//! - JSON snapshots of the whole library
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use gallery_library::{Gallery, GalleryLibrary, LibraryEvent};
//!
//! let mut library = GalleryLibrary::new();
//! library.subscribe(|event: LibraryEvent, library: &GalleryLibrary| {
//!     log::info!("library changed: {:?}, {} active", event, library.active().len())
//! });
//!
//! library.save(Gallery::with_placeholder("Untitled 1"));
//! library.delete(0)?;
//! library.restore(0)?;
//! ```

pub mod decode;
pub mod error;
pub mod library;
pub mod models;
pub mod snapshot;

pub use decode::{decode_aspect_ratio, decode_dimensions};
pub use error::GalleryError;
pub use library::{GalleryLibrary, LibraryObserver};
pub use models::{
    Gallery, GalleryId, Image, LibraryEvent, PLACEHOLDER_ASPECT_RATIO, PLACEHOLDER_URL,
};
pub use snapshot::LibrarySnapshot;
