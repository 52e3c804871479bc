use crate::models::GalleryId;

/// Error type for gallery and library operations
#[derive(Debug)]
pub enum GalleryError {
    /// Index argument outside the current collection bounds
    IndexOutOfRange { index: usize, len: usize },
    /// No gallery with this id in the expected collection
    GalleryNotFound(GalleryId),
    /// The same gallery id appears more than once in a snapshot
    DuplicateGallery(GalleryId),
    /// Aspect ratio is zero, negative or not finite
    InvalidAspectRatio(String),
    /// Image bytes could not be decoded
    ImageDecode(String),
    /// Snapshot (de)serialization failed
    Serialization(serde_json::Error),
    /// Background decode task failed to complete
    Task(String),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            GalleryError::GalleryNotFound(id) => write!(f, "Gallery not found: {}", id),
            GalleryError::DuplicateGallery(id) => write!(f, "Duplicate gallery: {}", id),
            GalleryError::InvalidAspectRatio(msg) => write!(f, "Invalid aspect ratio: {}", msg),
            GalleryError::ImageDecode(msg) => write!(f, "Image decode error: {}", msg),
            GalleryError::Serialization(e) => write!(f, "Serialization error: {}", e),
            GalleryError::Task(msg) => write!(f, "Task error: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GalleryError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::Serialization(err)
    }
}

/// Checks `index < len`, the precondition of every index based accessor
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), GalleryError> {
    if index < len {
        Ok(())
    } else {
        Err(GalleryError::IndexOutOfRange { index, len })
    }
}
