/// Error type for masonry layout operations
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Requested placement index is not in the last pass
    IndexOutOfRange { index: usize, len: usize },
    /// A layout needs at least one column
    InvalidColumnCount,
    /// Width or padding is negative or not finite
    InvalidDimension(String),
    /// Item aspect ratio is zero, negative or not finite
    InvalidAspectRatio { index: usize, ratio: f64 },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::IndexOutOfRange { index, len } => {
                write!(f, "Placement {} out of range for {} items", index, len)
            }
            LayoutError::InvalidColumnCount => write!(f, "Column count must be at least 1"),
            LayoutError::InvalidDimension(msg) => write!(f, "Invalid dimension: {}", msg),
            LayoutError::InvalidAspectRatio { index, ratio } => {
                write!(f, "Invalid aspect ratio {} for item {}", ratio, index)
            }
        }
    }
}

impl std::error::Error for LayoutError {}
