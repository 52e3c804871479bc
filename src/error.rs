use gallery_library::GalleryError;
use masonry_layout::LayoutError;
use std::fmt;

/// Central error type for the gallery app
#[derive(Debug)]
pub enum AppError {
    /// Library or image error
    Library(GalleryError),
    /// Layout pass or placement lookup failed
    Layout(LayoutError),
    /// Configuration could not be read or parsed
    Config(String),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Report output could not be serialized
    Serialization(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Library(e) => write!(f, "Library error: {}", e),
            AppError::Layout(e) => write!(f, "Layout error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<GalleryError> for AppError {
    fn from(e: GalleryError) -> Self {
        AppError::Library(e)
    }
}

impl From<LayoutError> for AppError {
    fn from(e: LayoutError) -> Self {
        AppError::Layout(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// Short messages for the terminal, without internal details
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Library(GalleryError::IndexOutOfRange { .. })
            | AppError::Layout(LayoutError::IndexOutOfRange { .. }) => {
                "The selected item no longer exists.".to_string()
            }
            AppError::Library(_) => "The gallery could not be changed.".to_string(),
            AppError::Layout(_) => "The gallery could not be laid out.".to_string(),
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),
            AppError::Filesystem(_) => "Error accessing files. Please check the paths.".to_string(),
            AppError::Serialization(_) => "The result could not be written.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_errors_share_message() {
        let library: AppError = GalleryError::IndexOutOfRange { index: 3, len: 3 }.into();
        let layout: AppError = LayoutError::IndexOutOfRange { index: 3, len: 3 }.into();
        assert_eq!(library.user_message(), layout.user_message());
        assert_eq!(
            library.to_string(),
            "Library error: Index 3 out of range for length 3"
        );
    }

    #[test]
    fn test_config_error_from_toml() {
        let err: AppError = toml::from_str::<toml::Value>("columns = ")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
