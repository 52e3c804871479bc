use crate::decode::decode_aspect_ratio;
use crate::error::{check_index, GalleryError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Locator used for images whose source could not be loaded
pub const PLACEHOLDER_URL: &str =
    "https://www.google.com/images/branding/googlelogo/2x/googlelogo_light_color_272x92dp.png";

/// Aspect ratio (height / width) of the placeholder image
pub const PLACEHOLDER_ASPECT_RATIO: f64 = 1.0;

/// Opaque, immutable identity of a gallery
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GalleryId(Uuid);

impl GalleryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for GalleryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GalleryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single image inside a gallery.
///
/// Immutable once constructed. The aspect ratio is always positive and finite,
/// either decoded from the raw bytes or the placeholder ratio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawImage")]
pub struct Image {
    aspect_ratio: f64,
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<Vec<u8>>,
}

impl Image {
    /// Builds an image from a source locator and its downloaded bytes.
    ///
    /// Both must be present and the bytes must decode, otherwise the
    /// placeholder image is returned instead.
    pub fn new(url: Option<String>, bytes: Option<Vec<u8>>) -> Self {
        match (url, bytes) {
            (Some(url), Some(bytes)) => match decode_aspect_ratio(&bytes) {
                Ok(aspect_ratio) => Self {
                    aspect_ratio,
                    url: Some(url),
                    bytes: Some(bytes),
                },
                Err(e) => {
                    log::warn!("Falling back to placeholder for {}: {}", url, e);
                    Self::placeholder()
                }
            },
            _ => Self::placeholder(),
        }
    }

    /// Image shown while nothing (or nothing decodable) was dropped yet
    pub fn placeholder() -> Self {
        Self {
            aspect_ratio: PLACEHOLDER_ASPECT_RATIO,
            url: Some(PLACEHOLDER_URL.to_string()),
            bytes: None,
        }
    }

    /// Builds an image whose dimensions were resolved by the caller
    pub fn with_aspect_ratio(url: Option<String>, aspect_ratio: f64) -> Result<Self, GalleryError> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(GalleryError::InvalidAspectRatio(format!(
                "{} is not a positive finite number",
                aspect_ratio
            )));
        }

        Ok(Self {
            aspect_ratio,
            url,
            bytes: None,
        })
    }

    /// Decodes on tokio's blocking pool, then behaves like [`Image::new`]
    pub async fn from_bytes_async(url: String, bytes: Vec<u8>) -> Result<Self, GalleryError> {
        tokio::task::spawn_blocking(move || Image::new(Some(url), Some(bytes)))
            .await
            .map_err(|e| GalleryError::Task(format!("Task join error: {}", e)))
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.bytes.is_none() && self.url.as_deref() == Some(PLACEHOLDER_URL)
    }
}

/// Unchecked wire form of [`Image`]
#[derive(Deserialize)]
struct RawImage {
    aspect_ratio: f64,
    url: Option<String>,
    #[serde(default)]
    bytes: Option<Vec<u8>>,
}

impl TryFrom<RawImage> for Image {
    type Error = GalleryError;

    fn try_from(raw: RawImage) -> Result<Self, Self::Error> {
        let mut image = Image::with_aspect_ratio(raw.url, raw.aspect_ratio)?;
        image.bytes = raw.bytes;
        Ok(image)
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// A titled, ordered collection of images.
///
/// Two galleries are equal when they share the same id, regardless of
/// title or images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    id: GalleryId,
    title: String,
    images: Vec<Image>,
}

impl PartialEq for Gallery {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gallery {}

impl Gallery {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: GalleryId::new(),
            title: title.into(),
            images: Vec::new(),
        }
    }

    /// New galleries start with a single placeholder image
    pub fn with_placeholder(title: impl Into<String>) -> Self {
        let mut gallery = Self::new(title);
        gallery.append_image(Image::placeholder());
        gallery
    }

    pub fn id(&self) -> GalleryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Aspect ratios in display order, the input of a masonry pass
    pub fn aspect_ratios(&self) -> Vec<f64> {
        self.images.iter().map(Image::aspect_ratio).collect()
    }

    pub fn append_image(&mut self, image: Image) {
        self.images.push(image);
    }

    pub fn remove_image(&mut self, index: usize) -> Result<Image, GalleryError> {
        check_index(index, self.images.len())?;
        Ok(self.images.remove(index))
    }

    /// `index == len` appends
    pub fn insert_image(&mut self, image: Image, index: usize) -> Result<(), GalleryError> {
        check_index(index, self.images.len() + 1)?;
        self.images.insert(index, image);
        Ok(())
    }

    /// Reorders one image: removes it at `from`, then inserts it at `to`.
    ///
    /// Both indices refer to the gallery before the move. Nothing changes
    /// when either is out of range.
    pub fn move_image(&mut self, from: usize, to: usize) -> Result<(), GalleryError> {
        let len = self.images.len();
        check_index(from, len)?;
        check_index(to, len)?;

        let image = self.images.remove(from);
        self.images.insert(to, image);
        Ok(())
    }
}

/// Kind of mutation a library observer is told about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LibraryEvent {
    New,
    Update,
    Delete,
    Restore,
}

impl LibraryEvent {
    pub fn as_str(&self) -> &str {
        match self {
            LibraryEvent::New => "new",
            LibraryEvent::Update => "update",
            LibraryEvent::Delete => "delete",
            LibraryEvent::Restore => "restore",
        }
    }
}
