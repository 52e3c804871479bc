use crate::error::GalleryError;
use crate::models::Gallery;
use serde::{Deserialize, Serialize};

/// Plain copy of a library's two collections, for handing state across
/// process restarts or to another component
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub active: Vec<Gallery>,
    #[serde(default)]
    pub deleted: Vec<Gallery>,
}

impl LibrarySnapshot {
    pub fn to_json(&self) -> Result<String, GalleryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, GalleryError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Image;

    #[test]
    fn test_json_keeps_ids_and_order() {
        let mut first = Gallery::new("First");
        first.append_image(Image::with_aspect_ratio(Some("a.jpg".to_string()), 1.5).unwrap());
        let second = Gallery::with_placeholder("Second");

        let snapshot = LibrarySnapshot {
            active: vec![first.clone()],
            deleted: vec![second.clone()],
        };

        let json = snapshot.to_json().unwrap();
        let loaded = LibrarySnapshot::from_json(&json).unwrap();

        assert_eq!(loaded.active, vec![first]);
        assert_eq!(loaded.deleted, vec![second]);
        assert_eq!(loaded.active[0].images()[0].aspect_ratio(), 1.5);
        assert_eq!(loaded.active[0].images()[0].url(), Some("a.jpg"));
    }

    #[test]
    fn test_missing_deleted_defaults_to_empty() {
        let loaded = LibrarySnapshot::from_json(r#"{ "active": [] }"#).unwrap();
        assert!(loaded.active.is_empty());
        assert!(loaded.deleted.is_empty());
    }

    #[test]
    fn test_rejects_non_positive_aspect_ratio() {
        let json = r#"{
            "active": [{
                "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
                "title": "Broken",
                "images": [{ "aspect_ratio": -3.0, "url": null }]
            }]
        }"#;

        assert!(matches!(
            LibrarySnapshot::from_json(json),
            Err(GalleryError::Serialization(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            LibrarySnapshot::from_json("not json"),
            Err(GalleryError::Serialization(_))
        ));
    }
}
