use crate::error::{check_index, GalleryError};
use crate::models::{Gallery, GalleryId, LibraryEvent};
use crate::snapshot::LibrarySnapshot;
use std::collections::HashSet;

/// Receives one event after every successful library mutation.
///
/// Observers get the kind of change plus a read-only view of the library,
/// already in its post-mutation state, to re-read the collections from.
pub trait LibraryObserver {
    fn on_event(&mut self, event: LibraryEvent, library: &GalleryLibrary);
}

impl<F> LibraryObserver for F
where
    F: FnMut(LibraryEvent, &GalleryLibrary),
{
    fn on_event(&mut self, event: LibraryEvent, library: &GalleryLibrary) {
        self(event, library)
    }
}

/// Active galleries plus the recently deleted ones.
///
/// Every gallery id lives in exactly one of the two lists. Deleting moves a
/// gallery to the end of `deleted`, restoring moves it back to the end of
/// `active`; both removals keep the order of the remaining galleries.
#[derive(Default)]
pub struct GalleryLibrary {
    active: Vec<Gallery>,
    deleted: Vec<Gallery>,
    observer: Option<Box<dyn LibraryObserver>>,
}

impl std::fmt::Debug for GalleryLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryLibrary")
            .field("active", &self.active)
            .field("deleted", &self.deleted)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl GalleryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a library from a snapshot, rejecting duplicate ids
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> Result<Self, GalleryError> {
        let mut seen = HashSet::new();
        for gallery in snapshot.active.iter().chain(snapshot.deleted.iter()) {
            if !seen.insert(gallery.id()) {
                return Err(GalleryError::DuplicateGallery(gallery.id()));
            }
        }

        log::debug!(
            "Library restored from snapshot: {} active, {} deleted",
            snapshot.active.len(),
            snapshot.deleted.len()
        );

        Ok(Self {
            active: snapshot.active,
            deleted: snapshot.deleted,
            observer: None,
        })
    }

    /// Copies both collections, without the observer
    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            active: self.active.clone(),
            deleted: self.deleted.clone(),
        }
    }

    pub fn active(&self) -> &[Gallery] {
        &self.active
    }

    pub fn deleted(&self) -> &[Gallery] {
        &self.deleted
    }

    /// Registers the observer, replacing any previous one
    pub fn subscribe(&mut self, observer: impl LibraryObserver + 'static) {
        if self.observer.is_some() {
            log::debug!("Replacing library observer");
        }
        self.observer = Some(Box::new(observer));
    }

    pub fn unsubscribe(&mut self) {
        self.observer = None;
    }

    fn notify(&mut self, event: LibraryEvent) {
        log::debug!(
            "Library {}: {} active, {} deleted",
            event.as_str(),
            self.active.len(),
            self.deleted.len()
        );

        // Detached while it runs so it can borrow the whole library
        if let Some(mut observer) = self.observer.take() {
            observer.on_event(event, self);
            self.observer = Some(observer);
        }
    }

    /// Appends a new gallery to the active list
    pub fn save(&mut self, gallery: Gallery) {
        self.active.push(gallery);
        self.notify(LibraryEvent::New);
    }

    /// Replaces the active gallery at `index`
    pub fn update(&mut self, gallery: Gallery, index: usize) -> Result<(), GalleryError> {
        check_index(index, self.active.len())?;
        self.active[index] = gallery;
        self.notify(LibraryEvent::Update);
        Ok(())
    }

    /// Moves the active gallery at `index` into the recently deleted list
    pub fn delete(&mut self, index: usize) -> Result<(), GalleryError> {
        check_index(index, self.active.len())?;
        let gallery = self.active.remove(index);
        self.deleted.push(gallery);
        self.notify(LibraryEvent::Delete);
        Ok(())
    }

    /// Moves the deleted gallery at `index` back to the end of the active list
    pub fn restore(&mut self, index: usize) -> Result<(), GalleryError> {
        check_index(index, self.deleted.len())?;
        let gallery = self.deleted.remove(index);
        self.active.push(gallery);
        self.notify(LibraryEvent::Restore);
        Ok(())
    }

    pub fn position_of(&self, id: GalleryId) -> Option<usize> {
        self.active.iter().position(|g| g.id() == id)
    }

    pub fn deleted_position_of(&self, id: GalleryId) -> Option<usize> {
        self.deleted.iter().position(|g| g.id() == id)
    }

    pub fn get(&self, id: GalleryId) -> Option<&Gallery> {
        self.active
            .iter()
            .chain(self.deleted.iter())
            .find(|g| g.id() == id)
    }

    pub fn is_deleted(&self, id: GalleryId) -> bool {
        self.deleted_position_of(id).is_some()
    }

    /// Updates the gallery in place when it is already active, otherwise
    /// saves it as new.
    ///
    /// Returns the event that was emitted.
    pub fn save_or_update(&mut self, gallery: Gallery) -> Result<LibraryEvent, GalleryError> {
        match self.position_of(gallery.id()) {
            Some(index) => {
                self.update(gallery, index)?;
                Ok(LibraryEvent::Update)
            }
            None => {
                // A deleted gallery must be restored, not saved a second time
                if self.is_deleted(gallery.id()) {
                    return Err(GalleryError::DuplicateGallery(gallery.id()));
                }
                self.save(gallery);
                Ok(LibraryEvent::New)
            }
        }
    }

    /// Deletes by id, resolving the current index at call time
    pub fn delete_by_id(&mut self, id: GalleryId) -> Result<(), GalleryError> {
        let index = self
            .position_of(id)
            .ok_or(GalleryError::GalleryNotFound(id))?;
        self.delete(index)
    }

    /// Restores by id, resolving the current index at call time
    pub fn restore_by_id(&mut self, id: GalleryId) -> Result<(), GalleryError> {
        let index = self
            .deleted_position_of(id)
            .ok_or(GalleryError::GalleryNotFound(id))?;
        self.restore(index)
    }
}
