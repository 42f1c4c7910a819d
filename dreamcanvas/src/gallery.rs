//! Session gallery: the ordered, locally persisted image history.

use dreamcanvas_types::gallery::GeneratedImage;
use tracing::warn;

use crate::storage::StoragePort;

/// Storage key for the persisted history.
pub const HISTORY_KEY: &str = "dreamcanvas_history";

/// Prepend `item`, keeping the sequence newest-first.
#[must_use]
pub fn insert_front(
    mut images: Vec<GeneratedImage>,
    item: GeneratedImage,
) -> Vec<GeneratedImage> {
    images.insert(0, item);
    images
}

/// Drop every item with a matching id. An absent id is a no-op, not an
/// error, and the remaining order is untouched.
#[must_use]
pub fn remove_by_id(images: Vec<GeneratedImage>, id: &str) -> Vec<GeneratedImage> {
    images.into_iter().filter(|image| image.id != id).collect()
}

/// The session gallery, reconciled with its storage port after every
/// mutation. The in-memory sequence stays authoritative when a write fails.
pub struct Gallery<S: StoragePort> {
    storage: S,
    key: String,
    images: Vec<GeneratedImage>,
}

impl<S: StoragePort> Gallery<S> {
    /// Hydrate from storage under the default key. Never fails: a missing
    /// key yields an empty gallery, and malformed content is discarded with
    /// a log line rather than surfaced.
    pub fn hydrate(storage: S) -> Self {
        Self::hydrate_key(storage, HISTORY_KEY)
    }

    /// Hydrate from storage under an explicit key.
    pub fn hydrate_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let images = match storage.read(&key) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(images) => images,
                Err(err) => {
                    warn!(key, error = %err, "history recovery failed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key, error = %err, "history read failed, starting empty");
                Vec::new()
            }
        };
        Self {
            storage,
            key,
            images,
        }
    }

    #[must_use]
    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Insert at the front and persist the full sequence.
    pub fn insert(&mut self, image: GeneratedImage) {
        self.images = insert_front(std::mem::take(&mut self.images), image);
        self.persist();
    }

    /// Remove by id and persist. No-op when the id is absent.
    pub fn remove(&mut self, id: &str) {
        self.images = remove_by_id(std::mem::take(&mut self.images), id);
        self.persist();
    }

    /// Serialize the full sequence and overwrite the persisted key.
    /// Last-write-wins; a failed write is logged and the session carries on
    /// from memory.
    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.images) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(key = %self.key, error = %err, "history serialization failed");
                return;
            }
        };
        if let Err(err) = self.storage.write(&self.key, &bytes) {
            warn!(key = %self.key, error = %err, "history write failed");
        }
    }
}
