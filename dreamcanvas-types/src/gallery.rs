use serde::{Deserialize, Serialize};

/// One generated artifact in the session gallery.
///
/// Every field is set at creation time and never mutated; deletion is the
/// only lifecycle event after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Opaque unique identifier, unique within a session's gallery.
    pub id: String,
    /// Data URI or remote URL pointing at the image bytes.
    pub url: String,
    /// The exact user-submitted text that produced the image.
    pub prompt: String,
    /// Creation instant, epoch milliseconds.
    pub timestamp: i64,
}
