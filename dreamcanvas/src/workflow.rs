//! Generation workflow: the state machine between the prompt input and the
//! gallery.

use std::time::{SystemTime, UNIX_EPOCH};

use dreamcanvas_types::gallery::GeneratedImage;
use uuid::Uuid;

use crate::error::Result;
use crate::gallery::Gallery;
use crate::images::Images;
use crate::storage::StoragePort;

/// Workflow phase. There is no cancelled state: once a generation starts it
/// runs until the transport settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
}

/// Owns the prompt input, the in-flight flag, the displayed error, and the
/// gallery. All transitions go through the named events [`Workflow::submit`]
/// and [`Workflow::complete`], which is what makes the at-most-one-in-flight
/// invariant checkable.
pub struct Workflow<S: StoragePort> {
    phase: Phase,
    prompt: String,
    error: Option<String>,
    gallery: Gallery<S>,
}

impl<S: StoragePort> Workflow<S> {
    pub fn new(gallery: Gallery<S>) -> Self {
        Self {
            phase: Phase::Idle,
            prompt: String::new(),
            error: None,
            gallery,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// The error message currently shown near the input, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery<S> {
        &self.gallery
    }

    /// `Idle -> Generating`. Returns the trimmed prompt the caller should
    /// run, or `None` when rejected: the prompt trims empty, or a generation
    /// is already in flight. Acceptance clears any previously shown error.
    pub fn submit(&mut self) -> Option<String> {
        if self.phase == Phase::Generating {
            return None;
        }
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return None;
        }
        self.error = None;
        self.phase = Phase::Generating;
        Some(prompt.to_string())
    }

    /// `Generating -> Idle`. On success the image joins the gallery front
    /// and the prompt clears; on failure the error message is recorded and
    /// the prompt is preserved so the user can edit and retry.
    pub fn complete(&mut self, prompt: &str, outcome: Result<String>) {
        match outcome {
            Ok(url) => {
                self.gallery.insert(mint_image(url, prompt));
                self.prompt.clear();
            }
            Err(err) => {
                self.error = Some(err.user_message());
            }
        }
        self.phase = Phase::Idle;
    }

    /// Submit the current prompt, await the single network call, and settle.
    /// Returns `false` when the submission was rejected. This is the one
    /// suspension point of the system; there is no timeout or cancel here,
    /// so a hung transport leaves the phase at `Generating` until it
    /// settles.
    pub async fn generate(&mut self, images: &Images) -> bool {
        let Some(prompt) = self.submit() else {
            return false;
        };
        let outcome = images.generate(&prompt).await;
        self.complete(&prompt, outcome);
        true
    }

    /// Delete one gallery entry by id.
    pub fn delete(&mut self, id: &str) {
        self.gallery.remove(id);
    }
}

/// Mint a gallery record for a freshly generated image.
fn mint_image(url: String, prompt: &str) -> GeneratedImage {
    GeneratedImage {
        id: Uuid::new_v4().to_string(),
        url,
        prompt: prompt.to_string(),
        timestamp: now_millis(),
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
