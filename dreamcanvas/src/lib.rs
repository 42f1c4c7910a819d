//! Studio core for DreamCanvas: prompt-to-image generation against the
//! Gemini API, a locally persisted session gallery, and an optional
//! authentication gate with a guest-mode fallback.

pub mod client;
pub mod download;
pub mod error;
pub mod gallery;
pub mod gate;
pub mod images;
pub mod storage;
pub mod studio;
pub mod workflow;

#[cfg(test)]
mod test_support;

pub use dreamcanvas_types as types;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, Result};
pub use gate::{AccessGate, AuthProvider};
pub use storage::{FileStorage, MemoryStorage, StoragePort};
pub use studio::{Studio, StudioConfig};
pub use workflow::{Phase, Workflow};
