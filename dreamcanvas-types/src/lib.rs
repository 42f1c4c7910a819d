//! Shared types for the DreamCanvas studio core.

pub mod auth;
pub mod base64_serde;
pub mod content;
pub mod gallery;
pub mod request;
pub mod response;
