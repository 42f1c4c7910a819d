use crate::base64_serde;
use serde::{Deserialize, Serialize};

/// A single conversation turn sent to or received from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Build a user turn from prompt text.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part::text(text)],
        }
    }

    /// First text part, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(Part::text_value)
    }
}

/// Content role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One piece of a turn: either text or inline binary data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(flatten)]
    pub kind: PartKind,
}

impl Part {
    /// Text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: PartKind::Text { text: text.into() },
        }
    }

    /// Inline binary data part.
    pub fn inline_data(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            kind: PartKind::InlineData {
                inline_data: Blob {
                    mime_type: mime_type.into(),
                    data,
                },
            },
        }
    }

    /// Text payload, if this is a text part.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match &self.kind {
            PartKind::Text { text } => Some(text),
            PartKind::InlineData { .. } => None,
        }
    }

    /// Inline data payload, if this is an inline-data part.
    #[must_use]
    pub fn inline_data_ref(&self) -> Option<&Blob> {
        match &self.kind {
            PartKind::InlineData { inline_data } => Some(inline_data),
            PartKind::Text { .. } => None,
        }
    }
}

/// Part variants. Untagged and flattened so the wire shape is
/// `{"text": ...}` or `{"inlineData": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartKind {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

/// Inline binary data. `data` travels as base64 on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub mime_type: String,
    #[serde(with = "base64_serde")]
    pub data: Vec<u8>,
}
