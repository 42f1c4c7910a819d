use serde::{Deserialize, Serialize};

/// Snapshot of the authentication provider's state, derived per query and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Whether an external auth provider is configured at all.
    pub is_configured: bool,
    /// Whether the provider has finished resolving its session.
    pub is_loaded: bool,
    /// Whether a user session is active.
    pub is_signed_in: bool,
}

impl AuthState {
    /// Guest mode: no provider configured, everything usable.
    #[must_use]
    pub const fn guest() -> Self {
        Self {
            is_configured: false,
            is_loaded: true,
            is_signed_in: true,
        }
    }

    /// A configured provider that has not resolved yet. Callers should treat
    /// the gate as undecided rather than signed out.
    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        self.is_configured && !self.is_loaded
    }
}
