//! Access gate: decides whether generation is reachable as signed-in, needs
//! a sign-in affordance, or runs unscoped in guest mode.

use std::sync::Arc;

use dreamcanvas_types::auth::AuthState;

/// Live view of an external authentication provider.
pub trait AuthProvider: Send + Sync {
    fn is_loaded(&self) -> bool;
    fn is_signed_in(&self) -> bool;
}

/// Publishable keys carry a `pk_` prefix; anything else is treated as no
/// key at all.
#[must_use]
pub fn is_publishable_key(value: &str) -> bool {
    value.trim().starts_with("pk_")
}

/// Selected once at process start and never re-evaluated. `NotConfigured`
/// is guest mode: everything usable, history unscoped to any identity.
#[derive(Clone)]
pub enum AccessGate {
    Configured(Arc<dyn AuthProvider>),
    NotConfigured,
}

impl AccessGate {
    /// Resolve the gate from a candidate publishable key and an optional
    /// provider instance. A key that does not look valid, or a key with no
    /// provider actually available, degrades to guest mode instead of
    /// erroring.
    #[must_use]
    pub fn resolve(publishable_key: Option<&str>, provider: Option<Arc<dyn AuthProvider>>) -> Self {
        match (publishable_key, provider) {
            (Some(key), Some(provider)) if is_publishable_key(key) => Self::Configured(provider),
            _ => Self::NotConfigured,
        }
    }

    /// Guest mode gate.
    #[must_use]
    pub fn guest() -> Self {
        Self::NotConfigured
    }

    /// Derive the current auth state. Computed per call, never stored.
    #[must_use]
    pub fn state(&self) -> AuthState {
        match self {
            Self::Configured(provider) => AuthState {
                is_configured: true,
                is_loaded: provider.is_loaded(),
                is_signed_in: provider.is_signed_in(),
            },
            Self::NotConfigured => AuthState::guest(),
        }
    }

    /// Whether the generation workflow is reachable right now.
    #[must_use]
    pub fn allows_generation(&self) -> bool {
        let state = self.state();
        state.is_loaded && state.is_signed_in
    }

    /// Whether the UI should swap the generate action for a sign-in
    /// affordance.
    #[must_use]
    pub fn requires_sign_in(&self) -> bool {
        let state = self.state();
        state.is_configured && state.is_loaded && !state.is_signed_in
    }

    /// Provider configured but not resolved yet; the gate is undecided and
    /// generation-enabled UI stays hidden.
    #[must_use]
    pub fn is_indeterminate(&self) -> bool {
        self.state().is_indeterminate()
    }
}
