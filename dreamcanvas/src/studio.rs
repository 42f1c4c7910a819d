//! Composition root: configuration, gate, client, and workflow wired
//! together the way a frontend embeds them.

use std::sync::Arc;

use dreamcanvas_types::auth::AuthState;

use crate::client::Client;
use crate::error::Result;
use crate::gallery::Gallery;
use crate::gate::{is_publishable_key, AccessGate, AuthProvider};
use crate::storage::StoragePort;
use crate::workflow::Workflow;

/// Credential-shaped configuration read once at startup. Absence of either
/// value degrades the feature it backs rather than failing the process.
#[derive(Debug, Clone, Default)]
pub struct StudioConfig {
    /// Image-provider API key. Presence-checked only, at request time.
    pub api_key: Option<String>,
    /// Auth-provider publishable key, kept only when it matches the
    /// expected `pk_` prefix.
    pub publishable_key: Option<String>,
}

impl StudioConfig {
    /// Read `API_KEY`/`GEMINI_API_KEY` and `CLERK_PUBLISHABLE_KEY` from the
    /// environment.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());
        let publishable_key = std::env::var("CLERK_PUBLISHABLE_KEY")
            .ok()
            .filter(|key| is_publishable_key(key));
        Self {
            api_key,
            publishable_key,
        }
    }
}

/// The studio: one gate, one client, one workflow over one gallery.
pub struct Studio<S: StoragePort> {
    gate: AccessGate,
    client: Client,
    workflow: Workflow<S>,
}

impl<S: StoragePort> Studio<S> {
    /// Assemble a studio from configuration, an optional auth provider, and
    /// a storage port. Hydrates the gallery immediately.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(
        config: &StudioConfig,
        provider: Option<Arc<dyn AuthProvider>>,
        storage: S,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(api_key) = &config.api_key {
            builder = builder.api_key(api_key);
        }
        let client = builder.build()?;
        let gate = AccessGate::resolve(config.publishable_key.as_deref(), provider);
        let workflow = Workflow::new(Gallery::hydrate(storage));
        Ok(Self {
            gate,
            client,
            workflow,
        })
    }

    /// Assemble with an explicit client, for tests pointing at a mock
    /// server.
    pub fn with_client(client: Client, gate: AccessGate, storage: S) -> Self {
        Self {
            gate,
            client,
            workflow: Workflow::new(Gallery::hydrate(storage)),
        }
    }

    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        self.gate.state()
    }

    #[must_use]
    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    #[must_use]
    pub fn workflow(&self) -> &Workflow<S> {
        &self.workflow
    }

    pub fn workflow_mut(&mut self) -> &mut Workflow<S> {
        &mut self.workflow
    }

    /// Gated entry into the generation workflow. When the gate denies,
    /// nothing is submitted and no network call happens. Returns whether a
    /// generation actually ran.
    pub async fn generate(&mut self) -> bool {
        if !self.gate.allows_generation() {
            return false;
        }
        self.workflow.generate(&self.client.images()).await
    }
}
