//! App Core for PassVault.
//!
//! Central struct wiring the identity provider, the credential sync hook,
//! and the ancillary utilities together, and relaying identity-changed
//! notifications into the hook.

use std::sync::Arc;

use tokio::sync::watch;

use crate::services::auth_provider::{AuthProvider, AuthProviderTrait};
use crate::services::credential_sync::CredentialSyncHook;
use crate::services::password_generator::PasswordGenerator;
use crate::services::strength_advisor::StrengthAdvisor;
use crate::store::local_vault::LocalVault;
use crate::store::memory::InMemoryStore;
use crate::types::advisor::AdvisorConfig;
use crate::types::identity::Identity;

/// Central application struct holding all services.
pub struct App {
    pub auth: AuthProvider,
    pub store: Arc<InMemoryStore>,
    pub sync: CredentialSyncHook,
    pub generator: PasswordGenerator,
    pub advisor: StrengthAdvisor,
    pub local_vault: LocalVault,
    identity_rx: watch::Receiver<Option<Identity>>,
}

impl App {
    /// Creates a new App wired against the in-process store emulator.
    pub fn new() -> Self {
        let auth = AuthProvider::new();
        let identity_rx = auth.subscribe();
        let store = Arc::new(InMemoryStore::new());
        let sync = CredentialSyncHook::new(store.clone());

        Self {
            auth,
            store,
            sync,
            generator: PasswordGenerator::new(),
            advisor: StrengthAdvisor::new(AdvisorConfig::default()),
            local_vault: LocalVault::new(None),
            identity_rx,
        }
    }

    /// Applies a pending identity-changed notification to the sync hook,
    /// then drains any snapshots the re-subscription produced.
    ///
    /// Call after any sign-in/sign-up/sign-out, or periodically from the
    /// event loop.
    pub fn refresh_identity(&mut self) {
        if self
            .identity_rx
            .has_changed()
            .unwrap_or(false)
        {
            let identity = self.identity_rx.borrow_and_update().clone();
            self.sync.set_identity(identity);
        }
        self.sync.process_pending();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
