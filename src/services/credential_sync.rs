//! Credential sync hook for PassVault.
//!
//! Bridges the current identity and the remote store: keeps a live,
//! identity-scoped view of credential records and exposes the mutation
//! operations the UI invokes. The in-memory list is never mutated
//! optimistically — every add/update/remove is reflected by the next
//! snapshot from the live query, which is the sole source of truth.

use std::sync::Arc;

use tracing::warn;

use crate::store::remote::{RemoteStoreTrait, SnapshotEvent, Subscription, CREDENTIALS_COLLECTION};
use crate::types::credential::{CredentialDraft, CredentialRecord};
use crate::types::errors::SyncError;
use crate::types::identity::Identity;

/// Synchronization state, driven by identity-change and snapshot-arrival
/// events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncState {
    /// No identity; the list is empty and ready.
    Unauthenticated,
    /// A subscription is open for this identity but no snapshot has
    /// arrived yet.
    Loading(Identity),
    /// At least one snapshot (or an error resolution) has arrived.
    Synced(Identity),
}

/// Live, identity-scoped view of credential records.
pub struct CredentialSyncHook {
    store: Arc<dyn RemoteStoreTrait>,
    state: SyncState,
    records: Vec<CredentialRecord>,
    // Single active subscription. Replaced wholesale on identity change;
    // the old handle is dropped before the new query is opened.
    subscription: Option<Subscription>,
}

impl CredentialSyncHook {
    pub fn new(store: Arc<dyn RemoteStoreTrait>) -> Self {
        Self {
            store,
            state: SyncState::Unauthenticated,
            records: Vec::new(),
            subscription: None,
        }
    }

    /// Applies an identity change: closes any previous subscription, then
    /// either clears the list (signed out) or opens a fresh live query.
    ///
    /// A logged-out state never shows stale data from a previous identity.
    pub fn set_identity(&mut self, identity: Option<Identity>) {
        // Close the old subscription before anything else so two callbacks
        // can never race to write `records`.
        self.subscription = None;

        match identity {
            None => {
                self.clear_records();
                self.state = SyncState::Unauthenticated;
            }
            Some(identity) => {
                self.clear_records();
                match self
                    .store
                    .live_query(CREDENTIALS_COLLECTION, &identity.id)
                {
                    Ok(subscription) => {
                        self.subscription = Some(subscription);
                        self.state = SyncState::Loading(identity);
                    }
                    Err(err) => {
                        // Don't hang the UI in a perpetual loading state.
                        warn!(error = %err, "live query open failed");
                        self.state = SyncState::Synced(identity);
                    }
                }
            }
        }
    }

    /// Drains queued snapshot events from the live query.
    ///
    /// Each snapshot atomically replaces the record list; each error event
    /// is logged and resolves a pending load with whatever the list holds.
    pub fn process_pending(&mut self) {
        let Some(subscription) = self.subscription.as_mut() else {
            return;
        };

        let mut synced = false;
        let mut errored = false;
        let mut latest: Option<Vec<CredentialRecord>> = None;

        while let Some(event) = subscription.try_next() {
            match event {
                SnapshotEvent::Snapshot(records) => {
                    latest = Some(records);
                    synced = true;
                }
                SnapshotEvent::Error(message) => {
                    warn!(error = %message, "live query subscription error");
                    errored = true;
                }
            }
        }

        if let Some(records) = latest {
            self.replace_records(records);
        }

        if synced || errored {
            if let SyncState::Loading(identity) = &self.state {
                self.state = SyncState::Synced(identity.clone());
            }
        }
    }

    /// Submits a create for the current identity.
    ///
    /// Does not touch `records` — the new entry appears with the next
    /// snapshot.
    pub fn add(&mut self, draft: &CredentialDraft) -> Result<String, SyncError> {
        let identity = self.require_identity()?;
        self.store
            .create(CREDENTIALS_COLLECTION, &identity.id, draft)
            .map_err(|err| {
                warn!(error = %err, "credential create failed");
                SyncError::Store(err)
            })
    }

    /// Submits the record's mutable fields as a partial update keyed by id.
    ///
    /// Rejected client-side when the record belongs to another identity.
    pub fn update(&mut self, record: &CredentialRecord) -> Result<(), SyncError> {
        let identity = self.require_identity()?;
        if record.owner_id != identity.id {
            return Err(SyncError::Forbidden(record.id.clone()));
        }

        let draft = CredentialDraft::from_record(record);
        self.store
            .update(CREDENTIALS_COLLECTION, &record.id, &draft)
            .map_err(|err| {
                warn!(error = %err, record_id = %record.id, "credential update failed");
                SyncError::Store(err)
            })
    }

    /// Submits a delete keyed by id.
    ///
    /// Ownership is not re-validated client-side before deletion; that
    /// check is delegated to the remote store's access policy.
    pub fn remove(&mut self, id: &str) -> Result<(), SyncError> {
        self.require_identity()?;
        self.store
            .delete(CREDENTIALS_COLLECTION, id)
            .map_err(|err| {
                warn!(error = %err, record_id = %id, "credential delete failed");
                SyncError::Store(err)
            })
    }

    /// Records matching `query` case-insensitively on site label, site URL,
    /// or username. Preserves snapshot order. An empty query matches all.
    pub fn filter_records(&self, query: &str) -> Vec<&CredentialRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.site_label.to_lowercase().contains(&needle)
                    || r.site_url.to_lowercase().contains(&needle)
                    || r.username.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The in-memory record list, in snapshot delivery order.
    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    /// False only while waiting for the first snapshot of a new identity.
    pub fn ready(&self) -> bool {
        !matches!(self.state, SyncState::Loading(_))
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        match &self.state {
            SyncState::Unauthenticated => None,
            SyncState::Loading(identity) | SyncState::Synced(identity) => Some(identity),
        }
    }

    /// True while a live query is open.
    pub fn has_subscription(&self) -> bool {
        self.subscription.is_some()
    }

    fn require_identity(&self) -> Result<Identity, SyncError> {
        self.current_identity()
            .cloned()
            .ok_or(SyncError::NotAuthenticated)
    }

    fn replace_records(&mut self, records: Vec<CredentialRecord>) {
        self.clear_records();
        self.records = records;
    }

    fn clear_records(&mut self) {
        for record in &mut self.records {
            record.wipe_secret();
        }
        self.records.clear();
    }
}
