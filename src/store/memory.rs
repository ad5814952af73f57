//! In-process emulator of the remote document store.
//!
//! Backs the demo binary and the test suite. Documents are kept in
//! insertion order per collection; every successful mutation re-delivers
//! a fresh owner-filtered snapshot to each live subscription, matching
//! the push behavior of the real store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::store::remote::{RemoteStoreTrait, SnapshotEvent, Subscription};
use crate::types::credential::{CredentialDraft, CredentialRecord};
use crate::types::errors::StoreError;

struct LiveSub {
    collection: String,
    owner_id: String,
    sender: mpsc::UnboundedSender<SnapshotEvent>,
}

/// In-memory document store with live-query fan-out.
pub struct InMemoryStore {
    collections: Mutex<HashMap<String, Vec<CredentialRecord>>>,
    subscriptions: Mutex<Vec<LiveSub>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            subscriptions: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Test hook: when set, every mutation fails with `StoreError::Unavailable`
    /// and no snapshot is delivered.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Test hook: pushes an error event to every live subscription on the
    /// given collection, simulating a dropped server connection.
    pub fn emit_subscription_error(&self, collection: &str, message: &str) {
        let mut subs = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner());
        subs.retain(|sub| {
            if sub.collection != collection {
                return true;
            }
            sub.sender
                .send(SnapshotEvent::Error(message.to_string()))
                .is_ok()
        });
    }

    /// Number of open live subscriptions (dead channels pruned lazily).
    pub fn open_subscriptions(&self) -> usize {
        let mut subs = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner());
        subs.retain(|sub| !sub.sender.is_closed());
        subs.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        Ok(())
    }

    fn filtered(docs: &[CredentialRecord], owner_id: &str) -> Vec<CredentialRecord> {
        docs.iter()
            .filter(|d| d.owner_id == owner_id)
            .cloned()
            .collect()
    }

    /// Re-delivers snapshots to every subscription on `collection` whose
    /// predicate matches, pruning subscriptions whose receiver is gone.
    fn notify(&self, collection: &str) {
        let snapshot_source = {
            let collections = self.collections.lock().unwrap_or_else(|e| e.into_inner());
            collections.get(collection).cloned().unwrap_or_default()
        };
        let mut subs = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner());
        subs.retain(|sub| {
            if sub.collection != collection {
                return true;
            }
            let snapshot = Self::filtered(&snapshot_source, &sub.owner_id);
            sub.sender.send(SnapshotEvent::Snapshot(snapshot)).is_ok()
        });
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteStoreTrait for InMemoryStore {
    fn live_query(&self, collection: &str, owner_id: &str) -> Result<Subscription, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::SubscriptionFailed("store offline".to_string()));
        }

        let (sender, receiver) = mpsc::unbounded_channel();

        // Initial snapshot is queued before the subscription is registered,
        // so a subscriber always sees the current state first.
        let initial = {
            let collections = self.collections.lock().unwrap_or_else(|e| e.into_inner());
            let docs = collections.get(collection).cloned().unwrap_or_default();
            Self::filtered(&docs, owner_id)
        };
        let _ = sender.send(SnapshotEvent::Snapshot(initial));

        self.subscriptions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LiveSub {
                collection: collection.to_string(),
                owner_id: owner_id.to_string(),
                sender,
            });

        Ok(Subscription::new(receiver))
    }

    fn create(
        &self,
        collection: &str,
        owner_id: &str,
        draft: &CredentialDraft,
    ) -> Result<String, StoreError> {
        self.check_available()?;

        let id = Uuid::new_v4().to_string();
        let record = CredentialRecord {
            id: id.clone(),
            owner_id: owner_id.to_string(),
            site_label: draft.site_label.clone(),
            site_url: draft.site_url.clone(),
            username: draft.username.clone(),
            secret: draft.secret.clone(),
        };

        self.collections
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(collection.to_string())
            .or_default()
            .push(record);

        self.notify(collection);
        Ok(id)
    }

    fn update(
        &self,
        collection: &str,
        id: &str,
        draft: &CredentialDraft,
    ) -> Result<(), StoreError> {
        self.check_available()?;

        {
            let mut collections = self.collections.lock().unwrap_or_else(|e| e.into_inner());
            let docs = collections
                .get_mut(collection)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            let doc = docs
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

            doc.site_label = draft.site_label.clone();
            doc.site_url = draft.site_url.clone();
            doc.username = draft.username.clone();
            doc.secret = draft.secret.clone();
        }

        self.notify(collection);
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.check_available()?;

        // No client-visible ownership policy here: access control is the
        // responsibility of the real store's server-side rules.
        let removed = {
            let mut collections = self.collections.lock().unwrap_or_else(|e| e.into_inner());
            match collections.get_mut(collection) {
                Some(docs) => {
                    let before = docs.len();
                    docs.retain(|d| d.id != id);
                    docs.len() != before
                }
                None => false,
            }
        };

        if !removed {
            return Err(StoreError::NotFound(id.to_string()));
        }

        self.notify(collection);
        Ok(())
    }
}
