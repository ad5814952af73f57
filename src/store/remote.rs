//! Client contract for the remote document store.
//!
//! The store itself is an external collaborator — this module only defines
//! the boundary the sync hook consumes: owner-filtered live queries that
//! push full-result snapshots, plus document-level create/update/delete.

use tokio::sync::mpsc;

use crate::types::credential::{CredentialDraft, CredentialRecord};
use crate::types::errors::StoreError;

/// Collection name for credential records.
pub const CREDENTIALS_COLLECTION: &str = "credentials";

/// One delivery from a live query.
#[derive(Debug, Clone)]
pub enum SnapshotEvent {
    /// The full, ordered result set for the subscription's predicate.
    /// Delivered on subscribe and again after every underlying change.
    Snapshot(Vec<CredentialRecord>),
    /// The subscription hit a transport or server error.
    Error(String),
}

/// Handle to an open live query.
///
/// Dropping the subscription closes the registration — the store notices
/// the dead channel on its next delivery and prunes it.
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<SnapshotEvent>,
}

impl Subscription {
    pub fn new(receiver: mpsc::UnboundedReceiver<SnapshotEvent>) -> Self {
        Self { receiver }
    }

    /// Returns the next queued event without blocking, or `None` when the
    /// queue is empty or the store side has gone away.
    pub fn try_next(&mut self) -> Option<SnapshotEvent> {
        self.receiver.try_recv().ok()
    }
}

/// Operations the sync hook requires from a remote document store.
///
/// All methods may fail with a transport-level [`StoreError`]. Snapshots
/// are delivered in the store's commit order; a mutation's own reflection
/// is not guaranteed to arrive before unrelated concurrent snapshots.
pub trait RemoteStoreTrait: Send + Sync {
    /// Opens a live query over `collection` filtered to `owner_id`.
    fn live_query(&self, collection: &str, owner_id: &str) -> Result<Subscription, StoreError>;

    /// Creates a document owned by `owner_id`. The store assigns and
    /// returns the new document id.
    fn create(
        &self,
        collection: &str,
        owner_id: &str,
        draft: &CredentialDraft,
    ) -> Result<String, StoreError>;

    /// Partially updates the mutable fields of the document keyed by `id`.
    /// `id` and `owner_id` are never touched.
    fn update(&self, collection: &str, id: &str, draft: &CredentialDraft)
        -> Result<(), StoreError>;

    /// Deletes the document keyed by `id`.
    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
