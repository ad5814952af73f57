//! PassVault storage layer.
//!
//! `remote` defines the document-store client contract the sync hook
//! consumes; `memory` is an in-process emulator of that contract used by
//! the demo binary and the test suite; `local_vault` is the legacy
//! local-only persistence variant (one JSON file, rewritten wholesale).

pub mod local_vault;
pub mod memory;
pub mod remote;

pub use local_vault::LocalVault;
pub use memory::InMemoryStore;
pub use remote::{RemoteStoreTrait, SnapshotEvent, Subscription, CREDENTIALS_COLLECTION};
