//! Unit tests for the Credential Sync Hook.
//!
//! Tests identity-scoped subscriptions, snapshot application, mutation
//! preconditions, and the failure paths that must leave the UI usable.

use std::sync::Arc;

use passvault::services::credential_sync::{CredentialSyncHook, SyncState};
use passvault::store::memory::InMemoryStore;
use passvault::store::remote::{RemoteStoreTrait, CREDENTIALS_COLLECTION};
use passvault::types::credential::CredentialDraft;
use passvault::types::errors::SyncError;
use passvault::types::identity::Identity;

fn identity(id: &str, email: &str) -> Identity {
    Identity {
        id: id.to_string(),
        email: email.to_string(),
    }
}

fn draft(url: &str, user: &str, secret: &str) -> CredentialDraft {
    CredentialDraft::from_form(url, user, secret)
}

fn setup() -> (Arc<InMemoryStore>, CredentialSyncHook) {
    let store = Arc::new(InMemoryStore::new());
    let hook = CredentialSyncHook::new(store.clone());
    (store, hook)
}

// ─── Subscribe / identity changes ───

#[test]
fn test_starts_unauthenticated_and_ready() {
    let (_store, hook) = setup();
    assert_eq!(*hook.state(), SyncState::Unauthenticated);
    assert!(hook.ready());
    assert!(hook.records().is_empty());
    assert!(!hook.has_subscription());
}

#[test]
fn test_subscribe_loads_preexisting_records() {
    let (store, mut hook) = setup();
    let alice = identity("alice", "alice@example.com");

    // Two records exist in the store before Alice subscribes.
    store
        .create(CREDENTIALS_COLLECTION, "alice", &draft("https://a.com", "a", "p1"))
        .unwrap();
    store
        .create(CREDENTIALS_COLLECTION, "alice", &draft("https://b.com", "b", "p2"))
        .unwrap();

    hook.set_identity(Some(alice.clone()));
    assert!(!hook.ready());

    hook.process_pending();
    assert!(hook.ready());
    assert_eq!(*hook.state(), SyncState::Synced(alice));
    assert_eq!(hook.records().len(), 2);
}

#[test]
fn test_sign_out_clears_records_without_subscription() {
    let (store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "alice@example.com")));
    hook.process_pending();
    hook.add(&draft("https://a.com", "a", "p")).unwrap();
    hook.process_pending();
    assert_eq!(hook.records().len(), 1);

    hook.set_identity(None);
    assert!(hook.records().is_empty());
    assert!(hook.ready());
    assert!(!hook.has_subscription());
    assert_eq!(store.open_subscriptions(), 0);
}

#[test]
fn test_identity_switch_never_shows_previous_records() {
    let (_store, mut hook) = setup();
    let alice = identity("alice", "alice@example.com");
    let bob = identity("bob", "bob@example.com");

    hook.set_identity(Some(alice.clone()));
    hook.process_pending();
    hook.add(&draft("https://a.com", "alice-user", "p")).unwrap();
    hook.process_pending();
    assert_eq!(hook.records().len(), 1);

    // The moment the identity switches, Alice's records are gone — even
    // before Bob's first snapshot is processed.
    hook.set_identity(Some(bob.clone()));
    assert!(hook.records().is_empty());

    hook.process_pending();
    assert!(hook.ready());
    assert!(hook.records().is_empty());
    assert!(hook.records().iter().all(|r| r.owner_id == bob.id));
}

#[test]
fn test_resubscribe_closes_previous_subscription() {
    let (store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    assert_eq!(store.open_subscriptions(), 1);

    hook.set_identity(Some(identity("bob", "b@x.com")));
    assert_eq!(store.open_subscriptions(), 1);
}

#[test]
fn test_records_isolated_per_identity() {
    let (store, mut hook) = setup();
    store
        .create(CREDENTIALS_COLLECTION, "alice", &draft("https://a.com", "a", "p"))
        .unwrap();
    store
        .create(CREDENTIALS_COLLECTION, "bob", &draft("https://b.com", "b", "p"))
        .unwrap();

    hook.set_identity(Some(identity("alice", "alice@example.com")));
    hook.process_pending();

    assert_eq!(hook.records().len(), 1);
    assert!(hook.records().iter().all(|r| r.owner_id == "alice"));
}

// ─── Snapshot handling ───

#[test]
fn test_subscription_error_resolves_loading() {
    // A store whose subscriptions fail before the first snapshot arrives.
    struct ErroringStore;

    impl RemoteStoreTrait for ErroringStore {
        fn live_query(
            &self,
            _collection: &str,
            _owner_id: &str,
        ) -> Result<passvault::store::remote::Subscription, passvault::types::errors::StoreError>
        {
            let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
            let _ = tx.send(passvault::store::remote::SnapshotEvent::Error(
                "connection reset".to_string(),
            ));
            Ok(passvault::store::remote::Subscription::new(rx))
        }

        fn create(
            &self,
            _collection: &str,
            _owner_id: &str,
            _draft: &CredentialDraft,
        ) -> Result<String, passvault::types::errors::StoreError> {
            unreachable!("not exercised")
        }

        fn update(
            &self,
            _collection: &str,
            _id: &str,
            _draft: &CredentialDraft,
        ) -> Result<(), passvault::types::errors::StoreError> {
            unreachable!("not exercised")
        }

        fn delete(
            &self,
            _collection: &str,
            _id: &str,
        ) -> Result<(), passvault::types::errors::StoreError> {
            unreachable!("not exercised")
        }
    }

    let mut hook = CredentialSyncHook::new(Arc::new(ErroringStore));
    hook.set_identity(Some(identity("alice", "a@x.com")));
    assert!(!hook.ready());

    hook.process_pending();
    // The list stays as-is but the UI is not stuck loading.
    assert!(hook.ready());
    assert!(hook.records().is_empty());
}

#[test]
fn test_mid_stream_error_keeps_current_records() {
    let (store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();
    hook.add(&draft("https://a.com", "a", "p")).unwrap();
    hook.process_pending();
    assert_eq!(hook.records().len(), 1);

    store.emit_subscription_error(CREDENTIALS_COLLECTION, "connection reset");
    hook.process_pending();
    assert!(hook.ready());
    assert_eq!(hook.records().len(), 1);
}

#[test]
fn test_subscription_open_failure_does_not_hang() {
    let (store, mut hook) = setup();
    store.set_unavailable(true);

    let alice = identity("alice", "a@x.com");
    hook.set_identity(Some(alice.clone()));

    assert!(hook.ready());
    assert_eq!(*hook.state(), SyncState::Synced(alice));
    assert!(!hook.has_subscription());
}

#[test]
fn test_later_snapshot_replaces_list_atomically() {
    let (store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();

    // A concurrent client (another tab) mutates the same identity's data.
    let id = store
        .create(CREDENTIALS_COLLECTION, "alice", &draft("https://a.com", "a", "p"))
        .unwrap();
    store.delete(CREDENTIALS_COLLECTION, &id).unwrap();

    hook.process_pending();
    assert!(hook.records().is_empty());
    assert!(hook.ready());
}

// ─── add ───

#[test]
fn test_add_requires_identity() {
    let (store, mut hook) = setup();
    let result = hook.add(&draft("https://a.com", "a", "p"));
    assert_eq!(result, Err(SyncError::NotAuthenticated));
    // No remote call was made.
    assert_eq!(store.open_subscriptions(), 0);
}

#[test]
fn test_add_reflects_via_next_snapshot() {
    let (_store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();

    hook.add(&draft("https://github.com", "octocat", "t0ps3cret"))
        .unwrap();
    // Not reflected until the snapshot is processed — no optimistic insert.
    assert!(hook.records().is_empty());

    hook.process_pending();
    assert_eq!(hook.records().len(), 1);
    let record = &hook.records()[0];
    assert_eq!(record.owner_id, "alice");
    assert_eq!(record.site_url, "https://github.com");
    assert_eq!(record.site_label, "github.com");
    assert_eq!(record.username, "octocat");
    assert_eq!(record.secret, "t0ps3cret");
    assert!(!record.id.is_empty());
}

#[test]
fn test_add_failure_leaves_records_unchanged() {
    let (store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();
    hook.add(&draft("https://a.com", "a", "p")).unwrap();
    hook.process_pending();
    let before = hook.records().to_vec();

    store.set_unavailable(true);
    let result = hook.add(&draft("https://b.com", "b", "p"));
    assert!(matches!(result, Err(SyncError::Store(_))));

    hook.process_pending();
    assert_eq!(hook.records(), before.as_slice());
}

// ─── update ───

#[test]
fn test_update_requires_identity() {
    let (_store, mut hook) = setup();
    let record = passvault::types::credential::CredentialRecord {
        id: "r1".to_string(),
        owner_id: "alice".to_string(),
        site_label: "a.com".to_string(),
        site_url: "https://a.com".to_string(),
        username: "a".to_string(),
        secret: "p".to_string(),
    };
    assert_eq!(hook.update(&record), Err(SyncError::NotAuthenticated));
}

#[test]
fn test_update_foreign_record_forbidden() {
    let (store, mut hook) = setup();
    store
        .create(CREDENTIALS_COLLECTION, "bob", &draft("https://b.com", "b", "p"))
        .unwrap();

    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();

    let foreign = passvault::types::credential::CredentialRecord {
        id: "r-bob".to_string(),
        owner_id: "bob".to_string(),
        site_label: "b.com".to_string(),
        site_url: "https://b.com".to_string(),
        username: "b".to_string(),
        secret: "p".to_string(),
    };
    assert_eq!(
        hook.update(&foreign),
        Err(SyncError::Forbidden("r-bob".to_string()))
    );
}

#[test]
fn test_update_preserves_id_and_owner() {
    let (_store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();
    hook.add(&draft("https://a.com", "old-user", "old-pass")).unwrap();
    hook.process_pending();

    let mut record = hook.records()[0].clone();
    let original_id = record.id.clone();
    record.username = "new-user".to_string();
    record.secret = "new-pass".to_string();

    hook.update(&record).unwrap();
    hook.process_pending();

    assert_eq!(hook.records().len(), 1);
    let updated = &hook.records()[0];
    assert_eq!(updated.id, original_id);
    assert_eq!(updated.owner_id, "alice");
    assert_eq!(updated.username, "new-user");
    assert_eq!(updated.secret, "new-pass");
}

// ─── remove ───

#[test]
fn test_remove_requires_identity() {
    let (_store, mut hook) = setup();
    assert_eq!(hook.remove("r1"), Err(SyncError::NotAuthenticated));
}

#[test]
fn test_remove_reflects_via_next_snapshot() {
    let (_store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();
    hook.add(&draft("https://a.com", "a", "p")).unwrap();
    hook.process_pending();
    let id = hook.records()[0].id.clone();

    hook.remove(&id).unwrap();
    hook.process_pending();
    assert!(hook.records().iter().all(|r| r.id != id));
    assert!(hook.records().is_empty());
}

#[test]
fn test_remove_does_not_check_ownership_client_side() {
    // Ownership on delete is delegated to store-side policy; the hook
    // dispatches the call as long as someone is signed in.
    let (store, mut hook) = setup();
    let bob_record = store
        .create(CREDENTIALS_COLLECTION, "bob", &draft("https://b.com", "b", "p"))
        .unwrap();

    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();

    assert!(hook.remove(&bob_record).is_ok());
}

// ─── Search filter ───

#[test]
fn test_filter_records_matches_content_case_insensitively() {
    let (_store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();
    hook.add(&draft("https://github.com", "octocat", "p1")).unwrap();
    hook.add(&draft("https://gitlab.com", "tanuki", "p2")).unwrap();
    hook.add(&draft("https://example.org", "nobody", "p3")).unwrap();
    hook.process_pending();

    assert_eq!(hook.filter_records("GITHUB").len(), 1);
    assert_eq!(hook.filter_records("git").len(), 2);
    assert_eq!(hook.filter_records("octo").len(), 1);
    assert_eq!(hook.filter_records("").len(), 3);
    assert!(hook.filter_records("zzz").is_empty());
}

#[test]
fn test_filter_preserves_snapshot_order() {
    let (_store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();
    hook.add(&draft("https://one.dev", "u1", "p")).unwrap();
    hook.add(&draft("https://two.dev", "u2", "p")).unwrap();
    hook.add(&draft("https://three.dev", "u3", "p")).unwrap();
    hook.process_pending();

    let matches = hook.filter_records("dev");
    let labels: Vec<&str> = matches.iter().map(|r| r.site_label.as_str()).collect();
    assert_eq!(labels, vec!["one.dev", "two.dev", "three.dev"]);
}

// ─── Duplicate ids ───

#[test]
fn test_snapshot_records_have_unique_ids() {
    let (_store, mut hook) = setup();
    hook.set_identity(Some(identity("alice", "a@x.com")));
    hook.process_pending();
    for i in 0..5 {
        hook.add(&draft(&format!("https://site{}.com", i), "u", "p"))
            .unwrap();
    }
    hook.process_pending();

    let mut ids: Vec<&str> = hook.records().iter().map(|r| r.id.as_str()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
