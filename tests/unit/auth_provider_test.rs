//! Unit tests for the identity provider.
//!
//! Tests sign-up validation, sign-in, sign-out, stable identity ids,
//! and the identity-changed notification channel.

use passvault::services::auth_provider::{AuthProvider, AuthProviderTrait};
use passvault::types::errors::AuthError;

fn setup() -> AuthProvider {
    AuthProvider::new()
}

// ─── Sign up ───

#[test]
fn test_sign_up_returns_identity() {
    let auth = setup();
    let identity = auth.sign_up("alice@example.com", "secret-123").unwrap();
    assert_eq!(identity.email, "alice@example.com");
    assert!(!identity.id.is_empty());
}

#[test]
fn test_sign_up_signs_in() {
    let auth = setup();
    let identity = auth.sign_up("alice@example.com", "secret-123").unwrap();
    assert_eq!(auth.current_identity(), Some(identity));
}

#[test]
fn test_sign_up_rejects_malformed_email() {
    let auth = setup();
    assert_eq!(auth.sign_up("not-an-email", "secret-123"), Err(AuthError::InvalidEmail));
    assert_eq!(auth.sign_up("@example.com", "secret-123"), Err(AuthError::InvalidEmail));
    assert_eq!(auth.sign_up("alice@nodot", "secret-123"), Err(AuthError::InvalidEmail));
}

#[test]
fn test_sign_up_rejects_weak_password() {
    let auth = setup();
    assert_eq!(auth.sign_up("alice@example.com", "12345"), Err(AuthError::WeakPassword));
}

#[test]
fn test_sign_up_rejects_duplicate_email() {
    let auth = setup();
    auth.sign_up("alice@example.com", "secret-123").unwrap();
    assert_eq!(
        auth.sign_up("alice@example.com", "other-secret"),
        Err(AuthError::EmailInUse)
    );
}

// ─── Sign in / out ───

#[test]
fn test_sign_in_with_correct_credentials() {
    let auth = setup();
    let created = auth.sign_up("alice@example.com", "secret-123").unwrap();
    auth.sign_out();

    let identity = auth
        .sign_in_with_password("alice@example.com", "secret-123")
        .unwrap();
    assert_eq!(identity, created);
}

#[test]
fn test_sign_in_wrong_password_and_unknown_email_look_identical() {
    let auth = setup();
    auth.sign_up("alice@example.com", "secret-123").unwrap();
    auth.sign_out();

    let wrong_pass = auth.sign_in_with_password("alice@example.com", "nope-nope");
    let unknown = auth.sign_in_with_password("ghost@example.com", "secret-123");
    assert_eq!(wrong_pass, Err(AuthError::InvalidCredential));
    assert_eq!(unknown, Err(AuthError::InvalidCredential));
}

#[test]
fn test_sign_out_clears_current_identity() {
    let auth = setup();
    auth.sign_up("alice@example.com", "secret-123").unwrap();
    auth.sign_out();
    assert_eq!(auth.current_identity(), None);
}

#[test]
fn test_identity_id_stable_across_sessions() {
    let auth = setup();
    let first = auth.sign_up("alice@example.com", "secret-123").unwrap();
    auth.sign_out();
    let second = auth
        .sign_in_with_password("alice@example.com", "secret-123")
        .unwrap();
    assert_eq!(first.id, second.id);
}

// ─── Notifications ───

#[test]
fn test_subscribe_observes_identity_changes() {
    let auth = setup();
    let mut rx = auth.subscribe();
    assert!(rx.borrow_and_update().is_none());

    let identity = auth.sign_up("alice@example.com", "secret-123").unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().clone(), Some(identity));

    auth.sign_out();
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().is_none());
}

// ─── Friendly messages ───

#[test]
fn test_errors_render_friendly_messages() {
    assert_eq!(
        AuthError::InvalidCredential.to_string(),
        "Invalid email or password."
    );
    assert_eq!(
        AuthError::EmailInUse.to_string(),
        "This email address is already in use."
    );
    assert_eq!(
        AuthError::WeakPassword.to_string(),
        "The password is too weak. Please use at least 6 characters."
    );
}
