use std::fmt;

// === AuthError ===

/// Errors surfaced by the identity provider.
///
/// The `Display` strings are the user-facing friendly messages — they are
/// shown directly by the UI layer and never thrown past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The email address is malformed.
    InvalidEmail,
    /// Unknown email or wrong password. Deliberately indistinguishable.
    InvalidCredential,
    /// An account with this email already exists.
    EmailInUse,
    /// The chosen password does not meet the minimum length.
    WeakPassword,
    /// The provider's sign-in popup was dismissed before completion.
    PopupClosed,
    /// Any other provider failure.
    Unexpected(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidEmail => write!(f, "Please enter a valid email address."),
            AuthError::InvalidCredential => write!(f, "Invalid email or password."),
            AuthError::EmailInUse => write!(f, "This email address is already in use."),
            AuthError::WeakPassword => {
                write!(f, "The password is too weak. Please use at least 6 characters.")
            }
            AuthError::PopupClosed => {
                write!(f, "The sign-in popup was closed. Please try again.")
            }
            AuthError::Unexpected(_) => {
                write!(f, "An unexpected error occurred. Please try again.")
            }
        }
    }
}

impl std::error::Error for AuthError {}

// === ValidationError ===

/// Form-level validation errors, caught at submission time.
/// These never reach the sync layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The website URL is not a well-formed http/https URL.
    MalformedUrl(String),
    /// A required field was left empty.
    EmptyField(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MalformedUrl(url) => write!(f, "Please enter a valid URL: {}", url),
            ValidationError::EmptyField(field) => write!(f, "Required field is empty: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}

// === StoreError ===

/// Transport-level errors from the remote document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or rejected the request.
    Unavailable(String),
    /// No document with the given id exists in the collection.
    NotFound(String),
    /// Opening a live query subscription failed.
    SubscriptionFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Remote store unavailable: {}", msg),
            StoreError::NotFound(id) => write!(f, "Document not found: {}", id),
            StoreError::SubscriptionFailed(msg) => {
                write!(f, "Live query subscription failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === SyncError ===

/// Errors surfaced by the credential sync hook's mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// No identity is signed in; no remote call was made.
    NotAuthenticated,
    /// The record belongs to a different identity; no remote call was made.
    Forbidden(String),
    /// The remote call was dispatched and failed. The in-memory list is unchanged.
    Store(StoreError),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::NotAuthenticated => write!(f, "Not authenticated"),
            SyncError::Forbidden(id) => {
                write!(f, "Record {} is not owned by the current identity", id)
            }
            SyncError::Store(err) => write!(f, "Sync store error: {}", err),
        }
    }
}

impl std::error::Error for SyncError {}

// === GeneratorError ===

/// Errors from the password generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// All charset toggles are disabled.
    EmptyCharset,
    /// The system random source failed.
    RandomGeneration(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::EmptyCharset => {
                write!(f, "Empty charset: select at least one character type")
            }
            GeneratorError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

// === AdvisorError ===

/// Errors from the strength advisor. Any transport, provider, or parse
/// failure collapses to `AnalysisUnavailable` with the underlying detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    AnalysisUnavailable(String),
}

impl fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisorError::AnalysisUnavailable(msg) => {
                write!(f, "Analysis unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for AdvisorError {}

// === VaultError ===

/// Errors from the legacy local vault file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// An I/O error occurred while reading or writing the vault file.
    IoError(String),
    /// Failed to serialize or deserialize the record list.
    SerializationError(String),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::IoError(msg) => write!(f, "Vault I/O error: {}", msg),
            VaultError::SerializationError(msg) => {
                write!(f, "Vault serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for VaultError {}
