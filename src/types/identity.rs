use serde::{Deserialize, Serialize};

/// The authenticated user session.
///
/// The `id` is stable for the lifetime of the account — the same email
/// always maps to the same identity id across sign-ins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}
