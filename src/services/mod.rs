// PassVault services
// Services provide core functionality: authentication, credential sync,
// password generation, and strength analysis.

pub mod auth_provider;
pub mod credential_sync;
pub mod password_generator;
pub mod strength_advisor;
