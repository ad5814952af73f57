// PassVault shared type definitions
// Each submodule defines types used across the application.

pub mod advisor;
pub mod credential;
pub mod errors;
pub mod identity;
