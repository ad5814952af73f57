//! PassVault — a personal password manager with identity-scoped live sync.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod platform;
pub mod services;
pub mod store;
pub mod types;
