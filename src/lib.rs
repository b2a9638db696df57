//! Vault integration configuration
//!
//! Layered configuration for an agent's Vault secrets backend. A
//! [`VaultConfig`] is one layer of settings; successive layers (defaults,
//! file, runtime overrides) fold pairwise via [`VaultConfig::merge`] into
//! the effective configuration handed to the Vault client.

pub mod config;

pub use config::{VaultConfig, DEFAULT_CONNECTION_RETRY_INTERVAL, DEFAULT_VAULT_ADDR};
