//! Vault integration configuration
//!
//! One layer of Vault client settings. Layers come from compiled-in
//! defaults, config files, or runtime overrides; callers fold them
//! pairwise with [`VaultConfig::merge`] into the effective configuration
//! handed to the Vault client.
//!
//! The boolean knobs are tri-state (`Option<bool>`): unset, explicitly
//! on, or explicitly off. Merge must tell "not configured" apart from
//! "configured off", so a plain `bool` would lose information here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default Vault service address used by the baseline layer.
pub const DEFAULT_VAULT_ADDR: &str = "https://vault.service.consul:8200";

/// Default interval between connection attempts to the Vault server.
pub const DEFAULT_CONNECTION_RETRY_INTERVAL: Duration = Duration::from_secs(30);

/// One layer of Vault integration settings.
///
/// String fields use the empty string as their "not specified" sentinel:
/// a layer cannot explicitly clear a string to empty, it can only leave
/// it for the layer below. `connection_retry_interval` has no unset
/// sentinel at all; zero is a legitimate explicit value and the overlay
/// always wins for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Whether the Vault integration is active. Unset means "not
    /// configured by this layer", which [`VaultConfig::is_enabled`]
    /// treats as disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Vault token used to derive task tokens.
    #[serde(default)]
    pub token: String,

    /// Vault role to authenticate against.
    #[serde(default)]
    pub role: String,

    /// TTL of tokens derived for tasks.
    #[serde(default)]
    pub task_token_ttl: String,

    /// Address of the Vault server.
    #[serde(default)]
    pub addr: String,

    /// Whether callers without a Vault token of their own may proceed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_unauthenticated: Option<bool>,

    /// Interval between connection attempts to the Vault server.
    #[serde(default)]
    pub connection_retry_interval: Duration,

    /// Path to a PEM-encoded CA certificate file.
    #[serde(default)]
    pub tls_ca_file: String,

    /// Path to a directory of PEM-encoded CA certificate files.
    #[serde(default)]
    pub tls_ca_path: String,

    /// Path to the client certificate for Vault communication.
    #[serde(default)]
    pub tls_cert_file: String,

    /// Path to the private key for Vault communication.
    #[serde(default)]
    pub tls_key_file: String,

    /// Whether TLS certificate verification is bypassed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_skip_verify: Option<bool>,

    /// Expected TLS server name (SNI) of the Vault server.
    #[serde(default)]
    pub tls_server_name: String,
}

impl Default for VaultConfig {
    /// The baseline layer: default address and retry interval,
    /// unauthenticated callers explicitly allowed, everything else
    /// unset. This is the first layer in any merge chain.
    fn default() -> Self {
        VaultConfig {
            enabled: None,
            token: String::new(),
            role: String::new(),
            task_token_ttl: String::new(),
            addr: DEFAULT_VAULT_ADDR.to_string(),
            allow_unauthenticated: Some(true),
            connection_retry_interval: DEFAULT_CONNECTION_RETRY_INTERVAL,
            tls_ca_file: String::new(),
            tls_ca_path: String::new(),
            tls_cert_file: String::new(),
            tls_key_file: String::new(),
            tls_skip_verify: None,
            tls_server_name: String::new(),
        }
    }
}

impl VaultConfig {
    /// Merge an overlay layer onto this one, returning a fresh record.
    ///
    /// Per-field semantics:
    /// - Strings: the overlay wins only if its value is non-empty; an
    ///   empty overlay string never erases the base value.
    /// - Tri-state booleans: the overlay wins whenever it is set,
    ///   including an explicit `false`; only an unset overlay field
    ///   falls through to the base.
    /// - `connection_retry_interval`: always taken from the overlay.
    ///
    /// Not commutative: `a.merge(&b)` generally differs from
    /// `b.merge(&a)`. Neither input is mutated.
    pub fn merge(&self, overlay: &VaultConfig) -> VaultConfig {
        let mut merged = self.clone();

        if let Some(enabled) = overlay.enabled {
            merged.enabled = Some(enabled);
        }
        if !overlay.token.is_empty() {
            merged.token = overlay.token.clone();
        }
        if !overlay.role.is_empty() {
            merged.role = overlay.role.clone();
        }
        if !overlay.task_token_ttl.is_empty() {
            merged.task_token_ttl = overlay.task_token_ttl.clone();
        }
        if !overlay.addr.is_empty() {
            merged.addr = overlay.addr.clone();
        }
        if let Some(allow) = overlay.allow_unauthenticated {
            merged.allow_unauthenticated = Some(allow);
        }
        merged.connection_retry_interval = overlay.connection_retry_interval;
        if !overlay.tls_ca_file.is_empty() {
            merged.tls_ca_file = overlay.tls_ca_file.clone();
        }
        if !overlay.tls_ca_path.is_empty() {
            merged.tls_ca_path = overlay.tls_ca_path.clone();
        }
        if !overlay.tls_cert_file.is_empty() {
            merged.tls_cert_file = overlay.tls_cert_file.clone();
        }
        if !overlay.tls_key_file.is_empty() {
            merged.tls_key_file = overlay.tls_key_file.clone();
        }
        if let Some(skip) = overlay.tls_skip_verify {
            merged.tls_skip_verify = Some(skip);
        }
        if !overlay.tls_server_name.is_empty() {
            merged.tls_server_name = overlay.tls_server_name.clone();
        }

        merged
    }

    /// Whether the Vault integration is active. An unset `enabled`
    /// counts as disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Whether callers without credentials may proceed.
    ///
    /// Returns `false` when the field is unset. Note that the baseline
    /// layer from [`VaultConfig::default`] sets this field to
    /// `Some(true)`, so layers merged against the baseline read `true`
    /// unless some layer explicitly turned it off; only a config that
    /// skipped the baseline layer hits the `false` floor here.
    pub fn allows_unauthenticated(&self) -> bool {
        self.allow_unauthenticated.unwrap_or(false)
    }
}
