//! Configuration layers
//!
//! Settings arrive in layers (compiled-in defaults, config file, runtime
//! overrides); each layer is a value record that knows how to merge an
//! overlay onto itself. Parsing layers out of files or flags is the
//! loader's job, not this module's.

mod vault;

pub use vault::{VaultConfig, DEFAULT_CONNECTION_RETRY_INTERVAL, DEFAULT_VAULT_ADDR};
