use crate::form::ValidationOptions;
use serde::{Deserialize, Serialize};

/// Settings for the registration flow.
///
/// Every field defaults so that a missing or incomplete `[registration]`
/// table keeps the lenient presence-only behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RegistrationConfig {
    /// Require the Kolide web address to be an absolute `http`/`https` URL.
    #[serde(default)]
    pub require_url: bool,
}

impl RegistrationConfig {
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            require_url: self.require_url,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub registration: RegistrationConfig,
}
