use serde::{Deserialize, Serialize};

/// Settings applied when building a session registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryOptions {
    /// How provider-backed repositories answer validity checks
    #[cfg(feature = "provider")]
    #[serde(default)]
    pub provider_validation: nodereg_provider::ProviderValidation,
}
