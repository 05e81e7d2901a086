//! Assessment store configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Assessment store configuration
///
/// The namespace partitions stored data per deployment, so several
/// instances sharing a backend never see each other's records.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Deployment namespace for stored assessments
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.namespace.trim().is_empty() {
            return Err(ValidationError::EmptyStoreNamespace);
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    "default-cobit-app".to_string()
}
