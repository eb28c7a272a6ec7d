//! Service configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) yields the standard limits.
//!
//! ```ignore
//! use itemstore_core::config::ServiceConfig;
//!
//! let config = ServiceConfig::from_json_str(r#"{"limits":{"maxNameLen":80}}"#)?;
//! assert_eq!(config.limits.max_name_len, 80);
//! assert_eq!(config.limits.max_description_len, 1000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ItemStoreError, ItemStoreResult};

pub const DEFAULT_MAX_NAME_LEN: usize = 200;
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 1000;
pub const DEFAULT_MAX_CATEGORY_LEN: usize = 100;

/// Maximum lengths, in characters, accepted by request validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationLimits {
    pub max_name_len: usize,
    pub max_description_len: usize,
    pub max_category_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
            max_category_len: DEFAULT_MAX_CATEGORY_LEN,
        }
    }
}

/// Configuration for an [`ItemService`](crate::service::ItemService).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceConfig {
    pub limits: ValidationLimits,
}

impl ServiceConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Serialization`] for malformed JSON and
    /// [`ItemStoreError::Configuration`] for values that fail [`ServiceConfig::validate`].
    pub fn from_json_str(json: &str) -> ItemStoreResult<Self> {
        let config: ServiceConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    /// Checks that the configuration can accept at least some input.
    ///
    /// A zero maximum for `name` or `description` would reject every request,
    /// since both are required and must be non-empty.
    pub fn validate(&self) -> ItemStoreResult<()> {
        if self.limits.max_name_len == 0 {
            return Err(ItemStoreError::Configuration(
                "maxNameLen must be greater than zero".to_string(),
            ));
        }

        if self.limits.max_description_len == 0 {
            return Err(ItemStoreError::Configuration(
                "maxDescriptionLen must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = ServiceConfig::from_json_str("{}").unwrap();

        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.limits.max_name_len, 200);
        assert_eq!(config.limits.max_description_len, 1000);
        assert_eq!(config.limits.max_category_len, 100);
    }

    #[test]
    fn partial_limits_keep_remaining_defaults() {
        let config = ServiceConfig::from_json_str(r#"{"limits":{"maxNameLen":80}}"#).unwrap();

        assert_eq!(config.limits.max_name_len, 80);
        assert_eq!(config.limits.max_description_len, DEFAULT_MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn zero_name_limit_is_rejected() {
        let err = ServiceConfig::from_json_str(r#"{"limits":{"maxNameLen":0}}"#).unwrap_err();

        assert!(matches!(err, ItemStoreError::Configuration(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = ServiceConfig::from_json_str("{limits").unwrap_err();

        assert!(matches!(err, ItemStoreError::Serialization(_)));
    }
}
