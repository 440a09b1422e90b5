//! Configuration file support for the purchase order item handler.
//!
//! Provides YAML-based configuration through `pof-item-reader.config.yml`
//! files, including defaults, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::purchase_order_item::services::FilterBuilder;
use crate::shared::error::PofError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "pof-item-reader.config.yml";

/// Namespace of the tracking model the sample application is deployed with.
pub const DEFAULT_MODEL_NAMESPACE: &str =
    "com.sap.gtt.app.sample.pof.PurchaseOrderFulfillmentModel";

/// Default number of concurrent event directory lookups.
pub const DEFAULT_MAX_PARALLEL_LOOKUPS: usize = 4;

/// Handler configuration schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Model namespace prefixed to event types
    pub model_namespace: String,
    /// Maximum number of id parts in one `$filter` expression
    pub max_parts_per_filter: usize,
    /// Maximum number of directory lookups in flight
    pub max_parallel_lookups: usize,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            model_namespace: DEFAULT_MODEL_NAMESPACE.to_string(),
            max_parts_per_filter: FilterBuilder::DEFAULT_MAX_PARTS,
            max_parallel_lookups: DEFAULT_MAX_PARALLEL_LOOKUPS,
            unknown_fields: HashMap::new(),
        }
    }
}

impl HandlerConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: HandlerConfig = serde_yaml_ng::from_str(content)
            .context("Failed to parse handler config\n\n💡 Hint: Ensure the file contains valid YAML syntax.")?;
        config.validate()?;
        warn_unknown_fields(&config);
        Ok(config)
    }

    /// Validate the loaded configuration.
    pub fn validate(&self) -> Result<()> {
        if self.model_namespace.trim().is_empty() {
            return Err(invalid("model_namespace", "must not be empty"));
        }
        if self.max_parts_per_filter == 0 {
            return Err(invalid("max_parts_per_filter", "must be greater than zero"));
        }
        if self.max_parallel_lookups == 0 {
            return Err(invalid("max_parallel_lookups", "must be greater than zero"));
        }
        Ok(())
    }

    pub fn filter_builder(&self) -> FilterBuilder {
        FilterBuilder::new(self.max_parts_per_filter)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<HandlerConfig> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    HandlerConfig::from_yaml(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<HandlerConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(field: &str, reason: &str) -> anyhow::Error {
    PofError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &HandlerConfig) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field will be ignored");
    }
}
