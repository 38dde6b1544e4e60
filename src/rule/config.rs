// SPDX-License-Identifier: MIT

//! Color condition configuration
//!
//! Every code, label and target value the condition uses comes from here,
//! so the matched color can change without a rebuild.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConditionError, Result};

/// Environment variable naming a config file when none is given explicitly
pub const CONFIG_ENV_VAR: &str = "ORDER_COLOR_CONFIG";

/// Immutable settings for the color condition
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColorConditionConfig {
    /// Condition attribute code registered with the rule engine
    pub attribute_code: String,
    /// Label shown for the condition attribute in the rule builder
    pub attribute_label: String,
    /// Label of the single selectable value
    pub option_label: String,
    /// Option label matched on configurable product selections
    pub product_attribute_label: String,
    /// Attribute code looked up on simple products
    pub product_attribute_code: String,
    /// Value an item must carry to match
    pub target_value: String,
}

impl Default for ColorConditionConfig {
    fn default() -> Self {
        Self {
            attribute_code: "order_color".to_string(),
            attribute_label: "The cart has an item with red color".to_string(),
            option_label: "Red".to_string(),
            product_attribute_label: "Color".to_string(),
            product_attribute_code: "color".to_string(),
            target_value: "red".to_string(),
        }
    }
}

impl ColorConditionConfig {
    /// Reject settings that could never identify or match anything
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("attribute_code", &self.attribute_code),
            ("product_attribute_label", &self.product_attribute_label),
            ("product_attribute_code", &self.product_attribute_code),
            ("target_value", &self.target_value),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConditionError::invalid_config(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

/// Loads condition configuration from YAML files
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and validate a configuration file
    pub fn load_config<P: AsRef<Path>>(&self, path: P) -> Result<ColorConditionConfig> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Config file to use: the explicit path, else `ORDER_COLOR_CONFIG`
    pub fn config_path(explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
    }

    /// Load from the resolved path, or fall back to the defaults when there is none
    pub fn resolve(&self, explicit: Option<&str>) -> Result<ColorConditionConfig> {
        match Self::config_path(explicit) {
            Some(path) => {
                log::info!("Loading condition config from {}", path);
                self.load_config(&path)
            }
            None => Ok(ColorConditionConfig::default()),
        }
    }

    /// Parse and validate a configuration from a YAML string
    pub fn parse_yaml(content: &str) -> Result<ColorConditionConfig> {
        let config: ColorConditionConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
