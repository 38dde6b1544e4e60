// SPDX-License-Identifier: MIT

//! Static metadata the rule builder needs to render the condition

use serde::{Deserialize, Serialize};

use super::config::ColorConditionConfig;

/// Comparison operators a rule condition can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CompareOp {
    /// ==
    #[serde(rename = "==")]
    Eq,
    /// !=
    #[serde(rename = "!=")]
    NotEq,
}

impl CompareOp {
    /// Human-readable label shown in the rule builder
    pub fn label(&self) -> &'static str {
        match self {
            CompareOp::Eq => "is",
            CompareOp::NotEq => "is not",
        }
    }

    /// Apply the operator to an optional left-hand value
    pub fn apply(&self, left: Option<&str>, right: &str) -> bool {
        match self {
            CompareOp::Eq => left == Some(right),
            CompareOp::NotEq => left != Some(right),
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::NotEq => write!(f, "!="),
        }
    }
}

/// Rendering hint for condition inputs and value elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    String,
    Text,
    Select,
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputType::String => write!(f, "string"),
            InputType::Text => write!(f, "text"),
            InputType::Select => write!(f, "select"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OperatorOption {
    pub operator: CompareOp,
    pub label: String,
}

impl From<CompareOp> for OperatorOption {
    fn from(operator: CompareOp) -> Self {
        Self {
            operator,
            label: operator.label().to_string(),
        }
    }
}

/// Everything the host UI needs to offer the color condition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConditionMetadata {
    pub attribute_code: String,
    pub attribute_label: String,
    pub input_type: InputType,
    pub value_element_type: InputType,
    pub value_options: Vec<SelectOption>,
    pub operators: Vec<OperatorOption>,
}

impl ConditionMetadata {
    pub fn from_config(config: &ColorConditionConfig) -> Self {
        Self {
            attribute_code: config.attribute_code.clone(),
            attribute_label: config.attribute_label.clone(),
            input_type: InputType::Select,
            value_element_type: InputType::Select,
            value_options: value_options(config),
            operators: vec![CompareOp::Eq.into()],
        }
    }
}

/// The single selectable value of the color condition
pub fn value_options(config: &ColorConditionConfig) -> Vec<SelectOption> {
    vec![SelectOption {
        value: config.target_value.clone(),
        label: config.option_label.clone(),
    }]
}
