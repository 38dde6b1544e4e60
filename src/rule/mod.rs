// SPDX-License-Identifier: MIT

//! Cart color condition for promotion rules
//!
//! This module provides:
//! - `ColorConditionEvaluator` - decides whether a cart holds a red item
//! - `ConditionMetadata` - what the rule builder needs to render the attribute
//! - `ConditionHook` / `HookRegistry` - extension points the host invokes
//! - `AddressCondition` - host-side condition validated through the hooks

mod cart;
mod condition;
mod config;
mod evaluator;
mod hooks;
mod metadata;

pub use cart::{
    Address, AddressType, Cart, CartLoader, LineItem, Product, ProductKind, SelectedOption,
};
pub use condition::AddressCondition;
pub use config::{ColorConditionConfig, ConfigLoader, CONFIG_ENV_VAR};
pub use evaluator::ColorConditionEvaluator;
pub use hooks::{AddressStamp, ColorConditionHook, ConditionHook, HookRegistry};
pub use metadata::{
    value_options, CompareOp, ConditionMetadata, InputType, OperatorOption, SelectOption,
};
