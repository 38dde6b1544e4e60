// SPDX-License-Identifier: MIT

//! Host-side address condition driven through registered hooks

use std::collections::BTreeMap;

use super::cart::Cart;
use super::hooks::HookRegistry;
use super::metadata::{CompareOp, InputType, SelectOption};

/// A rule condition comparing one address attribute against a value
#[derive(Debug, Clone)]
pub struct AddressCondition {
    pub attribute: String,
    pub operator: CompareOp,
    pub value: String,
    value_select_options: Option<Vec<SelectOption>>,
}

impl AddressCondition {
    pub fn new(
        attribute: impl Into<String>,
        operator: CompareOp,
        value: impl Into<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            value: value.into(),
            value_select_options: None,
        }
    }

    /// Attribute code to label map offered by the rule builder
    pub fn load_attribute_options(hooks: &HookRegistry) -> BTreeMap<String, String> {
        let mut options = BTreeMap::new();
        hooks.load_attribute_options(&mut options);
        options
    }

    pub fn input_type(&self, hooks: &HookRegistry) -> InputType {
        hooks.input_type(&self.attribute, InputType::String)
    }

    pub fn value_element_type(&self, hooks: &HookRegistry) -> InputType {
        hooks.value_element_type(&self.attribute, InputType::Text)
    }

    /// Options for the value element; the stored list is what the host renders by default
    pub fn value_select_options(&mut self, hooks: &HookRegistry) -> Vec<SelectOption> {
        let stored = self.value_select_options.clone().unwrap_or_default();
        hooks.value_select_options(&self.attribute, &mut self.value_select_options, stored)
    }

    /// Options stored on the condition by earlier `value_select_options` calls
    pub fn cached_select_options(&self) -> Option<&[SelectOption]> {
        self.value_select_options.as_deref()
    }

    /// Run the validation hooks, then compare the rule address data
    pub fn validate(&self, cart: &mut Cart, hooks: &HookRegistry) -> bool {
        hooks.before_validate(&self.attribute, cart);

        let address = cart.address(cart.rule_address_type());
        let actual = address.get_data(&self.attribute);
        let result = self.operator.apply(actual, &self.value);

        log::debug!(
            "Condition {} {} '{}' against {:?}: {}",
            self.attribute,
            self.operator,
            self.value,
            actual,
            result
        );
        result
    }
}
