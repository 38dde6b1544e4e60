// SPDX-License-Identifier: MIT

//! Extension points the host rule engine invokes while building and
//! validating address conditions
//!
//! Each method receives the host's current value and returns the value the
//! host should continue with. Hooks leave attributes they don't own untouched.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::cart::{AddressType, Cart};
use super::config::ColorConditionConfig;
use super::evaluator::ColorConditionEvaluator;
use super::metadata::{value_options, InputType, SelectOption};

/// Data a hook wants written onto a quote address before validation;
/// a `None` value removes the key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressStamp {
    pub address_type: AddressType,
    pub key: String,
    pub value: Option<String>,
}

/// Lifecycle callbacks for a pluggable condition attribute
pub trait ConditionHook: Send + Sync {
    /// Add attribute codes and labels to the rule builder's attribute list
    fn load_attribute_options(&self, options: &mut BTreeMap<String, String>);

    fn input_type(&self, attribute: &str, current: InputType) -> InputType;

    fn value_element_type(&self, attribute: &str, current: InputType) -> InputType;

    /// Options for the value element; `cached` is the condition's stored list
    /// and `current` what the host would render so far
    fn value_select_options(
        &self,
        attribute: &str,
        cached: &mut Option<Vec<SelectOption>>,
        current: Vec<SelectOption>,
    ) -> Vec<SelectOption>;

    /// Called before the condition validates a cart
    fn before_validate(&self, attribute: &str, cart: &Cart) -> Option<AddressStamp>;
}

/// Hook that contributes the cart color attribute
#[derive(Debug, Clone)]
pub struct ColorConditionHook {
    evaluator: ColorConditionEvaluator,
}

impl ColorConditionHook {
    pub fn new(config: ColorConditionConfig) -> Self {
        Self {
            evaluator: ColorConditionEvaluator::new(config),
        }
    }

    fn config(&self) -> &ColorConditionConfig {
        self.evaluator.config()
    }

    fn owns(&self, attribute: &str) -> bool {
        attribute == self.config().attribute_code
    }
}

impl Default for ColorConditionHook {
    fn default() -> Self {
        Self::new(ColorConditionConfig::default())
    }
}

impl ConditionHook for ColorConditionHook {
    fn load_attribute_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            self.config().attribute_code.clone(),
            self.config().attribute_label.clone(),
        );
    }

    fn input_type(&self, attribute: &str, current: InputType) -> InputType {
        if self.owns(attribute) {
            InputType::Select
        } else {
            current
        }
    }

    fn value_element_type(&self, attribute: &str, current: InputType) -> InputType {
        if self.owns(attribute) {
            InputType::Select
        } else {
            current
        }
    }

    fn value_select_options(
        &self,
        attribute: &str,
        cached: &mut Option<Vec<SelectOption>>,
        current: Vec<SelectOption>,
    ) -> Vec<SelectOption> {
        if !self.owns(attribute) {
            return current;
        }

        if cached.as_ref().is_some_and(|options| !options.is_empty()) {
            return current;
        }

        let options = value_options(self.config());
        *cached = Some(options.clone());
        options
    }

    fn before_validate(&self, attribute: &str, cart: &Cart) -> Option<AddressStamp> {
        if !self.owns(attribute) {
            return None;
        }

        let value = self
            .evaluator
            .matches(cart)
            .then(|| self.config().target_value.clone());

        Some(AddressStamp {
            address_type: cart.rule_address_type(),
            key: self.config().attribute_code.clone(),
            value,
        })
    }
}

/// Ordered set of hooks the host runs at each lifecycle point
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: Vec<Arc<dyn ConditionHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn register(&mut self, hook: Arc<dyn ConditionHook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn load_attribute_options(&self, options: &mut BTreeMap<String, String>) {
        for hook in &self.hooks {
            hook.load_attribute_options(options);
        }
    }

    pub fn input_type(&self, attribute: &str, default: InputType) -> InputType {
        self.hooks
            .iter()
            .fold(default, |current, hook| hook.input_type(attribute, current))
    }

    pub fn value_element_type(&self, attribute: &str, default: InputType) -> InputType {
        self.hooks.iter().fold(default, |current, hook| {
            hook.value_element_type(attribute, current)
        })
    }

    pub fn value_select_options(
        &self,
        attribute: &str,
        cached: &mut Option<Vec<SelectOption>>,
        default: Vec<SelectOption>,
    ) -> Vec<SelectOption> {
        self.hooks.iter().fold(default, |current, hook| {
            hook.value_select_options(attribute, cached, current)
        })
    }

    /// Run every `before_validate` hook and apply the stamps to the cart's addresses
    pub fn before_validate(&self, attribute: &str, cart: &mut Cart) {
        for hook in &self.hooks {
            let Some(stamp) = hook.before_validate(attribute, cart) else {
                continue;
            };

            log::debug!(
                "Stamping {}={:?} on {:?} address",
                stamp.key,
                stamp.value,
                stamp.address_type
            );
            let address = cart.address_mut(stamp.address_type);
            match stamp.value {
                Some(value) => address.set_data(stamp.key, value),
                None => {
                    address.remove_data(&stamp.key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::cart::{LineItem, Product};

    fn red_cart() -> Cart {
        Cart::new(vec![LineItem::new(Product::configurable(
            "TEE",
            &[("Color", "red")],
        ))])
    }

    #[test]
    fn test_load_attribute_options_keeps_existing() {
        let hook = ColorConditionHook::default();
        let mut options = BTreeMap::new();
        options.insert("base_subtotal".to_string(), "Subtotal".to_string());

        hook.load_attribute_options(&mut options);

        assert_eq!(options.len(), 2);
        assert_eq!(
            options.get("order_color").map(String::as_str),
            Some("The cart has an item with red color")
        );
        assert_eq!(
            options.get("base_subtotal").map(String::as_str),
            Some("Subtotal")
        );
    }

    #[test]
    fn test_input_types_only_for_own_attribute() {
        let hook = ColorConditionHook::default();
        assert_eq!(
            hook.input_type("order_color", InputType::String),
            InputType::Select
        );
        assert_eq!(
            hook.input_type("base_subtotal", InputType::String),
            InputType::String
        );
        assert_eq!(
            hook.value_element_type("order_color", InputType::Text),
            InputType::Select
        );
        assert_eq!(
            hook.value_element_type("weight", InputType::Text),
            InputType::Text
        );
    }

    #[test]
    fn test_value_select_options_fills_empty_cache() {
        let hook = ColorConditionHook::default();
        let mut cached = None;

        let options = hook.value_select_options("order_color", &mut cached, vec![]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "red");
        assert_eq!(options[0].label, "Red");
        assert_eq!(cached, Some(options));
    }

    #[test]
    fn test_value_select_options_keeps_populated_cache() {
        let hook = ColorConditionHook::default();
        let existing = vec![SelectOption {
            value: "custom".to_string(),
            label: "Custom".to_string(),
        }];
        let mut cached = Some(existing.clone());

        let options = hook.value_select_options("order_color", &mut cached, existing.clone());
        assert_eq!(options, existing);
        assert_eq!(cached, Some(existing));
    }

    #[test]
    fn test_value_select_options_refills_empty_list() {
        let hook = ColorConditionHook::default();
        let mut cached = Some(vec![]);

        let options = hook.value_select_options("order_color", &mut cached, vec![]);
        assert_eq!(options[0].value, "red");
        assert_eq!(cached, Some(options));
    }

    #[test]
    fn test_value_select_options_passthrough() {
        let hook = ColorConditionHook::default();
        let mut cached = None;
        let current = vec![SelectOption {
            value: "US".to_string(),
            label: "United States".to_string(),
        }];

        let options = hook.value_select_options("country_id", &mut cached, current.clone());
        assert_eq!(options, current);
        assert!(cached.is_none());
    }

    #[test]
    fn test_before_validate_picks_shipping_address() {
        let hook = ColorConditionHook::default();
        let stamp = hook.before_validate("order_color", &red_cart()).unwrap();
        assert_eq!(stamp.address_type, AddressType::Shipping);
        assert_eq!(stamp.key, "order_color");
        assert_eq!(stamp.value.as_deref(), Some("red"));
    }

    #[test]
    fn test_before_validate_picks_billing_for_virtual_cart() {
        let hook = ColorConditionHook::default();
        let mut cart = red_cart();
        cart.is_virtual = true;

        let stamp = hook.before_validate("order_color", &cart).unwrap();
        assert_eq!(stamp.address_type, AddressType::Billing);
    }

    #[test]
    fn test_before_validate_no_match_clears() {
        let hook = ColorConditionHook::default();
        let stamp = hook.before_validate("order_color", &Cart::empty()).unwrap();
        assert_eq!(stamp.address_type, AddressType::Shipping);
        assert_eq!(stamp.value, None);
    }

    #[test]
    fn test_before_validate_other_attribute() {
        let hook = ColorConditionHook::default();
        assert!(hook.before_validate("base_subtotal", &red_cart()).is_none());
    }

    #[test]
    fn test_registry_applies_stamp() {
        let mut registry = HookRegistry::new();
        registry.register(Arc::new(ColorConditionHook::default()));
        assert_eq!(registry.len(), 1);

        let mut cart = red_cart();
        registry.before_validate("order_color", &mut cart);

        assert_eq!(cart.shipping_address.get_data("order_color"), Some("red"));
        assert_eq!(cart.billing_address.get_data("order_color"), None);
    }

    #[test]
    fn test_registry_clears_stale_stamp() {
        let mut registry = HookRegistry::new();
        registry.register(Arc::new(ColorConditionHook::default()));

        let mut cart = red_cart();
        registry.before_validate("order_color", &mut cart);
        cart.items.clear();
        registry.before_validate("order_color", &mut cart);

        assert_eq!(cart.shipping_address.get_data("order_color"), None);
    }

    #[test]
    fn test_empty_registry_returns_defaults() {
        let registry = HookRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.input_type("order_color", InputType::String),
            InputType::String
        );

        let mut options = BTreeMap::new();
        registry.load_attribute_options(&mut options);
        assert!(options.is_empty());
    }
}
