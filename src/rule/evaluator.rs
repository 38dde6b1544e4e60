//! Cart color predicate

use super::cart::{Cart, LineItem, ProductKind};
use super::config::ColorConditionConfig;

/// Decides whether a cart holds an item in the configured color
#[derive(Debug, Clone)]
pub struct ColorConditionEvaluator {
    config: ColorConditionConfig,
}

impl ColorConditionEvaluator {
    pub fn new(config: ColorConditionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ColorConditionConfig {
        &self.config
    }

    /// Evaluate against a possibly absent cart; absent or empty carts never match
    pub fn evaluate(&self, cart: Option<&Cart>) -> bool {
        cart.is_some_and(|cart| self.matches(cart))
    }

    pub fn matches(&self, cart: &Cart) -> bool {
        let matched = self.matching_item(cart);
        log::debug!(
            "{} over {} item(s): {}",
            self.config.attribute_code,
            cart.items.len(),
            matched.map_or("no match", |item| item.product.sku.as_str())
        );
        matched.is_some()
    }

    /// First line item, in cart order, whose product carries the target color
    pub fn matching_item<'a>(&self, cart: &'a Cart) -> Option<&'a LineItem> {
        cart.items.iter().find(|item| self.item_matches(item))
    }

    fn item_matches(&self, item: &LineItem) -> bool {
        let target = self.config.target_value.as_str();

        match &item.product.kind {
            ProductKind::Configurable { selected_options } => selected_options.iter().any(|o| {
                o.label == self.config.product_attribute_label && o.value == target
            }),
            ProductKind::Simple { attributes } => attributes
                .get(&self.config.product_attribute_code)
                .is_some_and(|value| value == target),
            ProductKind::Other { type_id } => {
                log::trace!(
                    "Skipping {}: unrecognized product type '{}'",
                    item.product.sku,
                    type_id
                );
                false
            }
        }
    }
}

impl Default for ColorConditionEvaluator {
    fn default() -> Self {
        Self::new(ColorConditionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::cart::{LineItem, Product};

    fn cart_with(products: Vec<Product>) -> Cart {
        Cart::new(products.into_iter().map(LineItem::new).collect())
    }

    #[test]
    fn test_absent_cart() {
        let evaluator = ColorConditionEvaluator::default();
        assert!(!evaluator.evaluate(None));
    }

    #[test]
    fn test_empty_cart() {
        let evaluator = ColorConditionEvaluator::default();
        assert!(!evaluator.evaluate(Some(&Cart::empty())));
    }

    #[test]
    fn test_configurable_red() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![Product::configurable(
            "TEE",
            &[("Size", "M"), ("Color", "red")],
        )]);
        assert!(evaluator.evaluate(Some(&cart)));
    }

    #[test]
    fn test_configurable_blue() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![Product::configurable("TEE", &[("Color", "blue")])]);
        assert!(!evaluator.evaluate(Some(&cart)));
    }

    #[test]
    fn test_configurable_label_must_match() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![Product::configurable("TEE", &[("Trim", "red")])]);
        assert!(!evaluator.evaluate(Some(&cart)));
    }

    #[test]
    fn test_simple_red() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![Product::simple("MUG", &[("color", "red")])]);
        assert!(evaluator.evaluate(Some(&cart)));
    }

    #[test]
    fn test_simple_other_value_or_unset() {
        let evaluator = ColorConditionEvaluator::default();

        let green = cart_with(vec![Product::simple("MUG", &[("color", "green")])]);
        assert!(!evaluator.evaluate(Some(&green)));

        let unset = cart_with(vec![Product::simple("MUG", &[("size", "L")])]);
        assert!(!evaluator.evaluate(Some(&unset)));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![
            Product::simple("MUG", &[("color", "Red")]),
            Product::configurable("TEE", &[("color", "red")]),
        ]);
        assert!(!evaluator.evaluate(Some(&cart)));
    }

    #[test]
    fn test_other_type_never_matches() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![Product::other("BUNDLE", "bundle")]);
        assert!(!evaluator.evaluate(Some(&cart)));
    }

    #[test]
    fn test_second_item_matches() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![
            Product::simple("MUG", &[("color", "blue")]),
            Product::configurable("TEE", &[("Color", "red")]),
        ]);
        assert!(evaluator.evaluate(Some(&cart)));
        assert_eq!(evaluator.matching_item(&cart).unwrap().product.sku, "TEE");
    }

    #[test]
    fn test_first_match_wins() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![
            Product::other("CARD", "giftcard"),
            Product::simple("MUG", &[("color", "red")]),
            Product::configurable("TEE", &[("Color", "red")]),
        ]);
        assert_eq!(evaluator.matching_item(&cart).unwrap().product.sku, "MUG");
    }

    #[test]
    fn test_idempotent() {
        let evaluator = ColorConditionEvaluator::default();
        let cart = cart_with(vec![Product::simple("MUG", &[("color", "red")])]);
        let before = cart.clone();

        assert!(evaluator.evaluate(Some(&cart)));
        assert!(evaluator.evaluate(Some(&cart)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_custom_target() {
        let evaluator = ColorConditionEvaluator::new(ColorConditionConfig {
            target_value: "blue".to_string(),
            product_attribute_code: "shade".to_string(),
            ..Default::default()
        });
        let cart = cart_with(vec![Product::simple("MUG", &[("shade", "blue")])]);
        assert!(evaluator.evaluate(Some(&cart)));

        let red = cart_with(vec![Product::simple("MUG", &[("color", "red")])]);
        assert!(!evaluator.evaluate(Some(&red)));
    }

    #[test]
    fn test_evaluator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorConditionEvaluator>();
    }
}
