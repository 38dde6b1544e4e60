// SPDX-License-Identifier: MIT

//! Cart data model read by the color condition
//!
//! Carts are owned by the host. The condition only borrows them, with the
//! exception of the quote addresses which the validation hooks stamp.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// In-progress order aggregate
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// No physical shipping; rule data then lives on the billing address
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default = "Address::billing")]
    pub billing_address: Address,
    #[serde(default = "Address::shipping")]
    pub shipping_address: Address,
}

impl Cart {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self {
            items,
            is_virtual: false,
            billing_address: Address::billing(),
            shipping_address: Address::shipping(),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Address that carries rule data: billing for virtual carts, shipping otherwise
    pub fn rule_address_type(&self) -> AddressType {
        if self.is_virtual {
            AddressType::Billing
        } else {
            AddressType::Shipping
        }
    }

    pub fn address(&self, address_type: AddressType) -> &Address {
        match address_type {
            AddressType::Billing => &self.billing_address,
            AddressType::Shipping => &self.shipping_address,
        }
    }

    pub fn address_mut(&mut self, address_type: AddressType) -> &mut Address {
        match address_type {
            AddressType::Billing => &mut self.billing_address,
            AddressType::Shipping => &mut self.shipping_address,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty()
    }
}

/// One product entry within a cart
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LineItem {
    #[serde(default = "default_qty")]
    pub qty: u32,
    pub product: Product,
}

fn default_qty() -> u32 {
    1
}

impl LineItem {
    pub fn new(product: Product) -> Self {
        Self { qty: 1, product }
    }
}

/// Catalog product as seen from a cart line
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub kind: ProductKind,
}

impl Product {
    /// Configurable product with the given `(label, value)` selections
    pub fn configurable(sku: &str, selected: &[(&str, &str)]) -> Self {
        Self {
            sku: sku.to_string(),
            name: sku.to_string(),
            kind: ProductKind::Configurable {
                selected_options: selected
                    .iter()
                    .map(|(label, value)| SelectedOption::new(*label, *value))
                    .collect(),
            },
        }
    }

    /// Simple product with the given `(code, value)` attributes
    pub fn simple(sku: &str, attributes: &[(&str, &str)]) -> Self {
        Self {
            sku: sku.to_string(),
            name: sku.to_string(),
            kind: ProductKind::Simple {
                attributes: attributes
                    .iter()
                    .map(|(code, value)| (code.to_string(), value.to_string()))
                    .collect(),
            },
        }
    }

    pub fn other(sku: &str, type_id: &str) -> Self {
        Self {
            sku: sku.to_string(),
            name: sku.to_string(),
            kind: ProductKind::Other {
                type_id: type_id.to_string(),
            },
        }
    }
}

/// Product type, resolved once when the product is built
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind {
    /// Variant picked through option attributes at add-to-cart time
    Configurable {
        selected_options: Vec<SelectedOption>,
    },
    /// Fixed attributes keyed by attribute code
    Simple { attributes: HashMap<String, String> },
    /// Bundle, virtual, downloadable and anything else
    Other { type_id: String },
}

impl ProductKind {
    /// Selected option pairs; only configurable products have them
    pub fn selected_options(&self) -> Option<&[SelectedOption]> {
        match self {
            ProductKind::Configurable { selected_options } => Some(selected_options),
            _ => None,
        }
    }

    /// Attribute value by code; only simple products have them
    pub fn attribute(&self, code: &str) -> Option<&str> {
        match self {
            ProductKind::Simple { attributes } => attributes.get(code).map(String::as_str),
            _ => None,
        }
    }

    /// Type id as written in the `type` field
    pub fn type_id(&self) -> &str {
        match self {
            ProductKind::Configurable { .. } => CONFIGURABLE_TYPE,
            ProductKind::Simple { .. } => SIMPLE_TYPE,
            ProductKind::Other { type_id } => type_id.as_str(),
        }
    }
}

const CONFIGURABLE_TYPE: &str = "configurable";
const SIMPLE_TYPE: &str = "simple";

/// Flat wire shape of a product; `type` picks which fields are meaningful
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ProductRecord {
    sku: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    type_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    selected_options: Vec<SelectedOption>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    attributes: HashMap<String, String>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let kind = match record.type_id.as_str() {
            CONFIGURABLE_TYPE => ProductKind::Configurable {
                selected_options: record.selected_options,
            },
            SIMPLE_TYPE => ProductKind::Simple {
                attributes: record.attributes,
            },
            _ => ProductKind::Other {
                type_id: record.type_id,
            },
        };

        Self {
            sku: record.sku,
            name: record.name,
            kind,
        }
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        let type_id = product.kind.type_id().to_string();
        let (selected_options, attributes) = match product.kind {
            ProductKind::Configurable { selected_options } => (selected_options, HashMap::new()),
            ProductKind::Simple { attributes } => (Vec::new(), attributes),
            ProductKind::Other { .. } => (Vec::new(), HashMap::new()),
        };

        Self {
            sku: product.sku,
            name: product.name,
            type_id,
            selected_options,
            attributes,
        }
    }
}

/// Label/value pair of a configurable product selection
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SelectedOption {
    pub label: String,
    pub value: String,
}

impl SelectedOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Billing,
    Shipping,
}

/// Quote address; `data` is the slot rule conditions validate against
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Address {
    pub address_type: AddressType,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl Address {
    pub fn billing() -> Self {
        Self {
            address_type: AddressType::Billing,
            data: BTreeMap::new(),
        }
    }

    pub fn shipping() -> Self {
        Self {
            address_type: AddressType::Shipping,
            data: BTreeMap::new(),
        }
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn remove_data(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }
}

/// Loads carts from YAML or JSON files
pub struct CartLoader;

impl CartLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a cart; `.json` files are read as JSON, anything else as YAML
    pub fn load_cart<P: AsRef<Path>>(&self, path: P) -> Result<Cart> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    pub fn parse_yaml(content: &str) -> Result<Cart> {
        let cart: Cart = serde_yaml::from_str(content)?;
        Ok(cart)
    }

    pub fn parse_json(content: &str) -> Result<Cart> {
        let cart: Cart = serde_json::from_str(content)?;
        Ok(cart)
    }
}

impl Default for CartLoader {
    fn default() -> Self {
        Self::new()
    }
}
