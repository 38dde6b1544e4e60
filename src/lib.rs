// SPDX-License-Identifier: MIT

//! Cart "order color" promotion condition.
//!
//! Exposes a synthetic `order_color` condition attribute to a promotion rule
//! engine and evaluates whether a cart holds an item in the target color.

pub mod error;
pub mod rule;

pub use error::ConditionError;
