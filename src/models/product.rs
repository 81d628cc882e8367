//! Product model
//!
//! The catalog item, used both as the POST body and in responses.

use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// The id is assigned by the caller; saving a product with an existing id
/// replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-assigned unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Validates the product data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Product name cannot be empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("Product price must be a non-negative number".to_string());
        }
        None
    }
}
