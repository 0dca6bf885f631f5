//! Outcome of resolving a user's currency-matched products.

use serde::Serialize;

use crate::product::Product;

/// Tagged lookup result.
///
/// Keeps "unknown user" apart from "user without matching products", which
/// the flat product list cannot express.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProductLookup {
    /// User exists; products share its currency (possibly none)
    Found { products: Vec<Product> },
    /// No user with the requested identifier
    UserNotFound,
}

impl ProductLookup {
    /// Check if the user was resolved
    pub fn is_found(&self) -> bool {
        matches!(self, ProductLookup::Found { .. })
    }

    /// Flatten into a product list, treating an unknown user as no products
    pub fn into_products(self) -> Vec<Product> {
        match self {
            ProductLookup::Found { products } => products,
            ProductLookup::UserNotFound => Vec::new(),
        }
    }
}
