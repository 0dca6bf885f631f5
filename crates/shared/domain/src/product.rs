//! Product domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product domain entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Product {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "milk"))]
    pub name: String,
    /// Amount in whole units of `currency`
    #[cfg_attr(feature = "openapi", schema(example = 70))]
    pub price: i64,
    /// Currency code the price is denominated in
    #[cfg_attr(feature = "openapi", schema(example = "ruble"))]
    pub currency: String,
}

impl Product {
    /// Attach a store-assigned identifier to product data
    pub fn from_new(id: Uuid, new_product: NewProduct) -> Self {
        Self {
            id,
            name: new_product.name,
            price: new_product.price,
            currency: new_product.currency,
        }
    }
}

/// Product data in transit to the store (no identifier yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewProduct {
    #[cfg_attr(feature = "openapi", schema(example = "milk"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = 70))]
    pub price: i64,
    #[cfg_attr(feature = "openapi", schema(example = "ruble"))]
    pub currency: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: i64, currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            currency: currency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_new_keeps_fields() {
        let id = Uuid::new_v4();
        let product = Product::from_new(id, NewProduct::new("milk", 70, "ruble"));

        assert_eq!(
            product,
            Product {
                id,
                name: "milk".to_string(),
                price: 70,
                currency: "ruble".to_string(),
            }
        );
    }

    #[test]
    fn serializes_flat_record() {
        let id = Uuid::new_v4();
        let product = Product::from_new(id, NewProduct::new("milk", 1, "dollar"));
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["price"], 1);
        assert_eq!(value["currency"], "dollar");
    }
}
