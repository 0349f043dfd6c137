//! Catalog product record.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product as returned by the catalog endpoint.
///
/// Only `id` is required. The other typed fields default when the catalog
/// leaves them out, and anything else it sends is kept in `extra` so it
/// survives a persist/reload round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Unit price as a decimal in the store currency.
    #[serde(default)]
    pub price: f64,
    /// Image URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Catalog fields the cart does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Create a product with no extra catalog fields.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Name to show for the product: `title`, else a catalog `name`, else the id.
    pub fn display_name(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        match self.extra.get("name").and_then(|v| v.as_str()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("#{}", self.id),
        }
    }

    /// Unit price converted to cents.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_keeps_unknown_fields() {
        let raw = json!({
            "id": 2,
            "title": "Tênis VR Caminhada Confortável",
            "price": 139.9,
            "image": "https://img/2.jpg",
            "brand": "VR"
        });

        let product: Product = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.extra.get("brand"), Some(&json!("VR")));

        assert_eq!(serde_json::to_value(&product).unwrap(), raw);
    }

    #[test]
    fn test_only_id_is_required() {
        let product: Product =
            serde_json::from_value(json!({ "id": 1, "name": "Shoe", "price": 10.0, "image": "i" }))
                .unwrap();
        assert_eq!(product.title, "");
        assert_eq!(product.display_name(), "Shoe");
        assert_eq!(product.unit_price(Currency::BRL).amount_cents, 1000);

        let bare: Product = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(bare.price, 0.0);
        assert_eq!(bare.display_name(), "#7");
        assert!(serde_json::from_value::<Product>(json!({ "title": "x" })).is_err());
    }

    #[test]
    fn test_missing_fields_are_not_invented() {
        let raw = json!({ "id": 1, "name": "Shoe", "price": 10.0 });
        let product: Product = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&product).unwrap(), raw);
    }

    #[test]
    fn test_unit_price() {
        let product = Product::new(ProductId::new(1), "Tênis", 179.9, "img");
        assert_eq!(product.unit_price(Currency::BRL).amount_cents, 17990);
    }
}
