//! Cart and line item types.
//!
//! `Cart` is an immutable-by-convention value: every mutation returns a new
//! cart and leaves the receiver untouched, so a published snapshot is never
//! changed under its readers.

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Key the line item's quantity is stored under, alongside the catalog fields.
const AMOUNT_FIELD: &str = "amount";

/// A product in the cart with its requested quantity.
///
/// Serialized flat: the product's catalog fields plus `amount`. A catalog
/// field that is itself called `amount` is dropped, the line quantity wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "LineItemRecord", into = "LineItemRecord")]
pub struct LineItem {
    /// Catalog data captured when the item was first added.
    pub product: Product,
    /// Requested quantity, always at least 1.
    pub amount: u32,
}

impl LineItem {
    /// Create a line item holding a single unit.
    pub fn new(product: Product) -> Self {
        Self::with_amount(product, 1)
    }

    /// Create a line item with an explicit quantity.
    pub fn with_amount(mut product: Product, amount: u32) -> Self {
        product.extra.remove(AMOUNT_FIELD);
        Self { product, amount }
    }

    /// Product identifier.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times amount.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CartError> {
        self.product
            .unit_price(currency)
            .try_multiply(i64::from(self.amount))
            .ok_or(CartError::Overflow)
    }
}

/// Wire shape of a line item.
#[derive(Serialize, Deserialize)]
struct LineItemRecord {
    #[serde(flatten)]
    product: Product,
    amount: u32,
}

impl From<LineItemRecord> for LineItem {
    fn from(record: LineItemRecord) -> Self {
        LineItem::with_amount(record.product, record.amount)
    }
}

impl From<LineItem> for LineItemRecord {
    fn from(item: LineItem) -> Self {
        let LineItem { mut product, amount } = item;
        product.extra.remove(AMOUNT_FIELD);
        LineItemRecord { product, amount }
    }
}

/// An ordered list of line items, unique by product id.
///
/// Serialized as a JSON array of line items. Deserializing checks the same
/// invariants as [`Cart::from_items`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from line items, checking the cart invariants.
    ///
    /// Returns an error if an amount is zero or a product appears twice.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.amount == 0 {
                return Err(CartError::InvalidSnapshot(format!(
                    "line item {} has amount 0",
                    item.id()
                )));
            }
            if !seen.insert(item.id()) {
                return Err(CartError::InvalidSnapshot(format!(
                    "duplicate line item {}",
                    item.id()
                )));
            }
        }
        let items = items
            .into_iter()
            .map(|item| LineItem::with_amount(item.product, item.amount))
            .collect();
        Ok(Self { items })
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line item for a product.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Check if the product is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Quantity of a product in the cart, 0 when absent.
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.get(id).map(|i| i.amount).unwrap_or(0)
    }

    /// Return a cart with one more unit of `product`.
    ///
    /// Appends a new line item with amount 1, or increments the existing
    /// one if the product is already present.
    pub fn with_new_item(&self, product: Product) -> Result<Cart, CartError> {
        if self.contains(product.id) {
            return self.with_incremented(product.id);
        }
        let mut items = self.items.clone();
        items.push(LineItem::new(product));
        Ok(Cart { items })
    }

    /// Return a cart where the product's amount is one higher.
    pub fn with_incremented(&self, id: ProductId) -> Result<Cart, CartError> {
        let mut items = self.items.clone();
        let item = items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or(CartError::NotFound(id))?;
        item.amount = item.amount.checked_add(1).ok_or(CartError::Overflow)?;
        Ok(Cart { items })
    }

    /// Return a cart without the product's line item.
    pub fn without(&self, id: ProductId) -> Result<Cart, CartError> {
        if !self.contains(id) {
            return Err(CartError::NotFound(id));
        }
        let items = self.items.iter().filter(|i| i.id() != id).cloned().collect();
        Ok(Cart { items })
    }

    /// Get total item count (sum of amounts).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.amount)).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line subtotals.
    pub fn total(&self, currency: Currency) -> Result<Money, CartError> {
        let subtotals = self
            .items
            .iter()
            .map(|i| i.subtotal(currency))
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(subtotals.iter(), currency).ok_or(CartError::Overflow)
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        Cart::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
