//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::products::{Product, ProductId};

/// Cart Model
///
/// Products in insertion order, at most one entry per product id. Serializes
/// as a bare JSON array of products; decoding goes through [`FromIterator`]
/// so a decoded cart holds the same invariants as a collected one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The entry for `product`, if any.
    #[must_use]
    pub fn get(&self, product: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == product)
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Sum of every entry's line price.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(Product::subtotal).sum()
    }

    pub(crate) fn get_mut(&mut self, product: ProductId) -> Option<&mut Product> {
        self.items.iter_mut().find(|item| item.id == product)
    }

    pub(crate) fn push(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Drops the entry for `product`, returning whether one existed.
    pub(crate) fn remove(&mut self, product: ProductId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| item.id != product);

        self.items.len() != before
    }
}

impl FromIterator<Product> for Cart {
    /// Builds a cart that upholds the entry invariants: zero and negative
    /// amounts are skipped and the first entry for a repeated id wins.
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut cart = Self::new();

        for product in iter {
            if product.amount > 0 && cart.get(product.id).is_none() {
                cart.push(product);
            }
        }

        cart
    }
}

impl From<Vec<Product>> for Cart {
    fn from(items: Vec<Product>) -> Self {
        items.into_iter().collect()
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Update Product Amount Data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    /// Product whose entry is changed.
    pub product_id: ProductId,
    /// Requested quantity; zero or negative requests are ignored.
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(id: u64, price: Decimal, amount: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Tênis {id}"),
            price,
            image: format!("https://example.com/{id}.jpg"),
            amount,
        }
    }

    #[test]
    fn totals_sum_line_prices_and_units() {
        let cart: Cart = [
            product(1, Decimal::new(179_90, 2), 2),
            product(2, Decimal::new(139_90, 2), 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Decimal::new(499_70, 2));
    }

    #[test]
    fn collecting_skips_non_positive_amounts_and_duplicate_ids() {
        let cart: Cart = [
            product(1, Decimal::ONE, 1),
            product(2, Decimal::ONE, 0),
            product(3, Decimal::ONE, -1),
            product(1, Decimal::ONE, 7),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).map(|p| p.amount), Some(1));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut cart: Cart = (1..=3).map(|id| product(id, Decimal::ONE, 1)).collect();

        assert!(cart.remove(ProductId::new(2)));
        assert!(!cart.remove(ProductId::new(2)));

        let ids: Vec<u64> = cart.items().iter().map(|p| p.id.into_inner()).collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn serializes_as_plain_product_array() -> TestResult {
        let cart: Cart = [product(1, Decimal::new(179_9, 1), 2)].into_iter().collect();

        let value = serde_json::to_value(&cart)?;

        assert!(value.is_array(), "cart should serialize as an array");
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["amount"], 2);

        Ok(())
    }

    #[test]
    fn decoding_enforces_entry_invariants() -> TestResult {
        let cart: Cart = serde_json::from_str(
            r#"[
                {"id":1,"title":"Tênis 1","price":179.9,"image":"","amount":2},
                {"id":1,"title":"Tênis 1","price":179.9,"image":"","amount":5},
                {"id":2,"title":"Tênis 2","price":139.9,"image":"","amount":0},
                {"id":3,"title":"Tênis 3","price":219.9,"image":"","amount":-4}
            ]"#,
        )?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).map(|p| p.amount), Some(2));

        Ok(())
    }
}
