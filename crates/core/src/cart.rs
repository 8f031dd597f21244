//! In-memory shopping cart.
//!
//! The cart is session-scoped working memory: it is never persisted and never
//! shared across sessions. Line items are keyed by (product id, selected
//! color); adding an existing pair accumulates quantity instead of appending a
//! duplicate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Product;

/// A (product, quantity, optional color) tuple inside a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Positive quantity, always >= 1.
    pub quantity: u32,
    /// Selected color variant, if the shopper picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

impl LineItem {
    /// Price contribution of this line: price-or-zero times quantity.
    ///
    /// Price-on-request products contribute zero. This is a deliberate
    /// policy: checkout totals silently exclude request-priced items.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .map_or_else(|| Decimal::ZERO, |p| p.amount * Decimal::from(self.quantity))
    }

    fn matches(&self, product_id: &str, color: Option<&str>) -> bool {
        self.product.id == product_id && self.selected_color.as_deref() == color
    }
}

/// Ordered collection of line items.
///
/// Insertion order is irrelevant to totals but preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Add a product to the cart.
    ///
    /// If a line item with the same (product id, color) pair already exists
    /// its quantity is incremented, saturating at `u32::MAX`; otherwise a new
    /// line item is appended.
    /// A quantity of zero is clamped to one. Color strings are accepted as-is
    /// without checking them against the product's variants.
    pub fn add(&mut self, product: &Product, quantity: u32, color: Option<&str>) {
        let quantity = quantity.max(1);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, color))
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return;
        }

        self.items.push(LineItem {
            product: product.clone(),
            quantity,
            selected_color: color.map(ToString::to_string),
        });
    }

    /// Remove the line item matching the (product id, color) pair exactly.
    ///
    /// A no-op when no line item matches.
    pub fn remove(&mut self, product_id: &str, color: Option<&str>) {
        self.items.retain(|item| !item.matches(product_id, color));
    }

    /// Remove all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price-or-zero times quantity over all line items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }
}
