//! Wire types for contact and order submissions.
//!
//! These types define the JSON bodies exchanged between the submission client
//! and the storefront endpoints. Field names are camelCase on the wire. The
//! server performs no validation beyond deserialization; required-field
//! enforcement is the submitting UI's responsibility.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::Price;

/// A contact form message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Whether every required field is non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Checkout delivery and contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    pub city: String,
    pub postcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CheckoutForm {
    /// Customer full name for display and email salutations.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether every required field is non-blank. Suburb and notes are
    /// optional.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.street_address,
            &self.city,
            &self.postcode,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Denormalized product snapshot carried inside an order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    pub name: String,
    /// Unit price at submission time; `None` for price-on-request items.
    #[serde(default)]
    pub price: Option<Price>,
}

/// One ordered line: product snapshot plus quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product: OrderProduct,
    pub quantity: u32,
}

impl OrderItem {
    /// Price-or-zero times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .map_or_else(|| Decimal::ZERO, |p| p.amount * Decimal::from(self.quantity))
    }
}

/// A complete order submission: cart snapshot, delivery form and the
/// client-computed total.
///
/// The server trusts the total as-is; it performs no recomputation against
/// catalog prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub items: Vec<OrderItem>,
    pub checkout_form: CheckoutForm,
    pub total: Decimal,
}

impl OrderSubmission {
    /// Snapshot a cart and checkout form into a submission.
    ///
    /// Product names and prices are denormalized at this point so the order
    /// email reflects what the shopper saw, and the total is computed
    /// client-side from the cart.
    #[must_use]
    pub fn from_cart(cart: &Cart, checkout_form: CheckoutForm) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|line| OrderItem {
                product: OrderProduct {
                    name: line.product.name.clone(),
                    price: line.product.price,
                },
                quantity: line.quantity,
            })
            .collect();

        Self {
            items,
            checkout_form,
            total: cart.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Sam".to_string(),
            last_name: "Harrington".to_string(),
            email: "sam@example.com".to_string(),
            phone: "+64 21 555 0101".to_string(),
            street_address: "12 Rimu Lane".to_string(),
            suburb: None,
            city: "Whanganui".to_string(),
            postcode: "4500".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_from_cart_denormalizes_names_and_prices() {
        let mut cart = Cart::new();
        cart.add(
            catalog::find("ftac-evolution").expect("catalog product"),
            2,
            Some("Black"),
        );
        cart.add(
            catalog::find("legionnaire-mab").expect("catalog product"),
            1,
            None,
        );

        let order = OrderSubmission::from_cart(&cart, form());

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product.name, "F-TAC\u{2122} Evolution");
        assert!(order.items[1].product.price.is_none());
        assert_eq!(order.total, Decimal::new(59600, 2));
    }

    #[test]
    fn test_checkout_form_completeness() {
        assert!(form().is_complete());

        let mut missing = form();
        missing.postcode = " ".to_string();
        assert!(!missing.is_complete());

        // Suburb and notes stay optional.
        let mut optional = form();
        optional.suburb = None;
        optional.notes = None;
        assert!(optional.is_complete());
    }

    #[test]
    fn test_contact_submission_completeness() {
        let contact = ContactSubmission {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Sizing".to_string(),
            message: "Does the drag bag fit a 30in barrel?".to_string(),
        };
        assert!(contact.is_complete());
        assert!(!ContactSubmission::default().is_complete());
    }

    #[test]
    fn test_order_wire_format_uses_camel_case() {
        let mut cart = Cart::new();
        cart.add(
            catalog::find("tuls-mat").expect("catalog product"),
            1,
            None,
        );
        let order = OrderSubmission::from_cart(&cart, form());

        let json = serde_json::to_value(&order).expect("serializes");
        assert!(json.get("checkoutForm").is_some());
        assert_eq!(json["checkoutForm"]["firstName"], "Sam");
        assert_eq!(json["checkoutForm"]["streetAddress"], "12 Rimu Lane");
        assert_eq!(json["total"], "268.00");
    }
}
