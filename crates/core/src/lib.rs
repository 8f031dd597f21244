//! Legionnaire Core - Shared domain types.
//!
//! This crate provides the common types used across the Legionnaire
//! storefront components:
//! - `storefront` - HTTP service that relays submissions as email
//! - `client` - Submission client embedded in front-end shells
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no mail transport. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Price and product types
//! - [`catalog`] - The compiled-in product catalog
//! - [`cart`] - In-memory cart with merge-or-append line items
//! - [`submission`] - Wire types for contact and order submissions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod submission;
pub mod types;

pub use cart::{Cart, LineItem};
pub use submission::{CheckoutForm, ContactSubmission, OrderItem, OrderSubmission};
pub use types::*;
