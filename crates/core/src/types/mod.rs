//! Core types for the Legionnaire storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod price;
pub mod product;

pub use price::{CurrencyCode, Price};
pub use product::Product;
