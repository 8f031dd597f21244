//! Business logic services for storefront.
//!
//! # Services
//!
//! - `email` - Notification service: formats contact and order submissions as
//!   plain-text email and relays them via SMTP

pub mod email;

pub use email::{EmailError, EmailService};
