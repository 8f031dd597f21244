//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Liveness check
//! GET  /health/ready    - Readiness check (probes the SMTP relay)
//!
//! # Catalog
//! GET  /products        - Full catalog as JSON
//! GET  /products/{id}   - Single product
//!
//! # Submissions
//! POST /contact         - Relay a contact form message as email
//! POST /orders          - Relay a pre-order as email
//! ```
//!
//! Both submission endpoints answer HTTP 200 with a success-shaped JSON body
//! in virtually all cases, including malformed bodies and mail relay
//! failures. Delivery failures are logged, never surfaced to the caller.

pub mod contact;
pub mod health;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/products", product_routes())
        .route("/contact", post(contact::submit))
        .route("/orders", post(orders::submit))
}
