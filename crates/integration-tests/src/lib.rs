//! Integration tests for the Legionnaire storefront.
//!
//! # Test Categories
//!
//! - `storefront_endpoints` - Router-level tests via `tower::ServiceExt`
//! - `client_round_trip` - Submission client against a live server on an
//!   ephemeral port
//!
//! No SMTP server is required: tests point the mail relay at a closed local
//! port, which exercises the acknowledge-regardless-of-delivery contract for
//! real.

use std::net::IpAddr;

use axum::Router;
use secrecy::SecretString;

use legionnaire_storefront::config::{EmailConfig, StorefrontConfig};
use legionnaire_storefront::routes;
use legionnaire_storefront::state::AppState;

/// A storefront configuration whose SMTP relay points at a closed local
/// port, so every delivery attempt fails fast with a connection error.
#[must_use]
pub fn unreachable_mail_config() -> StorefrontConfig {
    let host: IpAddr = "127.0.0.1".parse().expect("valid address");

    StorefrontConfig {
        host,
        port: 0,
        email: EmailConfig {
            smtp_host: "127.0.0.1".to_string(),
            // Nothing listens on the discard port in the test environment.
            smtp_port: 9,
            smtp_username: "nico@legionnaire.co.nz".to_string(),
            smtp_password: SecretString::from("qyxkvwplmsndtrhg"),
            from_address: "nico@legionnaire.co.nz".to_string(),
            business_address: "nico@legionnaire.co.nz".to_string(),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// Build the storefront router backed by the unreachable mail relay.
#[must_use]
pub fn test_router() -> Router {
    let state = AppState::new(unreachable_mail_config()).expect("state builds");
    routes::routes().with_state(state)
}
