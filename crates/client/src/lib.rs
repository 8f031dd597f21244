//! Legionnaire Submission Client.
//!
//! This crate is the UI-facing half of the storefront: it holds the
//! session-scoped cart and form state and serializes submissions to the two
//! storefront endpoints (`POST /contact`, `POST /orders`).
//!
//! # Failure model
//!
//! A non-success HTTP status, a network failure, and an unparseable response
//! are all the same thing from the UI's perspective: a single retryable
//! error. There is no partial-submission state. On failure all input is
//! retained; on success the relevant state is cleared and a confirmation is
//! shown for a fixed window.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod form;

pub use client::{ContactAck, OrderAck, SubmissionClient, SubmitError};
pub use form::{CONFIRMATION_WINDOW, CheckoutFlow, ContactFormFlow, SubmissionState};
