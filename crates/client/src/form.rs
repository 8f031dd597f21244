//! Submission UI state machine and form flows.
//!
//! Both the contact form and the checkout share one lifecycle:
//!
//! ```text
//! Idle -> Submitting -> Confirmed(fixed window) -> Idle
//!                    -> Failed(retain input)    -> Idle (on retry)
//! ```
//!
//! `Submitting` is entered exactly once per user-initiated submit and exited
//! unconditionally when the outbound call settles. The re-entrancy guard is
//! advisory: it mirrors a disabled submit control, not a lock.

use std::time::{Duration, Instant};

use legionnaire_core::{Cart, CheckoutForm, ContactSubmission};

/// How long a confirmation stays visible before the UI reverts.
pub const CONFIRMATION_WINDOW: Duration = Duration::from_secs(5);

/// Lifecycle of a single form's submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing in flight; inputs editable.
    #[default]
    Idle,
    /// A submission is outstanding; the submit control is disabled.
    Submitting,
    /// The submission succeeded; confirmation shown until the deadline.
    Confirmed { until: Instant },
    /// The submission failed; input retained, error shown until retry.
    Failed,
}

impl SubmissionState {
    /// Try to enter `Submitting`.
    ///
    /// Returns `false` while a submission is already in flight; retrying
    /// from `Failed` is allowed.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Submitting) {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Settle an in-flight submission successfully; the confirmation stays
    /// visible until `now + CONFIRMATION_WINDOW`.
    pub fn settle_success(&mut self, now: Instant) {
        *self = Self::Confirmed {
            until: now + CONFIRMATION_WINDOW,
        };
    }

    /// Settle an in-flight submission as failed.
    pub fn settle_failure(&mut self) {
        *self = Self::Failed;
    }

    /// Advance time-driven transitions: an elapsed confirmation window
    /// reverts to `Idle`.
    pub fn poll(&mut self, now: Instant) {
        if let Self::Confirmed { until } = *self {
            if now >= until {
                *self = Self::Idle;
            }
        }
    }

    /// Whether a submission is currently outstanding.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the confirmation is currently shown.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}

/// Contact form state: fields plus submission lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ContactFormFlow {
    pub form: ContactSubmission,
    state: SubmissionState,
}

impl ContactFormFlow {
    /// Current submission state.
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Try to start a submission. Refused while one is in flight or while
    /// required fields are blank.
    pub fn begin_submit(&mut self) -> bool {
        if !self.form.is_complete() {
            return false;
        }
        self.state.begin()
    }

    /// The submission succeeded: clear the fields and show the confirmation.
    pub fn submit_succeeded(&mut self, now: Instant) {
        self.form = ContactSubmission::default();
        self.state.settle_success(now);
    }

    /// The submission failed: keep the fields for retry.
    pub fn submit_failed(&mut self) {
        self.state.settle_failure();
    }

    /// Advance time-driven transitions.
    pub fn poll(&mut self, now: Instant) {
        self.state.poll(now);
    }
}

/// Checkout state: cart, delivery form, view flag and submission lifecycle.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    pub cart: Cart,
    pub form: CheckoutForm,
    checkout_open: bool,
    state: SubmissionState,
}

impl CheckoutFlow {
    /// Current submission state.
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether the checkout view is open.
    #[must_use]
    pub const fn is_checkout_open(&self) -> bool {
        self.checkout_open
    }

    /// Open the checkout view.
    pub fn open_checkout(&mut self) {
        self.checkout_open = true;
    }

    /// Close the checkout view without touching cart or form.
    pub fn close_checkout(&mut self) {
        self.checkout_open = false;
    }

    /// Try to start an order submission. Refused while one is in flight,
    /// while required fields are blank, or for an empty cart.
    pub fn begin_submit(&mut self) -> bool {
        if self.cart.is_empty() || !self.form.is_complete() {
            return false;
        }
        self.state.begin()
    }

    /// The order went through: clear the cart and form, close the checkout
    /// view, and show the confirmation.
    pub fn submit_succeeded(&mut self, now: Instant) {
        self.cart.clear();
        self.form = CheckoutForm::default();
        self.checkout_open = false;
        self.state.settle_success(now);
    }

    /// The order failed: keep the cart, the form and the open checkout view
    /// so the shopper can retry.
    pub fn submit_failed(&mut self) {
        self.state.settle_failure();
    }

    /// Advance time-driven transitions.
    pub fn poll(&mut self, now: Instant) {
        self.state.poll(now);
    }
}
