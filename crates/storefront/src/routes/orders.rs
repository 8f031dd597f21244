//! Order submission route handler.
//!
//! Accepts a JSON order (cart snapshot + checkout form + client-computed
//! total) and relays it as a pair of emails: a confirmation to the customer
//! and a notification to the business address. Orders are not persisted;
//! the email is the only record.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use legionnaire_core::OrderSubmission;

use crate::state::AppState;

/// Response for an order submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub success: bool,
    pub message: String,
    /// Timestamp-derived display token. Not guaranteed unique, not
    /// retrievable later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Submit a pre-order.
///
/// POST /orders
///
/// The client-computed total is trusted as-is; there is no server-side
/// recomputation. Always answers HTTP 200 with `success: true`; parse and
/// relay failures are logged only.
#[instrument(skip(state, body))]
pub async fn submit(State(state): State<AppState>, body: String) -> Json<OrderResponse> {
    let order: OrderSubmission = match serde_json::from_str(&body) {
        Ok(order) => order,
        Err(e) => {
            tracing::error!(error = %e, "Order submission error");
            return Json(OrderResponse {
                success: true,
                message: "Order received (Email pending)".to_string(),
                order_id: None,
            });
        }
    };

    tracing::info!(
        customer = %order.checkout_form.full_name(),
        email = %order.checkout_form.email,
        total = %order.total,
        items = order.items.len(),
        "Order received"
    );

    // Try to send emails, but don't fail the request if email fails
    match state.email().send_order_emails(&order).await {
        Ok(()) => tracing::info!("Order emails sent successfully"),
        Err(e) => {
            tracing::error!(error = %e, "Email sending failed (but order was logged)");
        }
    }

    Json(OrderResponse {
        success: true,
        message: "Order submitted successfully".to_string(),
        order_id: Some(format!("ORD-{}", chrono::Utc::now().timestamp_millis())),
    })
}
