//! Contact form route handler.
//!
//! Accepts a JSON contact submission and relays it as a pair of emails: a
//! notification to the business address and an acknowledgement to the
//! submitter.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use legionnaire_core::ContactSubmission;

use crate::state::AppState;

/// Response for a contact submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Submit a contact form message.
///
/// POST /contact
///
/// Always answers HTTP 200 with `success: true`. An unparseable body is
/// logged and acknowledged with an "email pending" message; a mail relay
/// failure is logged and acknowledged as if delivery succeeded. The caller
/// is never blocked on outbound email.
#[instrument(skip(state, body))]
pub async fn submit(State(state): State<AppState>, body: String) -> Json<ContactResponse> {
    let contact: ContactSubmission = match serde_json::from_str(&body) {
        Ok(contact) => contact,
        Err(e) => {
            tracing::error!(error = %e, "Contact form error");
            return Json(ContactResponse {
                success: true,
                message: "Message received (Email pending)".to_string(),
            });
        }
    };

    tracing::info!(
        name = %contact.name,
        email = %contact.email,
        subject = %contact.subject,
        "Contact form received"
    );

    // Try to send emails, but don't fail the request if email fails
    match state.email().send_contact_emails(&contact).await {
        Ok(()) => tracing::info!("Contact emails sent successfully"),
        Err(e) => {
            tracing::error!(error = %e, "Email sending failed (but message was logged)");
        }
    }

    Json(ContactResponse {
        success: true,
        message: "Message sent successfully. We will contact you shortly.".to_string(),
    })
}
