//! HTTP client for the storefront submission endpoints.

use serde::Deserialize;
use thiserror::Error;

use legionnaire_core::{Cart, CheckoutForm, ContactSubmission, OrderSubmission};

/// Errors that can occur when submitting to the storefront.
///
/// The UI treats every variant identically: show a generic retry prompt and
/// leave all input untouched.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Acknowledgement for a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAck {
    pub message: String,
}

/// Acknowledgement for an order submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAck {
    pub message: String,
    /// Timestamp-derived display token, when the server issued one.
    pub order_id: Option<String>,
}

/// Success-shaped response body returned by both endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionResponse {
    success: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    order_id: Option<String>,
}

/// Client for the storefront submission endpoints.
#[derive(Clone)]
pub struct SubmissionClient {
    client: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    /// Create a new submission client for a storefront base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Submit a contact form message.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, a non-success HTTP status, or an
    /// unparseable response. The caller's form state should be left
    /// untouched so the submission can be retried.
    pub async fn submit_contact(
        &self,
        contact: &ContactSubmission,
    ) -> Result<ContactAck, SubmitError> {
        let response = self.post("/contact", contact).await?;
        Ok(ContactAck {
            message: response.message,
        })
    }

    /// Submit an order: snapshots the cart and checkout form, computes the
    /// total client-side, and posts the result.
    ///
    /// # Errors
    ///
    /// Returns error on network failure, a non-success HTTP status, or an
    /// unparseable response. Cart and form state should be retained for
    /// retry.
    pub async fn submit_order(
        &self,
        cart: &Cart,
        form: &CheckoutForm,
    ) -> Result<OrderAck, SubmitError> {
        let order = OrderSubmission::from_cart(cart, form.clone());
        let response = self.post("/orders", &order).await?;
        Ok(OrderAck {
            message: response.message,
            order_id: response.order_id,
        })
    }

    async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<SubmissionResponse, SubmitError> {
        let url = format!("{}{path}", self.base_url);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SubmitError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SubmissionResponse = response
            .json()
            .await
            .map_err(|e| SubmitError::Parse(e.to_string()))?;

        // The server answers success-shaped bodies by contract; anything else
        // is treated like a failed request.
        if !body.success {
            return Err(SubmitError::Api {
                status: status.as_u16(),
                message: body.message,
            });
        }

        Ok(body)
    }
}
