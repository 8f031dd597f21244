//! Notification service: turns submissions into plain-text email.
//!
//! Uses SMTP via lettre for delivery with Askama text templates. Each
//! submission produces two messages: one to the business address and one to
//! the submitter. Delivery is best-effort; callers decide what to do with a
//! failure (the submission endpoints log it and still acknowledge).

use askama::Template;
use chrono::{DateTime, Utc};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType,
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use thiserror::Error;

use legionnaire_core::{CheckoutForm, ContactSubmission, OrderSubmission};

use crate::config::EmailConfig;

/// One itemized line of an order email, preformatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub total: String,
}

/// Business-facing contact notification.
#[derive(Template)]
#[template(path = "email/contact_notification.txt")]
struct ContactNotificationText<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Acknowledgement sent back to the submitter.
#[derive(Template)]
#[template(path = "email/contact_acknowledgement.txt")]
struct ContactAcknowledgementText<'a> {
    name: &'a str,
    subject: &'a str,
    message: &'a str,
    from_address: &'a str,
}

/// Customer-facing order confirmation.
#[derive(Template)]
#[template(path = "email/order_confirmation.txt")]
struct OrderConfirmationText<'a> {
    customer_name: &'a str,
    order_date: &'a str,
    lines: &'a [OrderLine],
    total: &'a str,
    address: &'a str,
    phone: &'a str,
    from_address: &'a str,
}

/// Business-facing order notification.
#[derive(Template)]
#[template(path = "email/order_notification.txt")]
struct OrderNotificationText<'a> {
    customer_name: &'a str,
    customer_email: &'a str,
    phone: &'a str,
    address: &'a str,
    lines: &'a [OrderLine],
    total: &'a str,
    notes: &'a str,
    order_date: &'a str,
    order_time: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Email service for relaying formatted submissions.
///
/// Holds a single long-lived SMTP transport shared across requests; each send
/// is an independent call awaited to completion.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    business_address: String,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the relay transport cannot be configured.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            business_address: config.business_address.clone(),
        })
    }

    /// Probe the SMTP relay connection. Used by the readiness endpoint.
    pub async fn test_connection(&self) -> bool {
        self.mailer.test_connection().await.unwrap_or(false)
    }

    /// Send the pair of emails for a contact submission: the business
    /// notification first, then the acknowledgement to the submitter.
    ///
    /// # Errors
    ///
    /// Returns error if either message fails to render, build, or send.
    pub async fn send_contact_emails(
        &self,
        contact: &ContactSubmission,
    ) -> Result<(), EmailError> {
        let notification = ContactNotificationText {
            name: &contact.name,
            email: &contact.email,
            subject: &contact.subject,
            message: &contact.message,
        }
        .render()?;

        self.send_text_email(
            &self.business_address,
            &format!("New Contact Form: {}", contact.subject),
            &notification,
        )
        .await?;

        let acknowledgement = ContactAcknowledgementText {
            name: &contact.name,
            subject: &contact.subject,
            message: &contact.message,
            from_address: &self.from_address,
        }
        .render()?;

        self.send_text_email(
            &contact.email,
            "We received your message - Legionnaire",
            &acknowledgement,
        )
        .await
    }

    /// Send the pair of emails for an order submission: the customer
    /// confirmation first, then the business notification.
    ///
    /// # Errors
    ///
    /// Returns error if either message fails to render, build, or send.
    pub async fn send_order_emails(&self, order: &OrderSubmission) -> Result<(), EmailError> {
        let (order_date, order_time) = order_timestamp(Utc::now());

        let customer_name = order.checkout_form.full_name();
        let lines = order_lines(order);
        let total = format_amount(order.total);
        let address = format_delivery_address(&order.checkout_form);

        let confirmation = OrderConfirmationText {
            customer_name: &customer_name,
            order_date: &order_date,
            lines: &lines,
            total: &total,
            address: &address,
            phone: &order.checkout_form.phone,
            from_address: &self.from_address,
        }
        .render()?;

        self.send_text_email(
            &order.checkout_form.email,
            "Order Confirmation - Legionnaire Pre-Order",
            &confirmation,
        )
        .await?;

        let notes = order
            .checkout_form
            .notes
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("None");

        let notification = OrderNotificationText {
            customer_name: &customer_name,
            customer_email: &order.checkout_form.email,
            phone: &order.checkout_form.phone,
            address: &address,
            lines: &lines,
            total: &total,
            notes,
            order_date: &order_date,
            order_time: &order_time,
        }
        .render()?;

        self.send_text_email(
            &self.business_address,
            &format!("New Pre-Order: {customer_name}"),
            &notification,
        )
        .await
    }

    /// Send a single plain-text email.
    async fn send_text_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.mailer.send(email).await?;

        tracing::info!(to = %to, subject = %subject, "Email sent successfully");
        Ok(())
    }
}

/// Format an order timestamp as `(date, time)` strings.
///
/// Rendered in the business's local time zone so that emails show the date
/// the order was placed in New Zealand, not the server's clock.
fn order_timestamp(now: DateTime<Utc>) -> (String, String) {
    let local = now.with_timezone(&chrono_tz::Pacific::Auckland);
    (
        local.format("%d/%m/%Y").to_string(),
        local.format("%H:%M:%S").to_string(),
    )
}

/// Itemize an order into preformatted display lines.
#[must_use]
pub fn order_lines(order: &OrderSubmission) -> Vec<OrderLine> {
    order
        .items
        .iter()
        .map(|item| OrderLine {
            name: item.product.name.clone(),
            quantity: item.quantity,
            total: format_amount(item.line_total()),
        })
        .collect()
}

/// Format a decimal amount for email display, e.g. `$596.00`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Format the delivery address block: street on the first line, then
/// `suburb, city postcode` with the suburb omitted when absent.
#[must_use]
pub fn format_delivery_address(form: &CheckoutForm) -> String {
    let suburb = form
        .suburb
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|s| format!("{s}, "))
        .unwrap_or_default();

    format!(
        "{}\n{}{} {}",
        form.street_address, suburb, form.city, form.postcode
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use legionnaire_core::{Cart, catalog};

    fn checkout_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Sam".to_string(),
            last_name: "Harrington".to_string(),
            email: "sam@example.com".to_string(),
            phone: "+64 21 555 0101".to_string(),
            street_address: "12 Rimu Lane".to_string(),
            suburb: Some("Aramoho".to_string()),
            city: "Whanganui".to_string(),
            postcode: "4500".to_string(),
            notes: None,
        }
    }

    fn order() -> OrderSubmission {
        let mut cart = Cart::new();
        cart.add(
            catalog::find("ftac-evolution").expect("catalog product"),
            2,
            Some("Black"),
        );
        cart.add(
            catalog::find("legionnaire-drag-bag").expect("catalog product"),
            1,
            Some("Olive"),
        );
        OrderSubmission::from_cart(&cart, checkout_form())
    }

    #[test]
    fn test_order_lines_use_price_or_zero() {
        let lines = order_lines(&order());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].total, "$596.00");
        assert_eq!(lines[1].total, "$0.00");
    }

    #[test]
    fn test_order_timestamp_renders_in_auckland_time() {
        // 13:30 UTC in August is 01:30 the next day under NZST (UTC+12).
        let utc: DateTime<Utc> = "2026-08-28T13:30:00Z".parse().expect("parses");
        let (date, time) = order_timestamp(utc);

        assert_eq!(date, "29/08/2026");
        assert_eq!(time, "01:30:00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::ZERO), "$0.00");
        assert_eq!(format_amount(Decimal::new(59600, 2)), "$596.00");
        assert_eq!(format_amount(Decimal::new(2985, 1)), "$298.50");
    }

    #[test]
    fn test_format_delivery_address_with_suburb() {
        let address = format_delivery_address(&checkout_form());
        assert_eq!(address, "12 Rimu Lane\nAramoho, Whanganui 4500");
    }

    #[test]
    fn test_format_delivery_address_without_suburb() {
        let mut form = checkout_form();
        form.suburb = None;
        assert_eq!(
            format_delivery_address(&form),
            "12 Rimu Lane\nWhanganui 4500"
        );

        form.suburb = Some("  ".to_string());
        assert_eq!(
            format_delivery_address(&form),
            "12 Rimu Lane\nWhanganui 4500"
        );
    }

    #[test]
    fn test_contact_notification_renders_all_fields() {
        let body = ContactNotificationText {
            name: "Sam Harrington",
            email: "sam@example.com",
            subject: "Sizing question",
            message: "Does the drag bag fit a 30in barrel?",
        }
        .render()
        .expect("renders");

        assert!(body.contains("Name: Sam Harrington"));
        assert!(body.contains("Email: sam@example.com"));
        assert!(body.contains("Subject: Sizing question"));
        assert!(body.contains("Does the drag bag fit a 30in barrel?"));
        assert!(body.contains("Sent from Legionnaire Website"));
    }

    #[test]
    fn test_order_confirmation_renders_itemization() {
        let order = order();
        let lines = order_lines(&order);
        let body = OrderConfirmationText {
            customer_name: "Sam Harrington",
            order_date: "27/08/2026",
            lines: &lines,
            total: "$596.00",
            address: "12 Rimu Lane\nAramoho, Whanganui 4500",
            phone: "+64 21 555 0101",
            from_address: "nico@legionnaire.co.nz",
        }
        .render()
        .expect("renders");

        assert!(body.contains("Dear Sam Harrington,"));
        assert!(body.contains("- F-TAC\u{2122} Evolution \u{d7} 2: $596.00"));
        assert!(body.contains("- Legionnaire Drag Bag \u{d7} 1: $0.00"));
        assert!(body.contains("TOTAL: $596.00"));
        assert!(body.contains("12 Rimu Lane\nAramoho, Whanganui 4500"));
        assert!(body.contains("EXPECTED DELIVERY: 6-8 weeks"));
    }

    #[test]
    fn test_order_notification_defaults_notes_to_none() {
        let order = order();
        let lines = order_lines(&order);
        let body = OrderNotificationText {
            customer_name: "Sam Harrington",
            customer_email: "sam@example.com",
            phone: "+64 21 555 0101",
            address: "12 Rimu Lane\nAramoho, Whanganui 4500",
            lines: &lines,
            total: "$596.00",
            notes: "None",
            order_date: "27/08/2026",
            order_time: "09:14:03",
        }
        .render()
        .expect("renders");

        assert!(body.contains("NEW PRE-ORDER RECEIVED"));
        assert!(body.contains("ADDITIONAL NOTES:\nNone"));
        assert!(body.contains("Order Date: 27/08/2026 at 09:14:03"));
    }
}
