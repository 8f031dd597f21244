//! Submission client round trips against a live storefront server.
//!
//! The server runs on an ephemeral local port with its mail relay pointed at
//! a closed port, so these tests exercise the whole submit path: client-side
//! snapshot and total, JSON wire format, handler parsing, relay failure
//! swallowing, and the success-shaped acknowledgement.

use std::net::SocketAddr;

use legionnaire_client::{SubmissionClient, SubmitError};
use legionnaire_core::{Cart, CheckoutForm, ContactSubmission, catalog};
use legionnaire_integration_tests::test_router;

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("binds ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, test_router()).await.expect("serves");
    });

    addr
}

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
        notes: Some("Leave at the gate".to_string()),
    }
}

#[tokio::test]
async fn test_contact_round_trip() {
    let addr = spawn_server().await;
    let client = SubmissionClient::new(format!("http://{addr}")).expect("client builds");

    let contact = ContactSubmission {
        name: "Sam Harrington".to_string(),
        email: "sam@example.com".to_string(),
        subject: "Sizing question".to_string(),
        message: "Does the drag bag fit a 30in barrel?".to_string(),
    };

    let ack = client.submit_contact(&contact).await.expect("acknowledged");
    assert_eq!(
        ack.message,
        "Message sent successfully. We will contact you shortly."
    );
}

#[tokio::test]
async fn test_order_round_trip_returns_order_id() {
    let addr = spawn_server().await;
    let client = SubmissionClient::new(format!("http://{addr}")).expect("client builds");

    let mut cart = Cart::new();
    cart.add(
        catalog::find("ftac-evolution").expect("catalog product"),
        2,
        Some("Black"),
    );
    cart.add(
        catalog::find("legionnaire-mab").expect("catalog product"),
        1,
        None,
    );

    let ack = client
        .submit_order(&cart, &checkout_form())
        .await
        .expect("acknowledged");

    assert_eq!(ack.message, "Order submitted successfully");
    let order_id = ack.order_id.expect("order id issued");
    assert!(order_id.starts_with("ORD-"));
}

#[tokio::test]
async fn test_unreachable_server_is_a_retryable_error() {
    // Nothing listens on the discard port.
    let client = SubmissionClient::new("http://127.0.0.1:9").expect("client builds");

    let contact = ContactSubmission {
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        subject: "Hello".to_string(),
        message: "Anyone there?".to_string(),
    };

    let err = client
        .submit_contact(&contact)
        .await
        .expect_err("network failure surfaces");
    assert!(matches!(err, SubmitError::Http(_)));
}
