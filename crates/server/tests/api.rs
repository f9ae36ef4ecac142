use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::{Catalog, Money, Session};
use server::{ServerState, SinkError, SubmissionSink, router, types::submission::Submission};

#[derive(Default)]
struct RecordingSink {
    received: Mutex<Vec<Submission>>,
}

impl SubmissionSink for RecordingSink {
    fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        self.received.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

struct FailingSink;

impl SubmissionSink for FailingSink {
    fn deliver(&self, _submission: &Submission) -> Result<(), SinkError> {
        Err(SinkError("mail server unreachable".to_string()))
    }
}

fn app_with_budget(major: i64) -> Router {
    let session = Session::new(Money::from_major(major)).unwrap();
    router(ServerState::new(session, Catalog::builtin()))
}

fn app_with_sink(major: i64, sink: Arc<dyn SubmissionSink>) -> Router {
    let session = Session::new(Money::from_major(major)).unwrap();
    router(ServerState::new(session, Catalog::builtin()).with_sink(sink))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn add_items_and_reject_over_budget() {
    let app = app_with_budget(500);

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "A", "price_minor": 10_000, "quantity": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], true);
    assert_eq!(body["remaining"]["minor"], 30_000);

    let (_, body) = send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "B", "price_minor": 5_000})),
    )
    .await;
    assert_eq!(body["accepted"], true);

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "C", "price_minor": 25_100})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], false);
    assert!(body["reason"].as_str().unwrap().contains("not enough budget"));

    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart["total_cost"]["minor"], 25_000);
    assert_eq!(cart["remaining"]["formatted"], "₹250.00");
    assert_eq!(cart["over_budget"], false);
    assert_eq!(cart["groups"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn catalog_selection_groups_extras_under_design() {
    let app = app_with_budget(100_000);

    let (status, catalog) = send_json(&app, "GET", "/api/catalog", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(catalog["rooms"].as_array().unwrap().len(), 4);

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/cart/designs",
        Some(json!({"room": "Kitchen", "design": "Modular Kitchen"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], true);

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/cart/extras",
        Some(json!({
            "room": "Kitchen",
            "design": "Modular Kitchen",
            "extra": "Chimney",
            "quantity": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], true);

    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    let groups = cart["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["label"], "Modular Kitchen");
    assert_eq!(groups[0]["items"].as_array().unwrap().len(), 2);
    assert_eq!(groups[0]["items"][1]["group"], "Modular Kitchen");
    assert_eq!(groups[0]["items"][1]["quantity"], 2);
}

#[tokio::test]
async fn unknown_design_is_not_found() {
    let app = app_with_budget(100_000);
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/cart/designs",
        Some(json!({"room": "Garage", "design": "Anything"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Garage"));
}

#[tokio::test]
async fn zero_extras_is_unprocessable() {
    let app = app_with_budget(100_000);
    let (status, _) = send_json(
        &app,
        "POST",
        "/api/cart/extras",
        Some(json!({
            "room": "Kitchen",
            "design": "Modular Kitchen",
            "extra": "Chimney",
            "quantity": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn remove_one_unit_then_entry() {
    let app = app_with_budget(1_000);
    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({
            "name": "Lamp",
            "price_minor": 1_000,
            "quantity": 2,
            "group": "Study"
        })),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/cart/items/remove",
        Some(json!({"name": "Lamp", "group": "Study"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart["groups"][0]["items"][0]["quantity"], 1);

    send(
        &app,
        "POST",
        "/api/cart/items/remove",
        Some(json!({"name": "Lamp", "group": "Study"})),
    )
    .await;
    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    assert!(cart["groups"].as_array().unwrap().is_empty());

    // Absent keys are a no-op.
    let (status, _) = send(
        &app,
        "POST",
        "/api/cart/items/remove",
        Some(json!({"name": "Lamp"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn budget_update_respects_total() {
    let app = app_with_budget(500);
    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "A", "price_minor": 30_000})),
    )
    .await;

    let (_, body) = send_json(&app, "PUT", "/api/budget", Some(json!({"value": "200"}))).await;
    assert_eq!(body["accepted"], false);
    assert_eq!(body["budget"]["minor"], 50_000);

    let (_, body) = send_json(&app, "PUT", "/api/budget", Some(json!({"value": "abc"}))).await;
    assert_eq!(body["accepted"], false);

    let (_, body) = send_json(&app, "PUT", "/api/budget", Some(json!({"value": "300"}))).await;
    assert_eq!(body["accepted"], true);
    assert_eq!(body["budget"]["formatted"], "₹300.00");

    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart["remaining"]["minor"], 0);
}

#[tokio::test]
async fn invoice_json_csv_and_document() {
    let app = app_with_budget(500);
    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "A", "price_minor": 10_000, "quantity": 2})),
    )
    .await;
    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "B", "price_minor": 5_000})),
    )
    .await;

    let (status, invoice) = send_json(&app, "GET", "/api/invoice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(invoice["currency"], "INR");
    assert_eq!(invoice["subtotal"]["formatted"], "₹225.00");
    assert_eq!(invoice["tax"]["formatted"], "₹25.00");
    assert_eq!(invoice["total"]["formatted"], "₹250.00");
    assert_eq!(invoice["lines"].as_array().unwrap().len(), 2);

    let (status, csv) = send(&app, "GET", "/api/invoice.csv", None).await;
    assert_eq!(status, StatusCode::OK);
    let csv = String::from_utf8(csv).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("description,unit_price,quantity,total"));
    assert_eq!(lines.next(), Some("A,100.00,2,200.00"));

    let (status, text) = send(&app, "GET", "/api/invoice.txt", None).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("INVOICE NO: 00001"));
    assert!(text.contains("Thank you for your business!"));

    let (_, text) = send(&app, "GET", "/api/invoice.txt", None).await;
    assert!(String::from_utf8(text).unwrap().contains("INVOICE NO: 00002"));
}

#[tokio::test]
async fn submit_hands_over_and_clears_cart() {
    let sink = Arc::new(RecordingSink::default());
    let app = app_with_sink(500, sink.clone());
    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "A", "price_minor": 10_000, "quantity": 2})),
    )
    .await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/submit",
        Some(json!({"email": "buyer@example.in", "phone": "9876543210"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"]["minor"], 20_000);

    let received = sink.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].email, "buyer@example.in");
    assert_eq!(received[0].items[0].quantity, 2);
    assert_eq!(received[0].total_cost_minor, 20_000);
    assert_eq!(received[0].invoice.tax.minor, 2_000);
    drop(received);

    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    assert!(cart["groups"].as_array().unwrap().is_empty());
    assert_eq!(cart["budget"]["minor"], 50_000);
}

#[tokio::test]
async fn submit_refuses_bad_contact_and_empty_cart() {
    let sink = Arc::new(RecordingSink::default());
    let app = app_with_sink(500, sink.clone());

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/submit",
        Some(json!({"email": "buyer@example.in", "phone": "9876543210"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "A", "price_minor": 10_000})),
    )
    .await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/submit",
        Some(json!({"email": "buyer@example.in", "phone": "12345"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Phone number must be exactly 10 digits.");

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/submit",
        Some(json!({"email": "not-an-email", "phone": "9876543210"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(sink.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_delivery_keeps_cart() {
    let app = app_with_sink(500, Arc::new(FailingSink));
    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "A", "price_minor": 10_000})),
    )
    .await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/submit",
        Some(json!({"email": "buyer@example.in", "phone": "9876543210"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart["total_cost"]["minor"], 10_000);
}

#[tokio::test]
async fn clear_keeps_budget() {
    let app = app_with_budget(500);
    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "A", "price_minor": 10_000})),
    )
    .await;

    let (status, _) = send(&app, "DELETE", "/api/cart", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart["total_cost"]["minor"], 0);
    assert_eq!(cart["budget"]["minor"], 50_000);
}

#[tokio::test]
async fn spawned_server_answers_over_tcp() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = ServerState::new(Session::default(), Catalog::builtin());
    let addr = server::spawn_with_listener(state, listener).unwrap();

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /api/cart HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("\"over_budget\":false"));
}

#[tokio::test]
async fn cheap_re_add_can_leave_cart_over_budget() {
    let sink = Arc::new(RecordingSink::default());
    let app = app_with_sink(100, sink.clone());
    send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "Lamp", "price_minor": 4_000})),
    )
    .await;

    let (_, body) = send_json(
        &app,
        "POST",
        "/api/cart/items",
        Some(json!({"name": "Lamp", "price_minor": 1, "quantity": 2})),
    )
    .await;
    assert_eq!(body["accepted"], true);
    assert_eq!(body["remaining"]["minor"], -2_000);

    let (_, cart) = send_json(&app, "GET", "/api/cart", None).await;
    assert_eq!(cart["over_budget"], true);
    assert_eq!(cart["total_cost"]["minor"], 12_000);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/submit",
        Some(json!({"email": "buyer@example.in", "phone": "9876543210"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(sink.received.lock().unwrap().is_empty());
}
