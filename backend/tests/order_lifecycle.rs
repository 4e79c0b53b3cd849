//! End-to-end order flows over the HTTP surface.

mod support;

use std::collections::HashSet;

use bullburger::domain::OrderNumber;
use bullburger::test_support::fixed_clock;
use chrono::TimeDelta;
use rstest::rstest;
use serde_json::{Value, json};

use support::{api, get, patch_json, post_json, send};

fn order(customer: &str, total: i64) -> Value {
    json!({ "customerName": customer, "total": total })
}

fn is_well_formed(number: &str) -> bool {
    number.len() == 11
        && number.starts_with("BB")
        && number
            .chars()
            .skip(2)
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
}

#[rstest]
#[actix_web::test]
async fn order_numbers_are_well_formed_and_unique() {
    let app = api(fixed_clock()).await;
    let mut seen = HashSet::new();

    for i in 0..250 {
        let (status, body) = send(&app, post_json("/api/orders", &order("Guest", i))).await;
        assert_eq!(status, 201);
        let number = body["orderNumber"].as_str().expect("order number").to_owned();
        assert!(is_well_formed(&number), "{number}");
        assert!(OrderNumber::parse(&number).is_ok());
        assert!(seen.insert(number), "duplicate order number");
    }
}

#[rstest]
#[actix_web::test]
async fn tracking_an_order_from_placement_to_delivery() {
    let clock = fixed_clock();
    let app = api(clock.clone()).await;

    let (status, placed) = send(&app, post_json("/api/orders", &order("Asha Rao", 219_700))).await;
    assert_eq!(status, 201);
    assert_eq!(placed["status"], "confirmed");
    assert_eq!(placed["createdAt"], placed["updatedAt"]);
    let number = placed["orderNumber"].as_str().expect("order number").to_owned();

    let (status, fetched) = send(&app, get(&format!("/api/orders/{number}"))).await;
    assert_eq!(status, 200);
    assert_eq!(fetched["totalDisplay"], "Rs. 2197");

    let mut previous = placed["updatedAt"].as_str().expect("timestamp").to_owned();
    for next in ["preparing", "out_for_delivery", "delivered"] {
        clock.advance(TimeDelta::minutes(10));
        let (status, updated) = send(
            &app,
            patch_json(&format!("/api/orders/{number}/status"), &json!({ "status": next })),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(updated["status"], next);
        let stamp = updated["updatedAt"].as_str().expect("timestamp").to_owned();
        assert!(stamp > previous, "{stamp} must follow {previous}");
        assert_eq!(updated["createdAt"], placed["createdAt"]);
        previous = stamp;
    }

    let (status, progress) = send(&app, get(&format!("/api/orders/{number}/progress"))).await;
    assert_eq!(status, 200);
    let states: Vec<&str> = progress["steps"]
        .as_array()
        .expect("steps")
        .iter()
        .filter_map(|step| step["state"].as_str())
        .collect();
    assert_eq!(states, ["completed", "completed", "completed", "active"]);
}

#[rstest]
#[actix_web::test]
async fn looking_up_a_missing_order_has_no_side_effects() {
    let app = api(fixed_clock()).await;
    let (_, placed) = send(&app, post_json("/api/orders", &order("Ravi", 64_900))).await;
    let number = placed["orderNumber"].as_str().expect("order number").to_owned();

    for _ in 0..3 {
        let (status, body) = send(&app, get("/api/orders/BBZZZZZZZZZ")).await;
        assert_eq!(status, 404);
        assert_eq!(body["code"], "not_found");
    }

    let (status, body) = send(&app, get(&format!("/api/orders/{number}"))).await;
    assert_eq!(status, 200);
    assert_eq!(body, placed);
}

#[rstest]
#[case(json!({}))]
#[case(json!({"status": ""}))]
#[case(json!({"status": false}))]
#[case(json!({"status": ["preparing"]}))]
#[case(json!({"status": "PREPARING"}))]
#[actix_web::test]
async fn rejected_status_updates_do_not_mutate(#[case] body: Value) {
    let clock = fixed_clock();
    let app = api(clock.clone()).await;
    let (_, placed) = send(&app, post_json("/api/orders", &order("Meera", 39_900))).await;
    let number = placed["orderNumber"].as_str().expect("order number").to_owned();

    clock.advance(TimeDelta::minutes(1));
    let (status, error) = send(
        &app,
        patch_json(&format!("/api/orders/{number}/status"), &body),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(error["code"], "invalid_request");
    assert!(error["traceId"].is_string());

    let (_, current) = send(&app, get(&format!("/api/orders/{number}"))).await;
    assert_eq!(current, placed);
}

#[rstest]
#[actix_web::test]
async fn order_with_explicit_initial_status_starts_there() {
    let app = api(fixed_clock()).await;
    let mut body = order("Kiran", 74_900);
    body["status"] = json!("preparing");

    let (status, placed) = send(&app, post_json("/api/orders", &body)).await;
    assert_eq!(status, 201);
    assert_eq!(placed["status"], "preparing");
}
