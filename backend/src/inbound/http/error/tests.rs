//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    MockOrderRepository, OrderQuery, OrderRepositoryError, RandomOrderNumberGenerator,
};
use crate::domain::{Error, OrderService};
use crate::test_support::fixed_clock;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("Order not found"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn response_payload(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Error {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id(expected_trace_id: String) {
    let error = Error::internal("order repository error: relation \"orders\" does not exist")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"sql": "SELECT 1"}));

    let payload = response_payload(
        error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn validation_errors_keep_field_details(expected_trace_id: String) {
    let details = json!({"errors": [{"field": "status", "code": "invalid_status", "message": "x"}]});
    let error = Error::invalid_request("bad status")
        .with_trace_id(expected_trace_id.clone())
        .with_details(details.clone());

    let payload = response_payload(
        error,
        StatusCode::BAD_REQUEST,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "bad status");
    assert_eq!(payload.details(), Some(&details));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let payload = response_payload(
        Error::not_found("Order not found"),
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    assert_eq!(payload.code(), ErrorCode::NotFound);
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
#[actix_web::test]
async fn unreachable_store_response_carries_no_driver_text() {
    let mut repo = MockOrderRepository::new();
    repo.expect_find_by_number().return_once(|_| {
        Err(OrderRepositoryError::connection(
            "password authentication failed for user bull at db.internal:5432",
        ))
    });
    let service = OrderService::new(
        Arc::new(repo),
        Arc::new(RandomOrderNumberGenerator),
        fixed_clock(),
    );
    let error = service
        .get_order("BB123456789")
        .await
        .expect_err("store is down");

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = String::from_utf8_lossy(&bytes);
    assert!(body.contains("Order store unavailable"), "{body}");
    for leaked in ["password", "db.internal", "repository"] {
        assert!(!body.contains(leaked), "{leaked} leaked in {body}");
    }
}

#[rstest]
fn from_actix_error_is_redacted_internal_error() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}
