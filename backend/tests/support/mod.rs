//! Shared harness for integration tests.

pub mod embedded_postgres;

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use bullburger::Trace;
use bullburger::inbound::http::configure_api;
use bullburger::inbound::http::state::HttpState;
use bullburger::test_support::{MutableClock, in_memory_ports};
use serde_json::Value;

/// Full API with trace middleware over fresh in-memory stores.
pub async fn api(
    clock: Arc<MutableClock>,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let ports = in_memory_ports(clock).await.expect("in-memory ports");
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(ports)))
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}

/// Send `req` and return the status with the decoded JSON body.
pub async fn send(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: Request,
) -> (u16, Value) {
    let res = test::call_service(app, req).await;
    let status = res.status().as_u16();
    let body = test::read_body(res).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, json)
}

pub fn get(uri: &str) -> Request {
    test::TestRequest::get().uri(uri).to_request()
}

pub fn post_json(uri: &str, body: &Value) -> Request {
    test::TestRequest::post().uri(uri).set_json(body).to_request()
}

pub fn patch_json(uri: &str, body: &Value) -> Request {
    test::TestRequest::patch().uri(uri).set_json(body).to_request()
}
