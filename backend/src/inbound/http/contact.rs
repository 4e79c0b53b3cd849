//! Contact form submission.
//!
//! ```text
//! POST /api/contact
//! ```

use actix_web::{HttpResponse, post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, Contact, ContactDraft};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[schema(example = "Meera Iyer")]
    pub name: Option<String>,
    #[schema(example = "meera@example.com")]
    pub email: Option<String>,
    #[schema(example = "Catering enquiry")]
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl From<ContactRequest> for ContactDraft {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}

impl From<&Contact> for ContactResponse {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id(),
            name: contact.name().to_owned(),
            email: contact.email().to_owned(),
            subject: contact.subject().to_owned(),
            message: contact.message().to_owned(),
            created_at: contact
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Store a contact form submission.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Submission stored", body = ContactResponse),
        (status = 400, description = "Invalid submission", body = ErrorSchema),
        (status = 503, description = "Contact store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let contact = state
        .contact
        .submit_contact(ContactDraft::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(ContactResponse::from(&contact)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::validation::json_config;
    use crate::test_support::{fixed_clock, in_memory_ports};

    async fn call(body: Value) -> (StatusCode, Value) {
        let ports = in_memory_ports(fixed_clock())
            .await
            .expect("in-memory ports");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(ports)))
                .service(
                    web::scope("/api")
                        .app_data(json_config())
                        .service(submit_contact),
                ),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn valid_submission_is_created() {
        let (status, body) = call(json!({
            "name": "Meera Iyer",
            "email": "meera@example.com",
            "subject": "Catering enquiry",
            "message": "Do you cater for 40 people?"
        }))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["subject"], "Catering enquiry");
        assert_eq!(body["createdAt"], "2025-06-01T18:30:00.000000Z");
    }

    #[rstest]
    #[actix_web::test]
    async fn every_invalid_field_is_reported() {
        let (status, body) = call(json!({
            "name": "",
            "email": "meera.example.com",
            "message": "hello"
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = body["details"]["errors"]
            .as_array()
            .expect("errors array")
            .iter()
            .filter_map(|error| error["field"].as_str())
            .collect();
        assert_eq!(fields, ["name", "email", "subject"]);
    }
}
