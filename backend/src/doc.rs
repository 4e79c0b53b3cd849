//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint of the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], which
//! describe domain types without coupling them to utoipa.

use utoipa::OpenApi;

use crate::inbound::http::contact::{ContactRequest, ContactResponse};
use crate::inbound::http::menu::MenuItemResponse;
use crate::inbound::http::orders::{
    OrderItemRequest, OrderItemResponse, OrderProgressResponse, OrderRequest, OrderResponse,
    ProgressStepResponse, StatusUpdateRequest,
};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, OrderStatusSchema, StepStateSchema,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bull Burger API",
        description = "Menu catalogue, order placement and tracking, and contact submissions.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::menu::list_menu,
        crate::inbound::http::menu::list_menu_by_category,
        crate::inbound::http::orders::place_order,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::update_order_status,
        crate::inbound::http::orders::get_order_progress,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        OrderStatusSchema,
        StepStateSchema,
        MenuItemResponse,
        OrderRequest,
        OrderItemRequest,
        OrderResponse,
        OrderItemResponse,
        StatusUpdateRequest,
        OrderProgressResponse,
        ProgressStepResponse,
        ContactRequest,
        ContactResponse,
    )),
    tags(
        (name = "menu", description = "Menu catalogue"),
        (name = "orders", description = "Order placement and tracking"),
        (name = "contact", description = "Contact form"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn object_fields(doc: &utoipa::openapi::OpenApi, name: &str) -> Vec<String> {
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/menu",
            "/api/menu/{category}",
            "/api/orders",
            "/api/orders/{orderNumber}",
            "/api/orders/{orderNumber}/status",
            "/api/orders/{orderNumber}/progress",
            "/api/contact",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[rstest]
    fn order_response_uses_camel_case_fields() {
        let fields = object_fields(&ApiDoc::openapi(), "OrderResponse");
        for field in ["orderNumber", "customerName", "createdAt", "updatedAt"] {
            assert!(fields.iter().any(|f| f == field), "missing {field}");
        }
    }

    #[rstest]
    fn error_schema_is_registered_under_domain_name() {
        let fields = object_fields(&ApiDoc::openapi(), "crate.domain.Error");
        assert!(fields.iter().any(|f| f == "code"));
        assert!(fields.iter().any(|f| f == "message"));
    }
}
