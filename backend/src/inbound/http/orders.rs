//! Order placement and tracking endpoints.
//!
//! ```text
//! POST  /api/orders
//! GET   /api/orders/{orderNumber}
//! PATCH /api/orders/{orderNumber}/status
//! GET   /api/orders/{orderNumber}/progress
//! ```
//!
//! Malformed order numbers are answered exactly like unknown ones (404).

use actix_web::{HttpResponse, get, patch, post, web};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    ApiResult, Error, Order, OrderDraft, OrderItem, OrderItemDraft, OrderProgress, validate_status,
};
use crate::inbound::http::cache_control::order_no_cache_header;
use crate::inbound::http::schemas::{ErrorSchema, OrderStatusSchema, StepStateSchema};
use crate::inbound::http::state::HttpState;

/// One line of an order request.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    #[schema(example = "Loaded Bull Fries")]
    pub name: Option<String>,
    /// Defaults to 1.
    #[schema(example = 2, minimum = 1)]
    pub quantity: Option<i64>,
    /// Unit price in minor currency units.
    #[schema(example = 49900, minimum = 0)]
    pub price: Option<i64>,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[schema(example = "Asha Rao")]
    pub customer_name: Option<String>,
    /// Order total in minor currency units.
    #[schema(example = 219700, minimum = 0)]
    pub total: Option<i64>,
    /// Initial status; `confirmed` when omitted.
    #[schema(value_type = Option<OrderStatusSchema>)]
    pub status: Option<String>,
    pub items: Option<Vec<OrderItemRequest>>,
}

impl From<OrderItemRequest> for OrderItemDraft {
    fn from(item: OrderItemRequest) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

impl From<OrderRequest> for OrderDraft {
    fn from(request: OrderRequest) -> Self {
        Self {
            customer_name: request.customer_name,
            total: request.total,
            status: request.status,
            items: request
                .items
                .map(|items| items.into_iter().map(OrderItemDraft::from).collect()),
        }
    }
}

/// Body of `PATCH /api/orders/{orderNumber}/status`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    #[schema(value_type = OrderStatusSchema)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub name: String,
    pub quantity: u32,
    pub price: i64,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            name: item.name().to_owned(),
            quantity: item.quantity(),
            price: item.price().minor_units(),
        }
    }
}

/// Order as served to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    #[schema(example = "BBK3Q9Z1X7M", pattern = "^BB[A-Z0-9]{9}$")]
    pub order_number: String,
    pub customer_name: String,
    /// Total in minor currency units.
    #[schema(example = 219700)]
    pub total: i64,
    #[schema(example = "Rs. 2197")]
    pub total_display: String,
    #[schema(value_type = OrderStatusSchema)]
    pub status: String,
    pub items: Vec<OrderItemResponse>,
    /// RFC 3339 with microsecond precision.
    #[schema(example = "2025-06-01T18:30:00.123456Z")]
    pub created_at: String,
    #[schema(example = "2025-06-01T18:42:10.000001Z")]
    pub updated_at: String,
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            order_number: order.order_number().to_string(),
            customer_name: order.customer_name().to_owned(),
            total: order.total().minor_units(),
            total_display: order.total().display(),
            status: order.status().as_str().to_owned(),
            items: order.items().iter().map(OrderItemResponse::from).collect(),
            created_at: timestamp(order.created_at()),
            updated_at: timestamp(order.updated_at()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStepResponse {
    #[schema(value_type = OrderStatusSchema)]
    pub status: String,
    #[schema(example = "Out for Delivery")]
    pub label: String,
    pub description: String,
    #[schema(value_type = StepStateSchema)]
    pub state: String,
}

/// Tracker view of an order.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderProgressResponse {
    pub order_number: String,
    #[schema(value_type = Option<OrderStatusSchema>)]
    pub status: Option<String>,
    pub steps: Vec<ProgressStepResponse>,
}

impl OrderProgressResponse {
    fn new(order_number: String, progress: &OrderProgress) -> Self {
        Self {
            order_number,
            status: progress.current().map(|status| status.as_str().to_owned()),
            steps: progress
                .steps()
                .iter()
                .map(|step| ProgressStepResponse {
                    status: step.status.as_str().to_owned(),
                    label: step.status.label().to_owned(),
                    description: step.status.description().to_owned(),
                    state: step.state.as_str().to_owned(),
                })
                .collect(),
        }
    }
}

fn order_not_found(order_number: &str) -> Error {
    Error::not_found("Order not found").with_details(json!({ "orderNumber": order_number }))
}

/// Place a new order.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Invalid order", body = ErrorSchema),
        (status = 503, description = "Order store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "placeOrder"
)]
#[post("/orders")]
pub async fn place_order(
    state: web::Data<HttpState>,
    payload: web::Json<OrderRequest>,
) -> ApiResult<HttpResponse> {
    let order = state
        .orders
        .place_order(OrderDraft::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(OrderResponse::from(&order)))
}

/// Fetch an order by its public number.
#[utoipa::path(
    get,
    path = "/api/orders/{orderNumber}",
    params(("orderNumber" = String, Path, description = "Public order number", example = "BBK3Q9Z1X7M")),
    responses(
        (status = 200, description = "Order", body = OrderResponse),
        (status = 404, description = "No such order", body = ErrorSchema),
        (status = 503, description = "Order store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/orders/{orderNumber}")]
pub async fn get_order(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let order_number = path.into_inner();
    let order = state
        .orders_query
        .get_order(&order_number)
        .await?
        .ok_or_else(|| order_not_found(&order_number))?;
    Ok(HttpResponse::Ok()
        .insert_header(order_no_cache_header())
        .json(OrderResponse::from(&order)))
}

/// Overwrite an order's status.
///
/// Any known status may replace any other; only the value itself is checked.
#[utoipa::path(
    patch,
    path = "/api/orders/{orderNumber}/status",
    params(("orderNumber" = String, Path, description = "Public order number")),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Updated order", body = OrderResponse),
        (status = 400, description = "Missing or unknown status", body = ErrorSchema),
        (status = 404, description = "No such order", body = ErrorSchema),
        (status = 503, description = "Order store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "updateOrderStatus"
)]
#[patch("/orders/{orderNumber}/status")]
pub async fn update_order_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<StatusUpdateRequest>,
) -> ApiResult<HttpResponse> {
    let order_number = path.into_inner();
    let status = validate_status(payload.status.as_deref())?;
    let order = state
        .orders
        .update_order_status(&order_number, status)
        .await?
        .ok_or_else(|| order_not_found(&order_number))?;
    Ok(HttpResponse::Ok()
        .insert_header(order_no_cache_header())
        .json(OrderResponse::from(&order)))
}

/// Step-by-step tracker view of an order.
#[utoipa::path(
    get,
    path = "/api/orders/{orderNumber}/progress",
    params(("orderNumber" = String, Path, description = "Public order number")),
    responses(
        (status = 200, description = "Order progress", body = OrderProgressResponse),
        (status = 404, description = "No such order", body = ErrorSchema),
        (status = 503, description = "Order store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrderProgress"
)]
#[get("/orders/{orderNumber}/progress")]
pub async fn get_order_progress(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let order_number = path.into_inner();
    let progress = state
        .orders_query
        .get_order_progress(&order_number)
        .await?
        .ok_or_else(|| order_not_found(&order_number))?;
    Ok(HttpResponse::Ok()
        .insert_header(order_no_cache_header())
        .json(OrderProgressResponse::new(order_number, &progress)))
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
