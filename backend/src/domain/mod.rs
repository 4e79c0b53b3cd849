//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities for the menu catalogue, the order
//! store and the contact inbox, independent of HTTP and storage. Untrusted
//! input arrives as `*Draft` values and is validated once into typed records
//! before any port sees it.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifiers.
//! - MenuItem, Order, OrderNumber, OrderStatus, OrderProgress, Contact: the
//!   aggregates.
//! - Price / format_price: minor-unit amounts and their display.
//! - MenuService, OrderService, ContactService: use-case implementations.

pub mod contact;
pub mod error;
pub mod menu;
pub mod order;
pub mod ports;
pub mod price;
pub mod trace_id;
pub mod validation;

mod contact_service;
mod menu_service;
mod order_service;

pub use self::contact::{Contact, ContactDraft, NewContact};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::menu::{MenuItem, MenuItemDraft, NewMenuItem, default_menu};
pub use self::menu_service::MenuService;
pub use self::order::{
    NewOrder, ORDER_NUMBER_PREFIX, ORDER_NUMBER_SUFFIX_LEN, Order, OrderDraft, OrderItem,
    OrderItemDraft, OrderNumber, OrderNumberError, OrderParts, OrderProgress,
    OrderValidationError, OrderStatus, ParseOrderStatusError, ProgressStep, StepState,
    next_updated_at, step_state, validate_status,
};
pub use self::order_service::OrderService;
pub use self::price::{MINOR_UNITS_PER_RUPEE, Price, PriceValidationError, format_price};
pub use self::trace_id::TraceId;
pub use self::validation::{FieldViolation, ValidationErrors, ViolationCode};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bullburger::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such order"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
