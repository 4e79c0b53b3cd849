//! Driving port for order mutations.

use async_trait::async_trait;

use crate::domain::{Error, Order, OrderDraft, OrderStatus};

/// Domain use-case port for placing orders and moving them along the
/// delivery pipeline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderCommand: Send + Sync {
    /// Validate `draft`, assign a fresh order number and store the order.
    ///
    /// Validation failures surface as [`crate::domain::ErrorCode::InvalidRequest`]
    /// with per-field details.
    async fn place_order(&self, draft: OrderDraft) -> Result<Order, Error>;

    /// Overwrite the status of the order numbered `order_number`.
    ///
    /// Returns `Ok(None)` when no such order exists, including when the
    /// number is malformed.
    async fn update_order_status(
        &self,
        order_number: &str,
        status: OrderStatus,
    ) -> Result<Option<Order>, Error>;
}
