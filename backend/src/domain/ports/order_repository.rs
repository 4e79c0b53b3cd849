//! Driven port for the order store.
//!
//! The store is the only place orders change. Adapters must serialise
//! concurrent status updates to the same order so the last write wins and
//! `updated_at` keeps increasing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{NewOrder, Order, OrderNumber, OrderStatus};

use super::define_port_error;

define_port_error! {
    /// Errors raised by order repository adapters.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "order repository query failed: {message}",
        /// Another order already holds this number.
        DuplicateNumber { order_number: String } =>
            "order number {order_number} is already taken",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order under `order_number`; both timestamps are `now`.
    async fn insert(
        &self,
        order_number: OrderNumber,
        order: NewOrder,
        now: DateTime<Utc>,
    ) -> Result<Order, OrderRepositoryError>;

    /// Exact-match lookup. `None` when absent.
    async fn find_by_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<Order>, OrderRepositoryError>;

    /// Overwrite the status of an existing order.
    ///
    /// Returns `None` without side effects when the order does not exist.
    async fn update_status(
        &self,
        order_number: &OrderNumber,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<Option<Order>, OrderRepositoryError>;
}
