//! Driving port for order lookups.

use async_trait::async_trait;

use crate::domain::{Error, Order, OrderProgress};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderQuery: Send + Sync {
    /// Exact-match lookup; `Ok(None)` when absent or malformed.
    async fn get_order(&self, order_number: &str) -> Result<Option<Order>, Error>;

    /// Tracker view of the order's current status.
    async fn get_order_progress(&self, order_number: &str)
    -> Result<Option<OrderProgress>, Error>;
}
