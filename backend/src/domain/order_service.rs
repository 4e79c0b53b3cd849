//! Order service implementing the order driving ports.
//!
//! Owns order-number assignment and the clock reading for every mutation.
//! Timestamps are truncated to microseconds so the volatile and durable
//! stores report identical values.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{
    OrderCommand, OrderNumberGenerator, OrderQuery, OrderRepository, OrderRepositoryError,
};
use crate::domain::{Error, NewOrder, Order, OrderDraft, OrderNumber, OrderProgress, OrderStatus};

/// Order service backed by an [`OrderRepository`].
#[derive(Clone)]
pub struct OrderService<R> {
    repo: Arc<R>,
    numbers: Arc<dyn OrderNumberGenerator>,
    clock: Arc<dyn Clock>,
}

impl<R> OrderService<R> {
    pub fn new(
        repo: Arc<R>,
        numbers: Arc<dyn OrderNumberGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            numbers,
            clock,
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc().trunc_subsecs(6)
    }
}

fn map_repository_error(error: OrderRepositoryError) -> Error {
    match error {
        OrderRepositoryError::Connection { message } => {
            warn!(error = %message, "order store unreachable");
            Error::service_unavailable("Order store unavailable")
        }
        OrderRepositoryError::Query { message } => {
            Error::internal(format!("order repository error: {message}"))
        }
        OrderRepositoryError::DuplicateNumber { order_number } => {
            Error::internal(format!("generated order number {order_number} collided"))
        }
    }
}

/// Malformed numbers cannot name a stored order, so they read as absent.
fn parse_number(raw: &str) -> Option<OrderNumber> {
    OrderNumber::parse(raw).ok()
}

impl<R> OrderService<R>
where
    R: OrderRepository,
{
    async fn find(&self, order_number: &str) -> Result<Option<Order>, Error> {
        let Some(number) = parse_number(order_number) else {
            return Ok(None);
        };
        self.repo
            .find_by_number(&number)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> OrderCommand for OrderService<R>
where
    R: OrderRepository,
{
    async fn place_order(&self, draft: OrderDraft) -> Result<Order, Error> {
        let order = NewOrder::try_from(draft)?;
        let number = self.numbers.next_number();
        let placed = self
            .repo
            .insert(number, order, self.now())
            .await
            .map_err(|err| {
                warn!(error = %err, "failed to store order");
                map_repository_error(err)
            })?;
        info!(
            order_number = %placed.order_number(),
            status = %placed.status(),
            total = placed.total().minor_units(),
            "order placed"
        );
        Ok(placed)
    }

    async fn update_order_status(
        &self,
        order_number: &str,
        status: OrderStatus,
    ) -> Result<Option<Order>, Error> {
        let Some(number) = parse_number(order_number) else {
            return Ok(None);
        };
        let updated = self
            .repo
            .update_status(&number, status, self.now())
            .await
            .map_err(map_repository_error)?;
        match &updated {
            Some(order) => info!(order_number = %number, status = %order.status(), "order status updated"),
            None => info!(order_number = %number, "status update for unknown order"),
        }
        Ok(updated)
    }
}

#[async_trait]
impl<R> OrderQuery for OrderService<R>
where
    R: OrderRepository,
{
    async fn get_order(&self, order_number: &str) -> Result<Option<Order>, Error> {
        self.find(order_number).await
    }

    async fn get_order_progress(
        &self,
        order_number: &str,
    ) -> Result<Option<OrderProgress>, Error> {
        Ok(self.find(order_number).await?.map(|order| order.progress()))
    }
}

#[cfg(test)]
#[path = "order_service_tests.rs"]
mod tests;
