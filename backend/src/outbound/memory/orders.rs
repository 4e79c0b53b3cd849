//! Volatile order store.
//!
//! Each order sits behind its own mutex: concurrent updates to one order
//! serialise, while different orders never contend beyond the brief map
//! lookup.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{NewOrder, Order, OrderNumber, OrderStatus};

use super::{IdSequence, POISONED};

type OrderSlot = Arc<Mutex<Order>>;

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<OrderNumber, OrderSlot>>,
    ids: IdSequence,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, order_number: &OrderNumber) -> Result<Option<OrderSlot>, OrderRepositoryError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| OrderRepositoryError::query(POISONED))?;
        Ok(orders.get(order_number).cloned())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn insert(
        &self,
        order_number: OrderNumber,
        order: NewOrder,
        now: DateTime<Utc>,
    ) -> Result<Order, OrderRepositoryError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|_| OrderRepositoryError::query(POISONED))?;
        match orders.entry(order_number) {
            Entry::Occupied(entry) => Err(OrderRepositoryError::duplicate_number(
                entry.key().as_str(),
            )),
            Entry::Vacant(entry) => {
                let stored = Order::create(self.ids.next(), entry.key().clone(), order, now);
                entry.insert(Arc::new(Mutex::new(stored.clone())));
                Ok(stored)
            }
        }
    }

    async fn find_by_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let Some(slot) = self.slot(order_number)? else {
            return Ok(None);
        };
        let order = slot
            .lock()
            .map_err(|_| OrderRepositoryError::query(POISONED))?;
        Ok(Some(order.clone()))
    }

    async fn update_status(
        &self,
        order_number: &OrderNumber,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let Some(slot) = self.slot(order_number)? else {
            return Ok(None);
        };
        let mut order = slot
            .lock()
            .map_err(|_| OrderRepositoryError::query(POISONED))?;
        order.apply_status(status, now);
        Ok(Some(order.clone()))
    }
}
