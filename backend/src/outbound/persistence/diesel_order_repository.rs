//! PostgreSQL-backed `OrderRepository`.
//!
//! Status updates lock the order row (`SELECT ... FOR UPDATE`) inside a
//! transaction so the new `updated_at` is derived from the value it replaces.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use tracing::warn;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{NewOrder, Order, OrderNumber, OrderStatus, next_updated_at};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewOrderRow, OrderRow, items_to_json};
use super::pool::{DbPool, PoolError};
use super::schema::orders;

#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> OrderRepositoryError {
    map_basic_pool_error(error, OrderRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> OrderRepositoryError {
    map_basic_diesel_error(
        error,
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

fn row_to_order(row: OrderRow) -> Result<Order, OrderRepositoryError> {
    Order::try_from(row).map_err(|message| {
        warn!(%message, "stored order failed validation");
        OrderRepositoryError::query(message)
    })
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn insert(
        &self,
        order_number: OrderNumber,
        order: NewOrder,
        now: DateTime<Utc>,
    ) -> Result<Order, OrderRepositoryError> {
        let items = items_to_json(&order.items).map_err(OrderRepositoryError::query)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(orders::table)
            .values(NewOrderRow {
                order_number: order_number.as_str(),
                customer_name: &order.customer_name,
                total: order.total.minor_units(),
                status: order.status.as_str(),
                items,
                created_at: now,
                updated_at: now,
            })
            .returning(OrderRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    OrderRepositoryError::duplicate_number(order_number.as_str())
                } else {
                    map_diesel_error(err)
                }
            })?;
        row_to_order(row)
    }

    async fn find_by_number(
        &self,
        order_number: &OrderNumber,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<OrderRow> = orders::table
            .filter(orders::order_number.eq(order_number.as_str()))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_order).transpose()
    }

    async fn update_status(
        &self,
        order_number: &OrderNumber,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<Option<Order>, OrderRepositoryError> {
        let number = order_number.as_str().to_owned();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    let current: Option<OrderRow> = orders::table
                        .filter(orders::order_number.eq(&number))
                        .for_update()
                        .select(OrderRow::as_select())
                        .first(conn)
                        .await
                        .optional()?;
                    let Some(current) = current else {
                        return Ok(None);
                    };
                    let updated_at = next_updated_at(current.updated_at, now);
                    let row = diesel::update(orders::table.filter(orders::id.eq(current.id)))
                        .set((
                            orders::status.eq(status.as_str()),
                            orders::updated_at.eq(updated_at),
                        ))
                        .returning(OrderRow::as_returning())
                        .get_result(conn)
                        .await?;
                    Ok(Some(row))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;
        updated.map(row_to_order).transpose()
    }
}
