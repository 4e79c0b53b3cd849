//! PostgreSQL-backed `MenuRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MenuRepository, MenuRepositoryError};
use crate::domain::{MenuItem, NewMenuItem};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{MenuItemRow, NewMenuItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::menu_items;

/// Diesel-backed implementation of the `MenuRepository` port.
#[derive(Clone)]
pub struct DieselMenuRepository {
    pool: DbPool,
}

impl DieselMenuRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MenuRepositoryError {
    map_basic_pool_error(error, MenuRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MenuRepositoryError {
    map_basic_diesel_error(
        error,
        MenuRepositoryError::query,
        MenuRepositoryError::connection,
    )
}

fn rows_to_items(rows: Vec<MenuItemRow>) -> Result<Vec<MenuItem>, MenuRepositoryError> {
    rows.into_iter()
        .map(|row| MenuItem::try_from(row).map_err(MenuRepositoryError::query))
        .collect()
}

#[async_trait]
impl MenuRepository for DieselMenuRepository {
    async fn list_all(&self) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = menu_items::table
            .order(menu_items::id.asc())
            .select(MenuItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_items(rows)
    }

    async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = menu_items::table
            .filter(menu_items::category.eq(category))
            .order(menu_items::id.asc())
            .select(MenuItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_items(rows)
    }

    async fn insert(&self, item: NewMenuItem) -> Result<MenuItem, MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(menu_items::table)
            .values(NewMenuItemRow::from(&item))
            .returning(MenuItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        MenuItem::try_from(row).map_err(MenuRepositoryError::query)
    }

    async fn count(&self) -> Result<u64, MenuRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let count: i64 = menu_items::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(count).map_err(|_| MenuRepositoryError::query("negative row count"))
    }
}
