//! Menu catalogue service implementing the menu driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{MenuCommand, MenuQuery, MenuRepository, MenuRepositoryError};
use crate::domain::{Error, MenuItem, MenuItemDraft, NewMenuItem, default_menu};

/// Menu service backed by a [`MenuRepository`].
#[derive(Clone)]
pub struct MenuService<R> {
    repo: Arc<R>,
}

impl<R> MenuService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(error: MenuRepositoryError) -> Error {
    match error {
        MenuRepositoryError::Connection { message } => {
            warn!(error = %message, "menu store unreachable");
            Error::service_unavailable("Menu store unavailable")
        }
        MenuRepositoryError::Query { message } => {
            Error::internal(format!("menu repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> MenuQuery for MenuService<R>
where
    R: MenuRepository,
{
    async fn list_menu(&self) -> Result<Vec<MenuItem>, Error> {
        self.repo.list_all().await.map_err(map_repository_error)
    }

    async fn list_menu_by_category(&self, category: &str) -> Result<Vec<MenuItem>, Error> {
        self.repo
            .list_by_category(category)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> MenuCommand for MenuService<R>
where
    R: MenuRepository,
{
    async fn create_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItem, Error> {
        let item = NewMenuItem::try_from(draft)?;
        let stored = self.repo.insert(item).await.map_err(map_repository_error)?;
        info!(id = stored.id(), name = stored.name(), "menu item created");
        Ok(stored)
    }

    async fn seed_default_menu(&self) -> Result<usize, Error> {
        let existing = self.repo.count().await.map_err(map_repository_error)?;
        if existing > 0 {
            info!(existing, "menu already populated; skipping seed");
            return Ok(0);
        }
        let mut inserted = 0;
        for draft in default_menu() {
            self.create_menu_item(draft).await?;
            inserted += 1;
        }
        info!(inserted, "default menu seeded");
        Ok(inserted)
    }
}
