//! Volatile menu catalogue.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{MenuRepository, MenuRepositoryError};
use crate::domain::{MenuItem, NewMenuItem};

use super::{IdSequence, POISONED};

/// Menu items kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    items: RwLock<Vec<MenuItem>>,
    ids: IdSequence,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&[MenuItem]) -> T) -> Result<T, MenuRepositoryError> {
        let items = self
            .items
            .read()
            .map_err(|_| MenuRepositoryError::query(POISONED))?;
        Ok(f(&items))
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn list_all(&self) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        self.read(<[MenuItem]>::to_vec)
    }

    async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        self.read(|items| {
            items
                .iter()
                .filter(|item| item.in_category(category))
                .cloned()
                .collect()
        })
    }

    async fn insert(&self, item: NewMenuItem) -> Result<MenuItem, MenuRepositoryError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| MenuRepositoryError::query(POISONED))?;
        let stored = MenuItem::new(self.ids.next(), item);
        items.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> Result<u64, MenuRepositoryError> {
        self.read(|items| items.len() as u64)
    }
}
