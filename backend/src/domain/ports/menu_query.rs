//! Driving port for reading the menu.

use async_trait::async_trait;

use crate::domain::{Error, MenuItem};

/// Domain use-case port for menu listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuQuery: Send + Sync {
    /// The whole catalogue in display order.
    async fn list_menu(&self) -> Result<Vec<MenuItem>, Error>;

    /// Items in one category (exact match); empty for unknown categories.
    async fn list_menu_by_category(&self, category: &str) -> Result<Vec<MenuItem>, Error>;
}
