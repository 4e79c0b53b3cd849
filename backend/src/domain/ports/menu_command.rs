//! Driving port for administrative menu changes. Not exposed over HTTP.

use async_trait::async_trait;

use crate::domain::{Error, MenuItem, MenuItemDraft};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuCommand: Send + Sync {
    /// Validate and store a new item; `available` defaults to `true`.
    async fn create_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItem, Error>;

    /// Load the default menu when the catalogue is empty.
    ///
    /// Returns how many items were inserted (zero when already populated).
    async fn seed_default_menu(&self) -> Result<usize, Error>;
}
