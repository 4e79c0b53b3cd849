//! Driven port for the menu catalogue store.

use async_trait::async_trait;

use crate::domain::{MenuItem, NewMenuItem};

use super::define_port_error;

define_port_error! {
    /// Errors raised by menu repository adapters.
    pub enum MenuRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "menu repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "menu repository query failed: {message}",
    }
}

/// Read access to the catalogue plus an insert used for seeding.
///
/// Listings return items in insertion (identifier) order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Every item, available or not.
    async fn list_all(&self) -> Result<Vec<MenuItem>, MenuRepositoryError>;

    /// Items whose category equals `category` exactly (case-sensitive).
    async fn list_by_category(&self, category: &str)
    -> Result<Vec<MenuItem>, MenuRepositoryError>;

    /// Store an item under the next identifier.
    async fn insert(&self, item: NewMenuItem) -> Result<MenuItem, MenuRepositoryError>;

    /// Number of stored items.
    async fn count(&self) -> Result<u64, MenuRepositoryError>;
}
