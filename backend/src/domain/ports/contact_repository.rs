//! Driven port for the append-only contact inbox.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Contact, NewContact};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "contact repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Append a submission stamped with `now`.
    async fn insert(
        &self,
        contact: NewContact,
        now: DateTime<Utc>,
    ) -> Result<Contact, ContactRepositoryError>;
}
