//! Contact inbox service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::SubsecRound;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{ContactCommand, ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDraft, Error, NewContact};

/// Contact service backed by a [`ContactRepository`].
#[derive(Clone)]
pub struct ContactService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ContactService<R> {
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_repository_error(error: ContactRepositoryError) -> Error {
    match error {
        ContactRepositoryError::Connection { message } => {
            warn!(error = %message, "contact store unreachable");
            Error::service_unavailable("Contact store unavailable")
        }
        ContactRepositoryError::Query { message } => {
            Error::internal(format!("contact repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> ContactCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn submit_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        let contact = NewContact::try_from(draft)?;
        let now = self.clock.utc().trunc_subsecs(6);
        let stored = self
            .repo
            .insert(contact, now)
            .await
            .map_err(map_repository_error)?;
        info!(contact_id = stored.id(), "contact submission stored");
        Ok(stored)
    }
}
