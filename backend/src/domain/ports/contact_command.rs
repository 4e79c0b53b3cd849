//! Driving port for contact form submissions.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Validate and append a submission.
    async fn submit_contact(&self, draft: ContactDraft) -> Result<Contact, Error>;
}
