//! Volatile append-only contact inbox.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, NewContact};

use super::{IdSequence, POISONED};

#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<Vec<Contact>>,
    ids: IdSequence,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored submission, oldest first.
    pub fn submissions(&self) -> Vec<Contact> {
        match self.contacts.lock() {
            Ok(contacts) => contacts.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(
        &self,
        contact: NewContact,
        now: DateTime<Utc>,
    ) -> Result<Contact, ContactRepositoryError> {
        let mut contacts = self
            .contacts
            .lock()
            .map_err(|_| ContactRepositoryError::query(POISONED))?;
        let stored = Contact::new(self.ids.next(), contact, now);
        contacts.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: "Hello".to_owned(),
            message: "Great burgers".to_owned(),
        }
    }

    #[tokio::test]
    async fn appends_with_increasing_ids() {
        let repo = InMemoryContactRepository::new();
        let now = Utc::now();
        let first = repo.insert(contact("Anil"), now).await.expect("insert");
        let second = repo.insert(contact("Bina"), now).await.expect("insert");

        assert_eq!((first.id(), second.id()), (1, 2));
        assert_eq!(first.created_at(), now);
        let names: Vec<_> = repo
            .submissions()
            .iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, ["Anil", "Bina"]);
    }
}
