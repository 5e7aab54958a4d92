use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::event::{Event, EventId, NewEvent},
};

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert an event.
    ///
    /// Fails with `RepositoryError::ForeignKeyViolation` when the venue does not exist.
    async fn create_event(&self, event: NewEvent) -> Result<Event, RepositoryError>;
    async fn find_event(&self, id: EventId) -> Result<Option<Event>, RepositoryError>;
    /// All events ordered by ascending id
    async fn list_events(&self) -> Result<Vec<Event>, RepositoryError>;
}
