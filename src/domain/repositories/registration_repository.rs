use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    error::RepositoryError,
    models::{event::EventId, participant::ParticipantId, registration::Registration},
};

/// Repository for the participant/event relation
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Register a participant for an event.
    ///
    /// A second registration for the same pair fails with
    /// `RepositoryError::UniqueViolation`; unknown participants or events fail
    /// with `RepositoryError::ForeignKeyViolation`.
    async fn register(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
        registered_at: DateTime<Utc>,
    ) -> Result<Registration, RepositoryError>;
    async fn find_registration(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
    ) -> Result<Option<Registration>, RepositoryError>;
    async fn list_registrations(&self) -> Result<Vec<Registration>, RepositoryError>;
}
