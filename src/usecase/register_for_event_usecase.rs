use chrono::Utc;

use crate::domain::{
    error::DomainError,
    models::{event::EventId, participant::ParticipantId, registration::Registration},
    repositories::registration_repository::RegistrationRepository,
};

pub struct RegisterForEventUsecase<R: RegistrationRepository> {
    registration_repository: R,
}

impl<R: RegistrationRepository> RegisterForEventUsecase<R> {
    pub fn new(registration_repository: R) -> Self {
        Self {
            registration_repository,
        }
    }

    /// Register a participant for an event, stamped with the current time
    pub async fn register(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
    ) -> Result<Registration, DomainError> {
        let registration = self
            .registration_repository
            .register(participant_id, event_id, Utc::now())
            .await
            .inspect_err(|e| {
                tracing::warn!(%participant_id, %event_id, error = %e, "registration rejected")
            })?;

        tracing::info!(%participant_id, %event_id, "participant registered for event");
        Ok(registration)
    }
}
