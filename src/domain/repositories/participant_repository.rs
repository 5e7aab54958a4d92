use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::participant::{NewParticipant, Participant, ParticipantId},
};

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Insert a participant and return it with its assigned id
    async fn create_participant(
        &self,
        participant: NewParticipant,
    ) -> Result<Participant, RepositoryError>;
    async fn find_participant(
        &self,
        id: ParticipantId,
    ) -> Result<Option<Participant>, RepositoryError>;
    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError>;
}
