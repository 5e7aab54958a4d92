use crate::domain::{
    error::DomainError,
    models::participant::{EmailAddress, NewParticipant, Participant},
    repositories::participant_repository::ParticipantRepository,
    services::password_service::PasswordHasher,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub struct RegisterParticipantUsecase<R: ParticipantRepository, P: PasswordHasher> {
    participant_repository: R,
    password_hasher: P,
}

impl<R: ParticipantRepository, P: PasswordHasher> RegisterParticipantUsecase<R, P> {
    pub fn new(participant_repository: R, password_hasher: P) -> Self {
        Self {
            participant_repository,
            password_hasher,
        }
    }

    /// Validate, hash the password and store a new participant
    pub async fn register(
        &self,
        display_name: String,
        email: String,
        password: String,
    ) -> Result<Participant, DomainError> {
        let email = EmailAddress::new(email)?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::WeakPassword);
        }
        let credential = self.password_hasher.hash(&password)?;

        let participant = NewParticipant::new(display_name, email, credential)?;
        let participant = self
            .participant_repository
            .create_participant(participant)
            .await?;

        tracing::info!(participant_id = %participant.id(), "participant registered");
        Ok(participant)
    }
}
