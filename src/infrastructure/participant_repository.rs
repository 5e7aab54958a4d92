use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, EntityTrait, QueryOrder,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            credential::PasswordCredential,
            participant::{EmailAddress, NewParticipant, Participant, ParticipantId},
        },
        repositories::participant_repository::ParticipantRepository,
    },
    infrastructure::{entity::participants, map_db_err},
};

#[derive(Clone)]
pub struct SeaOrmParticipantRepository {
    db: DatabaseConnection,
}

impl SeaOrmParticipantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn into_domain(model: participants::Model) -> Result<Participant, RepositoryError> {
    let email =
        EmailAddress::new(model.email).map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
    let participant =
        NewParticipant::new(model.name, email, PasswordCredential::new(model.password))
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
    Ok(participant.into_participant(ParticipantId::new(model.id)))
}

#[async_trait]
impl ParticipantRepository for SeaOrmParticipantRepository {
    async fn create_participant(
        &self,
        participant: NewParticipant,
    ) -> Result<Participant, RepositoryError> {
        let model = participants::ActiveModel {
            id: NotSet,
            name: Set(participant.display_name().to_string()),
            email: Set(participant.email().as_str().to_string()),
            password: Set(participant.password().as_str().to_string()),
        };

        let insert_result = participants::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(participant.into_participant(ParticipantId::new(insert_result.last_insert_id)))
    }

    async fn find_participant(
        &self,
        id: ParticipantId,
    ) -> Result<Option<Participant>, RepositoryError> {
        participants::Entity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(into_domain)
            .transpose()
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError> {
        participants::Entity::find()
            .order_by_asc(participants::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(into_domain)
            .collect()
    }
}
