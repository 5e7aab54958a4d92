use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    domain::{
        error::RepositoryError,
        models::{event::EventId, participant::ParticipantId, registration::Registration},
        repositories::registration_repository::RegistrationRepository,
    },
    infrastructure::{entity::registrations, map_db_err},
};

#[derive(Clone)]
pub struct SeaOrmRegistrationRepository {
    db: DatabaseConnection,
}

impl SeaOrmRegistrationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn into_domain(model: registrations::Model) -> Registration {
    Registration::new(
        ParticipantId::new(model.participant_id),
        EventId::new(model.event_id),
        model.registered_at,
    )
}

#[async_trait]
impl RegistrationRepository for SeaOrmRegistrationRepository {
    async fn register(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
        registered_at: DateTime<Utc>,
    ) -> Result<Registration, RepositoryError> {
        let model = registrations::ActiveModel {
            participant_id: Set(participant_id.value()),
            event_id: Set(event_id.value()),
            registered_at: Set(registered_at),
        };

        registrations::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Registration::new(participant_id, event_id, registered_at))
    }

    async fn find_registration(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
    ) -> Result<Option<Registration>, RepositoryError> {
        let registration =
            registrations::Entity::find_by_id((participant_id.value(), event_id.value()))
                .one(&self.db)
                .await
                .map_err(map_db_err)?;

        Ok(registration.map(into_domain))
    }

    async fn list_registrations(&self) -> Result<Vec<Registration>, RepositoryError> {
        let registrations = registrations::Entity::find()
            .order_by_asc(registrations::Column::EventId)
            .order_by_asc(registrations::Column::ParticipantId)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(registrations.into_iter().map(into_domain).collect())
    }
}
