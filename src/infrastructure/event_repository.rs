use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, EntityTrait, QueryOrder,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            event::{Event, EventId, NewEvent},
            venue::VenueId,
        },
        repositories::event_repository::EventRepository,
    },
    infrastructure::{entity::events, map_db_err},
};

#[derive(Clone)]
pub struct SeaOrmEventRepository {
    db: DatabaseConnection,
}

impl SeaOrmEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn into_domain(model: events::Model) -> Result<Event, RepositoryError> {
    let event = NewEvent::new(
        model.title,
        model.date,
        model.time,
        model.description,
        VenueId::new(model.venue_id),
    )
    .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
    Ok(event.into_event(EventId::new(model.id)))
}

#[async_trait]
impl EventRepository for SeaOrmEventRepository {
    async fn create_event(&self, event: NewEvent) -> Result<Event, RepositoryError> {
        let model = events::ActiveModel {
            id: NotSet,
            title: Set(event.title().to_string()),
            date: Set(event.date()),
            time: Set(event.time()),
            description: Set(event.description().to_string()),
            venue_id: Set(event.venue_id().value()),
        };

        // the venue foreign key is enforced by the database
        let insert_result = events::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(event.into_event(EventId::new(insert_result.last_insert_id)))
    }

    async fn find_event(&self, id: EventId) -> Result<Option<Event>, RepositoryError> {
        events::Entity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(into_domain)
            .transpose()
    }

    async fn list_events(&self) -> Result<Vec<Event>, RepositoryError> {
        events::Entity::find()
            .order_by_asc(events::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(into_domain)
            .collect()
    }
}
