use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, EntityTrait, QueryOrder,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::venue::{NewVenue, Venue, VenueId},
        repositories::venue_repository::VenueRepository,
    },
    infrastructure::{entity::venues, map_db_err},
};

#[derive(Clone)]
pub struct SeaOrmVenueRepository {
    db: DatabaseConnection,
}

impl SeaOrmVenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn into_domain(model: venues::Model) -> Result<Venue, RepositoryError> {
    let capacity = u32::try_from(model.capacity).map_err(|_| {
        RepositoryError::DatabaseError(format!(
            "venue {} has negative capacity {}",
            model.id, model.capacity
        ))
    })?;
    let venue = NewVenue::new(model.name, model.location, capacity)
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
    Ok(venue.into_venue(VenueId::new(model.id)))
}

#[async_trait]
impl VenueRepository for SeaOrmVenueRepository {
    async fn create_venue(&self, venue: NewVenue) -> Result<Venue, RepositoryError> {
        let capacity = i32::try_from(venue.capacity()).map_err(|_| {
            RepositoryError::DatabaseError(format!(
                "capacity {} does not fit the capacity column",
                venue.capacity()
            ))
        })?;
        let model = venues::ActiveModel {
            id: NotSet,
            name: Set(venue.name().to_string()),
            location: Set(venue.location().to_string()),
            capacity: Set(capacity),
        };

        let insert_result = venues::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(venue.into_venue(VenueId::new(insert_result.last_insert_id)))
    }

    async fn find_venue(&self, id: VenueId) -> Result<Option<Venue>, RepositoryError> {
        venues::Entity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(into_domain)
            .transpose()
    }

    async fn list_venues(&self) -> Result<Vec<Venue>, RepositoryError> {
        venues::Entity::find()
            .order_by_asc(venues::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(into_domain)
            .collect()
    }
}
