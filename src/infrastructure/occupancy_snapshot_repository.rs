use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};

use crate::{
    domain::{
        error::RepositoryError, models::occupancy::OccupancySnapshot,
        repositories::occupancy_snapshot_repository::OccupancySnapshotRepository,
    },
    infrastructure::{
        entity::{events, registrations, venues},
        event_repository, map_db_err, registration_repository, venue_repository,
    },
};

#[derive(Clone)]
pub struct SeaOrmOccupancySnapshotRepository {
    db: DatabaseConnection,
}

impl SeaOrmOccupancySnapshotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OccupancySnapshotRepository for SeaOrmOccupancySnapshotRepository {
    async fn load_snapshot(&self) -> Result<OccupancySnapshot, RepositoryError> {
        // all three reads run inside one transaction
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let events = events::Entity::find()
            .order_by_asc(events::Column::Id)
            .all(&txn)
            .await
            .map_err(map_db_err)?;
        let venues = venues::Entity::find()
            .order_by_asc(venues::Column::Id)
            .all(&txn)
            .await
            .map_err(map_db_err)?;
        let registrations = registrations::Entity::find()
            .order_by_asc(registrations::Column::EventId)
            .order_by_asc(registrations::Column::ParticipantId)
            .all(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(OccupancySnapshot {
            events: events
                .into_iter()
                .map(event_repository::into_domain)
                .collect::<Result<_, _>>()?,
            venues: venues
                .into_iter()
                .map(venue_repository::into_domain)
                .collect::<Result<_, _>>()?,
            registrations: registrations
                .into_iter()
                .map(registration_repository::into_domain)
                .collect(),
        })
    }
}
