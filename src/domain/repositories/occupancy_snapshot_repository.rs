use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::occupancy::OccupancySnapshot};

#[async_trait]
pub trait OccupancySnapshotRepository: Send + Sync {
    /// Events, venues and registrations as of a single committed state
    async fn load_snapshot(&self) -> Result<OccupancySnapshot, RepositoryError>;
}
