use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::venue::{NewVenue, Venue, VenueId},
};

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn create_venue(&self, venue: NewVenue) -> Result<Venue, RepositoryError>;
    async fn find_venue(&self, id: VenueId) -> Result<Option<Venue>, RepositoryError>;
    async fn list_venues(&self) -> Result<Vec<Venue>, RepositoryError>;
}
