use thiserror::Error;

use crate::domain::models::{event::EventId, venue::VenueId};

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Empty field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Weak password (minimum 8 characters required)")]
    WeakPassword,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Event {event_id} references unknown venue {venue_id}")]
    MissingVenue { event_id: EventId, venue_id: VenueId },
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
