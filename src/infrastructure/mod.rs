pub mod argon2_password_hasher;
pub mod entity;
pub mod event_repository;
pub mod in_memory_store;
pub mod occupancy_snapshot_repository;
pub mod participant_repository;
pub mod registration_repository;
pub mod venue_repository;

use sea_orm::{DbErr, SqlErr};

use crate::domain::error::RepositoryError;

/// Map a SeaORM error onto the repository error kinds
pub(crate) fn map_db_err(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            RepositoryError::UniqueViolation(message)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
            RepositoryError::ForeignKeyViolation(message)
        }
        _ => RepositoryError::DatabaseError(err.to_string()),
    }
}
