//! SeaORM entities for the four relations.

pub mod events;
pub mod participants;
pub mod registrations;
pub mod venues;
