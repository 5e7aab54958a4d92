pub mod event_repository;
pub mod occupancy_snapshot_repository;
pub mod participant_repository;
pub mod registration_repository;
pub mod venue_repository;
