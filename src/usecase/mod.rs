pub mod event_occupancy_usecase;
pub mod register_for_event_usecase;
pub mod register_participant_usecase;
