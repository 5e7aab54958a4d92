pub mod credential;
pub mod event;
pub mod occupancy;
pub mod participant;
pub mod registration;
pub mod venue;
