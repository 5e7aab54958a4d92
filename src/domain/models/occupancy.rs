use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::{
    event::{Event, EventId},
    registration::Registration,
    venue::Venue,
};

/// One row of the occupancy report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventOccupancy {
    pub event_id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub venue_name: String,
    pub registered_count: u64,
    pub capacity: u32,
    /// `None` for venues with zero capacity
    pub occupancy_ratio: Option<f64>,
}

/// The three relations the report reads, taken from one committed state
#[derive(Debug, Clone, Default)]
pub struct OccupancySnapshot {
    pub events: Vec<Event>,
    pub venues: Vec<Venue>,
    pub registrations: Vec<Registration>,
}
