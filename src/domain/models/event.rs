use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, models::venue::VenueId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(i32);
impl EventId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Event data before the store has assigned an id.
///
/// The venue reference is only checked when the draft is inserted.
#[derive(Debug, Clone)]
pub struct NewEvent {
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    description: String,
    venue_id: VenueId,
}

impl NewEvent {
    pub fn new(
        title: String,
        date: NaiveDate,
        time: NaiveTime,
        description: String,
        venue_id: VenueId,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::EmptyField("title"));
        }

        Ok(Self {
            title,
            date,
            time,
            description,
            venue_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn time(&self) -> NaiveTime {
        self.time
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }

    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            description: self.description,
            venue_id: self.venue_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    title: String,
    date: NaiveDate,
    time: NaiveTime,
    description: String,
    venue_id: VenueId,
}

impl Event {
    pub fn id(&self) -> EventId {
        self.id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn time(&self) -> NaiveTime {
        self.time
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }
}
