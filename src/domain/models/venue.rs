use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VenueId(i32);
impl VenueId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Venue data before the store has assigned an id
#[derive(Debug, Clone)]
pub struct NewVenue {
    name: String,
    location: String,
    capacity: u32,
}

impl NewVenue {
    pub fn new(name: String, location: String, capacity: u32) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyField("name"));
        }

        Ok(Self {
            name,
            location,
            capacity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn location(&self) -> &str {
        &self.location
    }
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn into_venue(self, id: VenueId) -> Venue {
        Venue {
            id,
            name: self.name,
            location: self.location,
            capacity: self.capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    id: VenueId,
    name: String,
    location: String,
    capacity: u32,
}

impl Venue {
    pub fn id(&self) -> VenueId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn location(&self) -> &str {
        &self.location
    }
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Share of the capacity taken by `registered` participants.
    ///
    /// `None` when the venue has no capacity at all.
    pub fn occupancy_ratio(&self, registered: u64) -> Option<f64> {
        if self.capacity == 0 {
            return None;
        }
        Some(registered as f64 / f64::from(self.capacity))
    }
}
