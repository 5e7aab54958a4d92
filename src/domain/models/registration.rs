use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{event::EventId, participant::ParticipantId};

/// A participant's place at an event, unique per `(participant, event)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    participant_id: ParticipantId,
    event_id: EventId,
    registered_at: DateTime<Utc>,
}

impl Registration {
    pub fn new(
        participant_id: ParticipantId,
        event_id: EventId,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            participant_id,
            event_id,
            registered_at,
        }
    }

    pub fn participant_id(&self) -> ParticipantId {
        self.participant_id
    }
    pub fn event_id(&self) -> EventId {
        self.event_id
    }
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
