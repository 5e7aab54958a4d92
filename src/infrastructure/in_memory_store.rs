use std::{
    collections::{BTreeMap, btree_map::Entry},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    error::RepositoryError,
    models::{
        event::{Event, EventId, NewEvent},
        occupancy::OccupancySnapshot,
        participant::{NewParticipant, Participant, ParticipantId},
        registration::Registration,
        venue::{NewVenue, Venue, VenueId},
    },
    repositories::{
        event_repository::EventRepository,
        occupancy_snapshot_repository::OccupancySnapshotRepository,
        participant_repository::ParticipantRepository,
        registration_repository::RegistrationRepository, venue_repository::VenueRepository,
    },
};

#[derive(Default)]
struct Tables {
    participants: BTreeMap<ParticipantId, Participant>,
    venues: BTreeMap<VenueId, Venue>,
    events: BTreeMap<EventId, Event>,
    registrations: BTreeMap<(EventId, ParticipantId), Registration>,
}

/// Next serial id for an append-only table keyed by ascending ids
fn next_id<K: Copy, V>(table: &BTreeMap<K, V>, value: impl Fn(K) -> i32) -> i32 {
    table
        .keys()
        .next_back()
        .map_or(1, |last| value(*last) + 1)
}

/// In-memory implementation of all repositories.
///
/// Clones share the same tables. Foreign keys and the registration pair
/// uniqueness are checked on insert, mirroring a constraint-enforcing store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryStore {
    async fn create_participant(
        &self,
        participant: NewParticipant,
    ) -> Result<Participant, RepositoryError> {
        let mut tables = self.tables.write().await;
        let id = ParticipantId::new(next_id(&tables.participants, |id| id.value()));
        let participant = participant.into_participant(id);
        tables.participants.insert(id, participant.clone());
        tracing::debug!(participant_id = %id, "participant stored");
        Ok(participant)
    }

    async fn find_participant(
        &self,
        id: ParticipantId,
    ) -> Result<Option<Participant>, RepositoryError> {
        Ok(self.tables.read().await.participants.get(&id).cloned())
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, RepositoryError> {
        Ok(self.tables.read().await.participants.values().cloned().collect())
    }
}

#[async_trait]
impl VenueRepository for InMemoryStore {
    async fn create_venue(&self, venue: NewVenue) -> Result<Venue, RepositoryError> {
        let mut tables = self.tables.write().await;
        let id = VenueId::new(next_id(&tables.venues, |id| id.value()));
        let venue = venue.into_venue(id);
        tables.venues.insert(id, venue.clone());
        tracing::debug!(venue_id = %id, capacity = venue.capacity(), "venue stored");
        Ok(venue)
    }

    async fn find_venue(&self, id: VenueId) -> Result<Option<Venue>, RepositoryError> {
        Ok(self.tables.read().await.venues.get(&id).cloned())
    }

    async fn list_venues(&self) -> Result<Vec<Venue>, RepositoryError> {
        Ok(self.tables.read().await.venues.values().cloned().collect())
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create_event(&self, event: NewEvent) -> Result<Event, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.venues.contains_key(&event.venue_id()) {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "venue {} does not exist",
                event.venue_id()
            )));
        }

        let id = EventId::new(next_id(&tables.events, |id| id.value()));
        let event = event.into_event(id);
        tables.events.insert(id, event.clone());
        tracing::debug!(event_id = %id, venue_id = %event.venue_id(), "event stored");
        Ok(event)
    }

    async fn find_event(&self, id: EventId) -> Result<Option<Event>, RepositoryError> {
        Ok(self.tables.read().await.events.get(&id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>, RepositoryError> {
        Ok(self.tables.read().await.events.values().cloned().collect())
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn register(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
        registered_at: DateTime<Utc>,
    ) -> Result<Registration, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.participants.contains_key(&participant_id) {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "participant {} does not exist",
                participant_id
            )));
        }
        if !tables.events.contains_key(&event_id) {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "event {} does not exist",
                event_id
            )));
        }

        match tables.registrations.entry((event_id, participant_id)) {
            Entry::Occupied(_) => Err(RepositoryError::UniqueViolation(format!(
                "participant {} is already registered for event {}",
                participant_id, event_id
            ))),
            Entry::Vacant(slot) => {
                let registration = Registration::new(participant_id, event_id, registered_at);
                slot.insert(registration.clone());
                tracing::debug!(%participant_id, %event_id, "registration stored");
                Ok(registration)
            }
        }
    }

    async fn find_registration(
        &self,
        participant_id: ParticipantId,
        event_id: EventId,
    ) -> Result<Option<Registration>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .registrations
            .get(&(event_id, participant_id))
            .cloned())
    }

    async fn list_registrations(&self) -> Result<Vec<Registration>, RepositoryError> {
        Ok(self.tables.read().await.registrations.values().cloned().collect())
    }
}

#[async_trait]
impl OccupancySnapshotRepository for InMemoryStore {
    async fn load_snapshot(&self) -> Result<OccupancySnapshot, RepositoryError> {
        let tables = self.tables.read().await;
        Ok(OccupancySnapshot {
            events: tables.events.values().cloned().collect(),
            venues: tables.venues.values().cloned().collect(),
            registrations: tables.registrations.values().cloned().collect(),
        })
    }
}
