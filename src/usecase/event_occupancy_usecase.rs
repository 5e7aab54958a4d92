use crate::domain::{
    error::DomainError,
    models::occupancy::EventOccupancy,
    repositories::occupancy_snapshot_repository::OccupancySnapshotRepository,
    services::occupancy_report::compute_event_occupancy,
};

pub struct GetEventOccupancyUsecase<S: OccupancySnapshotRepository> {
    snapshot_repository: S,
}

impl<S: OccupancySnapshotRepository> GetEventOccupancyUsecase<S> {
    pub fn new(snapshot_repository: S) -> Self {
        Self {
            snapshot_repository,
        }
    }

    /// One occupancy row per event, ordered by event id
    pub async fn get_event_occupancy(&self) -> Result<Vec<EventOccupancy>, DomainError> {
        let snapshot = self.snapshot_repository.load_snapshot().await?;

        let report = compute_event_occupancy(
            &snapshot.events,
            &snapshot.venues,
            &snapshot.registrations,
        )?;

        tracing::info!(
            events = snapshot.events.len(),
            registrations = snapshot.registrations.len(),
            "event occupancy computed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use rstest::*;

    use super::*;
    use crate::{
        domain::{
            error::RepositoryError,
            models::{
                credential::PasswordCredential,
                event::{Event, EventId, NewEvent},
                occupancy::OccupancySnapshot,
                participant::{EmailAddress, NewParticipant},
                venue::{NewVenue, Venue, VenueId},
            },
            repositories::{
                event_repository::EventRepository, participant_repository::ParticipantRepository,
                registration_repository::RegistrationRepository, venue_repository::VenueRepository,
            },
        },
        infrastructure::in_memory_store::InMemoryStore,
    };

    async fn add_venue(store: &InMemoryStore, name: &str, capacity: u32) -> Venue {
        store
            .create_venue(NewVenue::new(name.to_string(), "Москва".to_string(), capacity).unwrap())
            .await
            .unwrap()
    }

    async fn add_event(store: &InMemoryStore, title: &str, venue_id: VenueId) -> Event {
        store
            .create_event(
                NewEvent::new(
                    title.to_string(),
                    NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
                    NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                    String::new(),
                    venue_id,
                )
                .unwrap(),
            )
            .await
            .unwrap()
    }

    /// the two sample events with three participants, two at the conference
    #[fixture]
    async fn sample_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        let hall = add_venue(&store, "Экспоцентр", 100).await;
        let park = add_venue(&store, "Лужники", 50).await;
        let conference = add_event(&store, "Конференция по ИИ", hall.id()).await;
        let festival = add_event(&store, "Музыкальный фестиваль", park.id()).await;

        let mut ids = Vec::new();
        for (name, email) in [
            ("Иван Иванов", "ivan@example.com"),
            ("Мария Петрова", "maria@example.com"),
            ("Алексей Смирнов", "alexey@example.com"),
        ] {
            let participant = store
                .create_participant(
                    NewParticipant::new(
                        name.to_string(),
                        EmailAddress::new(email.to_string()).unwrap(),
                        PasswordCredential::new("hash".to_string()),
                    )
                    .unwrap(),
                )
                .await
                .unwrap();
            ids.push(participant.id());
        }

        store.register(ids[0], conference.id(), Utc::now()).await.unwrap();
        store.register(ids[1], conference.id(), Utc::now()).await.unwrap();
        store.register(ids[2], festival.id(), Utc::now()).await.unwrap();
        store
    }

    fn usecase(store: &InMemoryStore) -> GetEventOccupancyUsecase<InMemoryStore> {
        GetEventOccupancyUsecase::new(store.clone())
    }

    #[rstest]
    #[tokio::test]
    async fn test_sample_occupancy_positive(#[future] sample_store: InMemoryStore) {
        let store = sample_store.await;

        let report = usecase(&store).get_event_occupancy().await.unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].event_id, EventId::new(1));
        assert_eq!(report[0].title, "Конференция по ИИ");
        assert_eq!(report[0].registered_count, 2);
        assert_eq!(report[0].capacity, 100);
        assert!((report[0].occupancy_ratio.unwrap() - 0.02).abs() < 1e-9);
        assert_eq!(report[1].event_id, EventId::new(2));
        assert_eq!(report[1].title, "Музыкальный фестиваль");
        assert_eq!(report[1].registered_count, 1);
        assert_eq!(report[1].capacity, 50);
        assert!((report[1].occupancy_ratio.unwrap() - 0.02).abs() < 1e-9);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unregistered_and_zero_capacity_events_positive(#[future] sample_store: InMemoryStore) {
        let store = sample_store.await;
        let hall = store.find_venue(VenueId::new(1)).await.unwrap().unwrap();
        let closed = add_venue(&store, "Закрытый зал", 0).await;
        add_event(&store, "Хакатон", hall.id()).await;
        add_event(&store, "Закрытый показ", closed.id()).await;

        let report = usecase(&store).get_event_occupancy().await.unwrap();

        assert_eq!(report.len(), 4);
        assert_eq!(report[2].title, "Хакатон");
        assert_eq!(report[2].registered_count, 0);
        assert_eq!(report[2].occupancy_ratio, Some(0.0));
        assert_eq!(report[3].title, "Закрытый показ");
        assert_eq!(report[3].capacity, 0);
        assert_eq!(report[3].occupancy_ratio, None);

        let json = serde_json::to_value(&report[3]).unwrap();
        assert_eq!(json["occupancy_ratio"], serde_json::Value::Null);
        assert_eq!(json["venue_name"], "Закрытый зал");
        assert_eq!(json["date"], "2025-05-20");
    }

    #[tokio::test]
    async fn test_empty_store_report_positive() {
        let store = InMemoryStore::new();

        let report = usecase(&store).get_event_occupancy().await.unwrap();

        assert!(report.is_empty());
    }

    // mock repository that fails every read
    struct FailingSnapshots;

    #[async_trait]
    impl OccupancySnapshotRepository for FailingSnapshots {
        async fn load_snapshot(&self) -> Result<OccupancySnapshot, RepositoryError> {
            Err(RepositoryError::DatabaseError("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_repository_failure_negative() {
        let usecase = GetEventOccupancyUsecase::new(FailingSnapshots);

        let result = usecase.get_event_occupancy().await;

        assert!(matches!(
            result,
            Err(DomainError::Repository(RepositoryError::DatabaseError(_)))
        ));
    }

    /// The writer always creates event `k + 1` before registering for event `k`,
    /// so in every committed state the newest event has no registration.
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_report_during_writes_positive() {
        let store = InMemoryStore::new();
        let hall = add_venue(&store, "Экспоцентр", 1000).await;
        let participant = store
            .create_participant(
                NewParticipant::new(
                    "Иван Иванов".to_string(),
                    EmailAddress::new("ivan@example.com".to_string()).unwrap(),
                    PasswordCredential::new("hash".to_string()),
                )
                .unwrap(),
            )
            .await
            .unwrap();
        add_event(&store, "Конференция по ИИ", hall.id()).await;

        let writer_store = store.clone();
        let writer = tokio::spawn(async move {
            for k in 1..200 {
                add_event(&writer_store, "Хакатон", hall.id()).await;
                writer_store
                    .register(participant.id(), EventId::new(k), Utc::now())
                    .await
                    .unwrap();
            }
        });

        let usecase = usecase(&store);
        while !writer.is_finished() {
            let report = usecase.get_event_occupancy().await.unwrap();
            let registered = report.iter().filter(|row| row.registered_count > 0).count();
            assert!(!report.is_empty());
            assert!(registered < report.len(), "torn report: {:?}", report.last());
            assert!(registered + 2 >= report.len());
            tokio::task::yield_now().await;
        }
        writer.await.unwrap();

        let report = usecase.get_event_occupancy().await.unwrap();
        assert_eq!(report.len(), 200);
        assert_eq!(report.iter().filter(|row| row.registered_count == 1).count(), 199);
    }
}
