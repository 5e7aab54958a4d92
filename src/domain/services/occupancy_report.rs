use std::collections::{HashMap, HashSet};

use crate::domain::{
    error::DomainError,
    models::{
        event::{Event, EventId},
        occupancy::EventOccupancy,
        participant::ParticipantId,
        registration::Registration,
        venue::{Venue, VenueId},
    },
};

/// Compute one occupancy row per event, ordered by ascending event id.
///
/// Events without registrations are reported with a count of zero. Each
/// participant counts once per event. A venue with zero capacity yields a row
/// whose `occupancy_ratio` is `None`. An event whose venue is not part of
/// `venues` fails the whole report with `DomainError::MissingVenue`.
pub fn compute_event_occupancy(
    events: &[Event],
    venues: &[Venue],
    registrations: &[Registration],
) -> Result<Vec<EventOccupancy>, DomainError> {
    let venues_by_id: HashMap<VenueId, &Venue> =
        venues.iter().map(|venue| (venue.id(), venue)).collect();

    let mut participants_by_event: HashMap<EventId, HashSet<ParticipantId>> = HashMap::new();
    for registration in registrations {
        participants_by_event
            .entry(registration.event_id())
            .or_default()
            .insert(registration.participant_id());
    }

    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|event| event.id());
    ordered.dedup_by_key(|event| event.id());

    ordered
        .into_iter()
        .map(|event| {
            let venue = venues_by_id
                .get(&event.venue_id())
                .ok_or(DomainError::MissingVenue {
                    event_id: event.id(),
                    venue_id: event.venue_id(),
                })?;

            let registered_count = participants_by_event
                .get(&event.id())
                .map_or(0, |participants| participants.len() as u64);

            let occupancy_ratio = venue.occupancy_ratio(registered_count);
            if occupancy_ratio.is_none() {
                tracing::warn!(
                    event_id = %event.id(),
                    venue_id = %venue.id(),
                    "venue has zero capacity, occupancy ratio left undefined"
                );
            }

            Ok(EventOccupancy {
                event_id: event.id(),
                title: event.title().to_string(),
                date: event.date(),
                venue_name: venue.name().to_string(),
                registered_count,
                capacity: venue.capacity(),
                occupancy_ratio,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use rstest::*;

    use super::*;
    use crate::domain::models::{event::NewEvent, venue::NewVenue};

    fn venue(id: i32, name: &str, capacity: u32) -> Venue {
        NewVenue::new(name.to_string(), "Москва".to_string(), capacity)
            .unwrap()
            .into_venue(VenueId::new(id))
    }

    fn event(id: i32, title: &str, venue_id: i32) -> Event {
        NewEvent::new(
            title.to_string(),
            NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            String::new(),
            VenueId::new(venue_id),
        )
        .unwrap()
        .into_event(EventId::new(id))
    }

    fn registration(participant_id: i32, event_id: i32) -> Registration {
        Registration::new(
            ParticipantId::new(participant_id),
            EventId::new(event_id),
            Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap(),
        )
    }

    #[fixture]
    fn venues() -> Vec<Venue> {
        vec![venue(1, "Экспоцентр", 100), venue(2, "Лужники", 50)]
    }

    #[fixture]
    fn events() -> Vec<Event> {
        vec![
            event(1, "Конференция по ИИ", 1),
            event(2, "Музыкальный фестиваль", 2),
        ]
    }

    #[rstest]
    fn test_sample_scenario_positive(venues: Vec<Venue>, events: Vec<Event>) {
        let registrations = vec![registration(1, 1), registration(2, 1), registration(3, 2)];

        let report = compute_event_occupancy(&events, &venues, &registrations).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].event_id, EventId::new(1));
        assert_eq!(report[0].title, "Конференция по ИИ");
        assert_eq!(report[0].venue_name, "Экспоцентр");
        assert_eq!(report[0].registered_count, 2);
        assert_eq!(report[0].capacity, 100);
        assert!((report[0].occupancy_ratio.unwrap() - 0.02).abs() < 1e-9);

        assert_eq!(report[1].event_id, EventId::new(2));
        assert_eq!(report[1].registered_count, 1);
        assert_eq!(report[1].capacity, 50);
        assert!((report[1].occupancy_ratio.unwrap() - 0.02).abs() < 1e-9);
    }

    #[rstest]
    fn test_unregistered_events_positive(venues: Vec<Venue>, events: Vec<Event>) {
        let report = compute_event_occupancy(&events, &venues, &[]).unwrap();

        assert_eq!(report.len(), events.len());
        for row in &report {
            assert_eq!(row.registered_count, 0);
            assert_eq!(row.occupancy_ratio, Some(0.0));
        }
    }

    #[rstest]
    fn test_repeated_participant_positive(venues: Vec<Venue>, events: Vec<Event>) {
        let registrations = vec![registration(1, 1), registration(1, 1), registration(2, 1)];

        let report = compute_event_occupancy(&events, &venues, &registrations).unwrap();

        assert_eq!(report[0].registered_count, 2);
        assert_eq!(report[1].registered_count, 0);
    }

    #[rstest]
    fn test_rows_ordered_by_event_id_positive(venues: Vec<Venue>) {
        let events = vec![
            event(3, "Хакатон", 1),
            event(1, "Конференция по ИИ", 1),
            event(2, "Музыкальный фестиваль", 2),
        ];

        let report = compute_event_occupancy(&events, &venues, &[]).unwrap();

        let ids: Vec<i32> = report.iter().map(|row| row.event_id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_zero_capacity_positive(events: Vec<Event>) {
        let venues = vec![venue(1, "Экспоцентр", 100), venue(2, "Закрытый зал", 0)];
        let registrations = vec![registration(1, 2)];

        let report = compute_event_occupancy(&events, &venues, &registrations).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].occupancy_ratio, Some(0.0));
        assert_eq!(report[1].capacity, 0);
        assert_eq!(report[1].registered_count, 1);
        assert_eq!(report[1].occupancy_ratio, None);
    }

    #[rstest]
    fn test_unresolved_venue_negative(events: Vec<Event>) {
        let venues = vec![venue(1, "Экспоцентр", 100)];

        let result = compute_event_occupancy(&events, &venues, &[]);

        match result {
            Err(DomainError::MissingVenue { event_id, venue_id }) => {
                assert_eq!(event_id, EventId::new(2));
                assert_eq!(venue_id, VenueId::new(2));
            }
            other => panic!("expected MissingVenue, got {:?}", other),
        }
    }

    #[rstest]
    fn test_unknown_event_registrations_positive(venues: Vec<Venue>, events: Vec<Event>) {
        let registrations = vec![registration(1, 99)];

        let report = compute_event_occupancy(&events, &venues, &registrations).unwrap();

        assert!(report.iter().all(|row| row.registered_count == 0));
    }
}
