use chrono::{DateTime, Utc};

use evently_core::{Event, EventId, Organizer, OrganizerId, Participant, ParticipantId, Venue, VenueId};

/// A record held in one of the store's collections: a typed id plus an
/// `updated_at` that must be refreshed on every mutation.
pub trait Record {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
    fn touch(&mut self, at: DateTime<Utc>);
}

impl Record for Event {
    type Id = EventId;

    fn id(&self) -> &EventId {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Record for Participant {
    type Id = ParticipantId;

    fn id(&self) -> &ParticipantId {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Record for Organizer {
    type Id = OrganizerId;

    fn id(&self) -> &OrganizerId {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Record for Venue {
    type Id = VenueId;

    fn id(&self) -> &VenueId {
        &self.id
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

/// Linear-scan lookup, clone-on-read.
pub(crate) fn find<T>(records: &[T], id: &T::Id) -> Option<T>
where
    T: Record + Clone,
{
    records.iter().find(|r| r.id() == id).cloned()
}

/// Defensive copy of the whole collection.
pub(crate) fn list<T: Clone>(records: &[T]) -> Vec<T> {
    records.to_vec()
}

pub(crate) fn insert<T: Record>(records: &mut Vec<T>, record: T) {
    records.push(record);
}

/// Mutate a record in place and refresh its `updated_at`. Returns a copy of
/// the post-mutation record, or `None` when the id is absent.
pub(crate) fn update<T, F>(records: &mut [T], id: &T::Id, at: DateTime<Utc>, mutate: F) -> Option<T>
where
    T: Record + Clone,
    F: FnOnce(&mut T),
{
    let record = records.iter_mut().find(|r| r.id() == id)?;
    mutate(record);
    record.touch(at);
    Some(record.clone())
}

/// Remove by id. Reports `false` when the id is absent.
pub(crate) fn remove<T: Record>(records: &mut Vec<T>, id: &T::Id) -> bool {
    match records.iter().position(|r| r.id() == id) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}

/// Mint the next id for a collection. The sequence is length-derived
/// (`len + 1`) and advances past any taken id, so a fresh id never collides
/// with an existing one within the process. Uniqueness across restarts is
/// not guaranteed.
pub(crate) fn next_id<T, F>(records: &[T], mint: F) -> T::Id
where
    T: Record,
    F: Fn(usize) -> T::Id,
{
    let mut seq = records.len() + 1;
    loop {
        let id = mint(seq);
        if records.iter().all(|r| *r.id() != id) {
            return id;
        }
        seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use evently_core::OrganizerId;

    fn event(seq: usize) -> Event {
        let now = Utc::now();
        Event {
            id: EventId::from_seq(seq),
            title: format!("Event {seq}"),
            description: String::new(),
            date: Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
            venue: None,
            organizer: OrganizerId::from_seq(1),
            participants: vec![],
            image: None,
            capacity: 10,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn find_is_none_for_absent_id() {
        let records = vec![event(1), event(2)];
        assert!(find(&records, &EventId::from_seq(3)).is_none());
        assert_eq!(
            find(&records, &EventId::from_seq(2)).unwrap().id,
            EventId::from_seq(2)
        );
    }

    #[test]
    fn list_returns_defensive_copy() {
        let records = vec![event(1)];
        let mut copy = list(&records);
        copy.clear();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn update_touches_updated_at() {
        let mut records = vec![event(1)];
        let before = records[0].updated_at;
        let later = before + chrono::Duration::seconds(5);
        let updated = update(&mut records, &EventId::from_seq(1), later, |e| {
            e.title = "Renamed".into();
        })
        .unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.updated_at, later);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn update_absent_id_is_none() {
        let mut records = vec![event(1)];
        let result = update(&mut records, &EventId::from_seq(9), Utc::now(), |e| {
            e.title = "never".into();
        });
        assert!(result.is_none());
        assert_eq!(records[0].title, "Event 1");
    }

    #[test]
    fn remove_reports_absence() {
        let mut records = vec![event(1)];
        assert!(!remove(&mut records, &EventId::from_seq(2)));
        assert!(remove(&mut records, &EventId::from_seq(1)));
        assert!(records.is_empty());
    }

    #[test]
    fn next_id_is_length_derived() {
        let records = vec![event(1), event(2)];
        assert_eq!(next_id(&records, EventId::from_seq), EventId::from_seq(3));
    }

    #[test]
    fn next_id_skips_taken_sequences() {
        // Deleting evt-001 from four records leaves len 3; len + 1 would
        // collide with the surviving evt-004.
        let records = vec![event(2), event(3), event(4)];
        assert_eq!(next_id(&records, EventId::from_seq), EventId::from_seq(5));
    }
}
