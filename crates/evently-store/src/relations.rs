use chrono::Utc;
use tracing::{debug, instrument};

use evently_core::{EventId, ParticipantId, VenueId};

use crate::record::Record;
use crate::store::Store;

/// Maintains the bidirectional event<->participant links and the
/// one-directional event->venue link. There is no foreign-key engine;
/// bookkeeping is manual on both sides of each link.
pub struct RelationService {
    store: Store,
}

impl RelationService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Link a participant to an event on both sides. Idempotent:
    /// re-registering an already-registered pair is a no-op, still `true`.
    /// `false` only when either id is absent.
    ///
    /// Capacity is NOT checked; registering into a full event succeeds.
    #[instrument(skip(self), fields(event_id = %event_id, participant_id = %participant_id))]
    pub fn register_for_event(&self, event_id: &EventId, participant_id: &ParticipantId) -> bool {
        let now = Utc::now();
        self.store.with_collections(|c| {
            let Some(event) = c.events.iter_mut().find(|e| e.id == *event_id) else {
                return false;
            };
            let Some(participant) = c.participants.iter_mut().find(|p| p.id == *participant_id)
            else {
                return false;
            };

            if !event.participants.contains(participant_id) {
                event.participants.push(participant_id.clone());
                event.touch(now);
            }
            if !participant.registered_events.contains(event_id) {
                participant.registered_events.push(event_id.clone());
                participant.touch(now);
            }

            debug!("participant registered");
            true
        })
    }

    /// Unlink a participant from an event on both sides. Removing a
    /// never-registered pair is a silent no-op that still reports `true`;
    /// `false` only when either id is absent.
    #[instrument(skip(self), fields(event_id = %event_id, participant_id = %participant_id))]
    pub fn unregister_from_event(&self, event_id: &EventId, participant_id: &ParticipantId) -> bool {
        let now = Utc::now();
        self.store.with_collections(|c| {
            let Some(event) = c.events.iter_mut().find(|e| e.id == *event_id) else {
                return false;
            };
            let Some(participant) = c.participants.iter_mut().find(|p| p.id == *participant_id)
            else {
                return false;
            };

            if let Some(index) = event.participants.iter().position(|p| p == participant_id) {
                event.participants.remove(index);
                event.touch(now);
            }
            if let Some(index) = participant.registered_events.iter().position(|e| e == event_id)
            {
                participant.registered_events.remove(index);
                participant.touch(now);
            }

            debug!("participant unregistered");
            true
        })
    }

    /// Point an event at a venue. Advisory metadata only: no TimeSlot is
    /// reserved or marked booked, and venue capacity is not verified against
    /// the event's.
    #[instrument(skip(self), fields(event_id = %event_id, venue_id = %venue_id))]
    pub fn assign_venue_to_event(&self, event_id: &EventId, venue_id: &VenueId) -> bool {
        let now = Utc::now();
        self.store.with_collections(|c| {
            if !c.venues.iter().any(|v| v.id == *venue_id) {
                return false;
            }
            let Some(event) = c.events.iter_mut().find(|e| e.id == *event_id) else {
                return false;
            };

            event.venue = Some(venue_id.clone());
            event.touch(now);
            debug!("venue assigned");
            true
        })
    }
}
