use chrono::Utc;
use tracing::{debug, instrument};

use evently_core::{Event, EventId, EventPatch, NewEvent};

use crate::record;
use crate::store::Store;

/// CRUD over the event collection.
pub struct EventRepo {
    store: Store,
}

impl EventRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create an event with a freshly minted id.
    #[instrument(skip(self, new), fields(title = %new.title))]
    pub fn create(&self, new: NewEvent) -> Event {
        let now = Utc::now();
        self.store.with_collections(|c| {
            let id = record::next_id(&c.events, EventId::from_seq);
            let event = Event {
                id: id.clone(),
                title: new.title,
                description: new.description,
                date: new.date,
                venue: new.venue,
                organizer: new.organizer,
                participants: new.participants,
                image: new.image,
                capacity: new.capacity,
                created_at: now,
                updated_at: now,
            };
            record::insert(&mut c.events, event.clone());
            debug!(event_id = %id, "event created");
            event
        })
    }

    #[instrument(skip(self), fields(event_id = %id))]
    pub fn get(&self, id: &EventId) -> Option<Event> {
        self.store.with_collections(|c| record::find(&c.events, id))
    }

    pub fn list(&self) -> Vec<Event> {
        self.store.with_collections(|c| record::list(&c.events))
    }

    /// Apply a partial update. `None` when the id is absent.
    #[instrument(skip(self, patch), fields(event_id = %id))]
    pub fn update(&self, id: &EventId, patch: EventPatch) -> Option<Event> {
        self.store.with_collections(|c| {
            record::update(&mut c.events, id, Utc::now(), |event| event.apply(patch))
        })
    }

    /// Delete an event. No cascade: references left in participants'
    /// `registered_events` and organizers' `managed_events` dangle.
    #[instrument(skip(self), fields(event_id = %id))]
    pub fn delete(&self, id: &EventId) -> bool {
        let removed = self
            .store
            .with_collections(|c| record::remove(&mut c.events, id));
        if removed {
            debug!(event_id = %id, "event deleted");
        }
        removed
    }
}
