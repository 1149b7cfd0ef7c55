use std::sync::Arc;

use tracing::instrument;

use evently_core::{
    Event, EventId, EventPatch, NewEvent, NewParticipant, Organizer, OrganizerId, Participant,
    ParticipantId, ParticipantPatch, Venue, VenueId,
};
use evently_store::{
    EventRepo, OrganizerRepo, ParticipantRepo, RelationService, Store, VenueRepo,
};

use crate::delay::{DelayPolicy, NoDelay, SimulatedLatency};

/// Per-operation artificial latency, mirroring the remote API the facade
/// stands in for. All values sit in the 200-600 ms band.
mod latency {
    use std::time::Duration;

    pub const LIST_EVENTS: Duration = Duration::from_millis(500);
    pub const GET_EVENT: Duration = Duration::from_millis(300);
    pub const CREATE_EVENT: Duration = Duration::from_millis(600);
    pub const UPDATE_EVENT: Duration = Duration::from_millis(400);
    pub const DELETE_EVENT: Duration = Duration::from_millis(300);
    pub const LIST_PARTICIPANTS: Duration = Duration::from_millis(400);
    pub const GET_PARTICIPANT: Duration = Duration::from_millis(200);
    pub const CREATE_PARTICIPANT: Duration = Duration::from_millis(500);
    pub const UPDATE_PARTICIPANT: Duration = Duration::from_millis(300);
    pub const REGISTER: Duration = Duration::from_millis(400);
    pub const UNREGISTER: Duration = Duration::from_millis(300);
    pub const LIST_ORGANIZERS: Duration = Duration::from_millis(400);
    pub const GET_ORGANIZER: Duration = Duration::from_millis(200);
    pub const LIST_VENUES: Duration = Duration::from_millis(400);
    pub const GET_VENUE: Duration = Duration::from_millis(200);
    pub const ASSIGN_VENUE: Duration = Duration::from_millis(500);
}

/// The in-process call surface used by all presentation layers.
pub struct Api {
    events: EventRepo,
    participants: ParticipantRepo,
    organizers: OrganizerRepo,
    venues: VenueRepo,
    relations: RelationService,
    delay: Arc<dyn DelayPolicy>,
}

impl Api {
    pub fn new(store: Store, delay: Arc<dyn DelayPolicy>) -> Self {
        Self {
            events: EventRepo::new(store.clone()),
            participants: ParticipantRepo::new(store.clone()),
            organizers: OrganizerRepo::new(store.clone()),
            venues: VenueRepo::new(store.clone()),
            relations: RelationService::new(store),
            delay,
        }
    }

    /// Facade without artificial latency; what tests use.
    pub fn without_delay(store: Store) -> Self {
        Self::new(store, Arc::new(NoDelay))
    }

    /// Facade with the demo latency profile.
    pub fn with_simulated_latency(store: Store) -> Self {
        Self::new(store, Arc::new(SimulatedLatency))
    }

    // Events

    pub async fn list_events(&self) -> Vec<Event> {
        self.delay.wait(latency::LIST_EVENTS).await;
        self.events.list()
    }

    pub async fn get_event(&self, id: &EventId) -> Option<Event> {
        self.delay.wait(latency::GET_EVENT).await;
        self.events.get(id)
    }

    #[instrument(skip_all)]
    pub async fn create_event(&self, new: NewEvent) -> Event {
        self.delay.wait(latency::CREATE_EVENT).await;
        self.events.create(new)
    }

    #[instrument(skip_all, fields(event_id = %id))]
    pub async fn update_event(&self, id: &EventId, patch: EventPatch) -> Option<Event> {
        self.delay.wait(latency::UPDATE_EVENT).await;
        self.events.update(id, patch)
    }

    #[instrument(skip_all, fields(event_id = %id))]
    pub async fn delete_event(&self, id: &EventId) -> bool {
        self.delay.wait(latency::DELETE_EVENT).await;
        self.events.delete(id)
    }

    // Participants

    pub async fn list_participants(&self) -> Vec<Participant> {
        self.delay.wait(latency::LIST_PARTICIPANTS).await;
        self.participants.list()
    }

    pub async fn get_participant(&self, id: &ParticipantId) -> Option<Participant> {
        self.delay.wait(latency::GET_PARTICIPANT).await;
        self.participants.get(id)
    }

    #[instrument(skip_all)]
    pub async fn create_participant(&self, new: NewParticipant) -> Participant {
        self.delay.wait(latency::CREATE_PARTICIPANT).await;
        self.participants.create(new)
    }

    #[instrument(skip_all, fields(participant_id = %id))]
    pub async fn update_participant(
        &self,
        id: &ParticipantId,
        patch: ParticipantPatch,
    ) -> Option<Participant> {
        self.delay.wait(latency::UPDATE_PARTICIPANT).await;
        self.participants.update(id, patch)
    }

    // Registration

    #[instrument(skip_all, fields(event_id = %event_id, participant_id = %participant_id))]
    pub async fn register_for_event(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> bool {
        self.delay.wait(latency::REGISTER).await;
        self.relations.register_for_event(event_id, participant_id)
    }

    #[instrument(skip_all, fields(event_id = %event_id, participant_id = %participant_id))]
    pub async fn unregister_from_event(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> bool {
        self.delay.wait(latency::UNREGISTER).await;
        self.relations
            .unregister_from_event(event_id, participant_id)
    }

    // Organizers

    pub async fn list_organizers(&self) -> Vec<Organizer> {
        self.delay.wait(latency::LIST_ORGANIZERS).await;
        self.organizers.list()
    }

    pub async fn get_organizer(&self, id: &OrganizerId) -> Option<Organizer> {
        self.delay.wait(latency::GET_ORGANIZER).await;
        self.organizers.get(id)
    }

    // Venues

    pub async fn list_venues(&self) -> Vec<Venue> {
        self.delay.wait(latency::LIST_VENUES).await;
        self.venues.list()
    }

    pub async fn get_venue(&self, id: &VenueId) -> Option<Venue> {
        self.delay.wait(latency::GET_VENUE).await;
        self.venues.get(id)
    }

    #[instrument(skip_all, fields(event_id = %event_id, venue_id = %venue_id))]
    pub async fn assign_venue_to_event(&self, event_id: &EventId, venue_id: &VenueId) -> bool {
        self.delay.wait(latency::ASSIGN_VENUE).await;
        self.relations.assign_venue_to_event(event_id, venue_id)
    }
}
