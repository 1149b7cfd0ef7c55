//! Entity models and id types for the evently data layer.

pub mod event;
pub mod ids;
pub mod organizer;
pub mod participant;
pub mod venue;

pub use event::{Event, EventPatch, NewEvent};
pub use ids::{EventId, OrganizerId, ParseIdError, ParticipantId, VenueId};
pub use organizer::Organizer;
pub use participant::{NewParticipant, Participant, ParticipantPatch};
pub use venue::{TimeSlot, Venue};
