//! In-memory entity store, per-entity repos, and the relationship service.
//!
//! The store is the sole persistence substrate: four record collections
//! living for the process lifetime behind a single mutex. Lookup is a linear
//! scan; collections are demo-scale and carry no index.

pub mod events;
pub mod organizers;
pub mod participants;
pub mod record;
pub mod relations;
pub mod seed;
pub mod store;
pub mod venues;

pub use events::EventRepo;
pub use organizers::OrganizerRepo;
pub use participants::ParticipantRepo;
pub use relations::RelationService;
pub use store::{Collections, Store};
pub use venues::VenueRepo;
