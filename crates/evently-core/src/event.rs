use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EventId, OrganizerId, ParticipantId, VenueId};

/// A scheduled gathering with a capacity, a date, and optional venue linkage.
///
/// `participants` mirrors each registrant's `registered_events` list; the
/// relationship service keeps the two sides consistent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub venue: Option<VenueId>,
    pub organizer: OrganizerId,
    pub participants: Vec<ParticipantId>,
    pub image: Option<String>,
    pub capacity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Fullness is computed on read, never stored. Capacity is a soft
    /// constraint: the relationship layer does not reject registration into
    /// a full event.
    pub fn is_full(&self) -> bool {
        self.participants.len() as u32 >= self.capacity
    }

    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.participants.len() as u32)
    }

    /// Apply a partial update. Unset patch fields are left untouched; the
    /// caller refreshes `updated_at`.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(venue) = patch.venue {
            self.venue = Some(venue);
        }
        if let Some(organizer) = patch.organizer {
            self.organizer = organizer;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
    }
}

/// Fields required to create an event. The store assigns id and timestamps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub venue: Option<VenueId>,
    pub organizer: OrganizerId,
    pub participants: Vec<ParticipantId>,
    pub image: Option<String>,
    pub capacity: u32,
}

/// Partial update for an event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub venue: Option<VenueId>,
    pub organizer: Option<OrganizerId>,
    pub image: Option<String>,
    pub capacity: Option<u32>,
}
