use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EventId, OrganizerId};

/// An entity credited with managing events. Read-only in the current scope:
/// organizers are seeded, never created or updated through the facade.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Organizer {
    pub id: OrganizerId,
    pub name: String,
    pub email: String,
    pub managed_events: Vec<EventId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
