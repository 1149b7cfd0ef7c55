use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EventId, ParticipantId};

/// A registrant. `registered_events` mirrors each event's `participants`
/// list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub registered_events: Vec<EventId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Participant {
    pub fn apply(&mut self, patch: ParticipantPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// Fields required to create a participant. The store assigns id and
/// timestamps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    pub registered_events: Vec<EventId>,
}

/// Partial update for a participant.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ParticipantPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}
