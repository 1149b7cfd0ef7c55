use chrono::Utc;
use tracing::{debug, instrument};

use evently_core::{NewParticipant, Participant, ParticipantId, ParticipantPatch};

use crate::record;
use crate::store::Store;

/// CRUD over the participant collection. Participants are never deleted.
pub struct ParticipantRepo {
    store: Store,
}

impl ParticipantRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a participant with a freshly minted id.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub fn create(&self, new: NewParticipant) -> Participant {
        let now = Utc::now();
        self.store.with_collections(|c| {
            let id = record::next_id(&c.participants, ParticipantId::from_seq);
            let participant = Participant {
                id: id.clone(),
                name: new.name,
                email: new.email,
                registered_events: new.registered_events,
                created_at: now,
                updated_at: now,
            };
            record::insert(&mut c.participants, participant.clone());
            debug!(participant_id = %id, "participant created");
            participant
        })
    }

    #[instrument(skip(self), fields(participant_id = %id))]
    pub fn get(&self, id: &ParticipantId) -> Option<Participant> {
        self.store
            .with_collections(|c| record::find(&c.participants, id))
    }

    pub fn list(&self) -> Vec<Participant> {
        self.store
            .with_collections(|c| record::list(&c.participants))
    }

    /// Apply a partial update. `None` when the id is absent.
    #[instrument(skip(self, patch), fields(participant_id = %id))]
    pub fn update(&self, id: &ParticipantId, patch: ParticipantPatch) -> Option<Participant> {
        self.store.with_collections(|c| {
            record::update(&mut c.participants, id, Utc::now(), |p| p.apply(patch))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_participant(name: &str, email: &str) -> NewParticipant {
        NewParticipant {
            name: name.into(),
            email: email.into(),
            registered_events: vec![],
        }
    }

    #[test]
    fn create_mints_sequential_ids() {
        let repo = ParticipantRepo::new(Store::seeded());
        let created = repo.create(new_participant("Carol White", "carol@example.com"));
        assert_eq!(created.id, ParticipantId::from_seq(5));
        assert_eq!(repo.list().len(), 5);
    }

    #[test]
    fn get_absent_id_is_none() {
        let repo = ParticipantRepo::new(Store::seeded());
        assert!(repo.get(&ParticipantId::from_seq(999)).is_none());
    }

    #[test]
    fn update_patches_and_touches() {
        let repo = ParticipantRepo::new(Store::seeded());
        let id = ParticipantId::from_seq(2);
        let before = repo.get(&id).unwrap();

        let updated = repo
            .update(
                &id,
                ParticipantPatch {
                    email: Some("jane@example.com".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.email, "jane@example.com");
        assert_eq!(updated.name, before.name);
        assert!(updated.updated_at >= before.updated_at);
    }

    #[test]
    fn update_absent_id_is_none() {
        let repo = ParticipantRepo::new(Store::seeded());
        let result = repo.update(&ParticipantId::from_seq(999), ParticipantPatch::default());
        assert!(result.is_none());
    }
}
