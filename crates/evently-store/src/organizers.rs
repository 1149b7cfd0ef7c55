use tracing::instrument;

use evently_core::{Organizer, OrganizerId};

use crate::record;
use crate::store::Store;

/// Read-only access to the organizer collection.
pub struct OrganizerRepo {
    store: Store,
}

impl OrganizerRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[instrument(skip(self), fields(organizer_id = %id))]
    pub fn get(&self, id: &OrganizerId) -> Option<Organizer> {
        self.store
            .with_collections(|c| record::find(&c.organizers, id))
    }

    pub fn list(&self) -> Vec<Organizer> {
        self.store.with_collections(|c| record::list(&c.organizers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_organizers_are_listed() {
        let repo = OrganizerRepo::new(Store::seeded());
        let all = repo.list();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "TechEvents Inc");
    }

    #[test]
    fn get_absent_id_is_none() {
        let repo = OrganizerRepo::new(Store::seeded());
        assert!(repo.get(&OrganizerId::from_seq(999)).is_none());
        assert!(repo.get(&OrganizerId::from_seq(2)).is_some());
    }
}
