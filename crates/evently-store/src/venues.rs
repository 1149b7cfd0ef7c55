use tracing::instrument;

use evently_core::{Venue, VenueId};

use crate::record;
use crate::store::Store;

/// Read-only access to the venue collection.
pub struct VenueRepo {
    store: Store,
}

impl VenueRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[instrument(skip(self), fields(venue_id = %id))]
    pub fn get(&self, id: &VenueId) -> Option<Venue> {
        self.store.with_collections(|c| record::find(&c.venues, id))
    }

    pub fn list(&self) -> Vec<Venue> {
        self.store.with_collections(|c| record::list(&c.venues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_venues_are_listed() {
        let repo = VenueRepo::new(Store::seeded());
        let all = repo.list();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].name, "Tech Hub");
        assert_eq!(all[1].capacity, 150);
    }

    #[test]
    fn get_returns_slots() {
        let repo = VenueRepo::new(Store::seeded());
        let venue = repo.get(&VenueId::from_seq(1)).unwrap();
        assert_eq!(venue.available_slots.len(), 56);
    }

    #[test]
    fn get_absent_id_is_none() {
        let repo = VenueRepo::new(Store::seeded());
        assert!(repo.get(&VenueId::from_seq(999)).is_none());
    }
}
