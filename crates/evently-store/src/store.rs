use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use evently_core::{Event, Organizer, Participant, Venue};

use crate::seed;

/// The four in-memory record collections.
#[derive(Default)]
pub struct Collections {
    pub events: Vec<Event>,
    pub participants: Vec<Participant>,
    pub organizers: Vec<Organizer>,
    pub venues: Vec<Venue>,
}

/// Shared handle to the in-memory store.
///
/// Every operation acquires the mutex, runs to completion, and releases it,
/// so no caller observes a torn intermediate state. There is no transaction
/// spanning multiple operations and no cross-process synchronization.
pub struct Store {
    collections: Arc<Mutex<Collections>>,
}

impl Store {
    /// An empty store. Tests build fresh instances for isolation.
    pub fn empty() -> Self {
        Self {
            collections: Arc::new(Mutex::new(Collections::default())),
        }
    }

    /// A store pre-populated with the demo records.
    pub fn seeded() -> Self {
        let store = Self {
            collections: Arc::new(Mutex::new(seed::collections())),
        };
        info!("store seeded with demo records");
        store
    }

    /// Execute a closure with exclusive access to the collections.
    pub fn with_collections<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Collections) -> T,
    {
        let mut collections = self.collections.lock();
        f(&mut collections)
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            collections: self.collections.clone(),
        }
    }
}
