//! Asynchronous access facade over the entity store.
//!
//! Models a remote API boundary for presentation layers: every operation is
//! an `async fn` that first awaits an injectable artificial delay, then runs
//! against the in-memory store. Reads return copies; writes return the
//! post-mutation record or a boolean outcome. Business-rule violations never
//! raise — absence (`None`/`false`) is the only failure signal.

pub mod api;
pub mod delay;

pub use api::Api;
pub use delay::{DelayPolicy, NoDelay, SimulatedLatency};
