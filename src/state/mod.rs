pub mod snapshot;
pub mod store;

pub use snapshot::SimulationSnapshot;
pub use store::{StateStore, SubscriberGuard};
