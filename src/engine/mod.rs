pub mod cascade;
pub mod projector;
pub mod sync;

pub use projector::project;
pub use sync::{FilterChangedEvent, SyncEngine};
