//! Record store: the persistence and query layer for residents and visitors.

pub mod clock;
pub mod events;
pub mod kv;
pub mod memory;
pub mod record_store;

pub use clock::{Clock, SystemClock};
pub use events::{ChangeEvent, ChangeKind, Collection, SubscriptionId};
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
pub use record_store::RecordStore;
