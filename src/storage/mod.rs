//! Device-local key-value stores
//!
//! A [`FileStore`] persists values in a folder of the local filesystem. \
//! A [`MemoryStore`] keeps them in memory, and can be told to fail on purpose (see [`MockBehaviour`](crate::mock_behaviour::MockBehaviour)).

pub mod file_store;
pub use file_store::FileStore;
pub mod memory_store;
pub use memory_store::MemoryStore;
