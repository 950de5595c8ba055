#![forbid(unsafe_code)]

pub mod catalog;
pub mod file;
pub mod progress;
pub mod repository;
pub mod settings;

pub use progress::ProgressStore;
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
