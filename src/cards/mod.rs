//! Profile cards: storage, normalization, rendering, and the add flow

pub mod app;
pub mod form;
pub mod image;
pub mod instagram;
pub mod launcher;
pub mod profile;
pub mod render;
pub mod repository;
pub mod store;

// Re-exports for library consumers
pub use app::App;
pub use instagram::{build_links, normalize, DeepLinks};
pub use profile::{Profile, ProfileId};
pub use repository::{ProfileRepository, STORAGE_KEY};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
