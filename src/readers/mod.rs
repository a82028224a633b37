pub mod collision_reader;
pub mod provider;
pub mod source;

pub use collision_reader::CollisionReader;
pub use provider::{CachedDatasetProvider, DatasetProvider};
pub use source::{CollisionSource, FileSource, HttpSource};
