// Read-only access to the two JSON datasets.
// Parsed once per repository, answered from memory afterwards.

mod directory;
mod error;
mod integrity;
mod repository;
mod source;

// Public API
pub use directory::Directory;
pub use error::{Entity, Error, Result};
pub use repository::DirectoryRepository;
pub use source::{
    DEPARTMENTS_FILE, DirectorySource, JsonDirSource, PEOPLE_FILE, RawDocument, StaticSource,
};
