use std::fmt;

/// Result type for rehber-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of record a lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Person,
    Department,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Person => write!(f, "person"),
            Entity::Department => write!(f, "department"),
        }
    }
}

/// Error types that can occur in the data access layer
#[derive(Debug)]
pub enum Error {
    /// Backing data file is missing or unreadable
    SourceUnavailable {
        origin: String,
        source: std::io::Error,
    },

    /// Data file is not valid JSON or does not match the record schema
    MalformedData {
        origin: String,
        source: serde_json::Error,
    },

    /// Lookup by id found no record
    NotFound { entity: Entity, id: String },

    /// Loaded data violates a collection invariant (duplicate ids, parent cycles)
    Integrity(String),
}

impl Error {
    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        Error::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnavailable { origin, source } => {
                write!(f, "Failed to read {}: {}", origin, source)
            }
            Error::MalformedData { origin, source } => {
                write!(f, "Failed to parse {}: {}", origin, source)
            }
            Error::NotFound { entity, id } => write!(f, "{} with id {} not found", entity, id),
            Error::Integrity(msg) => write!(f, "Inconsistent directory data: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SourceUnavailable { source, .. } => Some(source),
            Error::MalformedData { source, .. } => Some(source),
            Error::NotFound { .. } | Error::Integrity(_) => None,
        }
    }
}
