use crate::{Error, Result};
use rehber_types::{Department, Person};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub const PEOPLE_FILE: &str = "people.json";
pub const DEPARTMENTS_FILE: &str = "departments.json";

/// Raw bytes of one dataset plus a label used in error messages
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub origin: String,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(origin: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            origin: origin.into(),
            bytes: bytes.into(),
        }
    }

    fn parse<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        serde_json::from_slice(&self.bytes).map_err(|source| Error::MalformedData {
            origin: self.origin.clone(),
            source,
        })
    }
}

/// Where the two datasets come from.
///
/// Implementations only fetch bytes; parsing is shared.
pub trait DirectorySource {
    fn read_people(&self) -> Result<RawDocument>;
    fn read_departments(&self) -> Result<RawDocument>;

    fn people(&self) -> Result<Vec<Person>> {
        self.read_people()?.parse()
    }

    fn departments(&self) -> Result<Vec<Department>> {
        self.read_departments()?.parse()
    }
}

/// Reads `people.json` and `departments.json` from a data directory
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    data_dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn read(&self, file_name: &str) -> Result<RawDocument> {
        let path = self.data_dir.join(file_name);
        let origin = path.display().to_string();
        let bytes = std::fs::read(&path).map_err(|source| Error::SourceUnavailable {
            origin: origin.clone(),
            source,
        })?;
        Ok(RawDocument { origin, bytes })
    }
}

impl DirectorySource for JsonDirSource {
    fn read_people(&self) -> Result<RawDocument> {
        self.read(PEOPLE_FILE)
    }

    fn read_departments(&self) -> Result<RawDocument> {
        self.read(DEPARTMENTS_FILE)
    }
}

/// In-memory JSON documents, for tests and embedding
#[derive(Debug, Clone)]
pub struct StaticSource {
    people: String,
    departments: String,
}

impl StaticSource {
    pub fn new(people: impl Into<String>, departments: impl Into<String>) -> Self {
        Self {
            people: people.into(),
            departments: departments.into(),
        }
    }
}

impl DirectorySource for StaticSource {
    fn read_people(&self) -> Result<RawDocument> {
        Ok(RawDocument::new(PEOPLE_FILE, self.people.as_bytes()))
    }

    fn read_departments(&self) -> Result<RawDocument> {
        Ok(RawDocument::new(DEPARTMENTS_FILE, self.departments.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonDirSource::new(temp_dir.path());

        let err = source.people().unwrap_err();
        match err {
            Error::SourceUnavailable { origin, .. } => assert!(origin.ends_with(PEOPLE_FILE)),
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_malformed_data() {
        let source = StaticSource::new("[{\"id\": ", "[]");

        let err = source.people().unwrap_err();
        assert!(matches!(err, Error::MalformedData { .. }));
        assert!(err.to_string().contains(PEOPLE_FILE));
    }

    #[test]
    fn test_schema_mismatch_is_malformed_data() {
        // array expected, object given
        let source = StaticSource::new("[]", r#"{"id":"d1"}"#);

        assert!(source.people().unwrap().is_empty());
        assert!(matches!(
            source.departments().unwrap_err(),
            Error::MalformedData { .. }
        ));
    }
}
