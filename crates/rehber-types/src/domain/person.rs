use super::{DepartmentId, PersonId};
use serde::{Deserialize, Serialize};

/// One entry of `people.json`.
///
/// Field names follow the camelCase keys of the file. `prefix` is the only
/// optional field; it may be `null` or missing entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub prefix: Option<String>,
    pub room: String,
    pub phone: String,
    pub floor: i64,
    pub department_id: DepartmentId,
    pub title: String,
}

impl Person {
    /// First and last name joined by a single space. The prefix is never part of it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn prefix_or_empty(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }
}
