use super::{DepartmentId, PersonId};
use serde::{Deserialize, Serialize};

/// One entry of `departments.json`.
///
/// A department without `parentDepartmentId` is top-level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub phone: String,
    pub manager_id: PersonId,
    #[serde(default)]
    pub parent_department_id: Option<DepartmentId>,
}

impl Department {
    pub fn is_top_level(&self) -> bool {
        self.parent_department_id.is_none()
    }

    pub fn has_parent(&self, parent_id: &str) -> bool {
        self.parent_department_id
            .as_ref()
            .is_some_and(|p| p.as_str() == parent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_level_department() {
        let dept: Department = serde_json::from_str(
            r#"{"id":"d1","name":"R&D","phone":"555","managerId":"1","parentDepartmentId":null}"#,
        )
        .unwrap();

        assert_eq!(dept.name, "R&D");
        assert_eq!(dept.manager_id.as_str(), "1");
        assert!(dept.is_top_level());
        assert!(!dept.has_parent("d1"));
    }

    #[test]
    fn test_parse_child_department() {
        let dept: Department = serde_json::from_str(
            r#"{"id":"d2","name":"Compilers","phone":"556","managerId":"2","parentDepartmentId":"d1"}"#,
        )
        .unwrap();

        assert!(!dept.is_top_level());
        assert!(dept.has_parent("d1"));
        assert!(!dept.has_parent("d3"));
    }
}
