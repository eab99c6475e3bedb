//! Sample directory data.
//!
//! Documents are built with `serde_json::json!` so field names match the
//! on-disk format exactly (camelCase, nullable `prefix` and parent).

use serde_json::{Value, json};

/// Two engineers in R&D, one assistant in Finance
pub fn sample_people() -> Value {
    json!([
        {
            "id": "1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "prefix": null,
            "room": "101",
            "phone": "555",
            "floor": 1,
            "departmentId": "d1",
            "title": "Engineer"
        },
        {
            "id": "2",
            "firstName": "Grace",
            "lastName": "Hopper",
            "prefix": "Rear Adm.",
            "room": "202",
            "phone": "556",
            "floor": 2,
            "departmentId": "d2",
            "title": "Compiler Lead"
        },
        {
            "id": "3",
            "firstName": "Emmy",
            "lastName": "Noether",
            "prefix": "Dr.",
            "room": "303",
            "phone": "557",
            "floor": 3,
            "departmentId": "d3",
            "title": "Controller"
        }
    ])
}

/// R&D (top-level) with a Compilers sub-department, Finance top-level
pub fn sample_departments() -> Value {
    json!([
        {
            "id": "d1",
            "name": "R&D",
            "phone": "555",
            "managerId": "1",
            "parentDepartmentId": null
        },
        {
            "id": "d2",
            "name": "Compilers",
            "phone": "556",
            "managerId": "2",
            "parentDepartmentId": "d1"
        },
        {
            "id": "d3",
            "name": "Finance",
            "phone": "557",
            "managerId": "3",
            "parentDepartmentId": null
        }
    ])
}

/// Departments whose last entry names a manager that does not exist
pub fn departments_with_missing_manager() -> Value {
    let mut departments = sample_departments();
    if let Some(list) = departments.as_array_mut() {
        list.push(json!({
            "id": "d9",
            "name": "Ghost Office",
            "phone": "000",
            "managerId": "99",
            "parentDepartmentId": null
        }));
    }
    departments
}

/// Two departments that are each other's parent
pub fn departments_with_cycle() -> Value {
    json!([
        {
            "id": "d1",
            "name": "Left",
            "phone": "1",
            "managerId": "1",
            "parentDepartmentId": "d2"
        },
        {
            "id": "d2",
            "name": "Right",
            "phone": "2",
            "managerId": "1",
            "parentDepartmentId": "d1"
        }
    ])
}
