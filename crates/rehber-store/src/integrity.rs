//! Load-time invariants of the two collections.
//!
//! Only structural problems are rejected here: duplicate ids and cycles in
//! the parent-department chain. Each check sees one collection, so a broken
//! departments file never blocks reading people. A foreign key that points
//! nowhere is left for the lookup that follows it, so the error names the
//! record that uses it.

use crate::{Error, Result};
use rehber_types::{Department, Person};
use std::collections::{HashMap, HashSet};

pub fn check_people(people: &[Person]) -> Result<()> {
    check_unique("person", people.iter().map(|p| p.id.as_str()))
}

pub fn check_departments(departments: &[Department]) -> Result<()> {
    check_unique("department", departments.iter().map(|d| d.id.as_str()))?;
    check_parent_cycles(departments)
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::Integrity(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}

fn check_parent_cycles(departments: &[Department]) -> Result<()> {
    let parents: HashMap<&str, &str> = departments
        .iter()
        .filter_map(|d| {
            d.parent_department_id
                .as_ref()
                .map(|p| (d.id.as_str(), p.as_str()))
        })
        .collect();

    // Departments already proven to reach a root (or a dangling parent)
    let mut terminates: HashSet<&str> = HashSet::new();

    for start in departments.iter().map(|d| d.id.as_str()) {
        let mut path = vec![start];
        let mut on_path: HashSet<&str> = HashSet::from([start]);
        let mut current = start;

        while let Some(&parent) = parents.get(current) {
            if terminates.contains(parent) {
                break;
            }
            if !on_path.insert(parent) {
                path.push(parent);
                return Err(Error::Integrity(format!(
                    "parent department cycle {}",
                    path.join(" -> ")
                )));
            }
            path.push(parent);
            current = parent;
        }

        terminates.extend(path);
    }

    Ok(())
}
