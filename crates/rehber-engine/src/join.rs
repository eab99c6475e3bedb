use crate::error::{JoinError, Relation, Result};
use crate::rows::DisplayRow;
use rehber_store::Directory;
use rehber_types::{Department, Person};

pub fn person_row(person: &Person) -> DisplayRow {
    [
        person.full_name(),
        person.prefix_or_empty().to_string(),
        person.title.clone(),
        person.room.clone(),
        person.phone.clone(),
        person.floor.to_string(),
    ]
    .into_iter()
    .collect()
}

/// Rows of the People table, in source order
pub fn people_rows(directory: &Directory) -> Vec<DisplayRow> {
    directory.people().iter().map(person_row).collect()
}

/// Rows of the Departments table, in source order.
///
/// Resolves the manager's name and the parent department's name. The first
/// failed lookup aborts the whole table.
pub fn department_rows(directory: &Directory) -> Result<Vec<DisplayRow>> {
    directory
        .departments()
        .iter()
        .map(|dept| department_row(directory, dept))
        .collect()
}

pub fn department_row(directory: &Directory, dept: &Department) -> Result<DisplayRow> {
    let manager = directory
        .person(dept.manager_id.as_str())
        .map_err(|source| resolve_error(Relation::Manager, dept, source))?;

    let parent_name = match &dept.parent_department_id {
        Some(parent_id) => directory
            .department(parent_id.as_str())
            .map(|parent| parent.name.clone())
            .map_err(|source| resolve_error(Relation::ParentDepartment, dept, source))?,
        None => String::new(),
    };

    Ok(DisplayRow::new(vec![
        dept.name.clone(),
        dept.phone.clone(),
        manager.full_name(),
        parent_name,
    ]))
}

/// People rows of one department. An unknown department id is an error, an
/// empty department is not.
pub fn department_members(directory: &Directory, department_id: &str) -> Result<Vec<DisplayRow>> {
    directory
        .department(department_id)
        .map_err(|source| JoinError::Resolve {
            relation: Relation::Department,
            department_id: department_id.to_string(),
            source,
        })?;

    Ok(directory
        .people_in_department(department_id)
        .map(person_row)
        .collect())
}

fn resolve_error(relation: Relation, dept: &Department, source: rehber_store::Error) -> JoinError {
    log::warn!(
        "cannot resolve {} for department {}: {}",
        relation,
        dept.id,
        source
    );
    JoinError::Resolve {
        relation,
        department_id: dept.id.to_string(),
        source,
    }
}
