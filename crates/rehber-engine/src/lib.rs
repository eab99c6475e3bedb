// Join layer - turns a directory snapshot into display rows
// Sits between the data access layer (store) and the TUI tables (cli)

mod error;
mod join;
mod rows;

pub use error::{JoinError, Relation, Result};
pub use join::{department_members, department_row, department_rows, people_rows, person_row};
pub use rows::{ColumnSpec, DEPARTMENT_COLUMNS, DisplayRow, PEOPLE_COLUMNS};

use rehber_store::DirectoryRepository;

// Façade API - what the views call at construction time

/// People table rows, loading the directory through the repository if needed
pub fn build_people_rows(repo: &DirectoryRepository) -> Result<Vec<DisplayRow>> {
    let directory = repo.snapshot()?;
    Ok(people_rows(&directory))
}

/// Departments table rows, loading the directory through the repository if needed
pub fn build_department_rows(repo: &DirectoryRepository) -> Result<Vec<DisplayRow>> {
    let directory = repo.snapshot()?;
    department_rows(&directory)
}
