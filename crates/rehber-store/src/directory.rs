use crate::error::Entity;
use crate::{Error, Result};
use rehber_types::{Department, Person};

/// One loaded snapshot of both collections, in source order.
///
/// Lookups are linear scans; the datasets are a company phone book, not a
/// warehouse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    people: Vec<Person>,
    departments: Vec<Department>,
}

impl Directory {
    pub fn new(people: Vec<Person>, departments: Vec<Department>) -> Self {
        Self {
            people,
            departments,
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn person(&self, id: &str) -> Result<&Person> {
        find_person(&self.people, id)
    }

    pub fn department(&self, id: &str) -> Result<&Department> {
        find_department(&self.departments, id)
    }

    pub fn people_in_department<'a>(
        &'a self,
        department_id: &'a str,
    ) -> impl Iterator<Item = &'a Person> + 'a {
        self.people
            .iter()
            .filter(move |p| p.department_id.as_str() == department_id)
    }

    pub fn departments_with_parent<'a>(
        &'a self,
        parent_id: &'a str,
    ) -> impl Iterator<Item = &'a Department> + 'a {
        self.departments
            .iter()
            .filter(move |d| d.has_parent(parent_id))
    }

    pub fn top_level_departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.iter().filter(|d| d.is_top_level())
    }
}

pub(crate) fn find_person<'a>(people: &'a [Person], id: &str) -> Result<&'a Person> {
    people
        .iter()
        .find(|p| p.id.as_str() == id)
        .ok_or_else(|| Error::not_found(Entity::Person, id))
}

pub(crate) fn find_department<'a>(departments: &'a [Department], id: &str) -> Result<&'a Department> {
    departments
        .iter()
        .find(|d| d.id.as_str() == id)
        .ok_or_else(|| Error::not_found(Entity::Department, id))
}
