use crate::directory::{find_department, find_person};
use crate::source::{DirectorySource, JsonDirSource};
use crate::{Directory, Result, integrity};
use once_cell::unsync::OnceCell;
use rehber_types::{Department, Person};
use std::path::Path;
use std::sync::Arc;

/// Cached access to the people and departments datasets.
///
/// Each collection is read, parsed and checked on first use and answered from
/// memory afterwards, until [`DirectoryRepository::reload`] drops the caches.
/// Operations on one collection never touch the other's source.
pub struct DirectoryRepository {
    source: Box<dyn DirectorySource>,
    people: OnceCell<Vec<Person>>,
    departments: OnceCell<Vec<Department>>,
    snapshot: OnceCell<Arc<Directory>>,
}

impl DirectoryRepository {
    pub fn new(source: impl DirectorySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            people: OnceCell::new(),
            departments: OnceCell::new(),
            snapshot: OnceCell::new(),
        }
    }

    /// Repository over `<data_dir>/people.json` and `<data_dir>/departments.json`
    pub fn open(data_dir: &Path) -> Self {
        Self::new(JsonDirSource::new(data_dir))
    }

    /// Both collections together, for joins across them
    pub fn snapshot(&self) -> Result<Arc<Directory>> {
        self.snapshot
            .get_or_try_init(|| -> Result<Arc<Directory>> {
                let directory =
                    Directory::new(self.people()?.to_vec(), self.departments()?.to_vec());
                Ok(Arc::new(directory))
            })
            .cloned()
    }

    /// True once both collections are cached
    pub fn is_loaded(&self) -> bool {
        self.people.get().is_some() && self.departments.get().is_some()
    }

    /// Forget the cached collections; the next access re-reads the sources.
    pub fn reload(&mut self) {
        let had_people = self.people.take().is_some();
        let had_departments = self.departments.take().is_some();
        self.snapshot.take();
        if had_people || had_departments {
            log::info!("directory cache dropped, sources will be re-read");
        }
    }

    pub fn load_people(&self) -> Result<Vec<Person>> {
        Ok(self.people()?.to_vec())
    }

    pub fn load_departments(&self) -> Result<Vec<Department>> {
        Ok(self.departments()?.to_vec())
    }

    pub fn person_by_id(&self, id: &str) -> Result<Person> {
        find_person(self.people()?, id).cloned()
    }

    pub fn department_by_id(&self, id: &str) -> Result<Department> {
        find_department(self.departments()?, id).cloned()
    }

    pub fn people_by_department_id(&self, department_id: &str) -> Result<Vec<Person>> {
        Ok(self
            .people()?
            .iter()
            .filter(|p| p.department_id.as_str() == department_id)
            .cloned()
            .collect())
    }

    pub fn departments_by_parent_id(&self, parent_id: &str) -> Result<Vec<Department>> {
        Ok(self
            .departments()?
            .iter()
            .filter(|d| d.has_parent(parent_id))
            .cloned()
            .collect())
    }

    pub fn top_level_departments(&self) -> Result<Vec<Department>> {
        Ok(self
            .departments()?
            .iter()
            .filter(|d| d.is_top_level())
            .cloned()
            .collect())
    }

    fn people(&self) -> Result<&[Person]> {
        self.people
            .get_or_try_init(|| -> Result<Vec<Person>> {
                let people = self.source.people()?;
                integrity::check_people(&people)?;
                log::debug!("loaded {} people", people.len());
                Ok(people)
            })
            .map(Vec::as_slice)
    }

    fn departments(&self) -> Result<&[Department]> {
        self.departments
            .get_or_try_init(|| -> Result<Vec<Department>> {
                let departments = self.source.departments()?;
                integrity::check_departments(&departments)?;
                log::debug!("loaded {} departments", departments.len());
                Ok(departments)
            })
            .map(Vec::as_slice)
    }
}
