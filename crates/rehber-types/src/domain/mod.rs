mod department;
mod ids;
mod person;

pub use department::Department;
pub use ids::{DepartmentId, PersonId};
pub use person::Person;
