use std::fmt;

/// Result type for rehber-engine operations
pub type Result<T> = std::result::Result<T, JoinError>;

/// Foreign key a join follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// department.managerId -> person
    Manager,
    /// department.parentDepartmentId -> department
    ParentDepartment,
    /// department id requested by a caller
    Department,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Manager => write!(f, "manager"),
            Relation::ParentDepartment => write!(f, "parent department"),
            Relation::Department => write!(f, "department"),
        }
    }
}

/// Error types that can occur while building rows
#[derive(Debug)]
pub enum JoinError {
    /// A lookup along `relation` failed for the department `department_id`
    Resolve {
        relation: Relation,
        department_id: String,
        source: rehber_store::Error,
    },

    /// The directory itself could not be loaded
    Store(rehber_store::Error),
}

impl JoinError {
    /// True when the underlying failure is a missing record
    pub fn is_not_found(&self) -> bool {
        match self {
            JoinError::Resolve { source, .. } | JoinError::Store(source) => source.is_not_found(),
        }
    }

    pub fn department_id(&self) -> Option<&str> {
        match self {
            JoinError::Resolve { department_id, .. } => Some(department_id),
            JoinError::Store(_) => None,
        }
    }
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinError::Resolve {
                relation,
                department_id,
                source,
            } => write!(
                f,
                "failed to get {} of department {}: {}",
                relation, department_id, source
            ),
            JoinError::Store(err) => write!(f, "failed to load directory: {}", err),
        }
    }
}

impl std::error::Error for JoinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JoinError::Resolve { source, .. } => Some(source),
            JoinError::Store(err) => Some(err),
        }
    }
}

impl From<rehber_store::Error> for JoinError {
    fn from(err: rehber_store::Error) -> Self {
        JoinError::Store(err)
    }
}
