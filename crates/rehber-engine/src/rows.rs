use std::ops::Index;

/// Table column: header text and fixed width in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub width: u16,
}

impl ColumnSpec {
    pub const fn new(title: &'static str, width: u16) -> Self {
        Self { title, width }
    }
}

pub const PEOPLE_COLUMNS: [ColumnSpec; 6] = [
    ColumnSpec::new("Name", 25),
    ColumnSpec::new("Prefix", 12),
    ColumnSpec::new("Title", 25),
    ColumnSpec::new("Room", 10),
    ColumnSpec::new("Phone", 18),
    ColumnSpec::new("Floor", 6),
];

pub const DEPARTMENT_COLUMNS: [ColumnSpec; 4] = [
    ColumnSpec::new("Name", 30),
    ColumnSpec::new("Phone", 20),
    ColumnSpec::new("Manager", 20),
    ColumnSpec::new("Parent Dept", 20),
];

/// One flattened, display-ready table row.
///
/// Cells line up with the column layout of the table the row was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow(Vec<String>);

impl DisplayRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for DisplayRow {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl<S: Into<String>> FromIterator<S> for DisplayRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl PartialEq<[&str]> for DisplayRow {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for DisplayRow {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}
