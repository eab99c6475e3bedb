//! Terminal UI
//!
//! ## Structure:
//! - `tabs`: the tab container, top-level state machine
//! - `people`, `departments`: one view per tab, each wrapping a table
//! - `table`: the table component (rows, cursor, size)
//! - `renderer`: terminal setup and the event loop
//!
//! Rows are joined once when a view is built. Nothing in here reads data
//! files while the event loop runs.

pub mod departments;
pub mod event;
pub mod people;
pub mod renderer;
pub mod table;
pub mod tabs;
pub mod theme;
pub mod view;

pub use departments::DepartmentsView;
pub use event::{AppEvent, Command, Dimensions};
pub use people::PeopleView;
pub use renderer::TuiRenderer;
pub use table::DirectoryTable;
pub use tabs::TabContainer;
pub use view::{CHROME_ALLOWANCE, TablePane, View};
