use crossterm::event::KeyCode;
use ratatui::{Frame, layout::Rect};
use rehber_engine::{DEPARTMENT_COLUMNS, department_members, department_rows};
use rehber_store::DirectoryRepository;

use super::event::{AppEvent, Command, Dimensions};
use super::view::{TablePane, View};

pub struct DepartmentsView {
    pane: TablePane,
    /// Member count per row, same order as the table
    member_counts: Vec<usize>,
}

impl DepartmentsView {
    pub fn new(repo: &DirectoryRepository) -> rehber_engine::Result<Self> {
        let directory = repo.snapshot()?;
        let rows = department_rows(&directory)?;
        let member_counts = directory
            .departments()
            .iter()
            .map(|dept| department_members(&directory, dept.id.as_str()).map(|m| m.len()))
            .collect::<rehber_engine::Result<Vec<_>>>()?;
        log::debug!("departments view: {} rows", rows.len());

        Ok(Self {
            pane: TablePane::new(&DEPARTMENT_COLUMNS, rows, "Loading departments..."),
            member_counts,
        })
    }

    pub fn pane(&self) -> &TablePane {
        &self.pane
    }

    // Row-detail panel goes here; for now the selection is echoed under the table
    fn on_select(&mut self) {
        let table = self.pane.table();
        let (Some(index), Some(row)) = (table.selected(), table.selected_row()) else {
            return;
        };
        let members = self.member_counts.get(index).copied().unwrap_or(0);
        let detail = match members {
            1 => format!("{} · 1 member", &row[0]),
            n => format!("{} · {} members", &row[0], n),
        };
        log::debug!("selected department: {}", detail);
        self.pane.set_detail(detail);
    }
}

impl View for DepartmentsView {
    fn title(&self) -> &str {
        "Departments"
    }

    fn handle_resize(&mut self, dims: Dimensions) {
        self.pane.handle_resize(dims);
    }

    fn update(&mut self, event: &AppEvent) -> Option<Command> {
        if let AppEvent::Key(key) = event
            && key.code == KeyCode::Enter
        {
            self.on_select();
            return None;
        }
        self.pane.update(event)
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.pane.render(f, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::key;
    use ratatui::{Terminal, backend::TestBackend};
    use rehber_store::StaticSource;

    const PEOPLE: &str = r#"[
        {"id":"1","firstName":"Ada","lastName":"Lovelace","prefix":null,"room":"101","phone":"555","floor":1,"departmentId":"d1","title":"Engineer"},
        {"id":"2","firstName":"Grace","lastName":"Hopper","prefix":null,"room":"202","phone":"556","floor":2,"departmentId":"d1","title":"Compiler Lead"}
    ]"#;

    const DEPARTMENTS: &str = r#"[
        {"id":"d1","name":"R&D","phone":"555","managerId":"1","parentDepartmentId":null},
        {"id":"d2","name":"Compilers","phone":"556","managerId":"2","parentDepartmentId":"d1"}
    ]"#;

    fn view() -> DepartmentsView {
        let repo = DirectoryRepository::new(StaticSource::new(PEOPLE, DEPARTMENTS));
        DepartmentsView::new(&repo).unwrap()
    }

    fn screen(view: &mut DepartmentsView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_rows_resolve_manager_and_parent() {
        let view = view();
        let rows = view.pane().table().rows();

        assert_eq!(rows[0], ["R&D", "555", "Ada Lovelace", ""]);
        assert_eq!(rows[1], ["Compilers", "556", "Grace Hopper", "R&D"]);
    }

    #[test]
    fn test_dangling_manager_fails_construction() {
        let departments =
            r#"[{"id":"d7","name":"Ghosts","phone":"0","managerId":"99","parentDepartmentId":null}]"#;
        let repo = DirectoryRepository::new(StaticSource::new(PEOPLE, departments));

        let err = DepartmentsView::new(&repo).err().unwrap();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("d7"));
    }

    #[test]
    fn test_enter_shows_member_count() {
        let mut view = view();

        view.update(&key(KeyCode::Enter));
        assert_eq!(view.pane().detail(), Some("R&D · 2 members"));

        view.update(&key(KeyCode::Down));
        view.update(&key(KeyCode::Enter));
        assert_eq!(view.pane().detail(), Some("Compilers · 0 members"));
    }

    #[test]
    fn test_render_loading_then_table() {
        let mut view = view();
        assert!(screen(&mut view, 120, 12).starts_with("Loading departments..."));

        view.handle_resize(Dimensions::new(120, 12));
        let text = screen(&mut view, 120, 12);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with('╭'));
        assert!(lines[2].contains("Name"));
        assert!(lines[2].contains("Parent Dept"));
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("Compilers"));
    }
}
