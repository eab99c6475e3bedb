use crossterm::event::KeyCode;
use ratatui::{Frame, layout::Rect};
use rehber_engine::{PEOPLE_COLUMNS, build_people_rows};
use rehber_store::DirectoryRepository;

use super::event::{AppEvent, Command, Dimensions};
use super::view::{TablePane, View};

pub struct PeopleView {
    pane: TablePane,
}

impl PeopleView {
    pub fn new(repo: &DirectoryRepository) -> rehber_engine::Result<Self> {
        let rows = build_people_rows(repo)?;
        log::debug!("people view: {} rows", rows.len());

        Ok(Self {
            pane: TablePane::new(&PEOPLE_COLUMNS, rows, "Loading people data..."),
        })
    }

    pub fn pane(&self) -> &TablePane {
        &self.pane
    }

    // Row-detail panel goes here; for now the selection is echoed under the table
    fn on_select(&mut self) {
        let Some(row) = self.pane.table().selected_row() else {
            return;
        };
        let detail = format!("{} · {} · room {} · {}", &row[0], &row[2], &row[3], &row[4]);
        log::debug!("selected person: {}", detail);
        self.pane.set_detail(detail);
    }
}

impl View for PeopleView {
    fn title(&self) -> &str {
        "People"
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
