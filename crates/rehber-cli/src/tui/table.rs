//! Directory Table Component
//!
//! Scrollable, focusable grid over prebuilt display rows. Owns the cursor
//! (`TableState`) and its own size; rows never change after construction.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Row, Table, TableState},
};
use rehber_engine::{ColumnSpec, DisplayRow};

use super::theme;

/// Height used until the first resize arrives
pub const DEFAULT_HEIGHT: u16 = 20;

// header line + its bottom margin
const HEADER_HEIGHT: u16 = 2;

pub struct DirectoryTable {
    columns: &'static [ColumnSpec],
    rows: Vec<DisplayRow>,
    state: TableState,
    width: u16,
    height: u16,
}

impl DirectoryTable {
    pub fn new(columns: &'static [ColumnSpec], rows: Vec<DisplayRow>) -> Self {
        let mut state = TableState::default();
        if !rows.is_empty() {
            state.select(Some(0));
        }

        let width = columns.iter().map(|c| c.width + 1).sum();

        Self {
            columns,
            rows,
            state,
            width,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_row(&self) -> Option<&DisplayRow> {
        self.state.selected().and_then(|i| self.rows.get(i))
    }

    /// Handle cursor movement keys.
    ///
    /// Returns `false` when the key means nothing to the table.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(),
            KeyCode::Char('k') | KeyCode::Up => self.previous(),
            KeyCode::PageDown | KeyCode::Char('f') => self.page_down(),
            KeyCode::PageUp | KeyCode::Char('b') => self.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }

    /// Render into `area`, shrunk to the table's own width and height
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        };

        let header = Row::new(self.columns.iter().map(|c| c.title))
            .style(theme::table_header())
            .bottom_margin(1);

        let rows = self
            .rows
            .iter()
            .map(|row| Row::new(row.cells().iter().map(String::as_str)));

        let widths = self.columns.iter().map(|c| Constraint::Length(c.width));

        let table = Table::new(rows, widths)
            .header(header)
            .style(theme::text())
            .row_highlight_style(theme::row_selected());

        f.render_stateful_widget(table, area, &mut self.state);
    }

    // Private state manipulation methods

    fn page_size(&self) -> usize {
        usize::from(self.height.saturating_sub(HEADER_HEIGHT).max(1))
    }

    fn last_index(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    fn next(&mut self) {
        let Some(last) = self.last_index() else {
            return;
        };

        let next = match self.state.selected() {
            Some(i) => (i + 1).min(last),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }

    fn page_down(&mut self) {
        let Some(last) = self.last_index() else {
            return;
        };

        let next = match self.state.selected() {
            Some(i) => (i + self.page_size()).min(last),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn page_up(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(self.page_size()),
            None => 0,
        };
        self.state.select(Some(prev));
    }

    fn scroll_to_top(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    fn scroll_to_bottom(&mut self) {
        if let Some(last) = self.last_index() {
            self.state.select(Some(last));
        }
    }
}
