use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph},
};
use rehber_engine::{ColumnSpec, DisplayRow};

use super::event::{AppEvent, Command, Dimensions};
use super::table::DirectoryTable;
use super::theme;

/// Cells taken by borders, padding, tab bar and help line
pub const CHROME_ALLOWANCE: i32 = 8;

/// A named tab the container can switch to.
///
/// The container only talks to views through this trait, so it does not care
/// how many views exist or what they show.
pub trait View {
    fn title(&self) -> &str;

    /// Terminal was resized. Hidden views get this too.
    fn handle_resize(&mut self, dims: Dimensions);

    /// Handle an event routed to this view while it is active
    fn update(&mut self, event: &AppEvent) -> Option<Command>;

    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// State shared by the table-backed views: the table, readiness and sizing
pub struct TablePane {
    table: DirectoryTable,
    loading_text: &'static str,
    ready: bool,
    terminal: Dimensions,
    detail: Option<String>,
}

impl TablePane {
    pub fn new(
        columns: &'static [ColumnSpec],
        rows: Vec<DisplayRow>,
        loading_text: &'static str,
    ) -> Self {
        Self {
            table: DirectoryTable::new(columns, rows),
            loading_text,
            ready: false,
            terminal: Dimensions::default(),
            detail: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn table(&self) -> &DirectoryTable {
        &self.table
    }

    /// Size the table will be drawn at, `(width, height)`
    pub fn table_size(&self) -> (u16, u16) {
        (self.table.width(), self.table.height())
    }

    pub fn terminal_size(&self) -> Dimensions {
        self.terminal
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn set_detail(&mut self, detail: String) {
        self.detail = Some(detail);
    }

    /// Subtract the chrome allowance from the terminal size. A dimension that
    /// would end up zero or negative keeps its previous value.
    pub fn handle_resize(&mut self, dims: Dimensions) {
        self.terminal = dims;

        let available_width = i32::from(dims.width) - CHROME_ALLOWANCE;
        let available_height = i32::from(dims.height) - CHROME_ALLOWANCE;
        if let Ok(width) = u16::try_from(available_width)
            && width > 0
        {
            self.table.set_width(width);
        }
        if let Ok(height) = u16::try_from(available_height)
            && height > 0
        {
            self.table.set_height(height);
        }

        self.ready = true;
    }

    /// Resize and key handling common to every table view. `enter` is left to
    /// the caller, which knows what a selected row means.
    pub fn update(&mut self, event: &AppEvent) -> Option<Command> {
        match event {
            AppEvent::Resize(dims) => self.handle_resize(*dims),
            AppEvent::Key(key) => {
                self.table.handle_input(*key);
            }
            AppEvent::Tick | AppEvent::Terminal(_) => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.ready {
            f.render_widget(Paragraph::new(self.loading_text).style(theme::text()), area);
            return;
        }

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border())
            .padding(Padding::new(2, 2, 1, 1));
        if let Some(detail) = &self.detail {
            block = block.title_bottom(Line::styled(format!(" {} ", detail), theme::detail()));
        }

        let inner = block.inner(area);
        f.render_widget(block, area);
        self.table.render(f, inner);
    }
}
