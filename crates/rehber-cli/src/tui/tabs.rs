//! Tab Container
//!
//! Top-level state machine of the TUI. Owns the views in display order and
//! the index of the active one. Quit and tab switching are handled here;
//! everything else goes to the active view, except resizes, which every view
//! receives so hidden tabs are already laid out when they are shown.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};
use rehber_store::DirectoryRepository;

use super::departments::DepartmentsView;
use super::event::{AppEvent, Command, Dimensions, is_interrupt, is_press};
use super::people::PeopleView;
use super::theme;
use super::view::View;

pub const INITIALIZING_TEXT: &str = "Initializing...";

pub struct TabContainer {
    views: Vec<Box<dyn View>>,
    active: usize,
    ready: bool,
    size: Dimensions,
}

impl TabContainer {
    /// Build the People and Departments views. Fails if either table cannot
    /// be joined; no view is shown half-built.
    pub fn new(repo: &DirectoryRepository) -> rehber_engine::Result<Self> {
        let people = PeopleView::new(repo)?;
        let departments = DepartmentsView::new(repo)?;
        Ok(Self::with_views(vec![Box::new(people), Box::new(departments)]))
    }

    pub fn with_views(views: Vec<Box<dyn View>>) -> Self {
        Self {
            views,
            active: 0,
            ready: false,
            size: Dimensions::default(),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn tab_count(&self) -> usize {
        self.views.len()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn size(&self) -> Dimensions {
        self.size
    }

    pub fn titles(&self) -> Vec<&str> {
        self.views.iter().map(|v| v.title()).collect()
    }

    pub fn update(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::Resize(dims) => {
                self.size = dims;
                self.ready = true;
                for view in &mut self.views {
                    view.handle_resize(dims);
                }
                None
            }
            AppEvent::Key(key) => self.handle_key(key),
            other => self.forward(&other),
        }
    }

    pub fn next_tab(&mut self) {
        if !self.views.is_empty() {
            self.active = (self.active + 1) % self.views.len();
        }
    }

    pub fn previous_tab(&mut self) {
        if !self.views.is_empty() {
            self.active = (self.active + self.views.len() - 1) % self.views.len();
        }
    }

    /// Jump to `index`; `false` if there is no such tab
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index < self.views.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if !is_press(&key) {
            return None;
        }
        if is_interrupt(&key) {
            return Some(Command::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::BackTab => {
                self.previous_tab();
                None
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.previous_tab();
                None
            }
            KeyCode::Tab => {
                self.next_tab();
                None
            }
            KeyCode::Char(c @ '1'..='9') if self.select_tab(digit_index(c)) => None,
            _ => self.forward(&AppEvent::Key(key)),
        }
    }

    fn forward(&mut self, event: &AppEvent) -> Option<Command> {
        self.views
            .get_mut(self.active)
            .and_then(|view| view.update(event))
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();

        if !self.ready {
            f.render_widget(Paragraph::new(INITIALIZING_TEXT), area);
            return;
        }

        let [tabs_area, content_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_tab_bar(f, tabs_area);
        if let Some(view) = self.views.get_mut(self.active) {
            view.render(f, content_area);
        }
        f.render_widget(Paragraph::new(self.help_line()), help_area);
    }

    fn render_tab_bar(&self, f: &mut Frame, area: Rect) {
        let titles = self
            .views
            .iter()
            .map(|v| Line::from(format!(" {} ", v.title())));

        let tabs = Tabs::new(titles)
            .style(theme::tab_inactive())
            .highlight_style(theme::tab_active())
            .padding("", "")
            .divider(" ")
            .select(self.active);

        f.render_widget(tabs, area);
    }

    fn help_line(&self) -> Line<'static> {
        let jump = match self.views.len() {
            0 | 1 => "1".to_string(),
            n => format!("1-{}", n.min(9)),
        };

        let bindings = [
            ("tab/shift+tab".to_string(), "switch view"),
            (jump, "jump to view"),
            ("↑/↓".to_string(), "navigate"),
            ("enter".to_string(), "select"),
            ("q/esc".to_string(), "quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, action)) in bindings.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", theme::help()));
            }
            spans.push(Span::styled(format!("{}: {}", key, action), theme::help()));
        }
        Line::from(spans)
    }
}

fn digit_index(c: char) -> usize {
    (c as usize) - ('1' as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::key;
    use crossterm::event::KeyEventKind;
    use ratatui::{Terminal, backend::TestBackend};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// View that records what reached it
    struct Probe {
        title: &'static str,
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl View for Probe {
        fn title(&self) -> &str {
            self.title
        }

        fn handle_resize(&mut self, dims: Dimensions) {
            self.seen
                .borrow_mut()
                .push(format!("{}:resize {}x{}", self.title, dims.width, dims.height));
        }

        fn update(&mut self, event: &AppEvent) -> Option<Command> {
            self.seen
                .borrow_mut()
                .push(format!("{}:{:?}", self.title, event));
            None
        }

        fn render(&mut self, f: &mut Frame, area: Rect) {
            f.render_widget(Paragraph::new(format!("content of {}", self.title)), area);
        }
    }

    fn container() -> (TabContainer, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let views: Vec<Box<dyn View>> = vec![
            Box::new(Probe {
                title: "People",
                seen: seen.clone(),
            }),
            Box::new(Probe {
                title: "Departments",
                seen: seen.clone(),
            }),
        ];
        (TabContainer::with_views(views), seen)
    }

    fn screen(container: &mut TabContainer, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| container.render(f)).unwrap();
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
    fn test_initial_state() {
        let (container, _) = container();
        assert_eq!(container.active(), 0);
        assert!(!container.is_ready());
        assert_eq!(container.titles(), vec!["People", "Departments"]);
    }

    #[test]
    fn test_tab_twice_wraps_to_first() {
        let (mut container, _) = container();

        assert_eq!(container.update(key(KeyCode::Tab)), None);
        assert_eq!(container.active(), 1);
        assert_eq!(container.update(key(KeyCode::Tab)), None);
        assert_eq!(container.active(), 0);
    }

    #[test]
    fn test_shift_tab_wraps_backwards() {
        let (mut container, _) = container();

        container.update(key(KeyCode::BackTab));
        assert_eq!(container.active(), 1);

        container.update(AppEvent::Key(KeyEvent::new(
            KeyCode::Tab,
            KeyModifiers::SHIFT,
        )));
        assert_eq!(container.active(), 0);
    }

    #[test]
    fn test_active_tab_stays_in_range_for_any_sequence() {
        let (mut container, _) = container();
        // deterministic pseudo-random walk over advance/retreat
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let code = if seed % 2 == 0 {
                KeyCode::Tab
            } else {
                KeyCode::BackTab
            };
            container.update(key(code));
            assert!(container.active() < container.tab_count());
        }
    }

    #[test]
    fn test_number_keys_jump() {
        let (mut container, seen) = container();

        container.update(key(KeyCode::Char('2')));
        assert_eq!(container.active(), 1);
        container.update(key(KeyCode::Char('1')));
        assert_eq!(container.active(), 0);
        assert!(seen.borrow().is_empty(), "tab keys must not be forwarded");

        // no third tab: the key goes to the active view
        container.update(key(KeyCode::Char('3')));
        assert_eq!(container.active(), 0);
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].starts_with("People:Key"));
    }

    #[test]
    fn test_quit_keys() {
        let (mut container, _) = container();

        assert_eq!(container.update(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(container.update(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            container.update(AppEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_other_keys_reach_only_active_view() {
        let (mut container, seen) = container();
        container.update(key(KeyCode::Tab));
        container.update(key(KeyCode::Down));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with("Departments:Key"));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let (mut container, seen) = container();
        let mut release = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        container.update(AppEvent::Key(release));
        assert_eq!(container.active(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_resize_reaches_every_view() {
        let (mut container, seen) = container();

        assert_eq!(container.update(AppEvent::Resize(Dimensions::new(100, 40))), None);
        assert!(container.is_ready());
        assert_eq!(container.size(), Dimensions::new(100, 40));
        assert_eq!(
            *seen.borrow(),
            vec!["People:resize 100x40", "Departments:resize 100x40"]
        );
    }

    #[test]
    fn test_tick_goes_to_active_view() {
        let (mut container, seen) = container();
        container.update(AppEvent::Tick);
        assert_eq!(*seen.borrow(), vec!["People:Tick"]);
    }

    #[test]
    fn test_render_before_first_resize_shows_placeholder() {
        let (mut container, _) = container();
        let text = screen(&mut container, 40, 5);

        assert!(text.starts_with(INITIALIZING_TEXT));
        assert!(!text.contains("People"));
    }

    #[test]
    fn test_render_composes_tabs_content_and_help() {
        let (mut container, _) = container();
        container.update(AppEvent::Resize(Dimensions::new(100, 10)));
        container.update(key(KeyCode::Tab));

        let text = screen(&mut container, 100, 10);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("People"));
        assert!(lines[0].contains("Departments"));
        assert!(lines[1].starts_with("content of Departments"));
        assert!(lines[9].contains("q/esc: quit"));
        assert!(lines[9].contains("1-2: jump to view"));
    }
}
