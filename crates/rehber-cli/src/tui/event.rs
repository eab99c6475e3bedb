use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal size as reported by the terminal, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Events delivered to the tab container, one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Resize(Dimensions),
    Key(KeyEvent),
    /// No input arrived within the poll interval
    Tick,
    /// Anything else the terminal reports (mouse, focus, paste)
    Terminal(Event),
}

impl From<Event> for AppEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Resize(width, height) => AppEvent::Resize(Dimensions::new(width, height)),
            Event::Key(key) => AppEvent::Key(key),
            other => AppEvent::Terminal(other),
        }
    }
}

/// Follow-up the event loop must carry out after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
}

pub(crate) fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// `ctrl+c` arrives as a key press while raw mode is on
pub(crate) fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
pub(crate) fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}
