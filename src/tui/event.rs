//! Event handling for the TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let _tx = tx.clone();

        let event_tx = tx.clone();
        std::thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if event_tx.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => {
                        if event_tx.send(Event::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            } else if event_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, _tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    PagePrev,
    PageNext,
    Enter,
    Back,
    Help,
    ToggleSelect,
    Compare,
    ClearSelection,
    CycleBasinFilter,
    ScaleUp,
    ScaleDown,
    ScaleReset,
    ToggleLang,
    ThemeSelector,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::Up,
            KeyCode::Down | KeyCode::Char('j') => Action::Down,
            KeyCode::Left | KeyCode::Char('h') => Action::PagePrev,
            KeyCode::Right | KeyCode::Char('l') => Action::PageNext,
            KeyCode::Enter => Action::Enter,
            KeyCode::Esc => Action::Back,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Char(' ') => Action::ToggleSelect,
            KeyCode::Char('c') => Action::Compare,
            KeyCode::Char('x') => Action::ClearSelection,
            KeyCode::Char('f') => Action::CycleBasinFilter,
            KeyCode::Char('+') | KeyCode::Char('=') => Action::ScaleUp,
            KeyCode::Char('-') => Action::ScaleDown,
            KeyCode::Char('0') => Action::ScaleReset,
            KeyCode::Char('L') => Action::ToggleLang,
            KeyCode::Char('T') => Action::ThemeSelector,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(Action::from(key(KeyCode::Char('q'))), Action::Quit);

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(Action::from(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_plain_c_is_compare_not_quit() {
        assert_eq!(Action::from(key(KeyCode::Char('c'))), Action::Compare);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(Action::from(key(KeyCode::Up)), Action::Up);
        assert_eq!(Action::from(key(KeyCode::Char('k'))), Action::Up);
        assert_eq!(Action::from(key(KeyCode::Down)), Action::Down);
        assert_eq!(Action::from(key(KeyCode::Char('j'))), Action::Down);
        assert_eq!(Action::from(key(KeyCode::Left)), Action::PagePrev);
        assert_eq!(Action::from(key(KeyCode::Right)), Action::PageNext);
        assert_eq!(Action::from(key(KeyCode::Enter)), Action::Enter);
        assert_eq!(Action::from(key(KeyCode::Esc)), Action::Back);
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(Action::from(key(KeyCode::Char(' '))), Action::ToggleSelect);
        assert_eq!(Action::from(key(KeyCode::Char('x'))), Action::ClearSelection);
    }

    #[test]
    fn test_display_keys() {
        assert_eq!(Action::from(key(KeyCode::Char('+'))), Action::ScaleUp);
        assert_eq!(Action::from(key(KeyCode::Char('='))), Action::ScaleUp);
        assert_eq!(Action::from(key(KeyCode::Char('-'))), Action::ScaleDown);
        assert_eq!(Action::from(key(KeyCode::Char('0'))), Action::ScaleReset);
        assert_eq!(Action::from(key(KeyCode::Char('L'))), Action::ToggleLang);
        assert_eq!(Action::from(key(KeyCode::Char('T'))), Action::ThemeSelector);
        assert_eq!(Action::from(key(KeyCode::Char('f'))), Action::CycleBasinFilter);
    }

    #[test]
    fn test_unbound_key_is_none() {
        assert_eq!(Action::from(key(KeyCode::Char('z'))), Action::None);
    }
}
