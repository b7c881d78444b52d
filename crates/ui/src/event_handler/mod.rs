mod key_action;

pub use key_action::KeyAction;

use crate::state::AppState;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Event handler for the TUI application
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal.
    ///
    /// Returns `Some(event)` if an event is available, `None` on timeout
    /// or error. Terminal errors are logged but not propagated; they are
    /// typically fatal and the application exits on the next iteration.
    pub fn read() -> Option<Event> {
        match crossterm::event::poll(std::time::Duration::from_millis(100)) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::error!("terminal read error: {}", e);
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::error!("event poll error: {}", e);
                None
            }
        }
    }

    /// Translate a key event into an action, editing the clarification
    /// draft in place for plain keystrokes.
    pub fn handle_key_event(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('g') => Some(KeyAction::GenerateQuestion),
                KeyCode::Char('a') => Some(KeyAction::RevealAnswer),
                KeyCode::Char('b') => Some(KeyAction::ToggleSidebar),
                KeyCode::Char('l') => Some(KeyAction::ClearHistory),
                KeyCode::Char('n') => Some(KeyAction::NewSession),
                KeyCode::Char('c') => Some(KeyAction::Exit),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Esc => Some(KeyAction::Exit),
            KeyCode::Enter => Some(KeyAction::SubmitClarification),
            KeyCode::Up => Some(KeyAction::ScrollUp),
            KeyCode::Down => Some(KeyAction::ScrollDown),
            KeyCode::PageUp => Some(KeyAction::PageUp),
            KeyCode::PageDown => Some(KeyAction::PageDown),
            KeyCode::Char(c) => {
                state.session.input.insert_char(c);
                None
            }
            KeyCode::Backspace => {
                state.session.input.backspace();
                None
            }
            KeyCode::Delete => {
                state.session.input.delete();
                None
            }
            KeyCode::Left => {
                state.session.input.move_left();
                None
            }
            KeyCode::Right => {
                state.session.input.move_right();
                None
            }
            KeyCode::Home => {
                state.session.input.move_home();
                None
            }
            KeyCode::End => {
                state.session.input.move_end();
                None
            }
            _ => None,
        }
    }

    /// Mouse wheel scrolling over the transcript pane
    pub fn handle_mouse_event(event: MouseEvent) -> Option<KeyAction> {
        match event.kind {
            MouseEventKind::ScrollUp => Some(KeyAction::ScrollUp),
            MouseEventKind::ScrollDown => Some(KeyAction::ScrollDown),
            _ => None,
        }
    }

    /// Handle any terminal event
    pub fn handle_event(event: &Event, state: &mut AppState) -> Option<KeyAction> {
        match event {
            Event::Key(key_event) => Self::handle_key_event(*key_event, state),
            Event::Mouse(mouse_event) => Self::handle_mouse_event(*mouse_event),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_plain_chars_edit_the_draft() {
        let mut state = AppState::default();
        assert!(EventHandler::handle_key_event(key(KeyCode::Char('h')), &mut state).is_none());
        assert!(EventHandler::handle_key_event(key(KeyCode::Char('i')), &mut state).is_none());
        assert_eq!(state.session.input.buffer, "hi");

        EventHandler::handle_key_event(key(KeyCode::Backspace), &mut state);
        assert_eq!(state.session.input.buffer, "h");
    }

    #[test]
    fn test_control_bindings() {
        let mut state = AppState::default();
        assert_eq!(
            EventHandler::handle_key_event(ctrl('g'), &mut state),
            Some(KeyAction::GenerateQuestion)
        );
        assert_eq!(
            EventHandler::handle_key_event(ctrl('a'), &mut state),
            Some(KeyAction::RevealAnswer)
        );
        assert_eq!(
            EventHandler::handle_key_event(ctrl('l'), &mut state),
            Some(KeyAction::ClearHistory)
        );
        assert_eq!(
            EventHandler::handle_key_event(ctrl('n'), &mut state),
            Some(KeyAction::NewSession)
        );
        assert_eq!(EventHandler::handle_key_event(ctrl('c'), &mut state), Some(KeyAction::Exit));
        assert!(state.session.input.buffer.is_empty());
    }

    #[test]
    fn test_enter_submits_clarification() {
        let mut state = AppState::default();
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Enter), &mut state),
            Some(KeyAction::SubmitClarification)
        );
    }

    #[test]
    fn test_escape_exits() {
        let mut state = AppState::default();
        assert_eq!(EventHandler::handle_key_event(key(KeyCode::Esc), &mut state), Some(KeyAction::Exit));
    }

    #[test]
    fn test_arrows_scroll_and_edit() {
        let mut state = AppState::default();
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Up), &mut state),
            Some(KeyAction::ScrollUp)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Down), &mut state),
            Some(KeyAction::ScrollDown)
        );

        state.session.input.insert_char('a');
        assert!(EventHandler::handle_key_event(key(KeyCode::Left), &mut state).is_none());
        assert_eq!(state.session.input.cursor, 0);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut state = AppState::default();
        let mut event = key(KeyCode::Char('x'));
        event.kind = KeyEventKind::Release;
        assert!(EventHandler::handle_key_event(event, &mut state).is_none());
        assert!(state.session.input.buffer.is_empty());
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let event = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventHandler::handle_mouse_event(event), Some(KeyAction::ScrollUp));
    }
}
