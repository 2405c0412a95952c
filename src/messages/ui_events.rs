//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::focus::FocusTarget;
use crate::models::HttpMethod;

/// Events generated from user input in the UI layer.
///
/// Events are signals; what they mean depends on the focused panel or the
/// open overlay, and the App layer resolves that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Focus cycle
    MoveFocus,
    MoveFocusBack,

    // Enter / Esc
    Confirm,
    Cancel,

    // Text editing
    CharInput(char),
    Backspace,
    Delete,

    // Cursor / selection movement
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,

    // Tables
    DeleteRow,

    // Method list shortcut
    PickMethod(HttpMethod),

    // Response
    ScrollUp,
    ScrollDown,

    // System
    Quit,
}

/// Which overlay, if any, is capturing input
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OverlayKind {
    #[default]
    None,
    CellEditor,
    MethodList,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, focus: FocusTarget, overlay: OverlayKind) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::PageUp => return Some(UiEvent::ScrollUp),
        KeyCode::PageDown => return Some(UiEvent::ScrollDown),
        _ => {}
    }

    match overlay {
        OverlayKind::CellEditor => handle_text_keys(key),
        OverlayKind::MethodList => handle_method_list_keys(key),
        OverlayKind::None => match key.code {
            KeyCode::Tab => Some(UiEvent::MoveFocus),
            KeyCode::BackTab => Some(UiEvent::MoveFocusBack),
            _ => match focus {
                FocusTarget::UrlField => handle_text_keys(key),
                FocusTarget::QueryTable | FocusTarget::BodyTable => handle_table_keys(key),
                FocusTarget::MethodSelector => match key.code {
                    KeyCode::Enter => Some(UiEvent::Confirm),
                    _ => None,
                },
            },
        },
    }
}

/// Keys for single-line inputs (URL field, cell editor)
fn handle_text_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Enter => Some(UiEvent::Confirm),
        KeyCode::Esc => Some(UiEvent::Cancel),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Delete => Some(UiEvent::Delete),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Home => Some(UiEvent::CursorHome),
        KeyCode::End => Some(UiEvent::CursorEnd),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

/// Keys for a focused parameter table
fn handle_table_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Enter => Some(UiEvent::Confirm),
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::CursorRight),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::CursorDown),
        KeyCode::Home | KeyCode::Char('g') => Some(UiEvent::CursorHome),
        KeyCode::End | KeyCode::Char('G') => Some(UiEvent::CursorEnd),
        KeyCode::Delete | KeyCode::Char('d') => Some(UiEvent::DeleteRow),
        _ => None,
    }
}

/// Keys for the method pick-list
fn handle_method_list_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Enter => Some(UiEvent::Confirm),
        KeyCode::Esc => Some(UiEvent::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::CursorDown),
        KeyCode::Char(c) => HttpMethod::from_shortcut(c).map(UiEvent::PickMethod),
        _ => None,
    }
}
