use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message};

impl App {
    pub(super) fn handle_event(event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(*key),
            Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
            _ => None,
        }
    }
}

fn handle_key(key: KeyEvent) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q' | 'c') if ctrl => Some(Message::Quit),
        // The original indent binding.
        KeyCode::Char(']') if ctrl => Some(Message::Indent),
        KeyCode::Char('e') if ctrl => Some(Message::ToggleFocus),
        KeyCode::F(2) => Some(Message::ToggleDebugPanes),
        KeyCode::Enter => Some(Message::NewLine),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Left => Some(Message::MoveLeft),
        KeyCode::Right => Some(Message::MoveRight),
        KeyCode::Up => Some(Message::MoveUp),
        KeyCode::Down => Some(Message::MoveDown),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),
        KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Message::InsertChar(ch))
        }
        _ => None,
    }
}
