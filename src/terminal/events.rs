use crate::core::input::Key;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Editor events
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Key(Key),
    Resize(u16, u16),
    None,
}

#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Create a new EventHandler
    pub fn new() -> Self {
        Self
    }

    /// Check for available events with a timeout
    pub fn poll(&self, timeout: Duration) -> Result<bool, Box<dyn std::error::Error>> {
        Ok(event::poll(timeout)?)
    }

    /// Read the next event. Call after `poll` reports one is ready.
    pub fn read(&mut self) -> Result<EditorEvent, Box<dyn std::error::Error>> {
        Ok(translate_event(event::read()?))
    }
}

fn translate_event(event: Event) -> EditorEvent {
    match event {
        // Windows reports releases too
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            EditorEvent::Key(crossterm_key_to_key(key_event))
        }
        Event::Resize(cols, rows) => EditorEvent::Resize(cols, rows),
        _ => EditorEvent::None,
    }
}

fn crossterm_key_to_key(key_event: event::KeyEvent) -> Key {
    let modifiers = key_event.modifiers;
    let alt = modifiers.contains(KeyModifiers::ALT);
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char(c) => {
            if ctrl && !alt {
                Key::Ctrl(c.to_ascii_lowercase())
            } else if alt && !ctrl {
                Key::Alt(c.to_ascii_lowercase())
            } else {
                Key::Char(c)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Esc => Key::Esc,
        _ => Key::Null,
    }
}
