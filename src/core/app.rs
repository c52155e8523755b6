//! This module defines the central `EditorApp` structure: one editable text
//! area, the modal engine driving it, and the host's own state (status
//! message, quit confirmation).

use std::path::Path;

use crate::config::Config;
use crate::core::buffer::{Buffer, BufferError};
use crate::core::input::Key;
use crate::core::textarea::TextArea;
use crate::vi::ViEngine;

/// EditorApp: the root application state.
pub struct EditorApp {
    /// The text widget being edited
    pub textarea: TextArea,
    /// Modal input engine for `textarea`
    pub engine: ViEngine,
    /// Status/error message to display to user
    pub message: Option<String>,
    /// Set by a first quit on a modified buffer; a second quit exits
    pub quit_armed: bool,
}

impl EditorApp {
    /// Create the app and put the widget into the engine's start mode
    pub fn new(mut textarea: TextArea, mut engine: ViEngine) -> Self {
        engine.attach(&mut textarea);
        Self {
            textarea,
            engine,
            message: None,
            quit_armed: false,
        }
    }

    /// Initialize an EditorApp with config settings and an optional file.
    ///
    /// A file that does not exist yet opens as an empty buffer bound to that
    /// path.
    pub fn initialize_with_config(
        config: &Config,
        file: Option<&Path>,
    ) -> Result<Self, BufferError> {
        let buffer = match file {
            Some(path) => Buffer::open(path)?,
            None => Buffer::new(),
        };
        let textarea = TextArea::new(buffer, config.tab_width());
        let engine = ViEngine::from_config(config);
        log::debug!(
            "editor ready: vi={} start={}",
            engine.is_enabled(),
            engine.indicator()
        );
        Ok(Self::new(textarea, engine))
    }

    /// Route a key that no host binding claimed: the modal engine first, then
    /// default text-field handling. Returns true if anything handled the key.
    pub fn handle_key(&mut self, key: Key) -> bool {
        self.quit_armed = false;
        if self.engine.handle_key(&mut self.textarea, &key) {
            return true;
        }
        self.default_key(key)
    }

    /// Plain text-field behaviour: printable keys insert, named keys edit or
    /// move the cursor.
    fn default_key(&mut self, key: Key) -> bool {
        let ta = &mut self.textarea;
        match key {
            Key::Char(c) => ta.insert_char(c),
            Key::Enter => ta.insert_newline(),
            Key::Tab => ta.insert_char('\t'),
            Key::Backspace => ta.delete_backward(),
            Key::Delete => ta.delete_forward(),
            Key::Left => {
                ta.move_backward();
            }
            Key::Right => ta.move_forward(),
            Key::Up => ta.move_up(),
            Key::Down => ta.move_down(),
            Key::Home => ta.beginning_of_line(),
            Key::End => ta.end_of_line(),
            Key::PageUp => {
                for _ in 0..ta.height.max(1) {
                    ta.move_up();
                }
            }
            Key::PageDown => {
                for _ in 0..ta.height.max(1) {
                    ta.move_down();
                }
            }
            _ => return false,
        }
        true
    }

    /// Status line: mode indicator, file name with a modified marker, cursor
    /// position, then any pending message.
    pub fn status_line(&self) -> String {
        let (row, col) = self.textarea.cursor();
        let mut line = String::new();

        let indicator = self.engine.indicator();
        if !indicator.is_empty() {
            line.push_str(&format!("-- {} -- ", indicator));
        }
        line.push_str(&self.textarea.buffer.display_name());
        if self.textarea.buffer.modified {
            line.push_str(" [+]");
        }
        line.push_str(&format!("  Ln {}, Col {}", row + 1, col + 1));
        if let Some(msg) = &self.message {
            line.push_str("  ");
            line.push_str(msg);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handle::{BufferHandle, CursorShape};

    fn vi_app(text: &str) -> EditorApp {
        EditorApp::new(
            TextArea::from_text(text),
            ViEngine::new(true, CursorShape::Bar),
        )
    }

    #[test]
    fn test_insert_mode_types_text() {
        let mut app = vi_app("");
        for c in "hi".chars() {
            assert!(app.handle_key(Key::Char(c)));
        }
        app.handle_key(Key::Enter);
        app.handle_key(Key::Char('x'));
        assert_eq!(app.textarea.value(), "hi\nx");
    }

    #[test]
    fn test_normal_mode_keys_do_not_insert() {
        let mut app = vi_app("abc");
        app.engine.enter_normal(&mut app.textarea);
        app.handle_key(Key::Char('x'));
        assert_eq!(app.textarea.value(), "bc");
    }

    #[test]
    fn test_unbound_normal_key_falls_back_to_insertion() {
        let mut app = vi_app("abc");
        app.engine.enter_normal(&mut app.textarea);
        assert!(app.handle_key(Key::Char('z')));
        assert_eq!(app.textarea.value(), "zabc");
    }

    #[test]
    fn test_backspace_and_arrows() {
        let mut app = vi_app("ab");
        app.handle_key(Key::End);
        app.handle_key(Key::Backspace);
        assert_eq!(app.textarea.value(), "a");
        app.handle_key(Key::Left);
        assert_eq!(app.textarea.cursor(), (0, 0));
        assert!(!app.handle_key(Key::F(5)));
    }

    #[test]
    fn test_status_line() {
        let mut app = vi_app("abc");
        assert_eq!(app.status_line(), "-- INSERT -- [No Name]  Ln 1, Col 1");
        app.engine.enter_normal(&mut app.textarea);
        app.handle_key(Key::Char('d'));
        assert!(app.status_line().starts_with("-- d -- "));
        app.message = Some("hello".to_string());
        assert!(app.status_line().ends_with("  hello"));
    }

    #[test]
    fn test_status_line_without_vi() {
        let mut app = EditorApp::new(
            TextArea::from_text("abc"),
            ViEngine::new(false, CursorShape::Bar),
        );
        app.handle_key(Key::Char('x'));
        assert_eq!(app.status_line(), "[No Name] [+]  Ln 1, Col 2");
    }

    #[test]
    fn test_initialize_with_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");

        let mut config = Config::default();
        crate::user_config::configure(&mut config);
        config.set("vi-start-normal", true);

        let app = EditorApp::initialize_with_config(&config, Some(&path)).unwrap();
        assert!(app.engine.is_normal());
        assert_eq!(app.textarea.cursor_shape(), CursorShape::Block);
        assert_eq!(app.textarea.value(), "");
        assert_eq!(app.textarea.buffer.filename.as_deref(), Some(path.as_path()));
    }
}
