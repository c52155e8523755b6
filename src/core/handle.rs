//! Buffer capability interface
//!
//! `BufferHandle` is the minimal set of cursor and text primitives the modal
//! engine orchestrates. The engine never stores text itself and never looks at
//! how a widget represents it; any text widget that can provide these
//! operations can host vi-style editing.

use std::fmt;
use std::str::FromStr;

/// Visual shape of the text cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// Full cell block (always used in Normal mode)
    Block,
    /// Thin vertical bar
    #[default]
    Bar,
    /// Underline
    Underline,
}

impl CursorShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorShape::Block => "block",
            CursorShape::Bar => "bar",
            CursorShape::Underline => "underline",
        }
    }
}

impl fmt::Display for CursorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CursorShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "block" => Ok(CursorShape::Block),
            "bar" | "beam" => Ok(CursorShape::Bar),
            "underline" | "underscore" => Ok(CursorShape::Underline),
            _ => Err(format!("Unknown cursor shape: {}", s)),
        }
    }
}

/// Text storage and cursor primitives required by the modal engine.
///
/// All operations are infallible in-memory mutations. Motions clamp at
/// document bounds and are no-ops at the edges.
pub trait BufferHandle {
    /// Move the cursor one grapheme left
    fn cursor_left(&mut self);
    /// Move the cursor one grapheme right
    fn cursor_right(&mut self);
    /// Move the cursor one line up
    fn cursor_up(&mut self);
    /// Move the cursor one line down
    fn cursor_down(&mut self);

    /// Move to the start of the next word
    fn word_forward(&mut self);
    /// Move to the start of the previous word
    fn word_backward(&mut self);

    fn cursor_to_line_start(&mut self);
    fn cursor_to_line_end(&mut self);
    fn cursor_to_document_start(&mut self);
    fn cursor_to_document_end(&mut self);

    /// Insert one character at the cursor and advance past it
    fn insert_rune(&mut self, ch: char);

    /// Remove the grapheme under the cursor
    fn delete_forward_char(&mut self);
    /// Remove from the cursor to the start of the next word
    fn delete_forward_word(&mut self);
    fn delete_to_line_end(&mut self);
    fn delete_to_line_start(&mut self);

    /// Full text content
    fn value(&self) -> String;
    /// Replace the full text content. The cursor position afterwards is
    /// unspecified; callers must reposition it explicitly.
    fn set_value(&mut self, text: &str);

    /// Zero-based row index of the cursor
    fn current_line(&self) -> usize;

    fn cursor_shape(&self) -> CursorShape;
    fn set_cursor_shape(&mut self, shape: CursorShape);
}
