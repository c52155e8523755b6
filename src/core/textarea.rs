use crate::core::buffer::Buffer;
use crate::core::handle::{BufferHandle, CursorShape};
use crate::core::utf8;

/// `TextArea` is an editable text widget: a `Buffer` plus a grapheme cursor
/// and a viewport.
///
/// Cursor motions clamp at document bounds. Horizontal motions wrap across
/// line boundaries the same way arrow keys do in most text fields.
#[derive(Debug)]
pub struct TextArea {
    /// Text being edited
    pub buffer: Buffer,
    /// Cursor column (grapheme clusters, not bytes)
    pub cursor_x: usize,
    /// Cursor line
    pub cursor_y: usize,
    /// Vertical scroll offset (top visible line)
    pub scroll_offset: usize,
    /// Horizontal scroll offset (leftmost visible column)
    pub scroll_x: usize,
    /// Viewport width (columns)
    pub width: usize,
    /// Viewport height (rows)
    pub height: usize,
    /// Tab width used for visual columns
    pub tab_width: usize,
    /// Shape the host should draw the cursor with
    pub cursor_shape: CursorShape,
}

impl TextArea {
    /// Create a text area over a buffer with the cursor at the start
    pub fn new(buffer: Buffer, tab_width: usize) -> Self {
        Self {
            buffer,
            cursor_x: 0,
            cursor_y: 0,
            scroll_offset: 0,
            scroll_x: 0,
            width: 80,
            height: 24,
            tab_width,
            cursor_shape: CursorShape::default(),
        }
    }

    /// Create a text area from a string
    pub fn from_text(text: &str) -> Self {
        Self::new(Buffer::from_string(text), 4)
    }

    /// Set viewport dimensions
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.ensure_cursor_visible();
    }

    /// Cursor position as (row, column)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_y, self.cursor_x)
    }

    /// Text of a line, empty when out of range
    pub fn line_text(&self, row: usize) -> String {
        self.buffer.line(row).unwrap_or_default()
    }

    fn line_len(&self, row: usize) -> usize {
        utf8::grapheme_count(&self.line_text(row))
    }

    fn last_line(&self) -> usize {
        self.buffer.line_count().saturating_sub(1)
    }

    // ==================== Motions ====================

    /// Move cursor forward one grapheme cluster
    pub fn move_forward(&mut self) {
        if self.cursor_x < self.line_len(self.cursor_y) {
            self.cursor_x += 1;
        } else if self.cursor_y < self.last_line() {
            self.cursor_y += 1;
            self.cursor_x = 0;
        }
        self.ensure_cursor_visible();
    }

    /// Move cursor backward one grapheme cluster
    /// Returns true if moved, false if already at start
    pub fn move_backward(&mut self) -> bool {
        let moved = if self.cursor_x > 0 {
            self.cursor_x -= 1;
            true
        } else if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.cursor_x = self.line_len(self.cursor_y);
            true
        } else {
            false
        };

        if moved {
            self.ensure_cursor_visible();
        }
        moved
    }

    /// Move cursor down one line
    pub fn move_down(&mut self) {
        if self.cursor_y < self.last_line() {
            self.cursor_y += 1;
        }
        self.ensure_cursor_valid();
        self.ensure_cursor_visible();
    }

    /// Move cursor up one line
    pub fn move_up(&mut self) {
        self.cursor_y = self.cursor_y.saturating_sub(1);
        self.ensure_cursor_valid();
        self.ensure_cursor_visible();
    }

    pub fn beginning_of_line(&mut self) {
        self.cursor_x = 0;
        self.ensure_cursor_visible();
    }

    pub fn end_of_line(&mut self) {
        self.cursor_x = self.line_len(self.cursor_y);
        self.ensure_cursor_visible();
    }

    pub fn beginning_of_buffer(&mut self) {
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.ensure_cursor_visible();
    }

    pub fn end_of_buffer(&mut self) {
        self.cursor_y = self.last_line();
        self.cursor_x = self.line_len(self.cursor_y);
        self.ensure_cursor_visible();
    }

    /// Position (column, row) of the next word start.
    ///
    /// A word is a run of non-blank graphemes. The rest of the current word is
    /// skipped, then blanks, crossing line breaks. An empty line counts as a
    /// word of its own. At the last word the target is the end of the buffer.
    fn word_forward_target(&self) -> (usize, usize) {
        let last_line = self.last_line();
        let (mut x, mut y) = (self.cursor_x, self.cursor_y);
        let mut in_word = true;

        loop {
            let text = self.line_text(y);
            let graphemes = utf8::graphemes(&text);

            if in_word {
                while x < graphemes.len() && !utf8::is_blank(graphemes[x]) {
                    x += 1;
                }
                in_word = false;
            }
            while x < graphemes.len() && utf8::is_blank(graphemes[x]) {
                x += 1;
            }

            if x < graphemes.len() || y >= last_line {
                return (x.min(graphemes.len()), y);
            }

            y += 1;
            x = 0;
            if self.line_text(y).is_empty() {
                return (0, y);
            }
        }
    }

    /// Move cursor to the start of the next word
    pub fn forward_word(&mut self) {
        let (x, y) = self.word_forward_target();
        self.cursor_x = x;
        self.cursor_y = y;
        self.ensure_cursor_visible();
    }

    /// Start of the previous word, crossing line breaks.
    /// An empty line counts as a word, matching `word_forward_target`.
    fn word_backward_target(&self) -> (usize, usize) {
        let (mut x, mut y) = (self.cursor_x, self.cursor_y);

        loop {
            let text = self.line_text(y);
            let graphemes = utf8::graphemes(&text);
            x = x.min(graphemes.len());

            while x > 0 && utf8::is_blank(graphemes[x - 1]) {
                x -= 1;
            }
            if x > 0 {
                while x > 0 && !utf8::is_blank(graphemes[x - 1]) {
                    x -= 1;
                }
                return (x, y);
            }

            if y == 0 {
                return (0, 0);
            }
            y -= 1;
            x = self.line_len(y);
            if x == 0 {
                return (0, y);
            }
        }
    }

    /// Move cursor to the start of the previous word
    pub fn backward_word(&mut self) {
        let (x, y) = self.word_backward_target();
        self.cursor_x = x;
        self.cursor_y = y;
        self.ensure_cursor_visible();
    }

    // ==================== Editing ====================

    /// Absolute byte offset of a (column, row) position
    fn byte_offset_at(&self, x: usize, y: usize) -> usize {
        let Some(line_start) = self.buffer.line_to_byte(y) else {
            return self.buffer.len();
        };
        let text = self.line_text(y);
        // ASCII fast path: grapheme column == byte offset
        if text.is_ascii() {
            return line_start + x.min(text.len());
        }
        line_start + utf8::grapheme_byte_offset(&text, x)
    }

    /// Absolute byte offset of the cursor
    pub fn byte_offset(&self) -> usize {
        self.byte_offset_at(self.cursor_x, self.cursor_y)
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        let pos = self.byte_offset();
        self.buffer.insert_char(pos, c);

        if c == '\n' {
            self.cursor_y += 1;
            self.cursor_x = 0;
        } else {
            self.cursor_x += 1;
        }
        self.ensure_cursor_visible();
    }

    /// Split the line at the cursor
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the grapheme under the cursor. At the end of a line the line
    /// break is removed, joining the next line.
    pub fn delete_forward(&mut self) {
        let text = self.line_text(self.cursor_y);
        let graphemes = utf8::graphemes(&text);
        let pos = self.byte_offset();

        if let Some(g) = graphemes.get(self.cursor_x) {
            self.buffer.delete(pos, g.len());
        } else if self.cursor_y < self.last_line() {
            let next_line = self.buffer.line_to_byte(self.cursor_y + 1).unwrap_or(pos);
            self.buffer.delete(pos, next_line.saturating_sub(pos).max(1));
        }
    }

    /// Delete the grapheme before the cursor (Backspace)
    pub fn delete_backward(&mut self) {
        if self.move_backward() {
            self.delete_forward();
        }
    }

    /// Delete from the cursor to the next word start, stopping at the end of
    /// the current line
    pub fn delete_word(&mut self) {
        let (target_x, target_y) = self.word_forward_target();
        let end_x = if target_y == self.cursor_y {
            target_x
        } else {
            self.line_len(self.cursor_y)
        };
        let start = self.byte_offset();
        let end = self.byte_offset_at(end_x, self.cursor_y);
        self.buffer.delete(start, end.saturating_sub(start));
    }

    /// Delete from the cursor to the end of the line, keeping the line break
    pub fn kill_to_end_of_line(&mut self) {
        let start = self.byte_offset();
        let end = self.byte_offset_at(self.line_len(self.cursor_y), self.cursor_y);
        self.buffer.delete(start, end.saturating_sub(start));
    }

    /// Delete from the start of the line to the cursor
    pub fn kill_to_start_of_line(&mut self) {
        let end = self.byte_offset();
        let start = self.byte_offset_at(0, self.cursor_y);
        self.buffer.delete(start, end.saturating_sub(start));
        self.cursor_x = 0;
        self.ensure_cursor_visible();
    }

    // ==================== Viewport ====================

    /// Ensure cursor is within valid bounds
    pub fn ensure_cursor_valid(&mut self) {
        self.cursor_y = self.cursor_y.min(self.last_line());
        self.cursor_x = self.cursor_x.min(self.line_len(self.cursor_y));
    }

    /// Visual cursor column (accounts for tab width and wide graphemes)
    pub fn visual_cursor_x(&self) -> usize {
        utf8::visual_width_up_to(&self.line_text(self.cursor_y), self.cursor_x, self.tab_width)
    }

    /// Ensure cursor is visible in viewport (scroll only at edges)
    pub fn ensure_cursor_visible(&mut self) {
        if self.cursor_y < self.scroll_offset {
            self.scroll_offset = self.cursor_y;
        } else if self.height > 0 && self.cursor_y >= self.scroll_offset + self.height {
            self.scroll_offset = self.cursor_y + 1 - self.height;
        }

        let visual_x = self.visual_cursor_x();
        if visual_x < self.scroll_x {
            self.scroll_x = visual_x;
        } else if self.width > 0 && visual_x >= self.scroll_x + self.width {
            self.scroll_x = visual_x + 1 - self.width;
        }
    }

    /// Visible line range (start, end exclusive)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.scroll_offset;
        let end = (self.scroll_offset + self.height).min(self.buffer.line_count());
        (start, end)
    }
}

impl BufferHandle for TextArea {
    fn cursor_left(&mut self) {
        self.move_backward();
    }

    fn cursor_right(&mut self) {
        self.move_forward();
    }

    fn cursor_up(&mut self) {
        self.move_up();
    }

    fn cursor_down(&mut self) {
        self.move_down();
    }

    fn word_forward(&mut self) {
        self.forward_word();
    }

    fn word_backward(&mut self) {
        self.backward_word();
    }

    fn cursor_to_line_start(&mut self) {
        self.beginning_of_line();
    }

    fn cursor_to_line_end(&mut self) {
        self.end_of_line();
    }

    fn cursor_to_document_start(&mut self) {
        self.beginning_of_buffer();
    }

    fn cursor_to_document_end(&mut self) {
        self.end_of_buffer();
    }

    fn insert_rune(&mut self, ch: char) {
        self.insert_char(ch);
    }

    fn delete_forward_char(&mut self) {
        self.delete_forward();
    }

    fn delete_forward_word(&mut self) {
        self.delete_word();
    }

    fn delete_to_line_end(&mut self) {
        self.kill_to_end_of_line();
    }

    fn delete_to_line_start(&mut self) {
        self.kill_to_start_of_line();
    }

    fn value(&self) -> String {
        self.buffer.text()
    }

    fn set_value(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.ensure_cursor_valid();
        self.ensure_cursor_visible();
    }

    fn current_line(&self) -> usize {
        self.cursor_y
    }

    fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) {
        self.cursor_shape = shape;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(text: &str, row: usize, col: usize) -> TextArea {
        let mut ta = TextArea::from_text(text);
        ta.cursor_y = row;
        ta.cursor_x = col;
        ta
    }

    #[test]
    fn test_text_area_new() {
        let ta = TextArea::from_text("hello");
        assert_eq!(ta.cursor(), (0, 0));
        assert_eq!(ta.width, 80);
        assert_eq!(ta.height, 24);
        assert_eq!(ta.tab_width, 4);
    }

    #[test]
    fn test_horizontal_moves_wrap_lines() {
        let mut ta = area("ab\ncd", 0, 2);
        ta.cursor_right();
        assert_eq!(ta.cursor(), (1, 0));
        ta.cursor_left();
        assert_eq!(ta.cursor(), (0, 2));
    }

    #[test]
    fn test_moves_clamp_at_document_bounds() {
        let mut ta = area("ab\ncd", 0, 0);
        ta.cursor_left();
        ta.cursor_up();
        assert_eq!(ta.cursor(), (0, 0));

        ta.cursor_to_document_end();
        assert_eq!(ta.cursor(), (1, 2));
        ta.cursor_right();
        ta.cursor_down();
        assert_eq!(ta.cursor(), (1, 2));
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let mut ta = area("long line\nab", 0, 8);
        ta.cursor_down();
        assert_eq!(ta.cursor(), (1, 2));
    }

    #[test]
    fn test_word_forward() {
        let mut ta = area("foo bar  baz", 0, 0);
        ta.word_forward();
        assert_eq!(ta.cursor(), (0, 4));
        ta.word_forward();
        assert_eq!(ta.cursor(), (0, 9));
        ta.word_forward();
        assert_eq!(ta.cursor(), (0, 12));
    }

    #[test]
    fn test_word_forward_crosses_lines() {
        let mut ta = area("foo\n  bar", 0, 1);
        ta.word_forward();
        assert_eq!(ta.cursor(), (1, 2));
    }

    #[test]
    fn test_word_forward_stops_on_empty_line() {
        let mut ta = area("foo\n\nbar", 0, 0);
        ta.word_forward();
        assert_eq!(ta.cursor(), (1, 0));
        ta.word_forward();
        assert_eq!(ta.cursor(), (2, 0));
    }

    #[test]
    fn test_word_backward() {
        let mut ta = area("foo bar baz", 0, 9);
        ta.word_backward();
        assert_eq!(ta.cursor(), (0, 8));
        ta.word_backward();
        assert_eq!(ta.cursor(), (0, 4));

        let mut ta = area("foo\nbar", 1, 0);
        ta.word_backward();
        assert_eq!(ta.cursor(), (0, 0));
    }

    #[test]
    fn test_word_backward_skips_indentation() {
        let mut ta = area("foo\n  bar", 1, 2);
        ta.word_backward();
        assert_eq!(ta.cursor(), (0, 0));

        let mut ta = area("foo  \n\t  bar", 1, 3);
        ta.word_backward();
        assert_eq!(ta.cursor(), (0, 0));
    }

    #[test]
    fn test_word_backward_stops_on_empty_line() {
        let mut ta = area("foo\n\n  bar", 2, 2);
        ta.word_backward();
        assert_eq!(ta.cursor(), (1, 0));
        ta.word_backward();
        assert_eq!(ta.cursor(), (0, 0));
        ta.word_backward();
        assert_eq!(ta.cursor(), (0, 0));
    }

    #[test]
    fn test_insert_rune_and_newline() {
        let mut ta = area("ac", 0, 1);
        ta.insert_rune('b');
        assert_eq!(ta.value(), "abc");
        assert_eq!(ta.cursor(), (0, 2));

        ta.insert_rune('\n');
        assert_eq!(ta.value(), "ab\nc");
        assert_eq!(ta.cursor(), (1, 0));
    }

    #[test]
    fn test_delete_forward_char() {
        let mut ta = area("abc", 0, 1);
        ta.delete_forward_char();
        assert_eq!(ta.value(), "ac");
        assert_eq!(ta.cursor(), (0, 1));

        // At end of line the next line is joined
        let mut ta = area("ab\ncd", 0, 2);
        ta.delete_forward_char();
        assert_eq!(ta.value(), "abcd");
    }

    #[test]
    fn test_delete_forward_char_unicode() {
        let mut ta = area("a👋b", 0, 1);
        ta.delete_forward_char();
        assert_eq!(ta.value(), "ab");
    }

    #[test]
    fn test_delete_forward_word() {
        let mut ta = area("foo bar baz", 0, 4);
        ta.delete_forward_word();
        assert_eq!(ta.value(), "foo baz");
        assert_eq!(ta.cursor(), (0, 4));
    }

    #[test]
    fn test_delete_forward_word_stays_on_line() {
        let mut ta = area("foo bar\nnext", 0, 4);
        ta.delete_forward_word();
        assert_eq!(ta.value(), "foo \nnext");
    }

    #[test]
    fn test_delete_to_line_end_and_start() {
        let mut ta = area("hello world\nnext", 0, 5);
        ta.delete_to_line_end();
        assert_eq!(ta.value(), "hello\nnext");

        let mut ta = area("hello world", 0, 6);
        ta.delete_to_line_start();
        assert_eq!(ta.value(), "world");
        assert_eq!(ta.cursor(), (0, 0));
    }

    #[test]
    fn test_delete_backward_joins_lines() {
        let mut ta = area("ab\ncd", 1, 0);
        ta.delete_backward();
        assert_eq!(ta.value(), "abcd");
        assert_eq!(ta.cursor(), (0, 2));
    }

    #[test]
    fn test_set_value_clamps_cursor() {
        let mut ta = area("one\ntwo\nthree", 2, 4);
        ta.set_value("x");
        assert_eq!(ta.cursor(), (0, 1));
    }

    #[test]
    fn test_viewport_scrolls_with_cursor() {
        let text = (0..50).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut ta = TextArea::from_text(&text);
        ta.set_dimensions(10, 5);
        for _ in 0..10 {
            ta.cursor_down();
        }
        assert_eq!(ta.scroll_offset, 6);
        assert_eq!(ta.visible_range(), (6, 11));
        ta.cursor_to_document_start();
        assert_eq!(ta.scroll_offset, 0);
    }
}
