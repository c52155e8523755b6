//! Terminal rendering module
//!
//! Draws the visible part of the text area, a reverse-video status line under
//! it, then places the hardware cursor with the shape the modal engine chose.

use std::io::Write;

use crossterm::cursor::{Hide, MoveTo, SetCursorStyle, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{QueueableCommand, queue};

use crate::core::app::EditorApp;
use crate::core::handle::CursorShape;
use crate::core::utf8;

/// Terminal cursor style for a widget cursor shape
pub fn cursor_style(shape: CursorShape) -> SetCursorStyle {
    match shape {
        CursorShape::Block => SetCursorStyle::SteadyBlock,
        CursorShape::Bar => SetCursorStyle::SteadyBar,
        CursorShape::Underline => SetCursorStyle::SteadyUnderScore,
    }
}

/// Cut a display line to the columns `[skip, skip + width)`.
/// A wide grapheme straddling either edge is dropped.
fn clip_columns(text: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0;
    for g in utf8::graphemes(text) {
        let w = utf8::grapheme_width(g);
        if col >= skip && col + w <= skip + width {
            out.push_str(g);
        }
        col += w;
        if col >= skip + width {
            break;
        }
    }
    out
}

/// Pad or truncate the status text to exactly `width` columns
fn fit_status(text: &str, width: usize) -> String {
    let mut line = clip_columns(text, 0, width);
    let used: usize = utf8::graphemes(&line)
        .into_iter()
        .map(utf8::grapheme_width)
        .sum();
    line.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    line
}

/// Lines of the text viewport as they appear on screen; rows past the end of
/// the buffer show `~`.
pub fn viewport_lines(app: &EditorApp) -> Vec<String> {
    let ta = &app.textarea;
    let (start, end) = ta.visible_range();
    (0..ta.height)
        .map(|screen_row| {
            let line_idx = start + screen_row;
            if line_idx < end {
                let expanded = utf8::expand_tabs(&ta.line_text(line_idx), ta.tab_width);
                clip_columns(&expanded, ta.scroll_x, ta.width)
            } else {
                "~".to_string()
            }
        })
        .collect()
}

/// Draw one full frame
pub fn render<W: Write>(app: &mut EditorApp, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    app.textarea.ensure_cursor_visible();
    out.queue(Hide)?;

    for (row, line) in viewport_lines(app).iter().enumerate() {
        queue!(
            out,
            MoveTo(0, row as u16),
            Clear(ClearType::UntilNewLine),
            Print(line)
        )?;
    }

    let ta = &app.textarea;
    queue!(
        out,
        MoveTo(0, ta.height as u16),
        SetAttribute(Attribute::Reverse),
        Print(fit_status(&app.status_line(), ta.width)),
        SetAttribute(Attribute::Reset)
    )?;

    let cursor_x = ta.visual_cursor_x().saturating_sub(ta.scroll_x);
    let cursor_y = ta.cursor_y.saturating_sub(ta.scroll_offset);
    queue!(
        out,
        cursor_style(ta.cursor_shape),
        MoveTo(cursor_x as u16, cursor_y as u16),
        Show
    )?;

    out.flush()?;
    Ok(())
}
