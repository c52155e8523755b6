//! Text mutations, including the delete-line composite

use crate::core::handle::BufferHandle;
use crate::vi::action::Edit;

/// Apply a text mutation to `buf`
pub fn apply_edit<B: BufferHandle + ?Sized>(buf: &mut B, edit: Edit) {
    match edit {
        Edit::DeleteChar => buf.delete_forward_char(),
        Edit::DeleteWord => buf.delete_forward_word(),
        Edit::DeleteToLineEnd => buf.delete_to_line_end(),
        Edit::DeleteToLineStart => buf.delete_to_line_start(),
        Edit::DeleteLine => delete_line(buf),
        Edit::InsertNewline => buf.insert_rune('\n'),
    }
}

/// Remove the cursor's line and leave the cursor at column 0 of the line
/// that took its place (or the new last line).
///
/// Works on the full text because the handle has no line-removal primitive.
/// A cursor row past the end of the text is ignored.
pub fn delete_line<B: BufferHandle + ?Sized>(buf: &mut B) {
    let value = buf.value();
    let mut lines: Vec<&str> = value.split('\n').collect();

    let row = buf.current_line();
    if row >= lines.len() {
        log::debug!("delete-line: row {} out of range ({} lines)", row, lines.len());
        return;
    }

    lines.remove(row);
    buf.set_value(&lines.join("\n"));

    // set_value leaves the cursor undefined
    let target = row.min(lines.len().saturating_sub(1));
    buf.cursor_to_document_start();
    for _ in 0..target {
        buf.cursor_down();
    }
    buf.cursor_to_line_start();
}
