//! Cursor motions applied through a `BufferHandle`

use crate::core::handle::BufferHandle;
use crate::vi::action::Motion;

/// Move the cursor of `buf` according to `motion`
pub fn apply_motion<B: BufferHandle + ?Sized>(buf: &mut B, motion: Motion) {
    match motion {
        Motion::Left => buf.cursor_left(),
        Motion::Right => buf.cursor_right(),
        Motion::Up => buf.cursor_up(),
        Motion::Down => buf.cursor_down(),
        // `e` lands where `w` does
        Motion::WordForward | Motion::WordEnd => buf.word_forward(),
        Motion::WordBackward => buf.word_backward(),
        Motion::LineStart => buf.cursor_to_line_start(),
        Motion::LineEnd => buf.cursor_to_line_end(),
        Motion::DocumentStart => buf.cursor_to_document_start(),
        Motion::DocumentEnd => buf.cursor_to_document_end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::textarea::TextArea;

    #[test]
    fn test_word_end_matches_word_forward() {
        let mut by_w = TextArea::from_text("alpha beta gamma");
        let mut by_e = TextArea::from_text("alpha beta gamma");
        for _ in 0..2 {
            apply_motion(&mut by_w, Motion::WordForward);
            apply_motion(&mut by_e, Motion::WordEnd);
            assert_eq!(by_w.cursor(), by_e.cursor());
        }
        assert_eq!(by_e.cursor(), (0, 11));
    }

    #[test]
    fn test_document_motions() {
        let mut ta = TextArea::from_text("one\ntwo\nthree");
        apply_motion(&mut ta, Motion::DocumentEnd);
        assert_eq!(ta.cursor(), (2, 5));
        apply_motion(&mut ta, Motion::LineStart);
        assert_eq!(ta.cursor(), (2, 0));
        apply_motion(&mut ta, Motion::Up);
        apply_motion(&mut ta, Motion::LineEnd);
        assert_eq!(ta.cursor(), (1, 3));
        apply_motion(&mut ta, Motion::DocumentStart);
        assert_eq!(ta.cursor(), (0, 0));
    }

    #[test]
    fn test_character_motions() {
        let mut ta = TextArea::from_text("ab\ncd");
        apply_motion(&mut ta, Motion::Right);
        apply_motion(&mut ta, Motion::Down);
        assert_eq!(ta.cursor(), (1, 1));
        apply_motion(&mut ta, Motion::Left);
        apply_motion(&mut ta, Motion::WordBackward);
        assert_eq!(ta.cursor(), (0, 0));
    }
}
