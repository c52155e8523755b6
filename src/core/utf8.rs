//! Grapheme helpers
//!
//! Cursor columns are counted in extended grapheme clusters, so an emoji with
//! modifiers or a letter with a combining accent is a single cursor step.

use unicode_segmentation::UnicodeSegmentation;

/// Split a line into its grapheme clusters
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Count grapheme clusters in a string
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte index of the nth grapheme cluster, `None` when `n` is past the end
pub fn grapheme_byte_index(text: &str, n: usize) -> Option<usize> {
    text.grapheme_indices(true).nth(n).map(|(idx, _)| idx)
}

/// Byte index of the nth grapheme cluster, clamped to the end of the text
pub fn grapheme_byte_offset(text: &str, n: usize) -> usize {
    grapheme_byte_index(text, n).unwrap_or(text.len())
}

/// True when every char of the grapheme is whitespace
pub fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

/// Display width of a grapheme cluster in terminal cells
pub fn grapheme_width(g: &str) -> usize {
    g.chars()
        .map(|c| unicode_width::UnicodeWidthChar::width(c).unwrap_or(0))
        .sum()
}

/// Display width of the first `grapheme_idx` graphemes, expanding tabs
pub fn visual_width_up_to(text: &str, grapheme_idx: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut visual_x = 0;
    for grapheme in text.graphemes(true).take(grapheme_idx) {
        if grapheme == "\t" {
            visual_x = (visual_x / tab_width + 1) * tab_width;
        } else {
            visual_x += grapheme_width(grapheme);
        }
    }
    visual_x
}

/// Expand tabs to spaces for display
pub fn expand_tabs(text: &str, tab_width: usize) -> String {
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(text.len());
    let mut visual_x = 0;
    for grapheme in text.graphemes(true) {
        if grapheme == "\t" {
            let next_stop = (visual_x / tab_width + 1) * tab_width;
            out.extend(std::iter::repeat_n(' ', next_stop - visual_x));
            visual_x = next_stop;
        } else {
            out.push_str(grapheme);
            visual_x += grapheme_width(grapheme);
        }
    }
    out
}
