use unicode_width::UnicodeWidthStr;

/// Display width of a label once shortcut markers are removed.
///
/// A single `&` marks the next character as the keyboard shortcut and is not
/// drawn; `&&` renders as one literal `&`.
pub fn display_width(label: &str) -> usize {
    let mut visible = String::with_capacity(label.len());
    let mut chars = label.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '&' {
            if chars.peek() == Some(&'&') {
                chars.next();
                visible.push('&');
            }
            continue;
        }
        visible.push(ch);
    }
    UnicodeWidthStr::width(visible.as_str())
}

/// Pixel width of a label drawn with cells `char_px` pixels wide.
pub fn label_width(label: &str, char_px: i32) -> i32 {
    i32::try_from(display_width(label))
        .unwrap_or(i32::MAX)
        .saturating_mul(char_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_label_counts_cells() {
        assert_eq!(display_width("Datetime:"), 9);
        assert_eq!(label_width("Datetime:", 8), 72);
    }

    #[test]
    fn shortcut_markers_are_hidden() {
        assert_eq!(display_width("&Quit"), 4);
        assert_eq!(display_width("Save && Exit"), 11);
    }

    #[test]
    fn wide_glyphs_take_two_cells() {
        assert_eq!(display_width("日本"), 4);
    }
}
