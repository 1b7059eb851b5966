//! Utility functions for text measurement and color conversion.

use unicode_width::UnicodeWidthStr;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use glowlog::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    // Grays use the 24-step ramp at 232..=255, with the cube corners at the ends.
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            level => 232 + ((u16::from(level) - 8) * 24 / 247) as u8,
        };
    }
    let cube = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}

/// Returns the display width of unstyled text in terminal columns.
///
/// CJK and other wide characters count as two columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Appends `count` spaces.
pub(crate) fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grays_use_grayscale_ramp() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((128, 128, 128)), 243);
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn push_spaces_appends() {
        let mut s = String::from("x");
        push_spaces(&mut s, 3);
        assert_eq!(s, "x   ");
    }
}
