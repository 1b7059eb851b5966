//! Node and token types produced by the parser.

use std::fmt;

/// A single compiled element of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, with `{{`/`}}` escapes already resolved.
    Text(String),
    /// A `{...}` placeholder.
    Property(PropertyToken),
}

/// Capture hint written before a property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destructure {
    /// `@` - capture the value's structure.
    Structure,
    /// `$` - capture the value's display text.
    Stringify,
}

/// Which side of the value receives the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left-justify (pad on the right). Written as a negative width.
    Left,
    /// Right-justify (pad on the left). Written as a positive width.
    Right,
}

/// Spaces to insert on either side of a rendered value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
}

/// Alignment specifier of a token, e.g. `,10` or `,-5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    direction: Direction,
    width: usize,
}

impl Alignment {
    pub fn new(direction: Direction, width: usize) -> Self {
        Self { direction, width }
    }

    /// Parses the text after the `,` separator.
    ///
    /// Returns `None` for empty, non-numeric, or zero widths.
    pub(crate) fn parse(spec: &str) -> Option<Self> {
        let (direction, digits) = match spec.strip_prefix('-') {
            Some(rest) => (Direction::Left, rest),
            None => (Direction::Right, spec),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let width: usize = digits.parse().ok()?;
        if width == 0 {
            return None;
        }
        Some(Self { direction, width })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Computes the padding for a value occupying `visible_width` columns.
    ///
    /// Values already at least as wide as the alignment are never truncated.
    pub fn padding_for(&self, visible_width: usize) -> Padding {
        let fill = self.width.saturating_sub(visible_width);
        match self.direction {
            Direction::Left => Padding {
                left: 0,
                right: fill,
            },
            Direction::Right => Padding {
                left: fill,
                right: 0,
            },
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Left => write!(f, "-{}", self.width),
            Direction::Right => write!(f, "{}", self.width),
        }
    }
}

/// A parsed `{...}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyToken {
    name: String,
    hint: Option<Destructure>,
    alignment: Option<Alignment>,
    format: Option<String>,
    position: Option<usize>,
    raw: String,
}

impl PropertyToken {
    pub(crate) fn new(
        name: String,
        hint: Option<Destructure>,
        alignment: Option<Alignment>,
        format: Option<String>,
        raw: String,
    ) -> Self {
        let position = if name.bytes().all(|b| b.is_ascii_digit()) {
            name.parse().ok()
        } else {
            None
        };
        Self {
            name,
            hint,
            alignment,
            format,
            position,
            raw,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hint(&self) -> Option<Destructure> {
        self.hint
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Index of a positional token such as `{0}`.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn is_positional(&self) -> bool {
        self.position.is_some()
    }

    /// The token exactly as written, braces included.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for PropertyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_parses_sign_as_direction() {
        let right = Alignment::parse("10").unwrap();
        assert_eq!(right.direction(), Direction::Right);
        assert_eq!(right.width(), 10);

        let left = Alignment::parse("-4").unwrap();
        assert_eq!(left.direction(), Direction::Left);
        assert_eq!(left.width(), 4);
    }

    #[test]
    fn alignment_rejects_malformed_specs() {
        assert_eq!(Alignment::parse(""), None);
        assert_eq!(Alignment::parse("-"), None);
        assert_eq!(Alignment::parse("0"), None);
        assert_eq!(Alignment::parse("+3"), None);
        assert_eq!(Alignment::parse("1a"), None);
    }

    #[test]
    fn right_alignment_pads_leading() {
        let padding = Alignment::new(Direction::Right, 10).padding_for(3);
        assert_eq!(padding, Padding { left: 7, right: 0 });
    }

    #[test]
    fn left_alignment_pads_trailing() {
        let padding = Alignment::new(Direction::Left, 5).padding_for(2);
        assert_eq!(padding, Padding { left: 0, right: 3 });
    }

    #[test]
    fn wide_values_are_not_padded() {
        let padding = Alignment::new(Direction::Right, 3).padding_for(8);
        assert_eq!(padding, Padding::default());
    }

    #[test]
    fn positional_tokens_expose_index() {
        let token = PropertyToken::new("12".into(), None, None, None, "{12}".into());
        assert_eq!(token.position(), Some(12));
        assert!(token.is_positional());

        let named = PropertyToken::new("User".into(), None, None, None, "{User}".into());
        assert_eq!(named.position(), None);
    }
}
