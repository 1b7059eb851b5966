//! Theme struct mapping token classes to escape sequences.
//!
//! A theme assigns every [`ThemeClass`] a [`ThemeStyle`]: the escape
//! sequence written before a fragment and the one written after it. A class
//! with an empty start sequence is rendered without any escapes.
//!
//! # Construction
//!
//! Programmatic, from `console` styles or raw sequences:
//!
//! ```rust
//! use glowlog::{Theme, ThemeClass, ThemeStyle};
//! use console::Style;
//!
//! let theme = Theme::named("alert")
//!     .set(ThemeClass::LevelError, Style::new().red().bold())
//!     .set(ThemeClass::Punctuation, ThemeStyle::ansi("\x1b[90m"));
//!
//! assert_eq!(theme.wrap(ThemeClass::Punctuation, "{"), "\x1b[90m{\x1b[0m");
//! assert_eq!(theme.wrap(ThemeClass::Text, "plain"), "plain");
//! ```
//!
//! From YAML, see [`Theme::from_yaml`].

use std::path::Path;

use console::Style;

use super::class::ThemeClass;
use super::definition::parse_theme;
use crate::error::ThemeError;

/// Reset sequence closing every ANSI style run.
pub const ANSI_RESET: &str = "\x1b[0m";

/// The start/end escape pair for one token class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStyle {
    start: String,
    end: String,
}

impl ThemeStyle {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// A style closed by the standard ANSI reset.
    pub fn ansi(start: impl Into<String>) -> Self {
        Self::new(start, ANSI_RESET)
    }

    /// Converts a `console` style into its escape pair.
    pub fn from_console(style: &Style) -> Self {
        const MARK: &str = "\u{0}";
        let rendered = style
            .clone()
            .force_styling(true)
            .apply_to(MARK)
            .to_string();
        match rendered.split_once(MARK) {
            Some((start, end)) if !start.is_empty() => Self::new(start, end),
            _ => Self::default(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Returns true if the style writes no escapes.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }
}

impl From<Style> for ThemeStyle {
    fn from(style: Style) -> Self {
        ThemeStyle::from_console(&style)
    }
}

/// An immutable mapping from every [`ThemeClass`] to a [`ThemeStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: Option<String>,
    styles: [ThemeStyle; ThemeClass::COUNT],
}

impl Theme {
    /// The no-op theme: every class is unstyled.
    pub fn none() -> Self {
        Self {
            name: None,
            styles: std::array::from_fn(|_| ThemeStyle::default()),
        }
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::none().with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the style of one class, returning `self` for chaining.
    pub fn set(mut self, class: ThemeClass, style: impl Into<ThemeStyle>) -> Self {
        self.styles[class.index()] = style.into();
        self
    }

    pub fn style(&self, class: ThemeClass) -> &ThemeStyle {
        &self.styles[class.index()]
    }

    /// Returns true if no class writes escapes.
    pub fn is_none(&self) -> bool {
        self.styles.iter().all(ThemeStyle::is_empty)
    }

    /// Wraps `text` in the style of `class`.
    pub fn wrap(&self, class: ThemeClass, text: &str) -> String {
        let style = self.style(class);
        if style.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(style.start.len() + text.len() + style.end.len());
        out.push_str(&style.start);
        out.push_str(text);
        out.push_str(&style.end);
        out
    }

    /// Creates a theme from YAML.
    ///
    /// Keys are class names (`level-error`, `level_error` or `LevelError`).
    /// Values are either a dotted `console` style string, a map of style
    /// attributes, or a raw `start`/`end` pair. Classes that are not listed
    /// stay unstyled.
    ///
    /// ```rust
    /// use glowlog::{Theme, ThemeClass};
    ///
    /// let theme = Theme::from_yaml(r##"
    /// name: harbor
    /// level-error: { fg: white, bg: "#d70000", bold: true }
    /// string: cyan
    /// number: "magenta.bold"
    /// punctuation: { start: "\e[90m", end: "\e[0m" }
    /// "##).unwrap();
    ///
    /// assert_eq!(theme.name(), Some("harbor"));
    /// assert!(!theme.style(ThemeClass::String).is_empty());
    /// assert!(theme.style(ThemeClass::Text).is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] for malformed YAML, unknown class names, or
    /// invalid colors.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        parse_theme(&value)
    }

    /// Creates a theme from an already parsed YAML mapping.
    pub(crate) fn from_yaml_value(value: &serde_yaml::Value) -> Result<Self, ThemeError> {
        parse_theme(value)
    }

    /// Loads a theme from a YAML file. The file stem becomes the name unless
    /// the file sets one.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let theme = Self::from_yaml(&content)?;
        if theme.name.is_some() {
            return Ok(theme);
        }
        Ok(match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => theme.with_name(stem),
            None => theme,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_theme_wraps_to_identity() {
        let theme = Theme::none();
        for class in ThemeClass::ALL {
            assert_eq!(theme.style(class).start(), "");
            assert_eq!(theme.style(class).end(), "");
            assert_eq!(theme.wrap(class, "text"), "text");
        }
        assert!(theme.is_none());
    }

    #[test]
    fn set_changes_only_one_class() {
        let theme = Theme::none().set(ThemeClass::Number, ThemeStyle::ansi("\x1b[35m"));
        assert_eq!(theme.wrap(ThemeClass::Number, "42"), "\x1b[35m42\x1b[0m");
        assert_eq!(theme.wrap(ThemeClass::String, "x"), "x");
        assert!(!theme.is_none());
    }

    #[test]
    fn console_style_splits_into_pair() {
        let style = ThemeStyle::from_console(&Style::new().red());
        assert_eq!(style.start(), "\x1b[31m");
        assert_eq!(style.end(), ANSI_RESET);
    }

    #[test]
    fn empty_console_style_is_unstyled() {
        assert!(ThemeStyle::from_console(&Style::new()).is_empty());
    }

    #[test]
    fn from_file_uses_stem_as_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("midnight.yaml");
        std::fs::write(&path, "text: white\n").unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name(), Some("midnight"));
        assert!(!theme.style(ThemeClass::Text).is_empty());
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let err = Theme::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
