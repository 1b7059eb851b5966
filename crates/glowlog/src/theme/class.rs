//! Semantic token classes that a theme assigns styles to.

use std::fmt;
use std::str::FromStr;

use crate::event::Level;

/// The closed set of semantic classes rendered text can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeClass {
    /// Message text.
    Text,
    /// Timestamps and other de-emphasised text.
    SecondaryText,
    /// Exception text.
    TertiaryText,
    /// Placeholders that could not be resolved.
    Invalid,
    Null,
    /// Structure type tags and field names.
    Name,
    String,
    Number,
    Boolean,
    /// Scalars that are not strings, numbers or booleans.
    Scalar,
    LevelVerbose,
    LevelDebug,
    LevelInformation,
    LevelWarning,
    LevelError,
    LevelFatal,
    /// Brackets, braces, separators.
    Punctuation,
}

impl ThemeClass {
    pub const COUNT: usize = 17;

    pub const ALL: [ThemeClass; Self::COUNT] = [
        ThemeClass::Text,
        ThemeClass::SecondaryText,
        ThemeClass::TertiaryText,
        ThemeClass::Invalid,
        ThemeClass::Null,
        ThemeClass::Name,
        ThemeClass::String,
        ThemeClass::Number,
        ThemeClass::Boolean,
        ThemeClass::Scalar,
        ThemeClass::LevelVerbose,
        ThemeClass::LevelDebug,
        ThemeClass::LevelInformation,
        ThemeClass::LevelWarning,
        ThemeClass::LevelError,
        ThemeClass::LevelFatal,
        ThemeClass::Punctuation,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The class used to render a level.
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Verbose => ThemeClass::LevelVerbose,
            Level::Debug => ThemeClass::LevelDebug,
            Level::Information => ThemeClass::LevelInformation,
            Level::Warning => ThemeClass::LevelWarning,
            Level::Error => ThemeClass::LevelError,
            Level::Fatal => ThemeClass::LevelFatal,
        }
    }

    /// Kebab-case key used in theme files.
    pub fn key(&self) -> &'static str {
        match self {
            ThemeClass::Text => "text",
            ThemeClass::SecondaryText => "secondary-text",
            ThemeClass::TertiaryText => "tertiary-text",
            ThemeClass::Invalid => "invalid",
            ThemeClass::Null => "null",
            ThemeClass::Name => "name",
            ThemeClass::String => "string",
            ThemeClass::Number => "number",
            ThemeClass::Boolean => "boolean",
            ThemeClass::Scalar => "scalar",
            ThemeClass::LevelVerbose => "level-verbose",
            ThemeClass::LevelDebug => "level-debug",
            ThemeClass::LevelInformation => "level-information",
            ThemeClass::LevelWarning => "level-warning",
            ThemeClass::LevelError => "level-error",
            ThemeClass::LevelFatal => "level-fatal",
            ThemeClass::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for ThemeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeClass {
    type Err = String;

    /// Accepts `level-error`, `level_error` and `LevelError` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        ThemeClass::ALL
            .into_iter()
            .find(|class| class.key().replace('-', "") == normalized)
            .ok_or_else(|| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, class) in ThemeClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn parse_accepts_spellings() {
        assert_eq!("level-error".parse(), Ok(ThemeClass::LevelError));
        assert_eq!("level_error".parse(), Ok(ThemeClass::LevelError));
        assert_eq!("LevelError".parse(), Ok(ThemeClass::LevelError));
        assert_eq!("SecondaryText".parse(), Ok(ThemeClass::SecondaryText));
        assert!("sparkle".parse::<ThemeClass>().is_err());
    }

    #[test]
    fn level_classes() {
        assert_eq!(ThemeClass::for_level(Level::Fatal), ThemeClass::LevelFatal);
        assert_eq!(ThemeClass::for_level(Level::Verbose), ThemeClass::LevelVerbose);
    }
}
