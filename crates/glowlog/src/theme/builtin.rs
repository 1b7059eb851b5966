//! Built-in theme catalog.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::class::ThemeClass;
use super::theme::{Theme, ThemeStyle};

/// Builds a theme from `(class, start sequence)` pairs closed by ANSI reset.
fn ansi_theme(name: &str, entries: &[(ThemeClass, &str)]) -> Theme {
    entries
        .iter()
        .fold(Theme::named(name), |theme, (class, start)| {
            theme.set(*class, ThemeStyle::ansi(*start))
        })
}

static LITERATE: Lazy<Theme> = Lazy::new(|| {
    use ThemeClass::*;
    ansi_theme(
        "literate",
        &[
            (Text, "\x1b[38;5;0015m"),
            (SecondaryText, "\x1b[38;5;0007m"),
            (TertiaryText, "\x1b[38;5;0008m"),
            (Invalid, "\x1b[38;5;0011m"),
            (Null, "\x1b[38;5;0027m"),
            (Name, "\x1b[38;5;0007m"),
            (String, "\x1b[38;5;0045m"),
            (Number, "\x1b[38;5;0200m"),
            (Boolean, "\x1b[38;5;0027m"),
            (Scalar, "\x1b[38;5;0085m"),
            (LevelVerbose, "\x1b[38;5;0007m"),
            (LevelDebug, "\x1b[38;5;0007m"),
            (LevelInformation, "\x1b[38;5;0015m"),
            (LevelWarning, "\x1b[38;5;0011m"),
            (LevelError, "\x1b[38;5;0015m\x1b[48;5;0196m"),
            (LevelFatal, "\x1b[38;5;0015m\x1b[48;5;0196m"),
        ],
    )
});

static GRAYSCALE: Lazy<Theme> = Lazy::new(|| {
    use ThemeClass::*;
    ansi_theme(
        "grayscale",
        &[
            (Text, "\x1b[37;1m"),
            (SecondaryText, "\x1b[37m"),
            (TertiaryText, "\x1b[30;1m"),
            (Invalid, "\x1b[37;1m\x1b[47m"),
            (Null, "\x1b[1m\x1b[37;1m"),
            (Name, "\x1b[37m"),
            (String, "\x1b[1m\x1b[37;1m"),
            (Number, "\x1b[1m\x1b[37;1m"),
            (Boolean, "\x1b[1m\x1b[37;1m"),
            (Scalar, "\x1b[1m\x1b[37;1m"),
            (LevelVerbose, "\x1b[30;1m"),
            (LevelDebug, "\x1b[30;1m"),
            (LevelInformation, "\x1b[37;1m"),
            (LevelWarning, "\x1b[37;1m\x1b[47m"),
            (LevelError, "\x1b[30m\x1b[47m"),
            (LevelFatal, "\x1b[30m\x1b[47m"),
        ],
    )
});

static CODE: Lazy<Theme> = Lazy::new(|| {
    use ThemeClass::*;
    ansi_theme(
        "code",
        &[
            (Text, "\x1b[38;5;0253m"),
            (SecondaryText, "\x1b[38;5;0246m"),
            (TertiaryText, "\x1b[38;5;0242m"),
            (Invalid, "\x1b[33;1m"),
            (Null, "\x1b[38;5;0038m"),
            (Name, "\x1b[38;5;0081m"),
            (String, "\x1b[38;5;0216m"),
            (Number, "\x1b[38;5;151m"),
            (Boolean, "\x1b[38;5;0038m"),
            (Scalar, "\x1b[38;5;0079m"),
            (LevelVerbose, "\x1b[37m"),
            (LevelDebug, "\x1b[37m"),
            (LevelInformation, "\x1b[37;1m"),
            (LevelWarning, "\x1b[38;5;0229m"),
            (LevelError, "\x1b[38;5;0197m\x1b[48;5;0238m"),
            (LevelFatal, "\x1b[38;5;0197m\x1b[48;5;0238m"),
        ],
    )
});

static SIXTEEN: Lazy<Theme> = Lazy::new(|| {
    use ThemeClass::*;
    ansi_theme(
        "sixteen",
        &[
            (Invalid, "\x1b[33m"),
            (Null, "\x1b[34m"),
            (String, "\x1b[36m"),
            (Number, "\x1b[35m"),
            (Boolean, "\x1b[34m"),
            (Scalar, "\x1b[32m"),
            (LevelVerbose, "\x1b[30;1m"),
            (LevelDebug, "\x1b[1m"),
            (LevelInformation, "\x1b[36;1m"),
            (LevelWarning, "\x1b[33;1m"),
            (LevelError, "\x1b[31;1m"),
            (LevelFatal, "\x1b[31;1m"),
        ],
    )
});

static NONE: Lazy<Theme> = Lazy::new(|| Theme::none().with_name("none"));

/// Names of the themes shipped with the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinTheme {
    /// No escapes at all.
    None,
    /// 256-color theme with white text and colored values.
    #[default]
    Literate,
    /// Bold and dim shades only.
    Grayscale,
    /// 256-color theme in the style of a code editor.
    Code,
    /// Basic 16-color palette for limited terminals.
    Sixteen,
}

impl BuiltinTheme {
    pub const ALL: [BuiltinTheme; 5] = [
        BuiltinTheme::None,
        BuiltinTheme::Literate,
        BuiltinTheme::Grayscale,
        BuiltinTheme::Code,
        BuiltinTheme::Sixteen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinTheme::None => "none",
            BuiltinTheme::Literate => "literate",
            BuiltinTheme::Grayscale => "grayscale",
            BuiltinTheme::Code => "code",
            BuiltinTheme::Sixteen => "sixteen",
        }
    }

    /// Returns the shared theme value.
    pub fn theme(&self) -> &'static Theme {
        match self {
            BuiltinTheme::None => &NONE,
            BuiltinTheme::Literate => &LITERATE,
            BuiltinTheme::Grayscale => &GRAYSCALE,
            BuiltinTheme::Code => &CODE,
            BuiltinTheme::Sixteen => &SIXTEEN,
        }
    }
}

impl fmt::Display for BuiltinTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        BuiltinTheme::ALL
            .into_iter()
            .find(|t| t.name() == lower || (lower == "greyscale" && *t == BuiltinTheme::Grayscale))
            .ok_or_else(|| s.to_string())
    }
}

impl Theme {
    pub fn literate() -> Self {
        LITERATE.clone()
    }

    pub fn grayscale() -> Self {
        GRAYSCALE.clone()
    }

    pub fn code() -> Self {
        CODE.clone()
    }

    pub fn sixteen() -> Self {
        SIXTEEN.clone()
    }
}

impl From<BuiltinTheme> for Theme {
    fn from(builtin: BuiltinTheme) -> Self {
        builtin.theme().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_none_is_unstyled() {
        for builtin in BuiltinTheme::ALL {
            assert_eq!(
                builtin.theme().is_none(),
                builtin == BuiltinTheme::None,
                "{}",
                builtin
            );
        }
    }

    #[test]
    fn styled_classes_close_with_reset() {
        for builtin in BuiltinTheme::ALL {
            for class in ThemeClass::ALL {
                let style = builtin.theme().style(class);
                if !style.is_empty() {
                    assert_eq!(style.end(), "\x1b[0m");
                }
            }
        }
    }

    #[test]
    fn every_level_is_styled_in_literate() {
        let theme = Theme::literate();
        for level in crate::Level::ALL {
            assert!(!theme.style(ThemeClass::for_level(level)).is_empty());
        }
    }

    #[test]
    fn names_round_trip() {
        for builtin in BuiltinTheme::ALL {
            assert_eq!(builtin.name().parse::<BuiltinTheme>(), Ok(builtin));
            assert_eq!(builtin.theme().name(), Some(builtin.name()));
        }
        assert_eq!("Greyscale".parse(), Ok(BuiltinTheme::Grayscale));
        assert!("neon".parse::<BuiltinTheme>().is_err());
    }
}
