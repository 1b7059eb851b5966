//! Color values accepted in theme files.
//!
//! - Named colors: `red`, `green`, ... (8 ANSI colors, `gray`/`grey` alias white)
//! - Bright variants: `bright_red`, `bright_blue`, ...
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#ff6b35"` or `"#fff"`, mapped to the nearest palette entry

use console::Color;

use crate::util::rgb_to_ansi256;

const ANSI_NAMES: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

/// Parsed color definition from a theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ColorDef {
    Named(Color),
    Color256(u8),
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color from a YAML string or palette number.
    pub(crate) fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s),
            serde_yaml::Value::Number(n) => {
                let index = n
                    .as_u64()
                    .ok_or_else(|| format!("palette index {} is not a whole number", n))?;
                u8::try_from(index)
                    .map(ColorDef::Color256)
                    .map_err(|_| format!("palette index {} is outside 0-255", index))
            }
            other => Err(format!("expected a color name, hex string or palette index, got {:?}", other)),
        }
    }

    pub(crate) fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if let Ok(index) = s.parse::<u8>() {
            return Ok(ColorDef::Color256(index));
        }

        Self::parse_named(s)
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let component = |range: std::ops::Range<usize>, scale: u8| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .map(|v| v * scale)
                .ok_or_else(|| format!("invalid hex color '#{}'", hex))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                component(0..1, 17)?,
                component(1..2, 17)?,
                component(2..3, 17)?,
            )),
            6 => Ok(ColorDef::Rgb(
                component(0..2, 1)?,
                component(2..4, 1)?,
                component(4..6, 1)?,
            )),
            n => Err(format!("hex color '#{}' has {} digits, expected 3 or 6", hex, n)),
        }
    }

    /// Plain names map to the eight ANSI colors; `bright_` names map to
    /// palette indexes 8-15.
    fn parse_named(name: &str) -> Result<Self, String> {
        let lower = name.to_ascii_lowercase();
        let (base, bright) = match lower.strip_prefix("bright_") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        let base = match base {
            "gray" | "grey" if !bright => "white",
            other => other,
        };

        let index = ANSI_NAMES
            .iter()
            .position(|(n, _)| *n == base)
            .ok_or_else(|| format!("unknown color '{}'", name))?;
        Ok(if bright {
            ColorDef::Color256(index as u8 + 8)
        } else {
            ColorDef::Named(ANSI_NAMES[index].1)
        })
    }

    pub(crate) fn to_console_color(&self) -> Color {
        match self {
            ColorDef::Named(c) => *c,
            ColorDef::Color256(n) => Color::Color256(*n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((*r, *g, *b))),
        }
    }
}
