//! YAML theme definitions.

use console::Style;
use serde_yaml::{Mapping, Value};

use super::class::ThemeClass;
use super::color::ColorDef;
use super::theme::{Theme, ThemeStyle};
use crate::error::ThemeError;

/// Builds a theme from a parsed YAML mapping.
pub(crate) fn parse_theme(value: &Value) -> Result<Theme, ThemeError> {
    let Value::Mapping(map) = value else {
        return Err(ThemeError::InvalidEntry {
            class: "<root>".to_string(),
            message: "a theme must be a mapping of class names to styles".to_string(),
        });
    };

    let mut theme = Theme::none();
    for (key, entry) in map {
        let key = key.as_str().ok_or_else(|| ThemeError::InvalidEntry {
            class: format!("{:?}", key),
            message: "class names must be strings".to_string(),
        })?;

        if key == "name" {
            let name = entry.as_str().ok_or_else(|| ThemeError::InvalidEntry {
                class: key.to_string(),
                message: "theme name must be a string".to_string(),
            })?;
            theme = theme.with_name(name);
            continue;
        }

        let class: ThemeClass = key.parse().map_err(ThemeError::UnknownClass)?;
        theme = theme.set(class, parse_entry(class, entry)?);
    }

    Ok(theme)
}

fn parse_entry(class: ThemeClass, entry: &Value) -> Result<ThemeStyle, ThemeError> {
    match entry {
        Value::Null => Ok(ThemeStyle::default()),
        Value::String(s) => parse_shorthand(class, s).map(ThemeStyle::from),
        Value::Number(_) => {
            let color = ColorDef::parse_value(entry).map_err(|message| invalid_color(class, message))?;
            Ok(Style::new().fg(color.to_console_color()).into())
        }
        Value::Mapping(map) if map.contains_key("start") => parse_raw(class, map),
        Value::Mapping(map) => parse_attributes(class, map).map(ThemeStyle::from),
        _ => Err(ThemeError::InvalidEntry {
            class: class.to_string(),
            message: format!("unsupported style value: {:?}", entry),
        }),
    }
}

/// Parses `"cyan"`, `"bold.red.on_black"`, `"#ff8800"` or `"208.italic"`.
///
/// The first color is the foreground; `on_` colors set the background.
fn parse_shorthand(class: ThemeClass, spec: &str) -> Result<Style, ThemeError> {
    let mut style = Style::new();
    for part in spec.split('.').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some(styled) = apply_attribute(style.clone(), part, true) {
            style = styled;
        } else if let Some(bg) = part.strip_prefix("on_") {
            let color = ColorDef::parse_string(bg).map_err(|m| invalid_color(class, m))?;
            style = style.bg(color.to_console_color());
        } else {
            let color = ColorDef::parse_string(part).map_err(|m| invalid_color(class, m))?;
            style = style.fg(color.to_console_color());
        }
    }
    Ok(style)
}

fn parse_attributes(class: ThemeClass, map: &Mapping) -> Result<Style, ThemeError> {
    let mut style = Style::new();
    for (key, value) in map {
        let key = key.as_str().unwrap_or_default();
        match key {
            "fg" | "bg" => {
                let color = ColorDef::parse_value(value).map_err(|m| invalid_color(class, m))?;
                style = if key == "fg" {
                    style.fg(color.to_console_color())
                } else {
                    style.bg(color.to_console_color())
                };
            }
            _ => {
                let enabled = value.as_bool().ok_or_else(|| ThemeError::InvalidEntry {
                    class: class.to_string(),
                    message: format!("attribute '{}' expects true or false", key),
                })?;
                style = apply_attribute(style, key, enabled).ok_or_else(|| {
                    ThemeError::InvalidEntry {
                        class: class.to_string(),
                        message: format!("unknown style attribute '{}'", key),
                    }
                })?;
            }
        }
    }
    Ok(style)
}

/// Applies a text attribute. Returns `None` if `name` is not an attribute.
fn apply_attribute(style: Style, name: &str, enabled: bool) -> Option<Style> {
    let apply: fn(Style) -> Style = match name {
        "bold" => Style::bold,
        "dim" => Style::dim,
        "italic" => Style::italic,
        "underline" | "underlined" => Style::underlined,
        "blink" => Style::blink,
        "reverse" => Style::reverse,
        "hidden" => Style::hidden,
        "strikethrough" => Style::strikethrough,
        _ => return None,
    };
    Some(if enabled { apply(style) } else { style })
}

fn parse_raw(class: ThemeClass, map: &Mapping) -> Result<ThemeStyle, ThemeError> {
    let field = |name: &str| -> Result<String, ThemeError> {
        match map.get(name) {
            None => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(ThemeError::InvalidEntry {
                class: class.to_string(),
                message: format!("'{}' must be a string, got {:?}", name, other),
            }),
        }
    };
    Ok(ThemeStyle::new(field("start")?, field("end")?))
}

fn invalid_color(class: ThemeClass, message: String) -> ThemeError {
    ThemeError::InvalidColor {
        class: class.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(yaml: &str) -> Result<Theme, ThemeError> {
        Theme::from_yaml(yaml)
    }

    #[test]
    fn shorthand_color_and_attributes() {
        let t = theme("level-warning: yellow.bold").unwrap();
        let style = t.style(ThemeClass::LevelWarning);
        assert!(style.start().contains("33"));
        assert!(style.start().contains("1"));
        assert_eq!(style.end(), "\x1b[0m");
    }

    #[test]
    fn shorthand_background() {
        let t = theme("level-fatal: white.on_red").unwrap();
        assert!(t.style(ThemeClass::LevelFatal).start().contains("41"));
    }

    #[test]
    fn attribute_map() {
        let t = theme("name: { fg: 81, italic: true }").unwrap_err();
        // `name` is reserved for the theme name
        assert!(matches!(t, ThemeError::InvalidEntry { .. }));

        let t = theme("Name: { fg: 81, italic: true }").unwrap();
        let start = t.style(ThemeClass::Name).start();
        assert!(start.contains("38;5;81"));
        assert!(start.contains("3"));
    }

    #[test]
    fn raw_sequences_are_used_verbatim() {
        let t = theme("punctuation: { start: \"\\e[90m\", end: \"\\e[39m\" }").unwrap();
        let style = t.style(ThemeClass::Punctuation);
        assert_eq!(style.start(), "\x1b[90m");
        assert_eq!(style.end(), "\x1b[39m");
    }

    #[test]
    fn null_entry_is_unstyled() {
        let t = theme("text: ~").unwrap();
        assert!(t.is_none());
    }

    #[test]
    fn unknown_class_is_rejected() {
        let err = theme("sparkles: red").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownClass(ref c) if c == "sparkles"));
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = theme("text: chartreuse").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { .. }));
    }

    #[test]
    fn unknown_attribute_is_rejected() {
        let err = theme("text: { sparkle: true }").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidEntry { .. }));
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        assert!(theme("- text").is_err());
    }
}
