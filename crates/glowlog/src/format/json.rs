//! JSON literal notation.

use super::display::scalar_value;
use super::number::{default_text, Number};
use super::{
    iso_naive, iso_offset, write_entries, write_separator, write_unrepresentable, ThemedWriter,
    ValueFormatter,
};
use crate::event::{PropertyValue, Scalar, Structure};
use crate::theme::ThemeClass;

/// Writes values as JSON literals.
///
/// ```rust
/// use glowlog::{JsonValueFormatter, PropertyValue, Theme, ThemedWriter, ValueFormatter};
///
/// let value = PropertyValue::dictionary([("Name", PropertyValue::from("Ada")), ("Age", PropertyValue::null())]);
/// let theme = Theme::none();
/// let mut out = String::new();
/// JsonValueFormatter::new(true).format(&value, None, &mut ThemedWriter::new(&mut out, &theme));
/// assert_eq!(out, r#"{"Name": "Ada"}"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonValueFormatter {
    skip_nulls: bool,
}

impl JsonValueFormatter {
    pub fn new(skip_nulls: bool) -> Self {
        Self { skip_nulls }
    }

    fn value(&self, value: &PropertyValue, out: &mut ThemedWriter<'_>) {
        match value {
            PropertyValue::Scalar(scalar) => self.scalar(scalar, out),
            PropertyValue::Sequence(items) => {
                out.write_styled(ThemeClass::Punctuation, "[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write_separator(out);
                    }
                    self.value(item, out);
                }
                out.write_styled(ThemeClass::Punctuation, "]");
            }
            PropertyValue::Structure(structure) => self.structure(structure, out),
            PropertyValue::Dictionary(entries) => {
                out.write_styled(ThemeClass::Punctuation, "{");
                write_entries(
                    out,
                    entries.iter().map(|(k, v)| (k, v)),
                    self.skip_nulls,
                    |out, key, value| {
                        self.key(key, out);
                        write_colon(out);
                        self.value(value, out);
                    },
                );
                out.write_styled(ThemeClass::Punctuation, "}");
            }
            PropertyValue::Unrepresentable => write_unrepresentable(out),
        }
    }

    fn structure(&self, structure: &Structure, out: &mut ThemedWriter<'_>) {
        if let Some(tag) = structure.type_tag() {
            out.write_styled(ThemeClass::Name, tag);
            out.write(" ");
        }
        out.write_styled(ThemeClass::Punctuation, "{");
        write_entries(
            out,
            structure.fields().iter().map(|(n, v)| (n, v)),
            self.skip_nulls,
            |out, name, value| {
                out.write_styled(ThemeClass::Name, &quote(name));
                write_colon(out);
                self.value(value, out);
            },
        );
        out.write_styled(ThemeClass::Punctuation, "}");
    }

    /// Dictionary keys are always written as JSON strings.
    fn key(&self, key: &PropertyValue, out: &mut ThemedWriter<'_>) {
        match key {
            PropertyValue::Scalar(Scalar::Str(s)) => out.write_styled(ThemeClass::String, &quote(s)),
            PropertyValue::Scalar(scalar) => {
                out.write_styled(ThemeClass::String, &quote(&key_text(scalar)))
            }
            other => self.value(other, out),
        }
    }

    fn scalar(&self, scalar: &Scalar, out: &mut ThemedWriter<'_>) {
        match scalar {
            Scalar::Null => out.write_styled(ThemeClass::Null, "null"),
            Scalar::Bool(b) => out.write_styled(ThemeClass::Boolean, if *b { "true" } else { "false" }),
            Scalar::I64(n) => out.write_styled(ThemeClass::Number, &n.to_string()),
            Scalar::U64(n) => out.write_styled(ThemeClass::Number, &n.to_string()),
            Scalar::F64(f) => {
                let number = Number::Float(*f);
                let text = default_text(number);
                if number.is_non_finite() {
                    out.write_styled(ThemeClass::Number, &quote(&text));
                } else {
                    out.write_styled(ThemeClass::Number, &text);
                }
            }
            Scalar::Char(c) => out.write_styled(ThemeClass::String, &quote(&c.to_string())),
            Scalar::Str(s) => out.write_styled(ThemeClass::String, &quote(s)),
            Scalar::DateTime(dt) => out.write_styled(ThemeClass::String, &quote(&iso_naive(dt))),
            Scalar::DateTimeOffset(dt) => {
                out.write_styled(ThemeClass::String, &quote(&iso_offset(dt)))
            }
            Scalar::Other(text) => out.write_styled(ThemeClass::Scalar, &quote(text)),
        }
    }
}

impl ValueFormatter for JsonValueFormatter {
    /// A top-level non-string scalar is written in display notation so that
    /// its format specifier still applies. Strings and everything nested are
    /// JSON.
    fn format(&self, value: &PropertyValue, format: Option<&str>, out: &mut ThemedWriter<'_>) {
        match value {
            PropertyValue::Scalar(Scalar::Str(s)) => out.write_styled(ThemeClass::String, &quote(s)),
            PropertyValue::Scalar(scalar) => scalar_value(scalar, format, out),
            _ => self.value(value, out),
        }
    }
}

fn write_colon(out: &mut ThemedWriter<'_>) {
    out.write_styled(ThemeClass::Punctuation, ":");
    out.write(" ");
}

/// Unquoted text of a non-string scalar used as a key.
fn key_text(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Null => "null".to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::I64(n) => n.to_string(),
        Scalar::U64(n) => n.to_string(),
        Scalar::F64(f) => default_text(Number::Float(*f)),
        Scalar::Char(c) => c.to_string(),
        Scalar::Str(s) => s.clone(),
        Scalar::DateTime(dt) => iso_naive(dt),
        Scalar::DateTimeOffset(dt) => iso_offset(dt),
        Scalar::Other(text) => text.clone(),
    }
}

/// JSON-escapes and quotes a string.
pub(crate) fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}
