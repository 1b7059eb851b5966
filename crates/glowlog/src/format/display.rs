//! Human-oriented value notation.

use super::datetime::format_naive;
use super::number::{format_number, Number};
use super::{
    format_offset, write_entries, write_separator, write_unrepresentable, ThemedWriter,
    ValueFormatter,
};
use crate::event::{PropertyValue, Scalar, Structure};
use crate::theme::ThemeClass;

/// Writes values in display notation.
///
/// Scalars honor the token's format specifier: numeric formats such as
/// `D4`, `X` or `0.00`, date patterns such as `yyyy-MM-dd`, and `l` to write
/// a top-level string without quotes.
///
/// | Value | Output |
/// |-------|--------|
/// | string | `"text"` |
/// | sequence | `[1, 2]` |
/// | dictionary | `{["key"]=value}` |
/// | structure | `Tag {Field=value}` |
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayValueFormatter {
    skip_nulls: bool,
}

impl DisplayValueFormatter {
    pub fn new(skip_nulls: bool) -> Self {
        Self { skip_nulls }
    }

    fn value(&self, value: &PropertyValue, format: Option<&str>, out: &mut ThemedWriter<'_>) {
        match value {
            PropertyValue::Scalar(scalar) => scalar_value(scalar, format, out),
            PropertyValue::Sequence(items) => {
                out.write_styled(ThemeClass::Punctuation, "[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write_separator(out);
                    }
                    self.nested(item, out);
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
                        out.write_styled(ThemeClass::Punctuation, "[");
                        self.nested(key, out);
                        out.write_styled(ThemeClass::Punctuation, "]=");
                        self.nested(value, out);
                    },
                );
                out.write_styled(ThemeClass::Punctuation, "}");
            }
            PropertyValue::Unrepresentable => write_unrepresentable(out),
        }
    }

    /// Nested values never inherit the token's format.
    fn nested(&self, value: &PropertyValue, out: &mut ThemedWriter<'_>) {
        self.value(value, None, out);
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
                out.write_styled(ThemeClass::Name, name);
                out.write_styled(ThemeClass::Punctuation, "=");
                self.nested(value, out);
            },
        );
        out.write_styled(ThemeClass::Punctuation, "}");
    }
}

impl ValueFormatter for DisplayValueFormatter {
    fn format(&self, value: &PropertyValue, format: Option<&str>, out: &mut ThemedWriter<'_>) {
        self.value(value, format, out);
    }
}

pub(crate) fn scalar_value(scalar: &Scalar, format: Option<&str>, out: &mut ThemedWriter<'_>) {
    match scalar {
        Scalar::Null => out.write_styled(ThemeClass::Null, "null"),
        Scalar::Bool(b) => out.write_styled(ThemeClass::Boolean, if *b { "true" } else { "false" }),
        Scalar::I64(n) => number(Number::Signed(*n), format, out),
        Scalar::U64(n) => number(Number::Unsigned(*n), format, out),
        Scalar::F64(f) => number(Number::Float(*f), format, out),
        Scalar::Char(c) => out.write_styled(ThemeClass::Scalar, &format!("'{}'", c)),
        Scalar::Str(s) => {
            if format.is_some_and(|f| f.contains('l')) {
                out.write_styled(ThemeClass::String, s);
            } else {
                out.write_styled(ThemeClass::String, &quote_display(s));
            }
        }
        Scalar::DateTime(dt) => out.write_styled(ThemeClass::Scalar, &format_naive(dt, format)),
        Scalar::DateTimeOffset(dt) => {
            out.write_styled(ThemeClass::Scalar, &format_offset(dt, format))
        }
        Scalar::Other(text) => out.write_styled(ThemeClass::Scalar, text),
    }
}

fn number(number: Number, format: Option<&str>, out: &mut ThemedWriter<'_>) {
    out.write_styled(ThemeClass::Number, &format_number(number, format));
}

/// Quotes a string, escaping only embedded quotes.
fn quote_display(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    out.push_str(&s.replace('"', "\\\""));
    out.push('"');
    out
}
