//! Structured value formatting.
//!
//! A [`ValueFormatter`] turns a [`PropertyValue`] into themed text on a
//! [`ThemedWriter`]. Two implementations ship with the crate:
//!
//! - [`DisplayValueFormatter`]: the default, human-oriented notation.
//!   Strings are quoted, dictionaries render as `{["key"]=value}` and
//!   structures as `Tag {Field=value}`.
//! - [`JsonValueFormatter`]: JSON literal notation, selected by the `j`
//!   format on `{Message}` and `{Properties}`. Structures keep their type tag
//!   in front of the object: `Tag {"Field": value}`.
//!
//! Both formatters can drop null entries from dictionaries and structures.
//! Neither fails: values that could not be captured are written as a
//! placeholder in the [`Invalid`](crate::ThemeClass::Invalid) class.

mod datetime;
mod display;
mod json;
mod number;
mod writer;

pub use display::DisplayValueFormatter;
pub use json::JsonValueFormatter;
pub use writer::ThemedWriter;

pub(crate) use datetime::{format_offset, iso_naive, iso_offset};

use crate::event::PropertyValue;
use crate::theme::ThemeClass;

/// Text written for [`PropertyValue::Unrepresentable`].
pub const UNREPRESENTABLE: &str = "<unrepresentable>";

/// Formats property values into themed text.
pub trait ValueFormatter: Send + Sync {
    /// Writes `value` using the token's format specifier, if any.
    fn format(&self, value: &PropertyValue, format: Option<&str>, out: &mut ThemedWriter<'_>);
}

/// Writes the entries of a dictionary or structure, skipping nulls when
/// asked, with `, ` between the survivors.
pub(crate) fn write_entries<'v, T, I, F>(
    out: &mut ThemedWriter<'_>,
    entries: I,
    skip_nulls: bool,
    mut write_entry: F,
) where
    T: 'v,
    I: IntoIterator<Item = (&'v T, &'v PropertyValue)>,
    F: FnMut(&mut ThemedWriter<'_>, &'v T, &'v PropertyValue),
{
    let mut first = true;
    for (key, value) in entries {
        if skip_nulls && value.is_null() {
            continue;
        }
        if !first {
            write_separator(out);
        }
        first = false;
        write_entry(out, key, value);
    }
}

/// Writes the `, ` separator between elements.
pub(crate) fn write_separator(out: &mut ThemedWriter<'_>) {
    out.write_styled(ThemeClass::Punctuation, ",");
    out.write(" ");
}

/// Writes the placeholder for a value that could not be captured.
pub(crate) fn write_unrepresentable(out: &mut ThemedWriter<'_>) {
    out.write_styled(ThemeClass::Invalid, UNREPRESENTABLE);
}
