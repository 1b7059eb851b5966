//! Message template rendering.

use glowlog_template::{Node, PropertyToken};

use crate::event::{LogEvent, PropertyValue, Scalar};
use crate::format::{DisplayValueFormatter, JsonValueFormatter, ThemedWriter, ValueFormatter};
use crate::theme::{Theme, ThemeClass};

/// The pair of value formatters a renderer chooses between.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Formatters {
    display: DisplayValueFormatter,
    json: JsonValueFormatter,
}

impl Formatters {
    pub(crate) fn new(skip_nulls: bool) -> Self {
        Self {
            display: DisplayValueFormatter::new(skip_nulls),
            json: JsonValueFormatter::new(skip_nulls),
        }
    }

    /// Picks the JSON formatter when `format` contains `j`.
    pub(crate) fn select(&self, format: Option<&str>) -> &dyn ValueFormatter {
        if has_flag(format, 'j') {
            &self.json
        } else {
            &self.display
        }
    }
}

pub(crate) fn has_flag(format: Option<&str>, flag: char) -> bool {
    format.is_some_and(|f| f.contains(flag))
}

/// Writes an event's message.
///
/// `format` is the format of the `{Message}` token: `l` writes top-level
/// strings without quotes and `j` renders property values as JSON. Message
/// text is written in the `Text` class; tokens whose property is missing are
/// written as they appear in the template, in the `Invalid` class.
pub(crate) fn render_message(
    event: &LogEvent,
    format: Option<&str>,
    formatters: &Formatters,
    out: &mut ThemedWriter<'_>,
) {
    let literal = has_flag(format, 'l');
    let formatter = formatters.select(format);

    for node in event.message_template().nodes() {
        match node {
            Node::Text(text) => out.write_styled(ThemeClass::Text, text),
            Node::Property(token) => match event.property(token.name()) {
                Some(value) => {
                    out.aligned(token.alignment(), |out| {
                        render_value(value, token, literal, formatter, out)
                    });
                }
                None => out.write_styled(ThemeClass::Invalid, token.raw()),
            },
        }
    }
}

fn render_value(
    value: &PropertyValue,
    token: &PropertyToken,
    literal: bool,
    formatter: &dyn ValueFormatter,
    out: &mut ThemedWriter<'_>,
) {
    match value {
        PropertyValue::Scalar(Scalar::Str(s)) if literal => out.write_styled(ThemeClass::String, s),
        _ => formatter.format(value, token.format(), out),
    }
}

impl LogEvent {
    /// Renders the message with property values substituted, without any
    /// theme.
    ///
    /// ```rust
    /// use glowlog::{Level, LogEvent};
    ///
    /// let event = LogEvent::new(Level::Information, "User {Name} logged in from {Ip}")
    ///     .with_property("Name", "ada");
    /// assert_eq!(event.render_message(), r#"User "ada" logged in from {Ip}"#);
    /// ```
    pub fn render_message(&self) -> String {
        let theme = Theme::none();
        let mut buffer = String::new();
        render_message(
            self,
            None,
            &Formatters::default(),
            &mut ThemedWriter::new(&mut buffer, &theme),
        );
        buffer
    }
}
