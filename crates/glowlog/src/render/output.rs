//! The output template renderer.

use glowlog_template::{Node, PropertyToken, Template};

use super::message::{has_flag, render_message, Formatters};
use super::TextFormatter;
use crate::event::{LogEvent, PropertyValue, Scalar, Structure};
use crate::format::{format_offset, ThemedWriter};
use crate::theme::{Theme, ThemeClass};

/// Pattern used for `{Timestamp}` when the token has no format.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.fff zzz";

/// The platform line ending.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Renders events through a compiled output template.
///
/// The template, theme and formatting options are fixed at construction, so
/// one renderer can be shared by every thread that logs.
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone};
/// use glowlog::{Level, LogEvent, OutputTemplateRenderer, Template, Theme};
///
/// let renderer = OutputTemplateRenderer::new(
///     Template::parse("{Timestamp:HH:mm} [{Level,-5:u3}] {Message:lj}{NewLine}"),
///     Theme::none(),
/// )
/// .with_newline("\n");
///
/// let ts = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
/// let event = LogEvent::new(Level::Warning, "Cache {Name} is stale")
///     .at(ts)
///     .with_property("Name", "sessions");
///
/// assert_eq!(renderer.render(&event, false), "09:30 [WRN  ] Cache sessions is stale\n");
/// ```
#[derive(Debug, Clone)]
pub struct OutputTemplateRenderer {
    template: Template,
    theme: Theme,
    plain: Theme,
    newline: String,
    formatters: Formatters,
    appends_exception: bool,
}

impl OutputTemplateRenderer {
    pub fn new(template: Template, theme: Theme) -> Self {
        let appends_exception = !template.is_literal() && !template.references("Exception");
        Self {
            template,
            theme,
            plain: Theme::none(),
            newline: LINE_ENDING.to_string(),
            formatters: Formatters::default(),
            appends_exception,
        }
    }

    /// Sets the text written for `{NewLine}` and after exception lines.
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    /// Drops null-valued entries from dictionaries and structures.
    pub fn skip_null_values(mut self, skip: bool) -> Self {
        self.formatters = Formatters::new(skip);
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn newline(&self) -> &str {
        &self.newline
    }

    /// Renders one event into a new string.
    pub fn render(&self, event: &LogEvent, themed: bool) -> String {
        let mut out = String::new();
        self.format(event, &mut out, themed);
        out
    }

    fn render_token(&self, token: &PropertyToken, event: &LogEvent, out: &mut ThemedWriter<'_>) {
        let format = token.format();
        let alignment = token.alignment();
        match token.name() {
            "Timestamp" => {
                let text = format_offset(
                    event.timestamp(),
                    Some(format.unwrap_or(DEFAULT_TIMESTAMP_FORMAT)),
                );
                out.write_styled_aligned(ThemeClass::SecondaryText, &text, alignment);
            }
            "Level" => {
                let level = event.level();
                out.write_styled_aligned(ThemeClass::for_level(level), &level.moniker(format), alignment);
            }
            "Message" => out.aligned(alignment, |out| {
                render_message(event, format, &self.formatters, out)
            }),
            "NewLine" => out.write(&self.newline),
            "Exception" => self.render_exception(event, out),
            "Properties" => out.aligned(alignment, |out| self.render_properties(event, format, out)),
            name => {
                if let Some(value) = event.property(name) {
                    out.aligned(alignment, |out| self.render_property(value, format, out));
                }
            }
        }
    }

    /// Strings are written without quotes unless JSON is requested.
    fn render_property(&self, value: &PropertyValue, format: Option<&str>, out: &mut ThemedWriter<'_>) {
        match value {
            PropertyValue::Scalar(Scalar::Str(s)) if !has_flag(format, 'j') => {
                out.write_styled(ThemeClass::String, s)
            }
            _ => self.formatters.select(format).format(value, format, out),
        }
    }

    fn render_exception(&self, event: &LogEvent, out: &mut ThemedWriter<'_>) {
        let Some(exception) = event.exception() else {
            return;
        };
        for line in exception.lines() {
            out.write_styled(ThemeClass::TertiaryText, line);
            out.write(&self.newline);
        }
    }

    /// Writes the properties neither template mentions as one structure.
    fn render_properties(&self, event: &LogEvent, format: Option<&str>, out: &mut ThemedWriter<'_>) {
        let message = event.message_template();
        let remaining = event
            .properties()
            .filter(|(name, _)| !message.references(name) && !self.template.references(name))
            .fold(Structure::new(None), |structure, (name, value)| {
                structure.field(name, value.clone())
            });
        self.formatters
            .select(format)
            .format(&PropertyValue::Structure(remaining), format, out);
    }
}

impl TextFormatter for OutputTemplateRenderer {
    fn format(&self, event: &LogEvent, out: &mut String, themed: bool) {
        let theme = if themed { &self.theme } else { &self.plain };
        let mut writer = ThemedWriter::new(out, theme);

        for node in self.template.nodes() {
            match node {
                Node::Text(text) => writer.write(text),
                Node::Property(token) => self.render_token(token, event, &mut writer),
            }
        }

        if self.appends_exception {
            self.render_exception(event, &mut writer);
        }
    }

    fn uses_theme(&self) -> bool {
        !self.theme.is_none()
    }
}
