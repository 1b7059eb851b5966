//! The [`LogEvent`] consumed by the renderer.

use chrono::{DateTime, FixedOffset, Local};
use glowlog_template::Template;

use super::level::Level;
use super::value::PropertyValue;

/// A single structured log event.
///
/// Events are built by the caller and only read by the renderer.
///
/// ```rust
/// use glowlog::{Level, LogEvent};
///
/// let event = LogEvent::new(Level::Warning, "Disk {Drive} is {Percent}% full")
///     .with_property("Drive", "C:")
///     .with_property("Percent", 93);
///
/// assert_eq!(event.properties().count(), 2);
/// assert!(event.property("Drive").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct LogEvent {
    timestamp: DateTime<FixedOffset>,
    level: Level,
    message_template: Template,
    properties: Vec<(String, PropertyValue)>,
    exception: Option<String>,
}

impl LogEvent {
    /// Creates an event stamped with the current local time.
    pub fn new(level: Level, message_template: &str) -> Self {
        Self::with_template(level, Template::parse(message_template))
    }

    /// Creates an event from an already compiled message template.
    pub fn with_template(level: Level, message_template: Template) -> Self {
        Self {
            timestamp: Local::now().fixed_offset(),
            level,
            message_template,
            properties: Vec::new(),
            exception: None,
        }
    }

    /// Sets the event timestamp.
    pub fn at(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Binds a property. An existing property with the same name is replaced
    /// in place, keeping its original position.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    /// Attaches exception text (message and stack trace).
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    pub fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message_template(&self) -> &Template {
        &self.message_template
    }

    /// Iterates over bound properties in binding order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn exception(&self) -> Option<&str> {
        self.exception.as_deref()
    }
}
