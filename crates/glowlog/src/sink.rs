//! The console sink: renders events and writes them to a stream.
//!
//! Each event is rendered into its own buffer first and then written with a
//! single `write_all` under the target's lock, so concurrent callers never
//! interleave within an event.
//!
//! # Targets
//!
//! A [`ConsoleTarget`] pairs a writer with whether that writer is
//! redirected (not a terminal). [`ConsoleTarget::stdout`] and
//! [`ConsoleTarget::stderr`] resolve this once when they are created; custom
//! writers state it explicitly:
//!
//! ```rust
//! use glowlog::{BuiltinTheme, ConsoleOptions, ConsoleSink, ConsoleTarget, Level, LogEvent};
//!
//! let sink = ConsoleSink::new(
//!     &ConsoleOptions::new().theme(BuiltinTheme::Literate),
//!     ConsoleTarget::new(std::io::sink(), true),
//! );
//! sink.emit(&LogEvent::new(Level::Information, "Started")).unwrap();
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use console::Term;

use crate::error::SinkError;
use crate::event::{Level, LogEvent};
use crate::options::ConsoleOptions;
use crate::render::TextFormatter;

/// An output stream and whether it is redirected.
pub struct ConsoleTarget {
    writer: Mutex<Box<dyn Write + Send>>,
    redirected: bool,
}

impl ConsoleTarget {
    pub fn new<W: Write + Send + 'static>(writer: W, redirected: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            redirected,
        }
    }

    /// Standard output. Redirection is detected now and never again.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), !Term::stdout().is_term())
    }

    /// Standard error. Redirection is detected now and never again.
    pub fn stderr() -> Self {
        Self::new(io::stderr(), !Term::stderr().is_term())
    }

    pub fn is_redirected(&self) -> bool {
        self.redirected
    }

    /// Writes one rendered event and flushes.
    fn write_event(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(bytes)?;
        writer.flush()
    }
}

impl fmt::Debug for ConsoleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleTarget")
            .field("redirected", &self.redirected)
            .finish_non_exhaustive()
    }
}

/// Renders events with a [`TextFormatter`] and writes them to a target.
pub struct ConsoleSink {
    formatter: Box<dyn TextFormatter>,
    output: ConsoleTarget,
    error_output: Option<(Level, ConsoleTarget)>,
    apply_theme_to_redirected_output: bool,
}

impl ConsoleSink {
    /// Creates a sink writing every event to `target`.
    pub fn new(options: &ConsoleOptions, target: ConsoleTarget) -> Self {
        Self::with_formatter(options.renderer(), target)
            .apply_theme_to_redirected_output(options.apply_theme_to_redirected_output)
    }

    /// Creates a sink on standard output, sending events at or above
    /// `standard_error_from_level` to standard error.
    pub fn console(options: &ConsoleOptions) -> Self {
        let sink = Self::new(options, ConsoleTarget::stdout());
        match options.standard_error_from_level {
            Some(level) => sink.error_target(level, ConsoleTarget::stderr()),
            None => sink,
        }
    }

    /// Creates a sink with a custom formatter.
    pub fn with_formatter<F: TextFormatter + 'static>(formatter: F, target: ConsoleTarget) -> Self {
        tracing::debug!(
            redirected = target.is_redirected(),
            themed = formatter.uses_theme(),
            "console sink created"
        );
        Self {
            formatter: Box::new(formatter),
            output: target,
            error_output: None,
            apply_theme_to_redirected_output: false,
        }
    }

    /// Keeps escape sequences when the target is redirected.
    pub fn apply_theme_to_redirected_output(mut self, apply: bool) -> Self {
        self.apply_theme_to_redirected_output = apply;
        self
    }

    /// Sends events at or above `level` to `target`.
    pub fn error_target(mut self, level: Level, target: ConsoleTarget) -> Self {
        self.error_output = Some((level, target));
        self
    }

    fn target_for(&self, level: Level) -> &ConsoleTarget {
        match &self.error_output {
            Some((threshold, target)) if level >= *threshold => target,
            _ => &self.output,
        }
    }

    /// Renders and writes one event.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Write`] if the target fails. The write is not
    /// retried.
    pub fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        let target = self.target_for(event.level());
        let themed = self.formatter.uses_theme()
            && (!target.is_redirected() || self.apply_theme_to_redirected_output);

        let mut buffer = String::with_capacity(256);
        self.formatter.format(event, &mut buffer, themed);

        target.write_event(buffer.as_bytes()).map_err(|err| {
            tracing::warn!(error = %err, level = %event.level(), "failed to write log event");
            SinkError::from(err)
        })
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("output", &self.output)
            .field("error_output", &self.error_output)
            .field(
                "apply_theme_to_redirected_output",
                &self.apply_theme_to_redirected_output,
            )
            .finish_non_exhaustive()
    }
}
