//! Event rendering.
//!
//! A [`TextFormatter`] turns a whole [`LogEvent`] into text. The shipped
//! implementation is [`OutputTemplateRenderer`], driven by an output
//! template such as:
//!
//! ```text
//! [{Timestamp:HH:mm:ss} {Level:u3}] {Message:lj}{NewLine}{Exception}
//! ```
//!
//! ## Built-in Tokens
//!
//! | Token | Renders |
//! |-------|---------|
//! | `{Timestamp}` | Event time, with a date pattern format |
//! | `{Level}` | Level name; `u3`, `w4`, `t1` select short monikers |
//! | `{Message}` | Message with property values; `l` and `j` flags |
//! | `{NewLine}` | The configured line ending |
//! | `{Exception}` | Exception text, one themed line at a time |
//! | `{Properties}` | Properties not used by either template |
//!
//! Any other name looks up an event property and renders nothing when the
//! event does not carry it.

mod message;
mod output;

pub use output::{OutputTemplateRenderer, DEFAULT_TIMESTAMP_FORMAT, LINE_ENDING};

use crate::event::LogEvent;

/// Formats a complete event.
///
/// Implementations are immutable after construction and shared between
/// threads by the sink.
pub trait TextFormatter: Send + Sync {
    /// Appends the rendering of `event` to `out`.
    ///
    /// When `themed` is false the output must not contain escape sequences.
    fn format(&self, event: &LogEvent, out: &mut String, themed: bool);

    /// Whether this formatter writes escape sequences when `themed` is true.
    fn uses_theme(&self) -> bool {
        false
    }
}
