//! # Glowlog - Themed Console Rendering for Structured Log Events
//!
//! `glowlog` renders structured log events as colored, human-readable lines.
//! It does not decide whether to log: a pipeline hands it an already
//! accepted [`LogEvent`] and it produces text.
//!
//! ## Core Concepts
//!
//! - [`LogEvent`]: timestamp, [`Level`], message template, properties and
//!   optional exception text
//! - [`PropertyValue`]: scalars, sequences, dictionaries and tagged structures
//! - [`Template`]: a compiled output or message template
//! - [`Theme`]: escape sequences for each [`ThemeClass`], with a catalog of
//!   [`BuiltinTheme`]s
//! - [`OutputTemplateRenderer`]: renders an event through an output template
//! - [`ConsoleSink`]: writes rendered events atomically to a [`ConsoleTarget`]
//!
//! ## Quick Start
//!
//! ```rust
//! use glowlog::{BuiltinTheme, ConsoleOptions, Level, LogEvent, PropertyValue};
//!
//! let renderer = ConsoleOptions::new()
//!     .output_template("[{Level:u3}] {Message:lj}{NewLine}")
//!     .theme(BuiltinTheme::None)
//!     .newline("\n")
//!     .renderer();
//!
//! let event = LogEvent::new(Level::Information, "Processed {@Order} in {Elapsed:0.0} ms")
//!     .with_property("Order", PropertyValue::dictionary([("Id", 42)]))
//!     .with_property("Elapsed", 17.26);
//!
//! assert_eq!(
//!     renderer.render(&event, false),
//!     "[INF] Processed {\"Id\": 42} in 17.3 ms\n"
//! );
//! ```
//!
//! ## Theming
//!
//! Escape sequences are written only when the theme is not empty and the
//! target is a terminal, or when the options opt in to theming redirected
//! output. The decision is made once per event, so a line is either fully
//! themed or not themed at all.
//!
//! ```rust
//! use glowlog::{ConsoleOptions, Level, LogEvent, TextFormatter};
//!
//! let renderer = ConsoleOptions::new().output_template("{Level:u3}").renderer();
//! let event = LogEvent::new(Level::Error, "");
//!
//! assert_eq!(renderer.render(&event, false), "ERR");
//! assert!(renderer.render(&event, true).starts_with('\x1b'));
//! assert!(renderer.uses_theme());
//! ```
//!
//! ## Sinks
//!
//! [`ConsoleSink::console`] writes to standard output, and optionally to
//! standard error from a configured level. Targets are resolved once at
//! construction; nothing is probed while rendering.

mod error;
pub mod event;
pub mod format;
mod options;
pub mod render;
mod sink;
pub mod theme;
mod util;

// Error types
pub use error::{ConfigError, SinkError, ThemeError};

// Event model
pub use event::{Level, LogEvent, ParseLevelError, PropertyValue, Scalar, Structure};

// Theme exports
pub use theme::{BuiltinTheme, Theme, ThemeClass, ThemeStyle, ANSI_RESET};

// Value formatting
pub use format::{DisplayValueFormatter, JsonValueFormatter, ThemedWriter, ValueFormatter};

// Rendering
pub use render::{OutputTemplateRenderer, TextFormatter, DEFAULT_TIMESTAMP_FORMAT, LINE_ENDING};

// Configuration and output
pub use options::{ConsoleOptions, ThemeChoice, DEFAULT_OUTPUT_TEMPLATE};
pub use sink::{ConsoleSink, ConsoleTarget};

// Template parser
pub use glowlog_template::{Alignment, Destructure, Direction, Node, PropertyToken, Template};

// Utility exports
pub use util::{display_width, rgb_to_ansi256};
