//! Template parser for structured log output.
//!
//! This crate compiles `{Name,alignment:format}` style templates into an
//! ordered list of [`Node`]s. The same grammar is used for output templates
//! (`[{Timestamp:HH:mm:ss} {Level:u3}] {Message:lj}{NewLine}`) and for the
//! message templates carried by log events (`"Disk {Drive} at {@Usage}"`).
//!
//! # Example
//!
//! ```rust
//! use glowlog_template::{Node, Template};
//!
//! let template = Template::parse("[{Level:u3}] {Message,-20}{{done}}");
//! let names: Vec<_> = template.properties().map(|p| p.name()).collect();
//! assert_eq!(names, vec!["Level", "Message"]);
//!
//! // Escaped braces become literal text
//! assert!(matches!(template.nodes().last(), Some(Node::Text(t)) if t == "{done}"));
//! ```
//!
//! # Token Syntax
//!
//! - `{Name}` - property or built-in name, `[A-Za-z0-9_]+`
//! - `{0}` - positional capture (all digits)
//! - `{@Name}` / `{$Name}` - destructure / stringify hints
//! - `{Name,10}` - right-justify in 10 columns, `{Name,-10}` left-justifies
//! - `{Name:format}` - free-form format string
//! - `{{` and `}}` - literal braces
//!
//! Parsing never fails. Anything that does not form a valid token is kept as
//! literal text, so a template always compiles.

mod parser;
mod template;
mod token;

pub use template::Template;
pub use token::{Alignment, Destructure, Direction, Node, Padding, PropertyToken};
