//! Themes mapping semantic token classes to terminal escape sequences.
//!
//! Every fragment the renderer writes belongs to a [`ThemeClass`]: the level
//! badge, message text, a quoted string, a brace. A [`Theme`] maps each class
//! to a [`ThemeStyle`] start/end pair, and wrapping a fragment is simply
//! `start + text + end`.
//!
//! ## Catalog
//!
//! [`BuiltinTheme`] names the shipped themes (`literate`, `grayscale`,
//! `code`, `sixteen`, and `none`). They are lazily built once and shared.
//!
//! ## Custom Themes
//!
//! Build one with [`Theme::set`], or load YAML with [`Theme::from_yaml`] /
//! [`Theme::from_file`]:
//!
//! ```yaml
//! name: harbor
//! text: white
//! level-error: { fg: white, bg: red, bold: true }
//! string: "#5fd7ff"
//! punctuation: { start: "\e[90m", end: "\e[0m" }
//! ```

mod builtin;
mod class;
mod color;
mod definition;
#[allow(clippy::module_inception)]
mod theme;

pub use builtin::BuiltinTheme;
pub use class::ThemeClass;
pub use theme::{Theme, ThemeStyle, ANSI_RESET};
