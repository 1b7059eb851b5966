//! Console sink configuration.
//!
//! [`ConsoleOptions`] is an immutable bag of settings read when a sink is
//! built. Set fields directly, chain the builder methods, or load YAML:
//!
//! ```yaml
//! output-template: "[{Timestamp:HH:mm:ss} {Level:u3}] {Message:lj}{NewLine}{Exception}"
//! theme: code
//! apply-theme-to-redirected-output: false
//! skip-null-values-in-output: true
//! standard-error-from-level: error
//! ```
//!
//! `theme` takes a built-in theme name or an inline theme mapping (see
//! [`Theme::from_yaml`]). `theme-file` loads a theme from a YAML file instead.

use std::path::Path;

use glowlog_template::Template;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::event::Level;
use crate::render::{OutputTemplateRenderer, LINE_ENDING};
use crate::theme::{BuiltinTheme, Theme};

/// Output template used when none is configured.
pub const DEFAULT_OUTPUT_TEMPLATE: &str =
    "[{Timestamp:HH:mm:ss} {Level:u3}] {Message:lj}{NewLine}{Exception}";

/// A built-in theme or a custom one.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeChoice {
    Builtin(BuiltinTheme),
    Custom(Theme),
}

impl ThemeChoice {
    pub fn resolve(&self) -> Theme {
        match self {
            ThemeChoice::Builtin(builtin) => builtin.theme().clone(),
            ThemeChoice::Custom(theme) => theme.clone(),
        }
    }
}

impl Default for ThemeChoice {
    fn default() -> Self {
        ThemeChoice::Builtin(BuiltinTheme::default())
    }
}

impl From<BuiltinTheme> for ThemeChoice {
    fn from(builtin: BuiltinTheme) -> Self {
        ThemeChoice::Builtin(builtin)
    }
}

impl From<Theme> for ThemeChoice {
    fn from(theme: Theme) -> Self {
        ThemeChoice::Custom(theme)
    }
}

/// Settings for a console sink.
///
/// ```rust
/// use glowlog::{BuiltinTheme, ConsoleOptions, Level};
///
/// let options = ConsoleOptions::new()
///     .output_template("{Level:u3} {Message:lj}{NewLine}")
///     .theme(BuiltinTheme::Code)
///     .skip_null_values_in_output(true)
///     .standard_error_from_level(Level::Error);
///
/// assert_eq!(options.standard_error_from_level, Some(Level::Error));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleOptions {
    pub output_template: String,
    pub theme: ThemeChoice,
    /// Keep escape sequences when the output is not a terminal.
    pub apply_theme_to_redirected_output: bool,
    /// Drop null entries from dictionaries and structures.
    pub skip_null_values_in_output: bool,
    pub newline: String,
    /// Events at or above this level go to the error stream.
    pub standard_error_from_level: Option<Level>,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
            theme: ThemeChoice::default(),
            apply_theme_to_redirected_output: false,
            skip_null_values_in_output: false,
            newline: LINE_ENDING.to_string(),
            standard_error_from_level: None,
        }
    }
}

impl ConsoleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_template(mut self, template: impl Into<String>) -> Self {
        self.output_template = template.into();
        self
    }

    pub fn theme(mut self, theme: impl Into<ThemeChoice>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn apply_theme_to_redirected_output(mut self, apply: bool) -> Self {
        self.apply_theme_to_redirected_output = apply;
        self
    }

    pub fn skip_null_values_in_output(mut self, skip: bool) -> Self {
        self.skip_null_values_in_output = skip;
        self
    }

    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    pub fn standard_error_from_level(mut self, level: Level) -> Self {
        self.standard_error_from_level = Some(level);
        self
    }

    /// Compiles the output template and resolves the theme.
    pub fn renderer(&self) -> OutputTemplateRenderer {
        OutputTemplateRenderer::new(Template::parse(&self.output_template), self.theme.resolve())
            .with_newline(self.newline.clone())
            .skip_null_values(self.skip_null_values_in_output)
    }

    /// Loads options from YAML. Missing keys keep their defaults.
    ///
    /// ```rust
    /// use glowlog::{BuiltinTheme, ConsoleOptions, ThemeChoice};
    ///
    /// let options = ConsoleOptions::from_yaml("theme: grayscale\nnewline: \"\\r\\n\"").unwrap();
    /// assert_eq!(options.theme, ThemeChoice::Builtin(BuiltinTheme::Grayscale));
    /// assert_eq!(options.newline, "\r\n");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed YAML, unknown theme or level
    /// names, and invalid inline or file themes.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: OptionsRaw = serde_yaml::from_str(yaml)?;
        raw.try_into()
    }

    /// Loads options from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct OptionsRaw {
    output_template: Option<String>,
    theme: Option<ThemeRaw>,
    theme_file: Option<String>,
    apply_theme_to_redirected_output: Option<bool>,
    skip_null_values_in_output: Option<bool>,
    newline: Option<String>,
    standard_error_from_level: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ThemeRaw {
    Name(String),
    Inline(serde_yaml::Value),
}

impl TryFrom<OptionsRaw> for ConsoleOptions {
    type Error = ConfigError;

    fn try_from(raw: OptionsRaw) -> Result<Self, Self::Error> {
        let defaults = ConsoleOptions::default();

        let theme = match (raw.theme, raw.theme_file) {
            (_, Some(file)) => ThemeChoice::Custom(Theme::from_file(file)?),
            (Some(ThemeRaw::Name(name)), None) => ThemeChoice::Builtin(
                name.parse::<BuiltinTheme>()
                    .map_err(ConfigError::UnknownTheme)?,
            ),
            (Some(ThemeRaw::Inline(value)), None) => {
                ThemeChoice::Custom(Theme::from_yaml_value(&value)?)
            }
            (None, None) => defaults.theme,
        };

        let standard_error_from_level = raw
            .standard_error_from_level
            .map(|name| name.parse::<Level>())
            .transpose()?;

        Ok(Self {
            output_template: raw.output_template.unwrap_or(defaults.output_template),
            theme,
            apply_theme_to_redirected_output: raw
                .apply_theme_to_redirected_output
                .unwrap_or(defaults.apply_theme_to_redirected_output),
            skip_null_values_in_output: raw
                .skip_null_values_in_output
                .unwrap_or(defaults.skip_null_values_in_output),
            newline: raw.newline.unwrap_or(defaults.newline),
            standard_error_from_level,
        })
    }
}
