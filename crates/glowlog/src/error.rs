//! Error types.
//!
//! Rendering itself never fails: malformed templates degrade to literal
//! text and unrepresentable values to a placeholder. Errors come only from
//! loading configuration and from writing to the output stream.

/// Failure to deliver a rendered event to its output.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The underlying writer returned an I/O error.
    #[error("failed to write log event: {0}")]
    Write(#[from] std::io::Error),
}

/// Failure to load a theme definition.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown theme class '{0}'")]
    UnknownClass(String),

    #[error("invalid color for '{class}': {message}")]
    InvalidColor { class: String, message: String },

    #[error("invalid style for '{class}': {message}")]
    InvalidEntry { class: String, message: String },
}

/// Failure to load console sink options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid console configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown built-in theme '{0}'")]
    UnknownTheme(String),

    #[error(transparent)]
    UnknownLevel(#[from] crate::event::ParseLevelError),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SinkError = io.into();
        assert!(err.to_string().contains("pipe closed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn theme_error_display() {
        let err = ThemeError::UnknownClass("sparkles".into());
        assert_eq!(err.to_string(), "unknown theme class 'sparkles'");
    }

    #[test]
    fn config_error_is_transparent_over_theme() {
        let err: ConfigError = ThemeError::UnknownClass("x".into()).into();
        assert_eq!(err.to_string(), "unknown theme class 'x'");
    }
}
