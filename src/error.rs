//! Error types for colorize

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for colorize operations
pub type Result<T> = std::result::Result<T, ColorizeError>;

/// Colorizer error types
#[derive(Error, Debug)]
pub enum ColorizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed rule on line {line}: expected `name: pattern`, got {text:?}")]
    MalformedRule { line: usize, text: String },

    #[error("Malformed color on line {line}: expected `name: color`, got {text:?} ({parts} parts)")]
    MalformedColor {
        line: usize,
        text: String,
        parts: usize,
    },

    #[error("Invalid pattern for rule {name:?}: {source}")]
    InvalidPattern {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("No color defined for token {0:?}")]
    MissingColor(String),

    #[error("Invalid scheme: {0}")]
    Scheme(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ColorizeError::MalformedRule {
            line: 3,
            text: "keyword".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed rule on line 3: expected `name: pattern`, got \"keyword\""
        );

        let err = ColorizeError::MissingColor("kw".to_string());
        assert_eq!(err.to_string(), "No color defined for token \"kw\"");
    }
}
