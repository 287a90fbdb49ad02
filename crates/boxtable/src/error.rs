//! Error types for table rendering and configuration.

use thiserror::Error;

/// Errors that can occur when configuring or rendering a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A cell contains an escape character that does not start a complete
    /// `ESC [ <digits/semicolons> m` sequence.
    #[error("malformed style sequence at character {offset}: {fragment:?}")]
    MalformedStyleSequence {
        /// Character offset of the escape character within the cell.
        offset: usize,
        /// The text consumed before the sequence was found to be malformed.
        fragment: String,
    },

    /// A border glyph is not exactly one printable character.
    #[error("invalid glyph for '{field}': {value:?} (expected a single printable character)")]
    InvalidGlyph {
        /// The option the glyph was meant for.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A cell with visible content was wrapped at width zero.
    #[error("cannot wrap visible text into a zero-width column")]
    ZeroWidth,

    /// Options document could not be parsed.
    #[error("invalid table options: {0}")]
    Config(String),

    /// I/O error while reading an options file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
