//! Error types for the signature generator.

use thiserror::Error;

/// A syntax error reported by the RBS parser.
///
/// Positions are 1-based. When raised while formatting generator output this
/// always indicates a bug in one of the fragment synthesizers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("RBS syntax error at line {line}, column {column}: {message}")]
pub struct FormatError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl FormatError {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Errors that can occur while generating a class signature.
///
/// "Nothing to declare" is not an error; it is `Ok(None)`.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A class or superclass name is not a well-formed constant path.
    #[error("Invalid class name '{name}'")]
    InvalidName { name: String },

    /// An attribute name cannot be declared as an RBS method.
    #[error("Invalid attribute name '{name}' on '{class}'")]
    InvalidAttribute { class: String, name: String },

    /// A namespace segment is neither a class nor a module.
    #[error("Cannot resolve '{constant}' as a class or module")]
    Resolution { constant: String },

    /// The assembled signature did not parse. The synthesizers are
    /// responsible for emitting valid RBS, so this is an internal defect.
    #[error("Generated signature for '{class}' is not valid RBS: {source}")]
    Format {
        class: String,
        #[source]
        source: FormatError,
    },
}
