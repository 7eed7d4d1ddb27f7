//! Canonicalizing RBS formatter.
//!
//! Generated fragments are concatenated as loosely formatted text and then
//! re-parsed and re-printed here, the same way the Rust generators in this
//! workspace validate with a parser before pretty-printing. Parsing is the
//! validation step: anything that comes out of [`format_signature`] is
//! syntactically valid RBS in canonical layout.
//!
//! ## Submodules
//!
//! - [`lexer`] - tokens with line/column positions
//! - [`ast`] - declarations, members, method types, and types
//! - [`parser`] - recursive-descent parser with blank-line tracking
//! - [`writer`] - canonical printer
//!
//! ## Examples
//!
//! ```
//! use rbs_activemodel_gen::rbs::format_signature;
//!
//! let formatted = format_signature("class Foo\n\n\ninclude   ::Bar\nend").unwrap();
//! assert_eq!(formatted, "class Foo\n  include ::Bar\nend\n");
//!
//! // Formatting is idempotent.
//! assert_eq!(format_signature(&formatted).unwrap(), formatted);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod writer;

pub use ast::Signature;
pub use parser::parse_signature;
pub use writer::write_signature;

use crate::errors::FormatError;

/// Parses `source` and prints it back in canonical layout.
///
/// ## Errors
///
/// Returns a [`FormatError`] if `source` is not valid RBS (within the subset
/// this parser understands).
pub fn format_signature(source: &str) -> Result<String, FormatError> {
    let signature = parse_signature(source)?;
    Ok(write_signature(&signature))
}

/// `true` when `source` is already in canonical layout.
///
/// ## Errors
///
/// Returns a [`FormatError`] if `source` does not parse.
pub fn is_canonical(source: &str) -> Result<bool, FormatError> {
    Ok(format_signature(source)? == source)
}
