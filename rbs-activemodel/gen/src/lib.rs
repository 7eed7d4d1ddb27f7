//! RBS signature generator for ActiveModel classes.
//!
//! Given a [`ClassDescriptor`] from `rbs-activemodel-define`, this crate
//! emits an RBS document declaring the class's public shape:
//!
//! - `include`/`extend` lines for the recognized capability mixins
//! - accessor blocks for `has_secure_password` attributes
//! - `%a{pure}` reader/writer pairs for declared, typed attributes
//!
//! wrapped in the class's namespace and pretty-printed by a small RBS
//! parser/printer.
//!
//! ## Modules
//!
//! - [`codegen`] - Fragment synthesizers (namespace, mixins, secure password, attributes)
//! - [`output`] - Assembly and formatting of a single signature
//! - [`rbs`] - RBS lexer, parser, and canonical printer
//! - [`batch`] - Generating many classes with per-class failure isolation
//! - [`paths`] - Conventional signature file locations
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use rbs_activemodel_define::{AttributeType, Capability, ClassDescriptor};
//! use rbs_activemodel_gen::generate_signature;
//!
//! let descriptor = ClassDescriptor::builder("Foo")
//!     .include(Capability::Attributes)
//!     .attribute("name", AttributeType::String)
//!     .build();
//!
//! let rbs = generate_signature(&descriptor).unwrap().unwrap();
//! assert_eq!(
//!     rbs,
//!     "class Foo
//!   include ::ActiveModel::Attributes
//!   extend ::ActiveModel::Attributes::ClassMethods
//!
//!   %a{pure}
//!   def name: () -> String?
//!   def name=: (String? value) -> String?
//! end
//! "
//! );
//! ```

pub mod batch;
pub mod codegen;
pub mod errors;
pub mod output;
pub mod paths;
pub mod rbs;

#[cfg(test)]
pub(crate) mod test_utils;

pub use batch::{BatchEntry, BatchOutcome, BatchReport, generate_all};
pub use errors::{FormatError, GeneratorError};
pub use output::{class_to_rbs, generate_signature};
pub use paths::signature_path;
pub use rbs::format_signature;
