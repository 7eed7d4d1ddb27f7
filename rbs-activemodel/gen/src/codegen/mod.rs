//! Fragment synthesizers for class signatures.
//!
//! Each submodule renders one loosely formatted fragment of RBS text from a
//! [`ClassDescriptor`](rbs_activemodel_define::ClassDescriptor). None of them
//! worry about indentation or blank-line runs; the assembled text is passed
//! through [`crate::rbs::format_signature`], which both validates and
//! canonicalizes it.
//!
//! ## Submodules
//!
//! - [`namespace`] - `class`/`module` opening lines and matching `end`s
//! - [`mixins`] - `include`/`extend` lines for capability mixins
//! - [`secure_password`] - accessor blocks for `has_secure_password`
//! - [`attributes`] - `%a{pure}` reader/writer pairs for declared attributes
//!
//! See [`crate::output`] for assembly.

pub mod attributes;
pub mod mixins;
pub mod namespace;
pub mod secure_password;

pub use attributes::{RbsType, generate_attributes, rbs_type};
pub use mixins::generate_mixins;
pub use namespace::{footer, header};
pub use secure_password::{generate_secure_password, password_attributes};
