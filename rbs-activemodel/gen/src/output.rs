//! Signature assembly.
//!
//! The four fragments are concatenated into a loosely formatted document:
//!
//! ```text
//! <header>
//! <mixins>
//!
//! <secure password block>
//!
//! <attribute block>
//! <footer>
//! ```
//!
//! which is then parsed and re-printed by [`crate::rbs::format_signature`].
//! Blank-line runs left by empty fragments collapse there, and a parse
//! failure surfaces as [`GeneratorError::Format`].

use rbs_activemodel_define::ClassDescriptor;
use tracing::{debug, instrument};

use crate::codegen::{footer, generate_attributes, generate_mixins, generate_secure_password, header};
use crate::errors::GeneratorError;
use crate::rbs::format_signature;

/// Joins the fragments in their fixed order.
pub fn assemble(header: &str, mixins: &str, secure_password: &str, attributes: &str, footer: &str) -> String {
    format!("{header}\n{mixins}\n\n{secure_password}\n\n{attributes}\n{footer}")
}

/// Generates the RBS signature for one class.
///
/// Returns `Ok(None)` when the class has nothing to declare: no recognized
/// mixins (or it is an ORM subclass), no password attributes, and no typed
/// attributes. A bare `class Foo ... end` is never emitted.
///
/// ## Errors
///
/// - [`GeneratorError::InvalidName`] / [`GeneratorError::Resolution`] when
///   the namespace header cannot be built.
/// - [`GeneratorError::InvalidAttribute`] for an attribute that cannot be
///   declared as a method.
/// - [`GeneratorError::Format`] if the assembled text does not parse.
///
/// ## Examples
///
/// ```
/// use rbs_activemodel_define::{Capability, ClassDescriptor};
/// use rbs_activemodel_gen::generate_signature;
///
/// let descriptor = ClassDescriptor::builder("Foo")
///     .include(Capability::Validations)
///     .build();
///
/// assert_eq!(
///     generate_signature(&descriptor).unwrap().as_deref(),
///     Some(
///         "class Foo\n  include ::ActiveModel::Validations\n  extend ::ActiveModel::Validations::ClassMethods\nend\n"
///     )
/// );
///
/// let plain = ClassDescriptor::builder("Bar").build();
/// assert_eq!(generate_signature(&plain).unwrap(), None);
/// ```
#[instrument(skip(descriptor), fields(class = %descriptor.qualified_name))]
pub fn generate_signature(descriptor: &ClassDescriptor) -> Result<Option<String>, GeneratorError> {
    let mixins = generate_mixins(descriptor);
    let secure_password = generate_secure_password(descriptor);
    let attributes = generate_attributes(descriptor)?;
    debug!(
        mixins = mixins.lines().count(),
        secure_password = !secure_password.is_empty(),
        attributes = descriptor.attributes.len(),
        "Synthesized fragments"
    );

    if mixins.is_empty() && secure_password.is_empty() && attributes.is_empty() {
        debug!("Nothing to declare");
        return Ok(None);
    }

    let header = header(descriptor)?;
    let footer = footer(descriptor);
    let raw = assemble(&header, &mixins, &secure_password, &attributes, &footer);

    let formatted = format_signature(&raw).map_err(|source| GeneratorError::Format {
        class: descriptor.qualified_name.clone(),
        source,
    })?;
    debug!(bytes = formatted.len(), "Formatted signature");
    Ok(Some(formatted))
}

/// Alias of [`generate_signature`].
pub fn class_to_rbs(descriptor: &ClassDescriptor) -> Result<Option<String>, GeneratorError> {
    generate_signature(descriptor)
}
