//! Typed accessor pairs for declared attributes.

use rbs_activemodel_define::{AttributeDecl, AttributeType, Capability, ClassDescriptor};

use super::secure_password::is_method_identifier;
use crate::errors::GeneratorError;

/// How an attribute type tag renders in a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RbsType {
    /// A class name such as `Integer`.
    Class(&'static str),
    /// A builtin keyword type such as `bool` or `untyped`.
    Keyword(&'static str),
    /// A union written out as text; parenthesized when rendered.
    Composite(&'static str),
}

impl RbsType {
    pub fn render(self) -> String {
        match self {
            Self::Class(name) | Self::Keyword(name) => name.to_string(),
            Self::Composite(text) => format!("({text})"),
        }
    }
}

/// Maps an attribute type tag to its signature type. Unknown tags fall back
/// to `untyped`.
pub fn rbs_type(kind: &AttributeType) -> RbsType {
    match kind {
        AttributeType::BigInteger | AttributeType::Integer => RbsType::Class("Integer"),
        AttributeType::Binary | AttributeType::ImmutableString | AttributeType::String => {
            RbsType::Class("String")
        }
        AttributeType::Boolean => RbsType::Keyword("bool"),
        AttributeType::Date => RbsType::Class("Date"),
        AttributeType::DateTime => RbsType::Composite("DateTime | ActiveSupport::TimeWithZone"),
        AttributeType::Decimal => RbsType::Class("BigDecimal"),
        AttributeType::Float => RbsType::Class("Float"),
        AttributeType::Time => RbsType::Class("Time"),
        AttributeType::Other(_) => RbsType::Keyword("untyped"),
    }
}

/// A defaulted or presence-validated attribute is never nil when read.
fn is_required(descriptor: &ClassDescriptor, attribute: &AttributeDecl) -> bool {
    attribute.has_default || descriptor.is_presence_validated(&attribute.name)
}

fn accessor_block(descriptor: &ClassDescriptor, attribute: &AttributeDecl) -> String {
    let suffix = if is_required(descriptor, attribute) { "" } else { "?" };
    let ty = format!("{}{suffix}", rbs_type(&attribute.kind).render());
    let name = &attribute.name;
    format!("%a{{pure}}\ndef {name}: () -> {ty}\ndef {name}=: ({ty} value) -> {ty}")
}

/// Renders a reader/writer pair per declared attribute, in declaration
/// order, separated by blank lines. Empty unless the class includes
/// `ActiveModel::Attributes`.
///
/// ## Errors
///
/// Returns [`GeneratorError::InvalidAttribute`] when an attribute name is
/// not a method identifier.
pub fn generate_attributes(descriptor: &ClassDescriptor) -> Result<String, GeneratorError> {
    if !descriptor.has_capability(Capability::Attributes) {
        return Ok(String::new());
    }

    let mut blocks = Vec::with_capacity(descriptor.attributes.len());
    for attribute in &descriptor.attributes {
        if !is_method_identifier(&attribute.name) {
            return Err(GeneratorError::InvalidAttribute {
                class: descriptor.qualified_name.clone(),
                name: attribute.name.clone(),
            });
        }
        blocks.push(accessor_block(descriptor, attribute));
    }
    Ok(blocks.join("\n\n"))
}
