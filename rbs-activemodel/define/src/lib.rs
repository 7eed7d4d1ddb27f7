//! rbs-activemodel definition library
//!
//! Plain data types describing a loaded ActiveModel/ActiveRecord class. A
//! collaborator that can see the host application (a Rails runner, a static
//! analyzer, a hand-written fixture) fills in a [`ClassDescriptor`]; the
//! `rbs-activemodel-gen` crate turns it into an RBS signature.
//!
//! ## Core Types
//!
//! - [`ClassDescriptor`] - one class: namespace, ancestry, attributes, validations
//! - [`DescriptorBuilder`] - fluent construction mirroring a class body
//! - [`Capability`] - the recognized ActiveModel mixins, in their fixed order
//! - [`AttributeDecl`] / [`AttributeType`] - `attribute :name, :type` declarations
//! - [`ConstantKind`] - class/module resolution of enclosing namespace segments
//!
//! ## Examples
//!
//! ```
//! use rbs_activemodel_define::prelude::*;
//!
//! let descriptor = ClassDescriptor::builder("Billing::Invoice")
//!     .enclosing_module("Billing")
//!     .include(Capability::Model)
//!     .include(Capability::Attributes)
//!     .attribute("total", AttributeType::Decimal)
//!     .attribute_with_default("paid", AttributeType::Boolean)
//!     .build();
//!
//! assert_eq!(descriptor.attributes.len(), 2);
//! assert!(descriptor.has_capability(Capability::Validations));
//! ```
//!
//! Descriptors are also (de)serializable, so a batch can be produced by one
//! process and rendered by another:
//!
//! ```
//! use rbs_activemodel_define::ClassDescriptor;
//!
//! let descriptor: ClassDescriptor = serde_json::from_str(
//!     r#"{"qualified_name": "Foo", "capabilities": ["validations"]}"#,
//! ).unwrap();
//! assert_eq!(descriptor.name(), "Foo");
//! ```

pub mod attribute;
pub mod capability;
pub mod descriptor;
pub mod prelude;

pub use attribute::{AttributeDecl, AttributeType};
pub use capability::Capability;
pub use descriptor::{
    ClassDescriptor, ConstantKind, DescriptorBuilder, NAMESPACE_SEPARATOR, explicit_superclass,
};
