//! Convenient re-exports for building class descriptors.
//!
//! ```
//! use rbs_activemodel_define::prelude::*;
//!
//! let descriptor = ClassDescriptor::builder("Foo")
//!     .include(Capability::Validations)
//!     .build();
//! assert!(descriptor.has_capability(Capability::Validations));
//! ```

pub use crate::attribute::{AttributeDecl, AttributeType};
pub use crate::capability::Capability;
pub use crate::descriptor::{ClassDescriptor, ConstantKind, DescriptorBuilder};
