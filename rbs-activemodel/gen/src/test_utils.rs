//! Shared descriptor fixtures for unit tests.

use rbs_activemodel_define::{AttributeType, Capability, ClassDescriptor};

/// A top-level class including only `ActiveModel::Validations`.
pub fn validations_model(name: &str) -> ClassDescriptor {
    ClassDescriptor::builder(name)
        .include(Capability::Validations)
        .build()
}

/// A top-level class with `ActiveModel::Attributes` and two optional
/// attributes, `age` and `created_at`.
pub fn attributes_model(name: &str) -> ClassDescriptor {
    ClassDescriptor::builder(name)
        .include(Capability::Attributes)
        .attribute("age", AttributeType::Integer)
        .attribute("created_at", AttributeType::DateTime)
        .build()
}

/// `Admin::Accounts::User`: a model nested in a class nested in a module.
pub fn nested_descriptor() -> ClassDescriptor {
    ClassDescriptor::builder("Admin::Accounts::User")
        .enclosing_module("Admin")
        .enclosing_class("Admin::Accounts", Some("Base"))
        .include(Capability::Model)
        .build()
}

/// A class whose enclosing namespace cannot be resolved.
pub fn unresolvable_descriptor() -> ClassDescriptor {
    ClassDescriptor::builder("Ghost::User")
        .include(Capability::Validations)
        .build()
}
