//! `include`/`extend` lines for the capability mixins.

use rbs_activemodel_define::{Capability, ClassDescriptor};

/// Renders the mixin lines for every capability present, in canonical
/// capability order.
///
/// Each capability contributes `include ::<Module>` followed by
/// `extend ::<Module>::ClassMethods` when it has a class-methods companion.
/// ORM subclasses get nothing: the ORM's own signatures already declare the
/// mixins.
pub fn generate_mixins(descriptor: &ClassDescriptor) -> String {
    if descriptor.orm_subclass {
        return String::new();
    }

    let mut lines = Vec::new();
    for capability in Capability::ORDERED {
        if !descriptor.has_capability(capability) {
            continue;
        }
        lines.push(format!("include ::{}", capability.module_path()));
        if let Some(class_methods) = capability.class_methods_module() {
            lines.push(format!("extend ::{class_methods}"));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_brings_validations() {
        let descriptor = ClassDescriptor::builder("Foo")
            .include(Capability::Model)
            .build();
        assert_eq!(
            generate_mixins(&descriptor),
            "include ::ActiveModel::Model\n\
             include ::ActiveModel::Validations\n\
             extend ::ActiveModel::Validations::ClassMethods"
        );
    }

    #[test]
    fn follows_canonical_order_regardless_of_inclusion_order() {
        let descriptor = ClassDescriptor::builder("Foo")
            .include(Capability::Validations)
            .include(Capability::SecurePassword)
            .include(Capability::Attributes)
            .build();
        let lines: Vec<_> = generate_mixins(&descriptor)
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(
            lines,
            vec![
                "include ::ActiveModel::Attributes",
                "extend ::ActiveModel::Attributes::ClassMethods",
                "include ::ActiveModel::SecurePassword",
                "extend ::ActiveModel::SecurePassword::ClassMethods",
                "include ::ActiveModel::Validations",
                "extend ::ActiveModel::Validations::ClassMethods",
            ]
        );
    }

    #[test]
    fn orm_subclass_gets_no_mixins() {
        let descriptor = ClassDescriptor::builder("Foo")
            .orm_subclass("ActiveRecord::Base")
            .include(Capability::Model)
            .build();
        assert_eq!(generate_mixins(&descriptor), "");
    }

    #[test]
    fn no_capabilities_no_lines() {
        let descriptor = ClassDescriptor::builder("Foo").build();
        assert_eq!(generate_mixins(&descriptor), "");
    }
}
