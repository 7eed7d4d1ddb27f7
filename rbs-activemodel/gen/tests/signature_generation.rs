//! End-to-end signature generation for representative model classes.

use rbs_activemodel_define::{AttributeType, Capability, ClassDescriptor, ConstantKind};
use rbs_activemodel_gen::{GeneratorError, class_to_rbs, generate_signature};

fn generate(descriptor: &ClassDescriptor) -> Option<String> {
    generate_signature(descriptor).expect("generation should succeed")
}

#[test]
fn plain_class_has_nothing_to_declare() {
    let descriptor = ClassDescriptor::builder("Foo").build();
    assert_eq!(generate(&descriptor), None);
}

#[test]
fn model_includes_validations() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::Model)
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo\n",
            "  include ::ActiveModel::Model\n",
            "  include ::ActiveModel::Validations\n",
            "  extend ::ActiveModel::Validations::ClassMethods\n",
            "end\n",
        ))
    );
}

#[test]
fn validations_only() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::Validations)
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo\n",
            "  include ::ActiveModel::Validations\n",
            "  extend ::ActiveModel::Validations::ClassMethods\n",
            "end\n",
        ))
    );
}

#[test]
fn presence_validated_attribute_is_not_nullable() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::Attributes)
        .include(Capability::Validations)
        .validates_presence_of("name")
        .attribute("name", AttributeType::String)
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo\n",
            "  include ::ActiveModel::Attributes\n",
            "  extend ::ActiveModel::Attributes::ClassMethods\n",
            "  include ::ActiveModel::Validations\n",
            "  extend ::ActiveModel::Validations::ClassMethods\n",
            "\n",
            "  %a{pure}\n",
            "  def name: () -> String\n",
            "  def name=: (String value) -> String\n",
            "end\n",
        ))
    );
}

#[test]
fn unvalidated_attributes_are_nullable() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::Attributes)
        .attribute("age", AttributeType::Integer)
        .attribute("created_at", AttributeType::DateTime)
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo\n",
            "  include ::ActiveModel::Attributes\n",
            "  extend ::ActiveModel::Attributes::ClassMethods\n",
            "\n",
            "  %a{pure}\n",
            "  def age: () -> Integer?\n",
            "  def age=: (Integer? value) -> Integer?\n",
            "\n",
            "  %a{pure}\n",
            "  def created_at: () -> (DateTime | ActiveSupport::TimeWithZone)?\n",
            "  def created_at=: ((DateTime | ActiveSupport::TimeWithZone)? value) -> (DateTime | ActiveSupport::TimeWithZone)?\n",
            "end\n",
        ))
    );
}

#[test]
fn defaulted_attribute_is_not_nullable() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::Attributes)
        .attribute_with_default("active", AttributeType::Boolean)
        .attribute("score", "money")
        .build();
    let rbs = generate(&descriptor).unwrap();
    assert!(rbs.contains("  def active: () -> bool\n"), "{rbs}");
    assert!(rbs.contains("  def score: () -> untyped?\n"), "{rbs}");
}

#[test]
fn secure_password_with_default_attribute() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::SecurePassword)
        .has_secure_password("password")
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo\n",
            "  include ::ActiveModel::SecurePassword\n",
            "  extend ::ActiveModel::SecurePassword::ClassMethods\n",
            "  include ::ActiveModel::Validations\n",
            "  extend ::ActiveModel::Validations::ClassMethods\n",
            "\n",
            "  attr_reader password: String?\n",
            "  attr_accessor password_confirmation: String\n",
            "  attr_accessor password_challenge: String\n",
            "\n",
            "  def password=: (String) -> String\n",
            "  def password_salt: () -> String\n",
            "  def authenticate_password: (String) -> (instance | false)\n",
            "\n",
            "  alias authenticate authenticate_password\n",
            "end\n",
        ))
    );
}

#[test]
fn secure_password_with_named_attribute() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::SecurePassword)
        .has_secure_password("passphrase")
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo\n",
            "  include ::ActiveModel::SecurePassword\n",
            "  extend ::ActiveModel::SecurePassword::ClassMethods\n",
            "  include ::ActiveModel::Validations\n",
            "  extend ::ActiveModel::Validations::ClassMethods\n",
            "\n",
            "  attr_reader passphrase: String?\n",
            "  attr_accessor passphrase_confirmation: String\n",
            "  attr_accessor passphrase_challenge: String\n",
            "\n",
            "  def passphrase=: (String) -> String\n",
            "  def passphrase_salt: () -> String\n",
            "  def authenticate_passphrase: (String) -> (instance | false)\n",
            "end\n",
        ))
    );
}

fn orm_model() -> rbs_activemodel_define::DescriptorBuilder {
    ClassDescriptor::builder("Foo")
        .orm_subclass("ActiveRecord::Base")
        .include(Capability::Model)
        .include(Capability::Attributes)
        .include(Capability::SecurePassword)
}

#[test]
fn orm_subclass_with_secure_password() {
    let descriptor = orm_model().has_secure_password("password").build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo < ::ActiveRecord::Base\n",
            "  attr_reader password: String?\n",
            "  attr_accessor password_confirmation: String\n",
            "  attr_accessor password_challenge: String\n",
            "\n",
            "  def password=: (String) -> String\n",
            "  def password_salt: () -> String\n",
            "  def authenticate_password: (String) -> (instance | false)\n",
            "\n",
            "  alias authenticate authenticate_password\n",
            "end\n",
        ))
    );
}

#[test]
fn orm_subclass_attributes_are_still_declared() {
    let descriptor = ClassDescriptor::builder("Foo")
        .orm_subclass("ApplicationRecord")
        .include(Capability::Attributes)
        .attribute("age", AttributeType::Integer)
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo < ::ApplicationRecord\n",
            "  %a{pure}\n",
            "  def age: () -> Integer?\n",
            "  def age=: (Integer? value) -> Integer?\n",
            "end\n",
        ))
    );
}

#[test]
fn orm_subclass_with_password_and_attributes() {
    let descriptor = orm_model()
        .has_secure_password("password")
        .attribute("nickname", AttributeType::String)
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "class Foo < ::ActiveRecord::Base\n",
            "  attr_reader password: String?\n",
            "  attr_accessor password_confirmation: String\n",
            "  attr_accessor password_challenge: String\n",
            "\n",
            "  def password=: (String) -> String\n",
            "  def password_salt: () -> String\n",
            "  def authenticate_password: (String) -> (instance | false)\n",
            "\n",
            "  alias authenticate authenticate_password\n",
            "\n",
            "  %a{pure}\n",
            "  def nickname: () -> String?\n",
            "  def nickname=: (String? value) -> String?\n",
            "end\n",
        ))
    );
}

#[test]
fn orm_subclass_without_secure_password_has_nothing_to_declare() {
    // No mixins are emitted for ORM subclasses.
    let descriptor = ClassDescriptor::builder("Foo")
        .orm_subclass("ActiveRecord::Base")
        .include(Capability::Model)
        .build();
    assert_eq!(generate(&descriptor), None);
}

#[test]
fn nested_namespace() {
    let descriptor = ClassDescriptor::builder("A::B::Foo")
        .enclosing_module("A")
        .enclosing_class("A::B", None)
        .superclass("ApplicationModel")
        .include(Capability::Validations)
        .build();
    assert_eq!(
        generate(&descriptor).as_deref(),
        Some(concat!(
            "module A\n",
            "  class B\n",
            "    class Foo < ::ApplicationModel\n",
            "      include ::ActiveModel::Validations\n",
            "      extend ::ActiveModel::Validations::ClassMethods\n",
            "    end\n",
            "  end\n",
            "end\n",
        ))
    );
}

#[test]
fn value_constant_in_namespace_is_an_error() {
    let descriptor = ClassDescriptor::builder("Config::Foo")
        .enclosing("Config", ConstantKind::Value)
        .include(Capability::Validations)
        .build();
    let err = generate_signature(&descriptor).unwrap_err();
    assert!(matches!(&err, GeneratorError::Resolution { constant } if constant == "Config"));
    assert_eq!(
        err.to_string(),
        "Cannot resolve 'Config' as a class or module"
    );
}

#[test]
fn output_is_already_canonical() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::Model)
        .include(Capability::Attributes)
        .has_secure_password("password")
        .attribute("email", AttributeType::String)
        .validates_presence_of("email")
        .build();
    let rbs = generate(&descriptor).unwrap();
    assert_eq!(rbs_activemodel_gen::format_signature(&rbs).unwrap(), rbs);
}

#[test]
fn class_to_rbs_is_the_same_operation() {
    let descriptor = ClassDescriptor::builder("Foo")
        .include(Capability::Validations)
        .build();
    assert_eq!(
        class_to_rbs(&descriptor).unwrap(),
        generate_signature(&descriptor).unwrap()
    );
}

#[test]
fn descriptors_load_from_json() {
    let json = r#"{
        "qualified_name": "Admin::Account",
        "enclosing": {"Admin": {"kind": "module"}},
        "capabilities": ["attributes"],
        "attributes": [
            {"name": "email", "type": "string"},
            {"name": "plan", "type": "string", "has_default": true}
        ],
        "presence_validated": ["email"]
    }"#;
    let descriptor: ClassDescriptor = serde_json::from_str(json).unwrap();
    let rbs = generate(&descriptor).unwrap();
    assert!(rbs.starts_with("module Admin\n  class Account\n"));
    assert!(rbs.contains("    def email: () -> String\n"));
    assert!(rbs.contains("    def plan=: (String value) -> String\n"));
}
