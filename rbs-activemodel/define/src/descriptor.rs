//! The class descriptor handed to the generator.
//!
//! A [`ClassDescriptor`] is everything the generator needs to know about one
//! loaded class, captured up front by whatever inspects the host application.
//! The generator never reflects on anything itself.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeDecl, AttributeType};
use crate::capability::Capability;

/// Separator between namespace segments of a qualified constant name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// What an enclosing constant of a qualified name turned out to be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstantKind {
    /// A class, with its superclass's qualified name when it is not `Object`.
    Class {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        superclass: Option<String>,
    },
    /// A module.
    Module,
    /// Any other constant. Never valid as a namespace segment.
    Value,
}

/// Read-only snapshot of one class, as seen by the signature generator.
///
/// ## Examples
///
/// ```
/// use rbs_activemodel_define::{AttributeType, Capability, ClassDescriptor};
///
/// let descriptor = ClassDescriptor::builder("Admin::User")
///     .enclosing_module("Admin")
///     .include(Capability::Attributes)
///     .attribute("name", AttributeType::String)
///     .validates_presence_of("name")
///     .build();
///
/// assert_eq!(descriptor.segments(), vec!["Admin", "User"]);
/// assert!(descriptor.has_capability(Capability::Attributes));
/// assert!(descriptor.is_presence_validated("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully qualified class name, e.g. `A::B::Foo`.
    pub qualified_name: String,
    /// Superclass of the described class. `None` and `"Object"` both mean
    /// no explicit superclass.
    #[serde(default)]
    pub superclass: Option<String>,
    /// Kinds of the enclosing namespace segments, keyed by partial path
    /// (`"A"`, `"A::B"`).
    #[serde(default)]
    pub enclosing: BTreeMap<String, ConstantKind>,
    /// Recognized capability mixins present in the ancestry.
    #[serde(default)]
    pub capabilities: BTreeSet<Capability>,
    /// Declared attributes in declaration order.
    #[serde(default)]
    pub attributes: Vec<AttributeDecl>,
    /// Attribute names carrying a presence validation.
    #[serde(default)]
    pub presence_validated: BTreeSet<String>,
    /// Whether `has_secure_password` instance methods are in the ancestry.
    #[serde(default)]
    pub secure_password: bool,
    /// Public instance method names. Used to find `authenticate_<name>`
    /// and `<name>_confirmation` pairs.
    #[serde(default)]
    pub instance_methods: Vec<String>,
    /// Whether persistence comes from the ORM base class.
    #[serde(default)]
    pub orm_subclass: bool,
}

impl ClassDescriptor {
    /// Starts a builder for the class named `qualified_name`.
    pub fn builder(qualified_name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(qualified_name)
    }

    /// Namespace segments of the qualified name, outermost first.
    pub fn segments(&self) -> Vec<&str> {
        self.qualified_name.split(NAMESPACE_SEPARATOR).collect()
    }

    /// Cumulative paths of every segment: `A`, `A::B`, `A::B::Foo`.
    pub fn segment_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        let mut current = String::new();
        for segment in self.segments() {
            if !current.is_empty() {
                current.push_str(NAMESPACE_SEPARATOR);
            }
            current.push_str(segment);
            paths.push(current.clone());
        }
        paths
    }

    /// Unqualified class name (the last segment).
    pub fn name(&self) -> &str {
        self.qualified_name
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(&self.qualified_name)
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn is_presence_validated(&self, attribute: &str) -> bool {
        self.presence_validated.contains(attribute)
    }

    pub fn has_instance_method(&self, method: &str) -> bool {
        self.instance_methods.iter().any(|m| m == method)
    }
}

/// Normalizes a superclass name: `None`, empty, and `Object` mean "no
/// superclass worth declaring"; a leading `::` is stripped.
pub fn explicit_superclass(superclass: Option<&str>) -> Option<&str> {
    let name = superclass?;
    let name = name.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(name);
    match name {
        "" | "Object" => None,
        name => Some(name),
    }
}

/// Fluent construction of a [`ClassDescriptor`] the way the class body would
/// read in the host application.
///
/// ```
/// use rbs_activemodel_define::{Capability, ClassDescriptor};
///
/// let user = ClassDescriptor::builder("User")
///     .include(Capability::SecurePassword)
///     .has_secure_password("password")
///     .build();
///
/// assert!(user.secure_password);
/// assert!(user.has_capability(Capability::Validations));
/// assert!(user.has_instance_method("authenticate_password"));
/// assert!(user.has_instance_method("password_confirmation"));
/// ```
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    descriptor: ClassDescriptor,
}

impl DescriptorBuilder {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            descriptor: ClassDescriptor {
                qualified_name: qualified_name.into(),
                ..ClassDescriptor::default()
            },
        }
    }

    pub fn superclass(mut self, superclass: impl Into<String>) -> Self {
        self.descriptor.superclass = Some(superclass.into());
        self
    }

    /// Records that the enclosing constant at `path` is a module.
    pub fn enclosing_module(mut self, path: impl Into<String>) -> Self {
        self.descriptor
            .enclosing
            .insert(path.into(), ConstantKind::Module);
        self
    }

    /// Records that the enclosing constant at `path` is a class.
    pub fn enclosing_class(mut self, path: impl Into<String>, superclass: Option<&str>) -> Self {
        self.descriptor.enclosing.insert(
            path.into(),
            ConstantKind::Class {
                superclass: superclass.map(str::to_string),
            },
        );
        self
    }

    /// Records an arbitrary kind for the enclosing constant at `path`.
    pub fn enclosing(mut self, path: impl Into<String>, kind: ConstantKind) -> Self {
        self.descriptor.enclosing.insert(path.into(), kind);
        self
    }

    /// Adds a capability and everything it brings into the ancestry.
    pub fn include(mut self, capability: Capability) -> Self {
        self.descriptor.capabilities.insert(capability);
        self.descriptor
            .capabilities
            .extend(capability.implied().iter().copied());
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, kind: impl Into<AttributeType>) -> Self {
        self.descriptor
            .attributes
            .push(AttributeDecl::new(name, kind));
        self
    }

    pub fn attribute_with_default(
        mut self,
        name: impl Into<String>,
        kind: impl Into<AttributeType>,
    ) -> Self {
        self.descriptor
            .attributes
            .push(AttributeDecl::new(name, kind).with_default());
        self
    }

    pub fn validates_presence_of(mut self, name: impl Into<String>) -> Self {
        self.descriptor.presence_validated.insert(name.into());
        self
    }

    pub fn instance_method(mut self, name: impl Into<String>) -> Self {
        self.descriptor.instance_methods.push(name.into());
        self
    }

    /// Mirrors `has_secure_password :name`: pulls in the mixin and the
    /// validations it turns on, and defines the authenticate/confirmation
    /// method pair.
    pub fn has_secure_password(mut self, attribute: &str) -> Self {
        self = self
            .include(Capability::SecurePassword)
            .include(Capability::Validations);
        self.descriptor.secure_password = true;
        self.instance_method(format!("authenticate_{attribute}"))
            .instance_method(format!("{attribute}_confirmation"))
    }

    /// Marks the class as an ORM model inheriting from `superclass`.
    pub fn orm_subclass(mut self, superclass: impl Into<String>) -> Self {
        self.descriptor.orm_subclass = true;
        self.superclass(superclass)
    }

    pub fn build(self) -> ClassDescriptor {
        self.descriptor
    }
}
