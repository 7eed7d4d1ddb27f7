//! Capability mixins recognized in a class's ancestry.
//!
//! Only four ActiveModel modules are recognized. Their declaration order is
//! significant: signatures always list them as `Model`, `Attributes`,
//! `SecurePassword`, `Validations`, regardless of the order a class included
//! them in, so generated output is stable across runs.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A recognized ActiveModel capability mixin.
///
/// The derived `Ord` follows declaration order, so a `BTreeSet<Capability>`
/// iterates in the same fixed order the generator emits mixins in.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use rbs_activemodel_define::Capability;
///
/// let cap = Capability::from_str("secure_password").unwrap();
/// assert_eq!(cap, Capability::SecurePassword);
/// assert_eq!(cap.module_path(), "ActiveModel::SecurePassword");
/// assert_eq!(cap.to_string(), "secure_password");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    /// `ActiveModel::Model`
    Model,
    /// `ActiveModel::Attributes`
    Attributes,
    /// `ActiveModel::SecurePassword`
    SecurePassword,
    /// `ActiveModel::Validations`
    Validations,
}

impl Capability {
    /// All capabilities in the fixed order mixins are declared in.
    pub const ORDERED: [Capability; 4] = [
        Capability::Model,
        Capability::Attributes,
        Capability::SecurePassword,
        Capability::Validations,
    ];

    /// Fully qualified module name, without a leading `::`.
    pub fn module_path(self) -> &'static str {
        match self {
            Self::Model => "ActiveModel::Model",
            Self::Attributes => "ActiveModel::Attributes",
            Self::SecurePassword => "ActiveModel::SecurePassword",
            Self::Validations => "ActiveModel::Validations",
        }
    }

    /// The companion module of class-level methods, when the mixin has one.
    ///
    /// `ActiveModel::Model` has no `ClassMethods` of its own; its class
    /// methods arrive through the modules it includes.
    ///
    /// ```
    /// use rbs_activemodel_define::Capability;
    ///
    /// assert_eq!(Capability::Model.class_methods_module(), None);
    /// assert_eq!(
    ///     Capability::Validations.class_methods_module(),
    ///     Some("ActiveModel::Validations::ClassMethods")
    /// );
    /// ```
    pub fn class_methods_module(self) -> Option<&'static str> {
        match self {
            Self::Model => None,
            Self::Attributes => Some("ActiveModel::Attributes::ClassMethods"),
            Self::SecurePassword => Some("ActiveModel::SecurePassword::ClassMethods"),
            Self::Validations => Some("ActiveModel::Validations::ClassMethods"),
        }
    }

    /// Capabilities that including this mixin brings into the ancestry.
    ///
    /// `ActiveModel::Model` includes `ActiveModel::API`, which includes
    /// `ActiveModel::Validations`.
    pub fn implied(self) -> &'static [Capability] {
        match self {
            Self::Model => &[Capability::Validations],
            Self::Attributes | Self::SecurePassword | Self::Validations => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn iteration_order_matches_declaration_order() {
        let iterated: Vec<_> = Capability::iter().collect();
        assert_eq!(iterated, Capability::ORDERED.to_vec());
    }

    #[test]
    fn btree_set_iterates_in_fixed_order() {
        let set: BTreeSet<_> = [
            Capability::Validations,
            Capability::Model,
            Capability::SecurePassword,
        ]
        .into_iter()
        .collect();
        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![
                Capability::Model,
                Capability::SecurePassword,
                Capability::Validations
            ]
        );
    }

    #[test]
    fn only_model_lacks_class_methods() {
        for cap in Capability::iter() {
            let has_class_methods = cap.class_methods_module().is_some();
            assert_eq!(has_class_methods, cap != Capability::Model, "{cap}");
        }
    }

    #[test]
    fn class_methods_module_is_nested_in_module_path() {
        for cap in Capability::iter() {
            if let Some(class_methods) = cap.class_methods_module() {
                assert_eq!(
                    class_methods,
                    format!("{}::ClassMethods", cap.module_path())
                );
            }
        }
    }

    #[test]
    fn model_implies_validations() {
        assert_eq!(Capability::Model.implied(), &[Capability::Validations]);
        assert!(Capability::Validations.implied().is_empty());
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(Capability::from_str("model").unwrap(), Capability::Model);
        assert_eq!(
            Capability::from_str("attributes").unwrap(),
            Capability::Attributes
        );
        assert!(Capability::from_str("Model").is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Capability::SecurePassword).unwrap();
        assert_eq!(json, "\"secure_password\"");
        let back: Capability = serde_json::from_str("\"validations\"").unwrap();
        assert_eq!(back, Capability::Validations);
    }
}
