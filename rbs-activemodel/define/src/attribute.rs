//! Typed attribute declarations (`attribute :name, :type`).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The type tag an attribute was declared with.
///
/// Mirrors the symbols ActiveModel's type registry knows about. Any other tag
/// (a custom registered type, say) is kept verbatim in [`AttributeType::Other`]
/// so parsing never fails.
///
/// ## Examples
///
/// ```
/// use rbs_activemodel_define::AttributeType;
///
/// let tag: AttributeType = "datetime".parse().unwrap();
/// assert_eq!(tag, AttributeType::DateTime);
///
/// let custom: AttributeType = "money".parse().unwrap();
/// assert_eq!(custom, AttributeType::Other("money".to_string()));
/// assert_eq!(custom.to_string(), "money");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeType {
    BigInteger,
    Binary,
    Boolean,
    Date,
    DateTime,
    Decimal,
    Float,
    ImmutableString,
    Integer,
    String,
    Time,
    /// A tag outside the built-in registry.
    Other(String),
}

impl AttributeType {
    /// Returns the tag as written in an `attribute` declaration.
    pub fn as_str(&self) -> &str {
        match self {
            Self::BigInteger => "big_integer",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::ImmutableString => "immutable_string",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Time => "time",
            Self::Other(tag) => tag,
        }
    }
}

impl FromStr for AttributeType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "big_integer" => Self::BigInteger,
            "binary" => Self::Binary,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "decimal" => Self::Decimal,
            "float" => Self::Float,
            "immutable_string" => Self::ImmutableString,
            "integer" => Self::Integer,
            "string" => Self::String,
            "time" => Self::Time,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for AttributeType {
    fn from(tag: String) -> Self {
        match tag.parse::<AttributeType>() {
            Ok(parsed) => parsed,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for AttributeType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<AttributeType> for String {
    fn from(tag: AttributeType) -> Self {
        match tag {
            AttributeType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `attribute` declaration on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDecl {
    /// Attribute name (also the reader method name).
    pub name: String,
    /// Declared type tag.
    #[serde(rename = "type")]
    pub kind: AttributeType,
    /// Whether the declaration carries a `default:` value.
    #[serde(default)]
    pub has_default: bool,
}

impl AttributeDecl {
    /// Creates a declaration without a default value.
    pub fn new(name: impl Into<String>, kind: impl Into<AttributeType>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            has_default: false,
        }
    }

    /// Marks the declaration as carrying a default value.
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip_through_strings() {
        for tag in [
            "big_integer",
            "binary",
            "boolean",
            "date",
            "datetime",
            "decimal",
            "float",
            "immutable_string",
            "integer",
            "string",
            "time",
        ] {
            let parsed = AttributeType::from(tag);
            assert!(
                !matches!(parsed, AttributeType::Other(_)),
                "{tag} should be a built-in tag"
            );
            assert_eq!(parsed.as_str(), tag);
        }
    }

    #[test]
    fn unknown_tag_is_preserved() {
        let parsed = AttributeType::from("json");
        assert_eq!(parsed, AttributeType::Other("json".to_string()));
        assert_eq!(String::from(parsed), "json");
    }

    #[test]
    fn decl_deserializes_with_type_key_and_optional_default() {
        let decl: AttributeDecl =
            serde_json::from_str(r#"{"name": "age", "type": "integer"}"#).unwrap();
        assert_eq!(decl, AttributeDecl::new("age", AttributeType::Integer));

        let decl: AttributeDecl = serde_json::from_str(
            r#"{"name": "active", "type": "boolean", "has_default": true}"#,
        )
        .unwrap();
        assert!(decl.has_default);
        assert_eq!(decl.kind, AttributeType::Boolean);
    }

    #[test]
    fn decl_serializes_type_as_tag() {
        let decl = AttributeDecl::new("created_at", "datetime").with_default();
        let json = serde_json::to_value(&decl).unwrap();
        assert_eq!(json["type"], "datetime");
        assert_eq!(json["has_default"], true);
    }
}
