//! Syntax tree for the RBS subset the formatter understands.
//!
//! Parentheses used only for grouping are not represented; the writer puts
//! them back wherever precedence requires.

use std::fmt;

/// A parsed signature file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    pub declarations: Vec<Declaration>,
    /// Comments after the last declaration.
    pub trailing_comments: Vec<String>,
}

/// `class` or `module` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Name as written in the header, possibly namespaced (`A::B`).
    pub name: TypeName,
    pub comments: Vec<String>,
    pub annotations: Vec<String>,
    /// Comment at the end of the header line.
    pub header_comment: Option<String>,
    pub members: Vec<Member>,
    /// Comments between the last member and `end`.
    pub trailing_comments: Vec<String>,
    /// Comment at the end of the `end` line.
    pub end_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    Class { superclass: Option<ClassType> },
    Module,
}

/// One entry in a declaration body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub kind: MemberKind,
    pub comments: Vec<String>,
    pub annotations: Vec<String>,
    /// Comment at the end of the member's last line.
    pub line_comment: Option<String>,
    /// At least one blank line separated this member from the previous one.
    pub blank_before: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Include(ClassType),
    Extend(ClassType),
    Attribute {
        kind: AttributeKind,
        name: String,
        ty: Type,
    },
    Method(MethodDef),
    Alias {
        new_name: String,
        old_name: String,
    },
    Declaration(Declaration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Reader,
    Writer,
    Accessor,
}

impl AttributeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Reader => "attr_reader",
            Self::Writer => "attr_writer",
            Self::Accessor => "attr_accessor",
        }
    }
}

/// `def name: overload | overload ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    pub name: String,
    /// `def self.name`
    pub singleton: bool,
    pub overloads: Vec<MethodType>,
}

/// `(params) -> return_type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodType {
    pub params: Vec<Param>,
    pub return_type: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub kind: ParamKind,
    pub ty: Type,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    Required,
    /// `?T`
    Optional,
    /// `*T`
    Rest,
    /// `key: T`
    RequiredKeyword(String),
    /// `?key: T`
    OptionalKeyword(String),
    /// `**T`
    KeywordRest,
}

/// A possibly absolute, possibly namespaced constant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub absolute: bool,
    pub path: Vec<String>,
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str("::")?;
        }
        f.write_str(&self.path.join("::"))
    }
}

/// A class name with optional type arguments, as used by `include`,
/// `extend`, and superclass clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassType {
    pub name: TypeName,
    pub args: Vec<Type>,
}

/// Keyword types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Bool,
    Untyped,
    Instance,
    SelfType,
    Nil,
    Void,
    Top,
    Bot,
    True,
    False,
}

impl BaseType {
    pub fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "bool" => Self::Bool,
            "untyped" => Self::Untyped,
            "instance" => Self::Instance,
            "self" => Self::SelfType,
            "nil" => Self::Nil,
            "void" => Self::Void,
            "top" => Self::Top,
            "bot" => Self::Bot,
            "true" => Self::True,
            "false" => Self::False,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Untyped => "untyped",
            Self::Instance => "instance",
            Self::SelfType => "self",
            Self::Nil => "nil",
            Self::Void => "void",
            Self::Top => "top",
            Self::Bot => "bot",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Base(BaseType),
    /// `Integer`, `::Array[String]`, `_Each[T]`
    Class(ClassType),
    /// Lower-case type alias reference such as `boolish`.
    Alias(TypeName),
    /// `T?`
    Optional(Box<Type>),
    /// `A | B | C`
    Union(Vec<Type>),
}
