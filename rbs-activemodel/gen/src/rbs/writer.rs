//! Canonical printer for [`Signature`] trees.
//!
//! Layout rules:
//!
//! - two-space indentation per nesting level
//! - at most one blank line between members, and only where the source had one
//! - no blank line after a declaration header or before its `end`
//! - exactly one blank line between top-level declarations
//! - a single trailing newline

use super::ast::{
    ClassType, Declaration, DeclarationKind, Member, MemberKind, MethodDef, MethodType, Param,
    ParamKind, Signature, Type,
};

const INDENT: &str = "  ";

/// Renders a signature in canonical layout.
pub fn write_signature(signature: &Signature) -> String {
    let mut out = Writer::default();
    for (index, declaration) in signature.declarations.iter().enumerate() {
        if index > 0 {
            out.blank();
        }
        out.declaration(declaration, &[], &[]);
    }
    if !signature.trailing_comments.is_empty() {
        if !signature.declarations.is_empty() {
            out.blank();
        }
        out.comments(&signature.trailing_comments);
    }
    out.buf
}

#[derive(Default)]
struct Writer {
    buf: String,
    depth: usize,
}

impl Writer {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn comments(&mut self, comments: &[String]) {
        for comment in comments {
            self.line(&format!("#{comment}"));
        }
    }

    /// Puts `comment` at the end of the line just written.
    fn append_comment(&mut self, comment: Option<&str>) {
        if let Some(comment) = comment {
            self.buf.pop();
            self.buf.push_str(" #");
            self.buf.push_str(comment);
            self.buf.push('\n');
        }
    }

    fn annotations(&mut self, annotations: &[String]) {
        for annotation in annotations {
            self.line(&format_annotation(annotation));
        }
    }

    /// `comments` and `annotations` come from the enclosing member when the
    /// declaration is nested.
    fn declaration(&mut self, decl: &Declaration, comments: &[String], annotations: &[String]) {
        self.comments(comments);
        self.comments(&decl.comments);
        self.annotations(annotations);
        self.annotations(&decl.annotations);

        let header = match &decl.kind {
            DeclarationKind::Class {
                superclass: Some(superclass),
            } => format!("class {} < {}", decl.name, class_type(superclass)),
            DeclarationKind::Class { superclass: None } => format!("class {}", decl.name),
            DeclarationKind::Module => format!("module {}", decl.name),
        };
        self.line(&header);
        self.append_comment(decl.header_comment.as_deref());

        self.depth += 1;
        for (index, member) in decl.members.iter().enumerate() {
            if index > 0 && member.blank_before {
                self.blank();
            }
            self.member(member);
        }
        self.comments(&decl.trailing_comments);
        self.depth -= 1;

        self.line("end");
        self.append_comment(decl.end_comment.as_deref());
    }

    fn member(&mut self, member: &Member) {
        if let MemberKind::Declaration(decl) = &member.kind {
            self.declaration(decl, &member.comments, &member.annotations);
            return;
        }

        self.comments(&member.comments);
        self.annotations(&member.annotations);
        match &member.kind {
            MemberKind::Include(module) => self.line(&format!("include {}", class_type(module))),
            MemberKind::Extend(module) => self.line(&format!("extend {}", class_type(module))),
            MemberKind::Attribute { kind, name, ty } => {
                self.line(&format!("{} {name}: {}", kind.keyword(), type_to_string(ty, 0)))
            }
            MemberKind::Method(method) => self.method(method),
            MemberKind::Alias { new_name, old_name } => {
                self.line(&format!("alias {new_name} {old_name}"))
            }
            MemberKind::Declaration(_) => {}
        }
        self.append_comment(member.line_comment.as_deref());
    }

    /// Overloads after the first go on continuation lines with `|` under
    /// the colon of `def name:`.
    fn method(&mut self, method: &MethodDef) {
        let prefix = format!(
            "def {}{}:",
            if method.singleton { "self." } else { "" },
            method.name
        );
        let padding = " ".repeat(prefix.len().saturating_sub(1));
        for (index, overload) in method.overloads.iter().enumerate() {
            if index == 0 {
                self.line(&format!("{prefix} {}", method_type(overload)));
            } else {
                self.line(&format!("{padding}| {}", method_type(overload)));
            }
        }
    }
}

/// Chooses delimiters that do not clash with the annotation text.
fn format_annotation(text: &str) -> String {
    const DELIMITERS: [(char, char); 5] = [('{', '}'), ('(', ')'), ('[', ']'), ('<', '>'), ('|', '|')];
    let (open, close) = DELIMITERS
        .iter()
        .copied()
        .find(|(open, close)| !text.contains(*open) && !text.contains(*close))
        .unwrap_or(('{', '}'));
    format!("%a{open}{text}{close}")
}

fn class_type(class: &ClassType) -> String {
    if class.args.is_empty() {
        class.name.to_string()
    } else {
        let args: Vec<_> = class.args.iter().map(|arg| type_to_string(arg, 0)).collect();
        format!("{}[{}]", class.name, args.join(", "))
    }
}

fn method_type(method_type: &MethodType) -> String {
    let params: Vec<_> = method_type.params.iter().map(param).collect();
    format!(
        "({}) -> {}",
        params.join(", "),
        type_to_string(&method_type.return_type, 1)
    )
}

fn param(param: &Param) -> String {
    let ty = type_to_string(&param.ty, 0);
    let mut out = match &param.kind {
        ParamKind::Required => ty,
        ParamKind::Optional => format!("?{ty}"),
        ParamKind::Rest => format!("*{ty}"),
        ParamKind::RequiredKeyword(key) => format!("{key}: {ty}"),
        ParamKind::OptionalKeyword(key) => format!("?{key}: {ty}"),
        ParamKind::KeywordRest => format!("**{ty}"),
    };
    if let Some(name) = &param.name {
        out.push(' ');
        out.push_str(name);
    }
    out
}

/// Renders a type. `level` 0 allows a bare union; anything higher (optional
/// operands, return types) wraps unions in parentheses.
pub fn type_to_string(ty: &Type, level: u8) -> String {
    match ty {
        Type::Base(base) => base.keyword().to_string(),
        Type::Class(class) => class_type(class),
        Type::Alias(name) => name.to_string(),
        Type::Optional(inner) => match inner.as_ref() {
            Type::Optional(_) => type_to_string(inner, level),
            _ => format!("{}?", type_to_string(inner, 1)),
        },
        Type::Union(members) => {
            let rendered: Vec<_> = members.iter().map(|m| type_to_string(m, 1)).collect();
            let joined = rendered.join(" | ");
            if level > 0 {
                format!("({joined})")
            } else {
                joined
            }
        }
    }
}
