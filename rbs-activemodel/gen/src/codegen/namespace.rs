//! Namespace header and footer.
//!
//! Every segment of the qualified name opens its own `class`/`module` line;
//! the footer closes each of them with `end`.

use rbs_activemodel_define::{ClassDescriptor, ConstantKind, explicit_superclass};

use crate::errors::GeneratorError;

/// `true` for a constant name segment such as `Foo` or `HTTPClient2`.
pub fn is_constant_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `true` for a (possibly `::`-prefixed) constant path such as `::A::B`.
pub fn is_constant_path(path: &str) -> bool {
    let path = path.strip_prefix("::").unwrap_or(path);
    !path.is_empty() && path.split("::").all(is_constant_segment)
}

fn resolve(
    descriptor: &ClassDescriptor,
    path: &str,
    is_last: bool,
) -> Result<ConstantKind, GeneratorError> {
    if is_last {
        return Ok(ConstantKind::Class {
            superclass: descriptor.superclass.clone(),
        });
    }
    descriptor
        .enclosing
        .get(path)
        .cloned()
        .ok_or_else(|| GeneratorError::Resolution {
            constant: path.to_string(),
        })
}

/// Renders one opening line per namespace segment, outermost first.
///
/// ## Errors
///
/// - [`GeneratorError::InvalidName`] if the qualified name (or a superclass)
///   is not a well-formed constant path.
/// - [`GeneratorError::Resolution`] if an enclosing segment is unknown or is
///   neither a class nor a module.
pub fn header(descriptor: &ClassDescriptor) -> Result<String, GeneratorError> {
    if !descriptor.segments().into_iter().all(is_constant_segment) {
        return Err(GeneratorError::InvalidName {
            name: descriptor.qualified_name.clone(),
        });
    }

    let segments = descriptor.segments();
    let paths = descriptor.segment_paths();
    let mut lines = Vec::with_capacity(segments.len());

    for (index, (segment, path)) in segments.iter().zip(&paths).enumerate() {
        let is_last = index + 1 == segments.len();
        let line = match resolve(descriptor, path, is_last)? {
            ConstantKind::Class { superclass } => {
                match explicit_superclass(superclass.as_deref()) {
                    None => format!("class {segment}"),
                    Some(superclass) if is_constant_path(superclass) => {
                        format!("class {segment} < ::{superclass}")
                    }
                    Some(superclass) => {
                        return Err(GeneratorError::InvalidName {
                            name: superclass.to_string(),
                        });
                    }
                }
            }
            ConstantKind::Module => format!("module {segment}"),
            ConstantKind::Value => {
                return Err(GeneratorError::Resolution {
                    constant: path.clone(),
                });
            }
        };
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// One `end` per namespace segment.
pub fn footer(descriptor: &ClassDescriptor) -> String {
    "end\n".repeat(descriptor.segments().len())
}
