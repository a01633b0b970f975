/* Managed-peer emission: one declaration unit (C++ header) and one
 * definition unit (C++ source) per class. The generated class wraps a Java
 * object handle and forwards each bound method through the JNI dispatcher.
 */

mod decl;
mod def;

pub use decl::emit_declaration;
pub use def::emit_definition;

use crate::codegen::descriptor::placeholder_type;
use crate::codegen::{GenError, GeneratedUnit};
use crate::model::types::{ClassModel, MethodModel};

pub const PEER_SUFFIX: &str = "ManagedPeer";

/// Base filename for both units: mangled simple name + peer suffix. Derived
/// from the simple name only, so equally named classes in different
/// namespaces collide. Known sharp edge, kept as-is.
pub fn base_file_name(class: &ClassModel) -> String {
    format!("{}{}", crate::codegen::mangle::escape(&class.simple_name), PEER_SUFFIX)
}

/// Generated peer class name (same spelling as the base filename).
pub fn peer_class_name(class: &ClassModel) -> String {
    base_file_name(class)
}

/// Emit the declaration/definition pair for one class.
pub fn emit(
    class: &ClassModel,
    pch: Option<&str>,
) -> Result<(GeneratedUnit, GeneratedUnit), GenError> {
    let base = base_file_name(class);
    let decl = GeneratedUnit::new(format!("{}.h", base), emit_declaration(class)?);
    let def = GeneratedUnit::new(format!("{}.cpp", base), emit_definition(class, pch)?);
    Ok((decl, def))
}

/// The namespace path of a class, or the class-scoped error when the
/// required namespace metadata is missing or empty.
pub fn namespace_of(class: &ClassModel) -> Result<&[String], GenError> {
    match class.namespace.as_deref() {
        Some(path) if !path.is_empty() => Ok(path),
        _ => Err(GenError::MissingNamespace),
    }
}

/// Opening line of the nested namespace scopes, in path order.
pub fn namespace_begin(namespace: &[String]) -> String {
    let mut out = String::new();
    for segment in namespace {
        out.push_str(&format!("namespace {} {{ ", segment));
    }
    out.trim_end().to_string()
}

/// Closing line, reverse path order, with the dotted path as a trailing
/// comment. Cosmetic only.
pub fn namespace_end(namespace: &[String]) -> String {
    let braces = vec!["}"; namespace.len()].join(" ");
    format!("{} // namespace {}", braces, namespace.join("."))
}

/// Parameter list in declaration order, with or without placeholder types.
pub fn arguments_signature(method: &MethodModel, include_types: bool) -> Result<String, GenError> {
    let mut parts = Vec::with_capacity(method.params.len());
    for param in &method.params {
        if include_types {
            parts.push(format!("{} {}", placeholder_type(&param.ty)?, param.name));
        } else {
            parts.push(param.name.clone());
        }
    }
    Ok(parts.join(", "))
}
