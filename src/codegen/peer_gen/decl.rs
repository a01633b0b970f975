/* Declaration unit: the C++ header exposing the peer class shape */

use crate::codegen::consts::fold_constants;
use crate::codegen::descriptor::placeholder_type;
use crate::codegen::mangle::escape;
use crate::codegen::{FILE_TOP, GenError};
use crate::model::types::ClassModel;
use std::fmt::Write;

pub fn emit_declaration(class: &ClassModel) -> Result<String, GenError> {
    let namespace = super::namespace_of(class)?;
    let cname = super::peer_class_name(class);

    let mut out = String::new();
    writeln!(out, "{}", FILE_TOP).unwrap();
    out.push_str("#pragma once\n");
    out.push('\n');
    out.push_str("#include <JNIManagedPeer.h>\n");
    out.push_str("#include <jni.h>\n");
    out.push('\n');

    /* Folded static-final constants live outside the namespace; they are
     * preprocessor definitions. */
    let constants = fold_constants(class);
    if !constants.is_empty() {
        out.push_str(&constants);
        out.push('\n');
    }

    writeln!(out, "{}", super::namespace_begin(namespace)).unwrap();
    out.push('\n');

    /* All peers derive from the base ::JNI::ManagedPeer class, which owns
     * the object handle and reference management. */
    writeln!(out, "class {} : public ::JNI::ManagedPeer", cname).unwrap();
    out.push_str("{\n");
    out.push_str("public:\n");
    writeln!(out, "\t{}();", cname).unwrap();
    writeln!(out, "\texplicit {}(jobject object);", cname).unwrap();
    writeln!(out, "\t~{}();", cname).unwrap();
    out.push('\n');
    writeln!(
        out,
        "\t{}& operator=(jobject object) {{ ::JNI::ManagedPeer::operator=(object); return *this; }}",
        cname
    )
    .unwrap();
    out.push('\n');
    out.push_str("\tstatic jclass GetClass();\n");
    out.push('\n');

    /* One declaration per bound method. Instance methods are read-only
     * accessors over an immutable handle, hence const. */
    for method in class.bound_methods() {
        let modifiers = if method.is_static { "static " } else { "" };
        let qualifiers = if method.is_static { "" } else { " const" };
        let return_type = placeholder_type(&method.return_type)?;
        let arguments = super::arguments_signature(method, true)?;
        writeln!(
            out,
            "\t{}{} {}({}){};",
            modifiers,
            return_type,
            escape(&method.name),
            arguments,
            qualifiers
        )
        .unwrap();
    }

    out.push_str("};\n");
    out.push('\n');
    writeln!(out, "{}", super::namespace_end(namespace)).unwrap();

    Ok(out)
}
