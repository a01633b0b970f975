/* Definition unit: lifecycle members, the class accessor, and one forwarding
 * body per bound method.
 */

use crate::codegen::descriptor::{method_signature, placeholder_type};
use crate::codegen::mangle::escape;
use crate::codegen::{FILE_TOP, GenError};
use crate::model::types::{ClassModel, JavaType, MethodModel};
use std::fmt::Write;

pub fn emit_definition(class: &ClassModel, pch: Option<&str>) -> Result<String, GenError> {
    let namespace = super::namespace_of(class)?;
    let cname = super::peer_class_name(class);

    let mut out = String::new();
    writeln!(out, "{}", FILE_TOP).unwrap();
    if let Some(pch) = pch {
        writeln!(out, "#include <{}>", pch).unwrap();
    }
    out.push('\n');

    writeln!(out, "{}", super::namespace_begin(namespace)).unwrap();
    out.push('\n');

    /* Default constructor */
    writeln!(out, "{}::{}()", cname, cname).unwrap();
    out.push_str("{\n}\n");
    out.push('\n');

    /* Constructor from a Java object handle */
    writeln!(out, "{}::{}(jobject object)", cname, cname).unwrap();
    out.push_str("\t: ::JNI::ManagedPeer(object)\n");
    out.push_str("{\n}\n");
    out.push('\n');

    /* Destructor */
    writeln!(out, "{}::~{}()", cname, cname).unwrap();
    out.push_str("{\n}\n");
    out.push('\n');

    /* GetClass resolves the Java class once through a function-local static
     * ref-counted handle; the single-initialization guarantee comes from the
     * C++ static-initialization rules of the generated code. */
    writeln!(out, "jclass {}::GetClass()", cname).unwrap();
    out.push_str("{\n");
    writeln!(
        out,
        "\tstatic ::JNI::JClass clazz(\"L{};\");",
        class.binary_name()
    )
    .unwrap();
    out.push_str("\treturn clazz;\n");
    out.push_str("}\n");
    out.push('\n');

    for method in class.bound_methods() {
        emit_method_body(&mut out, method, &cname)?;
    }

    writeln!(out, "{}", super::namespace_end(namespace)).unwrap();

    Ok(out)
}

fn emit_method_body(out: &mut String, method: &MethodModel, cname: &str) -> Result<(), GenError> {
    let return_type = placeholder_type(&method.return_type)?;
    let qualifiers = if method.is_static { "" } else { " const" };
    let arguments = super::arguments_signature(method, true)?;
    let signature =
        method_signature(method).map_err(|e| GenError::Signature(e.to_string()))?;

    writeln!(
        out,
        "{} {}::{}({}){}",
        return_type,
        cname,
        escape(&method.name),
        arguments,
        qualifiers
    )
    .unwrap();
    out.push_str("{\n");

    /* Method identifier resolved once, on first use */
    writeln!(
        out,
        "\tstatic jmethodID methodID(Env().Get{}MethodID(GetClass(), \"{}\", \"{}\"));",
        if method.is_static { "Static" } else { "" },
        method.name,
        signature
    )
    .unwrap();

    /* Single dispatcher call; static methods receive the class, instance
     * methods the wrapped object handle. */
    let call = call_expression(method)?;
    let receiver = if method.is_static { "GetClass()" } else { "Object()" };
    let forwarded = super::arguments_signature(method, false)?;
    if forwarded.is_empty() {
        writeln!(out, "\t{}({}, methodID);", call, receiver).unwrap();
    } else {
        writeln!(out, "\t{}({}, methodID, {});", call, receiver, forwarded).unwrap();
    }

    out.push_str("}\n");
    out.push('\n');
    Ok(())
}

/* Select the dispatcher variant from the return type kind. Arrays and
 * declared types both route through the Object variant with a cast, since
 * both are reference handles at the ABI boundary. */
fn call_expression(method: &MethodModel) -> Result<String, GenError> {
    let (base, needs_cast, needs_return) = match &method.return_type {
        JavaType::Void => ("Void", false, false),
        JavaType::Array(_) | JavaType::Declared { .. } => ("Object", true, true),
        JavaType::Boolean => ("Boolean", false, true),
        JavaType::Byte => ("Byte", false, true),
        JavaType::Char => ("Char", false, true),
        JavaType::Short => ("Short", false, true),
        JavaType::Int => ("Int", false, true),
        JavaType::Long => ("Long", false, true),
        JavaType::Float => ("Float", false, true),
        JavaType::Double => ("Double", false, true),
    };

    let mut expr = String::new();
    if needs_return {
        expr.push_str("return ");
    }
    if needs_cast {
        write!(expr, "({})", placeholder_type(&method.return_type)?).unwrap();
    }
    write!(
        expr,
        "Env().Call{}{}Method",
        if method.is_static { "Static" } else { "" },
        base
    )
    .unwrap();

    Ok(expr)
}
