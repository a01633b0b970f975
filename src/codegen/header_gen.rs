/* Header-only native export: the classic JNI header with one JNIEXPORT
 * prototype per native method. Produces a single declaration unit.
 */

use crate::codegen::consts::fold_constants;
use crate::codegen::descriptor::{method_signature, placeholder_type};
use crate::codegen::mangle::{class_symbol_fragment, escape, exported_symbol, overloaded_names};
use crate::codegen::{FILE_TOP, GenError, GeneratedUnit};
use crate::model::types::ClassModel;
use std::collections::HashSet;
use std::fmt::Write;

pub fn emit(class: &ClassModel) -> Result<GeneratedUnit, GenError> {
    let content = emit_header(class, /*disambiguate_overloads:*/ true)?;
    let filename = format!("{}.h", escape(&class.simple_name));
    Ok(GeneratedUnit::new(filename, content))
}

/* Shared with the legacy strategy, which never uses long-form symbols */
pub(crate) fn emit_header(
    class: &ClassModel,
    disambiguate_overloads: bool,
) -> Result<String, GenError> {
    let fragment = class_symbol_fragment(&class.qualified_name);

    let mut out = String::new();
    writeln!(out, "{}", FILE_TOP).unwrap();
    out.push_str("#include <jni.h>\n");
    writeln!(out, "/* Header for class {} */", fragment).unwrap();
    out.push('\n');
    writeln!(out, "#ifndef _Included_{}", fragment).unwrap();
    writeln!(out, "#define _Included_{}", fragment).unwrap();
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("extern \"C\" {\n");
    out.push_str("#endif\n");

    let constants = fold_constants(class);
    if !constants.is_empty() {
        out.push_str(&constants);
    }

    let overloaded = if disambiguate_overloads {
        overloaded_names(class.native_methods())
    } else {
        HashSet::new()
    };

    for method in class.native_methods() {
        let signature =
            method_signature(method).map_err(|e| GenError::Signature(e.to_string()))?;
        let long_form = overloaded.contains(&method.name);
        let symbol = exported_symbol(class, method, long_form)
            .map_err(|e| GenError::Signature(e.to_string()))?;

        out.push('\n');
        out.push_str("/*\n");
        writeln!(out, " * Class:     {}", fragment).unwrap();
        writeln!(out, " * Method:    {}", method.name).unwrap();
        writeln!(out, " * Signature: {}", signature).unwrap();
        out.push_str(" */\n");
        writeln!(
            out,
            "JNIEXPORT {} JNICALL {}",
            placeholder_type(&method.return_type)?,
            symbol
        )
        .unwrap();

        let mut params = vec![
            "JNIEnv *".to_string(),
            if method.is_static { "jclass" } else { "jobject" }.to_string(),
        ];
        for param in &method.params {
            params.push(placeholder_type(&param.ty)?);
        }
        writeln!(out, "  ({});", params.join(", ")).unwrap();
    }

    out.push('\n');
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("}\n");
    out.push_str("#endif\n");
    out.push_str("#endif\n");

    Ok(out)
}
