/* Legacy native export: the old stub flavor. Overloads are not
 * disambiguated (every symbol keeps its short form), and a companion .c
 * unit with empty function skeletons is emitted for hand implementation.
 */

use crate::codegen::descriptor::placeholder_type;
use crate::codegen::mangle::{escape, exported_symbol};
use crate::codegen::{FILE_TOP, GenError, GeneratedUnit};
use crate::model::types::ClassModel;
use std::fmt::Write;

pub fn emit(class: &ClassModel) -> Result<(GeneratedUnit, GeneratedUnit), GenError> {
    let cname = escape(&class.simple_name);

    let header = super::header_gen::emit_header(class, /*disambiguate_overloads:*/ false)?;
    let stubs = emit_stubs(class, &cname)?;

    Ok((
        GeneratedUnit::new(format!("{}.h", cname), header),
        GeneratedUnit::new(format!("{}.c", cname), stubs),
    ))
}

fn emit_stubs(class: &ClassModel, cname: &str) -> Result<String, GenError> {
    let mut out = String::new();
    writeln!(out, "{}", FILE_TOP).unwrap();
    writeln!(out, "#include \"{}.h\"", cname).unwrap();

    for method in class.native_methods() {
        let symbol = exported_symbol(class, method, false)
            .map_err(|e| GenError::Signature(e.to_string()))?;

        out.push('\n');
        writeln!(
            out,
            "JNIEXPORT {} JNICALL {}",
            placeholder_type(&method.return_type)?,
            symbol
        )
        .unwrap();

        let mut params = vec![
            "JNIEnv *env".to_string(),
            if method.is_static {
                "jclass cls".to_string()
            } else {
                "jobject obj".to_string()
            },
        ];
        for param in &method.params {
            params.push(format!("{} {}", placeholder_type(&param.ty)?, param.name));
        }
        writeln!(out, "  ({})", params.join(", ")).unwrap();
        out.push_str("{\n");
        out.push_str("}\n");
    }

    Ok(out)
}
