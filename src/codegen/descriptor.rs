/* Type descriptor builder.
 *
 * Maps a resolved type to (a) the JNI placeholder type spelled in generated
 * declarations and (b) the binary descriptor string used in signatures and
 * symbol mangling.
 */

use crate::model::types::{DeclaredKind, JavaType, MethodModel};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /* The input model is malformed; not user-recoverable. Aborts generation
     * for the enclosing class only. */
    #[error("unsupported type kind: {0}")]
    UnsupportedType(String),
}

/// JNI placeholder type used at declaration sites (`jint`, `jstring`, ...).
pub fn placeholder_type(ty: &JavaType) -> Result<String, DescriptorError> {
    let name = match ty {
        JavaType::Void => "void",
        JavaType::Boolean => "jboolean",
        JavaType::Byte => "jbyte",
        JavaType::Char => "jchar",
        JavaType::Short => "jshort",
        JavaType::Int => "jint",
        JavaType::Long => "jlong",
        JavaType::Float => "jfloat",
        JavaType::Double => "jdouble",
        JavaType::Array(element) => {
            return match element.as_ref() {
                JavaType::Boolean => Ok("jbooleanArray".to_string()),
                JavaType::Byte => Ok("jbyteArray".to_string()),
                JavaType::Char => Ok("jcharArray".to_string()),
                JavaType::Short => Ok("jshortArray".to_string()),
                JavaType::Int => Ok("jintArray".to_string()),
                JavaType::Long => Ok("jlongArray".to_string()),
                JavaType::Float => Ok("jfloatArray".to_string()),
                JavaType::Double => Ok("jdoubleArray".to_string()),
                JavaType::Array(_) | JavaType::Declared { .. } => Ok("jobjectArray".to_string()),
                JavaType::Void => Err(DescriptorError::UnsupportedType("array of void".to_string())),
            };
        }
        JavaType::Declared { kind, .. } => match kind {
            DeclaredKind::String => "jstring",
            DeclaredKind::Throwable => "jthrowable",
            DeclaredKind::Class => "jclass",
            DeclaredKind::Object => "jobject",
        },
    };
    Ok(name.to_string())
}

/// Binary descriptor string (`I`, `[I`, `Ljava/lang/String;`, ...).
pub fn descriptor(ty: &JavaType) -> Result<String, DescriptorError> {
    let desc = match ty {
        JavaType::Void => "V".to_string(),
        JavaType::Boolean => "Z".to_string(),
        JavaType::Byte => "B".to_string(),
        JavaType::Char => "C".to_string(),
        JavaType::Short => "S".to_string(),
        JavaType::Int => "I".to_string(),
        JavaType::Long => "J".to_string(),
        JavaType::Float => "F".to_string(),
        JavaType::Double => "D".to_string(),
        JavaType::Array(element) => {
            if matches!(element.as_ref(), JavaType::Void) {
                return Err(DescriptorError::UnsupportedType("array of void".to_string()));
            }
            format!("[{}", descriptor(element)?)
        }
        JavaType::Declared { name, .. } => format!("L{};", name.replace('.', "/")),
    };
    Ok(desc)
}

/// Concatenated parameter descriptors, no enclosing parentheses.
pub fn parameter_descriptors(method: &MethodModel) -> Result<String, DescriptorError> {
    let mut out = String::new();
    for param in &method.params {
        out.push_str(&descriptor(&param.ty)?);
    }
    Ok(out)
}

/// Full JNI method signature, `(<params>)<return>`.
pub fn method_signature(method: &MethodModel) -> Result<String, DescriptorError> {
    Ok(format!(
        "({}){}",
        parameter_descriptors(method)?,
        descriptor(&method.return_type)?
    ))
}
