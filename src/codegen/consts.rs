/* Constant folding for static final fields.
 *
 * Qualifying fields (static, final, with a compile-time constant) render as
 * preprocessor redefinitions in the declaration unit. Fields are gathered
 * over the whole superclass chain, root ancestor first.
 */

use crate::codegen::mangle::{class_symbol_fragment, escape};
use crate::codegen::LONG_LITERAL_SUFFIX;
use crate::model::types::{ClassModel, ConstantValue, FieldModel};
use std::fmt::Write;

/// Render the `#undef`/`#define` block for every foldable field of `class`
/// and its ancestors. Non-qualifying fields are skipped silently.
pub fn fold_constants(class: &ClassModel) -> String {
    let mut out = String::new();
    let class_fragment = class_symbol_fragment(&class.qualified_name);

    for field in class.all_fields() {
        if let Some(rendered) = define_for_static(&class_fragment, field) {
            out.push_str(&rendered);
        }
    }

    out
}

fn define_for_static(class_fragment: &str, field: &FieldModel) -> Option<String> {
    if !field.is_static || !field.is_final {
        return None;
    }
    let value = field.constant.as_ref()?;
    let literal = constant_literal(value);

    let name = format!("{}_{}", class_fragment, escape(&field.name));
    let mut out = String::new();
    writeln!(out, "#undef {}", name).unwrap();
    writeln!(out, "#define {} {}", name, literal).unwrap();
    Some(out)
}

/* C literal spelling for a constant value. The infinite float/double
 * spellings are bug-compatible with the original tool. */
fn constant_literal(value: &ConstantValue) -> String {
    match value {
        ConstantValue::Int(v) => format!("{}L", v),
        ConstantValue::Boolean(v) => format!("{}L", if *v { 1 } else { 0 }),
        /* Characters fold as their unsigned 16-bit numeric value */
        ConstantValue::Char(v) => format!("{}L", v),
        ConstantValue::Long(v) => format!("{}{}", v, LONG_LITERAL_SUFFIX),
        ConstantValue::Float(v) => {
            if v.is_infinite() {
                format!("{}Inff", if *v < 0.0 { "-" } else { "" })
            } else {
                format!("{:?}f", v)
            }
        }
        ConstantValue::Double(v) => {
            if v.is_infinite() {
                format!("{}InfD", if *v < 0.0 { "-" } else { "" })
            } else {
                format!("{:?}", v)
            }
        }
    }
}
