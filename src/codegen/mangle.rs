/* Symbol mangling.
 *
 * Escapes arbitrary source identifiers into the restricted character set of
 * exported native symbols, and computes the final exported symbol for a
 * native-bound method. Two distinct identifiers never collide after escaping:
 * underscore, semicolon and bracket get fixed two-character codes and every
 * other non-alphanumeric UTF-16 code unit escapes to `_0` + four hex digits.
 */

use crate::codegen::descriptor::{parameter_descriptors, DescriptorError};
use crate::model::types::{ClassModel, MethodModel};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt::Write;

pub const SYMBOL_PREFIX: &str = "Java_";

/// Escape one identifier into a symbol fragment.
pub fn escape(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for unit in name.encode_utf16() {
        match char::from_u32(unit as u32) {
            Some(ch) if ch.is_ascii_alphanumeric() => out.push(ch),
            Some('_') => out.push_str("_1"),
            Some(';') => out.push_str("_2"),
            Some('[') => out.push_str("_3"),
            /* Everything else, surrogate halves included, escapes per
             * UTF-16 code unit. */
            _ => write!(out, "_0{:04x}", unit).unwrap(),
        }
    }
    out
}

/// Escaped fully qualified class name for use inside an exported symbol;
/// package separators render as `__`.
pub fn class_symbol_fragment(qualified_name: &str) -> String {
    qualified_name
        .split('.')
        .map(escape)
        .collect::<Vec<_>>()
        .join("__")
}

/// Exported symbol for a native-bound method. `long_form` appends the escaped
/// parameter-descriptor string to disambiguate overloads.
pub fn exported_symbol(
    class: &ClassModel,
    method: &MethodModel,
    long_form: bool,
) -> Result<String, DescriptorError> {
    let mut symbol = String::from(SYMBOL_PREFIX);
    symbol.push_str(&class_symbol_fragment(&class.qualified_name));
    symbol.push('_');
    symbol.push_str(&escape(&method.name));

    if long_form {
        symbol.push_str("__");
        symbol.push_str(&escape(&parameter_descriptors(method)?));
    }

    Ok(symbol)
}

/// Simple names shared by two or more native-bound methods of `class`.
/// Every method with such a name takes the long form, including the ones
/// that would be unambiguous in isolation.
pub fn overloaded_names<'a, I>(methods: I) -> HashSet<String>
where
    I: Iterator<Item = &'a MethodModel>,
{
    let mut census: IndexMap<&str, usize> = IndexMap::new();
    for method in methods {
        *census.entry(method.name.as_str()).or_insert(0) += 1;
    }

    census
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}
