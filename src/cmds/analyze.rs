/* Analyze command - inspect symbols and signatures without writing files */

use crate::codegen::descriptor::{method_signature, placeholder_type};
use crate::codegen::mangle::{exported_symbol, overloaded_names};
use crate::model::file::load_model_files;
use std::path::PathBuf;

/* Execute the analyze command */
pub fn run(files: Vec<PathBuf>) -> anyhow::Result<()> {
  println!("Peer Generator - Symbol Analysis Tool");
  println!("=====================================\n");

  let classes = load_model_files(&files)?;
  println!("[~] Loaded {} class(es) from {} file(s)", classes.len(), files.len());

  for class in &classes {
    println!("\n[*] {}", class.qualified_name);
    if let Some(namespace) = &class.namespace {
      println!("    namespace: {}", namespace.join("."));
    }

    let overloaded = overloaded_names(class.native_methods());
    for method in class.methods.iter().filter(|m| m.bound || m.is_native) {
      let signature = match method_signature(method) {
        Ok(sig) => sig,
        Err(e) => {
          eprintln!("    [!] {}: {}", method.name, e);
          continue;
        }
      };
      let long_form = overloaded.contains(&method.name);
      let symbol = match exported_symbol(class, method, long_form) {
        Ok(symbol) => symbol,
        Err(e) => {
          eprintln!("    [!] {}: {}", method.name, e);
          continue;
        }
      };
      let return_type = match placeholder_type(&method.return_type) {
        Ok(ty) => ty,
        Err(e) => {
          eprintln!("    [!] {}: {}", method.name, e);
          continue;
        }
      };

      println!("    {} {}", return_type, method.name);
      println!("      signature: {}", signature);
      println!("      symbol:    {}{}", symbol, if long_form { "  (long form)" } else { "" });
    }

    let foldable = class
      .all_fields()
      .iter()
      .filter(|f| f.is_static && f.is_final && f.constant.is_some())
      .count();
    if foldable > 0 {
      println!("    {} foldable constant(s)", foldable);
    }
  }

  Ok(())
}
