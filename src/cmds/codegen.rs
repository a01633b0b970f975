/* Codegen command - generate native peer bindings from class model files */

use crate::codegen::{GeneratorOptions, Strategy, generate_all};
use crate::diag::{MessageCatalog, Reporter};
use crate::model::file::load_model_files;
use crate::output::OutputWriter;
use anyhow::bail;
use std::path::PathBuf;

/* Execute the codegen command */
pub fn run(
  files: Vec<PathBuf>,
  output_dir: PathBuf,
  strategy: Strategy,
  pch: Option<String>,
  force: bool,
  verbose: bool,
) -> anyhow::Result<()> {
  if verbose {
    println!("Peer Generator - Code Generation Tool");
    println!("=====================================\n");
    println!("[~] Configuration:");
    println!("  Strategy: {:?}", strategy);
    println!("  Output directory: {}", output_dir.display());
    println!("  Input files: {}", files.len());
    for file in &files {
      println!("    - {}", file.display());
    }
    if let Some(pch) = &pch {
      println!("  Precompiled header: {}", pch);
    }
    println!();
  }

  let classes = load_model_files(&files)?;

  if verbose {
    println!("[~] Loaded {} class(es) from {} file(s)", classes.len(), files.len());
    for class in &classes {
      println!("  - {}", class.qualified_name);
    }
    println!();
  }

  let options = GeneratorOptions { strategy, pch };
  let writer = OutputWriter::new(force, verbose);
  let mut reporter = Reporter::new(MessageCatalog::built_in());

  generate_all(&classes, &options, &output_dir, &writer, &mut reporter)?;

  if reporter.error_count() > 0 {
    bail!("generation finished with {} error(s)", reporter.error_count());
  }

  println!("[✓] Code generation complete!");
  Ok(())
}
