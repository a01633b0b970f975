pub mod consts;
pub mod descriptor;
pub mod header_gen;
pub mod legacy_gen;
pub mod mangle;
pub mod peer_gen;

use crate::diag::Diagnostic;
use crate::model::types::ClassModel;
use crate::output::OutputWriter;
use self::descriptor::DescriptorError;
use std::path::Path;
use thiserror::Error;

/* Preamble shared by every generated unit */
pub const FILE_TOP: &str = "/* DO NOT EDIT THIS FILE - it is machine generated */";

/* Long-literal suffix for folded 64-bit constants. Visual C++ spells it i64,
 * everything else takes LL. Build-time constant, never a runtime decision. */
pub const LONG_LITERAL_SUFFIX: &str = if cfg!(windows) { "i64" } else { "LL" };

/// One generated output file: target filename plus its full byte content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl GeneratedUnit {
    pub fn new(filename: String, content: String) -> Self {
        Self {
            filename,
            bytes: content.into_bytes(),
        }
    }
}

/// Closed set of emission strategies. Each is a pure function from a class
/// model to its generated units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Managed-peer declaration + definition pair with call forwarding.
    FullPeer,
    /// Classic native-export header, declaration unit only.
    HeaderExport,
    /// Old-style export header plus an empty stubs unit; short symbols only.
    LegacyExport,
}

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub strategy: Strategy,
    /* Precompiled header to include at the top of definition units */
    pub pch: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::FullPeer,
            pch: None,
        }
    }
}

/* Class-scoped generation failures. Each aborts the enclosing class's units
 * and surfaces through the diagnostics boundary; the batch continues. */
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("unsupported type kind: {0}")]
    UnsupportedType(String),
    #[error("missing namespace")]
    MissingNamespace,
    #[error("signature computation failed: {0}")]
    Signature(String),
}

impl From<DescriptorError> for GenError {
    fn from(err: DescriptorError) -> Self {
        match err {
            DescriptorError::UnsupportedType(kind) => GenError::UnsupportedType(kind),
        }
    }
}

impl GenError {
    /// Structured (key, args) report for the external renderer.
    pub fn to_diagnostic(&self, class: &ClassModel) -> Diagnostic {
        match self {
            GenError::UnsupportedType(kind) => Diagnostic::new(
                "jni.unknown.type",
                vec![class.qualified_name.clone(), kind.clone()],
            ),
            GenError::MissingNamespace => Diagnostic::new(
                "jniclass.missing.namespace",
                vec![class.qualified_name.clone()],
            ),
            GenError::Signature(message) => Diagnostic::new(
                "jni.sigerror",
                vec![class.qualified_name.clone(), message.clone()],
            ),
        }
    }
}

/// Generate the units for one class under the selected strategy.
pub fn emit_class(
    class: &ClassModel,
    options: &GeneratorOptions,
) -> Result<Vec<GeneratedUnit>, GenError> {
    match options.strategy {
        Strategy::FullPeer => {
            let (decl, def) = peer_gen::emit(class, options.pch.as_deref())?;
            Ok(vec![decl, def])
        }
        Strategy::HeaderExport => Ok(vec![header_gen::emit(class)?]),
        Strategy::LegacyExport => {
            let (header, stubs) = legacy_gen::emit(class)?;
            Ok(vec![header, stubs])
        }
    }
}

/// Drive generation for a batch of classes. Class-scoped failures are
/// reported and skipped; I/O failures abort the whole run.
pub fn generate_all(
    classes: &[ClassModel],
    options: &GeneratorOptions,
    output_dir: &Path,
    writer: &OutputWriter,
    reporter: &mut crate::diag::Reporter,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(output_dir)?;

    for class in classes {
        match emit_class(class, options) {
            Ok(units) => {
                for unit in units {
                    let target = output_dir.join(&unit.filename);
                    writer.write_if_changed(&unit.bytes, &target)?;
                }
            }
            Err(err) => reporter.error(err.to_diagnostic(class)),
        }
    }

    Ok(())
}
