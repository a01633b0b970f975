/* Loading of class model files.
 *
 * Model files are JSON documents produced by the annotation-discovery side of
 * the tool; each file carries the classes that participate in generation.
 */

use crate::model::types::ClassModel;
use anyhow::Context;
use serde_derive::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PeerModelFile {
    #[serde(default)]
    pub classes: Vec<ClassModel>,
}

/* Load a single model file. Unreadable or malformed files abort the run. */
pub fn load_model_file(path: &Path) -> anyhow::Result<PeerModelFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model file {}", path.display()))?;

    let model: PeerModelFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse model file {}", path.display()))?;

    Ok(model)
}

/* Load and concatenate several model files in the order given */
pub fn load_model_files(paths: &[std::path::PathBuf]) -> anyhow::Result<Vec<ClassModel>> {
    let mut classes = Vec::new();
    for path in paths {
        let model = load_model_file(path)?;
        classes.extend(model.classes);
    }
    Ok(classes)
}
