//! Durable model artifact.
//!
//! A trained pipeline serializes to `model.json` inside the model
//! directory, with a companion `labels.json` listing the label set used at
//! training time. Both files are written to a temp path and renamed into
//! place, so a concurrent reader never observes a truncated artifact.

use crate::classifier::{TextClassifier, TfidfLogisticPipeline};
use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

const ARTIFACT_VERSION: u32 = 1;

/// File name of the serialized pipeline.
pub const MODEL_FILE: &str = "model.json";
/// File name of the companion label-set listing.
pub const LABELS_FILE: &str = "labels.json";

/// Versioned on-disk form of a trained pipeline.
#[derive(Debug, Serialize, Deserialize)]
struct ModelArtifact {
    version: u32,
    pipeline: TfidfLogisticPipeline,
}

/// Companion label-set file, for diagnostics outside this process.
#[derive(Debug, Serialize, Deserialize)]
struct LabelManifest {
    labels: Vec<String>,
}

/// Persist a trained pipeline into `dir`, creating it if needed.
pub fn save(pipeline: &TfidfLogisticPipeline, dir: &Path) -> ModelResult<()> {
    std::fs::create_dir_all(dir)?;

    let artifact = ModelArtifact {
        version: ARTIFACT_VERSION,
        pipeline: pipeline.clone(),
    };
    let model_json = serde_json::to_string_pretty(&artifact)
        .map_err(|e| ModelError::Training(format!("serializing model: {}", e)))?;
    write_atomic(&dir.join(MODEL_FILE), &model_json)?;

    let manifest = LabelManifest {
        labels: pipeline.labels().to_vec(),
    };
    let labels_json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| ModelError::Training(format!("serializing label set: {}", e)))?;
    write_atomic(&dir.join(LABELS_FILE), &labels_json)?;

    Ok(())
}

/// Load the pipeline stored in `dir`.
///
/// Returns [`ModelError::ArtifactMissing`] if no artifact exists and
/// [`ModelError::CorruptModel`] if it cannot be parsed or was produced by
/// an incompatible representation.
pub fn load(dir: &Path) -> ModelResult<TfidfLogisticPipeline> {
    let path = dir.join(MODEL_FILE);
    if !path.exists() {
        return Err(ModelError::ArtifactMissing(path.display().to_string()));
    }

    let json = std::fs::read_to_string(&path)?;
    let artifact: ModelArtifact = serde_json::from_str(&json)
        .map_err(|e| ModelError::CorruptModel(e.to_string()))?;

    if artifact.version != ARTIFACT_VERSION {
        return Err(ModelError::CorruptModel(format!(
            "artifact version {} but this build reads version {}",
            artifact.version, ARTIFACT_VERSION
        )));
    }

    Ok(artifact.pipeline)
}

/// Write-then-rename so readers see either the old or the new file whole.
fn write_atomic(path: &Path, contents: &str) -> ModelResult<()> {
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn trained() -> TfidfLogisticPipeline {
        let texts: Vec<String> = ["uber viagem", "onibus bilhete", "farmacia araujo", "consulta medica"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let labels: Vec<String> = ["Transporte", "Transporte", "Saude", "Saude"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        TfidfLogisticPipeline::fit(&texts, &labels).unwrap()
    }

    #[test]
    fn roundtrip_preserves_predictions() {
        let dir = TempDir::new().unwrap();
        let pipeline = trained();
        let before = pipeline.predict("uber viagem").unwrap();

        save(&pipeline, dir.path()).unwrap();
        let restored = load(dir.path()).unwrap();

        assert_eq!(restored.predict("uber viagem").unwrap(), before);
        assert_eq!(restored.labels(), pipeline.labels());
    }

    #[test]
    fn save_writes_label_manifest() {
        let dir = TempDir::new().unwrap();
        save(&trained(), dir.path()).unwrap();

        let json = std::fs::read_to_string(dir.path().join(LABELS_FILE)).unwrap();
        let manifest: LabelManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest.labels, vec!["Saude", "Transporte"]);
    }

    #[test]
    fn missing_artifact_is_distinguished_from_corrupt() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(load(dir.path()), Err(ModelError::ArtifactMissing(_))));
    }

    #[test]
    fn garbage_artifact_is_corrupt() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), "not json at all").unwrap();
        assert!(matches!(load(dir.path()), Err(ModelError::CorruptModel(_))));
    }

    #[test]
    fn version_mismatch_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let pipeline = trained();
        save(&pipeline, dir.path()).unwrap();

        let json = std::fs::read_to_string(dir.path().join(MODEL_FILE)).unwrap();
        let bumped = json.replacen("\"version\": 1", "\"version\": 99", 1);
        std::fs::write(dir.path().join(MODEL_FILE), bumped).unwrap();

        assert!(matches!(load(dir.path()), Err(ModelError::CorruptModel(_))));
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        save(&trained(), dir.path()).unwrap();
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map(|x| x == "tmp").unwrap_or(false))
            .collect();
        assert!(leftovers.is_empty());
    }
}
