use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::LinearClassifier;

/// Errors that can occur while loading the classifier artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Classifier artifact not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("IO error reading classifier artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed classifier artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid classifier artifact: {0}")]
    Invalid(String),
}

/// Load the serialized classifier from a local path
///
/// Called once at startup; the returned classifier is never reloaded.
pub async fn load_classifier<P: AsRef<Path>>(path: P) -> Result<LinearClassifier, ArtifactError> {
    let path = path.as_ref();

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArtifactError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let classifier = parse_classifier(&raw)?;

    tracing::info!(
        "Loaded classifier artifact from {} ({} features, probability: {})",
        path.display(),
        classifier.feature_names.len(),
        classifier.probability.is_some()
    );

    Ok(classifier)
}

/// Parse and sanity-check an artifact from its JSON text
pub fn parse_classifier(raw: &str) -> Result<LinearClassifier, ArtifactError> {
    let classifier: LinearClassifier = serde_json::from_str(raw)?;
    classifier.check().map_err(ArtifactError::Invalid)?;
    Ok(classifier)
}
