// Service exports
pub mod artifact;

pub use artifact::{load_classifier, parse_classifier, ArtifactError};
