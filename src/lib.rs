//! AQ Screen - AQ-10 screening service
//!
//! Encodes questionnaire answers into the exact feature row a trained
//! classifier expects, runs the classifier and reports the prediction,
//! its probability and the AQ score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{encode, Classifier, LinearClassifier, Screener, ScreeningError};
pub use self::models::{Answer, AqScore, EncodedFeatureRow, EncoderVariant, Ethnicity, Gender, RawResponse, ScreeningResult};
