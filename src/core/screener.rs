use std::sync::Arc;

use crate::core::classifier::Classifier;
use crate::core::encoder::{encode, schema};
use crate::core::error::ScreeningError;
use crate::models::{AqScore, EncodedFeatureRow, EncoderVariant, RawResponse, ScreeningResult};

/// Screening orchestrator: encode -> classify -> result
///
/// # Pipeline Stages
/// 1. Feature encoding for the configured variant
/// 2. Row shape check against the classifier's training schema
/// 3. Prediction, plus probability when the classifier is calibrated
#[derive(Clone)]
pub struct Screener {
    classifier: Arc<dyn Classifier>,
    variant: EncoderVariant,
}

impl std::fmt::Debug for Screener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screener")
            .field("variant", &self.variant)
            .field("features", &self.classifier.feature_names().len())
            .finish()
    }
}

impl Screener {
    /// Pair a loaded classifier with the encoder variant it was trained for
    ///
    /// Fails with [`ScreeningError::EncodingMismatch`] unless the classifier's
    /// feature names equal the variant's schema, names and order included.
    pub fn new(
        classifier: Arc<dyn Classifier>,
        variant: EncoderVariant,
    ) -> Result<Self, ScreeningError> {
        check_schema(schema(variant), classifier.feature_names())?;
        Ok(Self {
            classifier,
            variant,
        })
    }

    pub fn variant(&self) -> EncoderVariant {
        self.variant
    }

    /// Encode a response without running the classifier
    pub fn encode(&self, response: &RawResponse) -> (EncodedFeatureRow, AqScore) {
        encode(self.variant, response)
    }

    /// Run one submission through the full pipeline
    pub fn screen(&self, response: &RawResponse) -> Result<ScreeningResult, ScreeningError> {
        let (row, aq_score) = self.encode(response);

        if row.len() != self.classifier.feature_names().len() {
            return Err(mismatch(row.names(), self.classifier.feature_names()));
        }

        let prediction = self.classifier.predict(row.values());
        let probability = self
            .classifier
            .predict_proba(row.values())
            .map(|[_, p1]| p1);

        tracing::debug!(
            "Screened submission: variant={}, aq_score={}, prediction={}",
            self.variant,
            aq_score.value(),
            prediction
        );

        Ok(ScreeningResult {
            prediction,
            probability,
            aq_score,
        })
    }
}

fn check_schema(expected: &[&str], found: &[String]) -> Result<(), ScreeningError> {
    let same = expected.len() == found.len()
        && expected.iter().zip(found).all(|(e, f)| *e == f.as_str());
    if same {
        Ok(())
    } else {
        Err(mismatch(expected, found))
    }
}

fn mismatch(expected: &[&str], found: &[String]) -> ScreeningError {
    ScreeningError::EncodingMismatch {
        expected: expected.iter().map(|s| s.to_string()).collect(),
        found: found.to_vec(),
    }
}
