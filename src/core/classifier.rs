use serde::{Deserialize, Serialize};

/// A trained binary classifier consuming encoded feature rows
///
/// Implementations are immutable once built and shared across workers.
pub trait Classifier: Send + Sync {
    /// Feature names, in order, the classifier was trained against
    fn feature_names(&self) -> &[String];

    /// Predicted class for one row, 0 or 1
    fn predict(&self, row: &[f64]) -> u8;

    /// `[p0, p1]` for one row, or `None` if the classifier is not calibrated
    fn predict_proba(&self, row: &[f64]) -> Option<[f64; 2]>;
}

/// Per-feature standardisation applied before the linear decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Platt sigmoid mapping decision values to P(class 1)
///
/// `p1 = 1 / (1 + exp(a * decision + b))`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlattCalibration {
    pub a: f64,
    pub b: f64,
}

/// Linear decision-function classifier (e.g. a linear-kernel SVC)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    #[serde(default)]
    pub probability: Option<PlattCalibration>,
}

impl LinearClassifier {
    /// Check internal consistency of a deserialized artifact
    pub fn check(&self) -> Result<(), String> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err("artifact declares no features".to_string());
        }
        if self.coefficients.len() != n {
            return Err(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                n
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("coefficients must be finite".to_string());
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != n || scaler.scale.len() != n {
                return Err(format!("scaler does not cover {} features", n));
            }
            if scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite())
                || scaler.mean.iter().any(|m| !m.is_finite())
            {
                return Err("scaler values must be finite and scale non-zero".to_string());
            }
        }
        if let Some(p) = &self.probability {
            if !p.a.is_finite() || !p.b.is_finite() {
                return Err("probability calibration must be finite".to_string());
            }
        }
        Ok(())
    }

    /// Signed distance from the separating hyperplane
    pub fn decision_function(&self, row: &[f64]) -> f64 {
        let dot: f64 = match &self.scaler {
            Some(scaler) => row
                .iter()
                .zip(&self.coefficients)
                .zip(scaler.mean.iter().zip(&scaler.scale))
                .map(|((x, w), (mean, scale))| w * (x - mean) / scale)
                .sum(),
            None => row.iter().zip(&self.coefficients).map(|(x, w)| w * x).sum(),
        };
        dot + self.intercept
    }
}

impl Classifier for LinearClassifier {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &[f64]) -> u8 {
        if self.decision_function(row) > 0.0 {
            1
        } else {
            0
        }
    }

    fn predict_proba(&self, row: &[f64]) -> Option<[f64; 2]> {
        let calibration = self.probability?;
        let decision = self.decision_function(row);
        let p1 = 1.0 / (1.0 + (calibration.a * decision + calibration.b).exp());
        Some([1.0 - p1, p1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(probability: Option<PlattCalibration>) -> LinearClassifier {
        LinearClassifier {
            feature_names: vec!["x".to_string(), "y".to_string()],
            coefficients: vec![1.0, -1.0],
            intercept: -0.5,
            scaler: None,
            probability,
        }
    }

    #[test]
    fn test_predict_sign() {
        let clf = classifier(None);
        assert_eq!(clf.predict(&[2.0, 0.0]), 1);
        assert_eq!(clf.predict(&[0.0, 2.0]), 0);
        // Decision value exactly zero falls on the negative side
        assert_eq!(clf.predict(&[0.5, 0.0]), 0);
    }

    #[test]
    fn test_proba_requires_calibration() {
        assert!(classifier(None).predict_proba(&[1.0, 0.0]).is_none());

        let clf = classifier(Some(PlattCalibration { a: -2.0, b: 0.0 }));
        let [p0, p1] = clf.predict_proba(&[3.0, 0.0]).unwrap();
        assert!((p0 + p1 - 1.0).abs() < 1e-12);
        assert!(p1 > 0.5);

        let [_, at_boundary] = clf.predict_proba(&[0.5, 0.0]).unwrap();
        assert!((at_boundary - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scaler_applied() {
        let mut clf = classifier(None);
        clf.scaler = Some(StandardScaler {
            mean: vec![10.0, 0.0],
            scale: vec![2.0, 1.0],
        });
        // (12 - 10) / 2 * 1.0 - 0.5 = 0.5
        assert!((clf.decision_function(&[12.0, 0.0]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_check_rejects_inconsistent_artifacts() {
        let mut clf = classifier(None);
        assert!(clf.check().is_ok());

        clf.coefficients.push(1.0);
        assert!(clf.check().is_err());

        let mut clf = classifier(None);
        clf.scaler = Some(StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 0.0],
        });
        assert!(clf.check().is_err());
    }
}
