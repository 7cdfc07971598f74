use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::core::ScreeningError;
use crate::models::RawResponse;

/// Questionnaire submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScreeningRequest {
    /// Answers keyed by question id, `"A1"` .. `"A10"`, each `"Yes"` or `"No"`
    #[validate(length(min = 1))]
    pub answers: HashMap<String, String>,
    #[validate(range(min = 0))]
    pub age: i64,
    #[validate(length(min = 1))]
    pub gender: String,
    #[validate(length(min = 1))]
    pub ethnicity: String,
}

impl ScreeningRequest {
    /// Convert into a validated [`RawResponse`]
    pub fn to_response(&self) -> Result<RawResponse, ScreeningError> {
        RawResponse::from_literals(
            |id| self.answers.get(id).cloned(),
            self.age,
            &self.gender,
            &self.ethnicity,
        )
    }
}
