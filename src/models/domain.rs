use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::ScreeningError;

/// Number of AQ screening questions
pub const QUESTION_COUNT: usize = 10;

/// A single yes/no answer to an AQ statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Parse one of the two accepted literals, `"Yes"` or `"No"`
    pub fn parse(field: &str, value: &str) -> Result<Self, ScreeningError> {
        match value {
            "Yes" => Ok(Answer::Yes),
            "No" => Ok(Answer::No),
            other => Err(ScreeningError::validation(
                field,
                format!("expected \"Yes\" or \"No\", got {:?}", other),
            )),
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Answer::Yes)
    }
}

/// Gender options offered by the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ScreeningError> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == value)
            .ok_or_else(|| {
                ScreeningError::validation("gender", format!("unknown gender {:?}", value))
            })
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ethnicity options offered by the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ethnicity {
    Asian,
    Black,
    Hispanic,
    #[serde(rename = "Native American")]
    NativeAmerican,
    White,
    Other,
}

impl Ethnicity {
    pub const ALL: [Ethnicity; 6] = [
        Ethnicity::Asian,
        Ethnicity::Black,
        Ethnicity::Hispanic,
        Ethnicity::NativeAmerican,
        Ethnicity::White,
        Ethnicity::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Ethnicity::Asian => "Asian",
            Ethnicity::Black => "Black",
            Ethnicity::Hispanic => "Hispanic",
            Ethnicity::NativeAmerican => "Native American",
            Ethnicity::White => "White",
            Ethnicity::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ScreeningError> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == value)
            .ok_or_else(|| {
                ScreeningError::validation("ethnicity", format!("unknown ethnicity {:?}", value))
            })
    }
}

impl fmt::Display for Ethnicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated questionnaire submission
///
/// `answers[0]` holds A1, `answers[9]` holds A10. Only constructed through
/// [`RawResponse::new`] or [`RawResponse::from_literals`], so every instance
/// has all ten answers and a non-negative age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    answers: [Answer; QUESTION_COUNT],
    age: u32,
    gender: Gender,
    ethnicity: Ethnicity,
}

impl RawResponse {
    pub fn new(
        answers: [Answer; QUESTION_COUNT],
        age: i64,
        gender: Gender,
        ethnicity: Ethnicity,
    ) -> Result<Self, ScreeningError> {
        if age < 0 {
            return Err(ScreeningError::validation("age", "age must not be negative"));
        }
        let age = u32::try_from(age)
            .map_err(|_| ScreeningError::validation("age", "age is out of range"))?;

        Ok(Self {
            answers,
            age,
            gender,
            ethnicity,
        })
    }

    /// Build a response from the raw string literals a form submits
    ///
    /// `answers` is looked up by question id (`"A1"` .. `"A10"`); a missing id
    /// or a value other than `"Yes"`/`"No"` is rejected.
    pub fn from_literals<F>(
        answer_for: F,
        age: i64,
        gender: &str,
        ethnicity: &str,
    ) -> Result<Self, ScreeningError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut answers = [Answer::No; QUESTION_COUNT];
        for (idx, slot) in answers.iter_mut().enumerate() {
            let id = question_id(idx);
            let value = answer_for(&id)
                .ok_or_else(|| ScreeningError::validation(&id, "answer is missing"))?;
            *slot = Answer::parse(&id, &value)?;
        }

        Self::new(answers, age, Gender::parse(gender)?, Ethnicity::parse(ethnicity)?)
    }

    pub fn answers(&self) -> &[Answer; QUESTION_COUNT] {
        &self.answers
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn ethnicity(&self) -> Ethnicity {
        self.ethnicity
    }
}

/// Question id for a zero-based index, e.g. `0 -> "A1"`
pub fn question_id(idx: usize) -> String {
    format!("A{}", idx + 1)
}

/// AQ score: number of "Yes" answers, 0 to 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AqScore(u8);

impl AqScore {
    pub const MAX: u8 = QUESTION_COUNT as u8;

    pub fn from_answers(answers: &[Answer; QUESTION_COUNT]) -> Self {
        let yes = answers.iter().filter(|a| a.is_yes()).count();
        Self(yes as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for AqScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {}", self.0, Self::MAX)
    }
}

/// Feature-encoding convention expected by the loaded classifier artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EncoderVariant {
    /// Raw answers, age, and label-encoded gender/ethnicity
    LabelEncoded,
    /// `A*_Score` columns, one-hot gender and fixed placeholder columns
    OneHotFixedDefaults,
}

impl EncoderVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            EncoderVariant::LabelEncoded => "labelEncoded",
            EncoderVariant::OneHotFixedDefaults => "oneHotFixedDefaults",
        }
    }
}

impl fmt::Display for EncoderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric classifier input with a fixed, per-variant field schema
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatureRow {
    variant: EncoderVariant,
    values: Vec<f64>,
}

impl EncodedFeatureRow {
    pub(crate) fn new(variant: EncoderVariant, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), crate::core::encoder::schema(variant).len());
        Self { variant, values }
    }

    pub fn variant(&self) -> EncoderVariant {
        self.variant
    }

    pub fn names(&self) -> &'static [&'static str] {
        crate::core::encoder::schema(self.variant)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of a named field, `None` if the variant has no such field
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names()
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.values[idx])
    }

    /// `(name, value)` pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.names().iter().copied().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Classifier output handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    /// Predicted class, 0 or 1
    pub prediction: u8,
    /// Probability of class 1, when the classifier can provide one
    pub probability: Option<f64>,
    #[serde(rename = "aqScore")]
    pub aq_score: AqScore,
}
