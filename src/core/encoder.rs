use crate::core::questions::{Polarity, QUESTIONS};
use crate::models::{Answer, AqScore, EncodedFeatureRow, EncoderVariant, RawResponse};

/// Field order for [`EncoderVariant::LabelEncoded`]
pub const LABEL_ENCODED_SCHEMA: [&str; 13] = [
    "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10", "age", "gender", "ethnicity",
];

/// Field order for [`EncoderVariant::OneHotFixedDefaults`]
pub const ONE_HOT_SCHEMA: [&str; 18] = [
    "A1_Score",
    "A2_Score",
    "A3_Score",
    "A4_Score",
    "A5_Score",
    "A6_Score",
    "A7_Score",
    "A8_Score",
    "A9_Score",
    "A10_Score",
    "age",
    "result",
    "gender_f",
    "gender_m",
    "gender_o",
    "jaundice_no",
    "jaundice_yes",
    "used_app_before_no",
];

/// Constant placeholder columns of the one-hot schema:
/// `jaundice_no`, `jaundice_yes`, `used_app_before_no`
pub const ONE_HOT_PLACEHOLDERS: [f64; 3] = [0.0, 0.0, 1.0];

/// Field names produced by a variant, in order
pub fn schema(variant: EncoderVariant) -> &'static [&'static str] {
    match variant {
        EncoderVariant::LabelEncoded => &LABEL_ENCODED_SCHEMA,
        EncoderVariant::OneHotFixedDefaults => &ONE_HOT_SCHEMA,
    }
}

/// Encode one answer as a model feature, honouring the question's polarity
///
/// `question` is zero-based (`0` is A1).
#[inline]
pub fn encode_answer(question: usize, answer: Answer) -> u8 {
    match (QUESTIONS[question].polarity, answer) {
        (Polarity::Direct, Answer::Yes) | (Polarity::Reversed, Answer::No) => 1,
        (Polarity::Direct, Answer::No) | (Polarity::Reversed, Answer::Yes) => 0,
    }
}

/// Label-encode a categorical value with an encoder fit on that value alone
///
/// A label encoder fit on a single observation has exactly one class, so
/// whatever the value it is always assigned code 0.
#[inline]
pub fn label_encode_single(_value: &str) -> u8 {
    0
}

/// One-hot flags `[gender_f, gender_m, gender_o]` for a gender label
///
/// Labels outside `Female`/`Male`/`Other` yield all zeros.
#[inline]
pub fn gender_one_hot(label: &str) -> [u8; 3] {
    match label {
        "Female" => [1, 0, 0],
        "Male" => [0, 1, 0],
        "Other" => [0, 0, 1],
        _ => [0, 0, 0],
    }
}

/// Encode a validated response into the classifier row for `variant`
///
/// Pure: the same response and variant always produce the same row and score.
pub fn encode(variant: EncoderVariant, response: &RawResponse) -> (EncodedFeatureRow, AqScore) {
    let score = AqScore::from_answers(response.answers());
    let row_len = schema(variant).len();

    let mut values = Vec::with_capacity(row_len);
    values.extend(
        response
            .answers()
            .iter()
            .enumerate()
            .map(|(idx, answer)| encode_answer(idx, *answer) as f64),
    );
    values.push(response.age() as f64);

    match variant {
        EncoderVariant::LabelEncoded => {
            values.push(label_encode_single(response.gender().as_str()) as f64);
            values.push(label_encode_single(response.ethnicity().as_str()) as f64);
        }
        EncoderVariant::OneHotFixedDefaults => {
            values.push(score.value() as f64);
            values.extend(
                gender_one_hot(response.gender().as_str())
                    .iter()
                    .map(|flag| *flag as f64),
            );
            values.extend_from_slice(&ONE_HOT_PLACEHOLDERS);
        }
    }

    (EncodedFeatureRow::new(variant, values), score)
}
