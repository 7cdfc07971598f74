// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    question_id, Answer, AqScore, EncodedFeatureRow, EncoderVariant, Ethnicity, Gender,
    RawResponse, ScreeningResult, QUESTION_COUNT,
};
pub use requests::ScreeningRequest;
pub use responses::{EncodedRowResponse, ErrorResponse, HealthResponse, ScreeningResponse};
