// Core screening exports
pub mod classifier;
pub mod encoder;
pub mod error;
pub mod questions;
pub mod screener;

pub use classifier::{Classifier, LinearClassifier, PlattCalibration, StandardScaler};
pub use encoder::{encode, encode_answer, gender_one_hot, label_encode_single, schema};
pub use error::ScreeningError;
pub use questions::{Polarity, Question, Questionnaire, QUESTIONS};
pub use screener::Screener;
