use serde::Serialize;

use crate::models::{Ethnicity, Gender, QUESTION_COUNT};

/// Direction in which a "Yes" answer is encoded as a model feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// "Yes" -> 1, "No" -> 0
    Direct,
    /// "Yes" -> 0, "No" -> 1
    Reversed,
}

/// One AQ screening statement
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub polarity: Polarity,
}

/// The ten AQ statements, in feature order
pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: "A1",
        text: "I prefer to do things the same way over and over again.",
        polarity: Polarity::Direct,
    },
    Question {
        id: "A2",
        text: "I often notice small sounds when others do not.",
        polarity: Polarity::Direct,
    },
    Question {
        id: "A3",
        text: "I usually concentrate more on the whole picture than small details.",
        polarity: Polarity::Direct,
    },
    Question {
        id: "A4",
        text: "I find it hard to make new friends.",
        polarity: Polarity::Direct,
    },
    Question {
        id: "A5",
        text: "I notice patterns in things all the time.",
        polarity: Polarity::Direct,
    },
    // Social-ease statement: worded opposite to the others.
    Question {
        id: "A6",
        text: "I find social situations easy.",
        polarity: Polarity::Reversed,
    },
    Question {
        id: "A7",
        text: "I tend to notice details that others don't.",
        polarity: Polarity::Direct,
    },
    Question {
        id: "A8",
        text: "I find it difficult to imagine what characters are thinking or feeling.",
        polarity: Polarity::Direct,
    },
    Question {
        id: "A9",
        text: "I prefer to go to a library than a party.",
        polarity: Polarity::Direct,
    },
    Question {
        id: "A10",
        text: "I find it hard to understand jokes and sarcasm.",
        polarity: Polarity::Direct,
    },
];

/// Everything a client needs to render the questionnaire form
#[derive(Debug, Clone, Serialize)]
pub struct Questionnaire {
    pub questions: Vec<Question>,
    #[serde(rename = "answerOptions")]
    pub answer_options: [&'static str; 2],
    #[serde(rename = "defaultAnswer")]
    pub default_answer: &'static str,
    pub genders: Vec<&'static str>,
    pub ethnicities: Vec<&'static str>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            questions: QUESTIONS.to_vec(),
            answer_options: ["Yes", "No"],
            default_answer: "No",
            genders: Gender::ALL.iter().map(|g| g.as_str()).collect(),
            ethnicities: Ethnicity::ALL.iter().map(|e| e.as_str()).collect(),
        }
    }
}
