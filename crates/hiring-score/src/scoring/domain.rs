use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of a questionnaire question.
    QuestionId
);
record_id!(
    /// Identifier of a selectable option on a choice question.
    OptionId
);
record_id!(
    /// Identifier of a job opening.
    PositionId
);
record_id!(
    /// Identifier of a question-to-position assignment.
    PositionQuestionId
);
record_id!(
    /// Identifier of a position-specific option override row.
    PositionQuestionOptionId
);
record_id!(
    /// Identifier of a submitted application.
    ApplicationId
);
record_id!(
    /// Identifier of the person behind an application.
    ApplicantId
);
record_id!(AnswerId);

/// Scoring strategy selector derived from the stored question type.
///
/// Stored strings are matched case-insensitively; anything unrecognised is kept verbatim in
/// [`QuestionType::Unknown`] so it can still be displayed, and always scores zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    Choice,
    Rating,
    Number,
    Text,
    Unknown(String),
}

impl QuestionType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "choice" => Self::Choice,
            "rating" => Self::Rating,
            "number" => Self::Number,
            "text" => Self::Text,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            QuestionType::Choice => "Choice",
            QuestionType::Rating => "Rating",
            QuestionType::Number => "Number",
            QuestionType::Text => "Text",
            QuestionType::Unknown(raw) => raw,
        }
    }
}

impl From<String> for QuestionType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

/// Selectable answer on a choice question with its default point value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: OptionId,
    pub question_id: QuestionId,
    pub text: String,
    pub points: Decimal,
}

/// Assignment of a question to a position; `order` drives presentation and scoring sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionQuestion {
    pub id: PositionQuestionId,
    pub position_id: PositionId,
    pub question_id: QuestionId,
    pub order: i32,
}

/// Position-specific replacement for an option's default points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionQuestionOption {
    pub id: PositionQuestionOptionId,
    pub position_question_id: PositionQuestionId,
    pub question_option_id: OptionId,
    #[serde(default)]
    pub points: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub position_id: PositionId,
    #[serde(default)]
    pub applicant_id: Option<ApplicantId>,
    pub applied_on: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Raw answer as submitted; interpretation depends on the question type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationAnswer {
    pub id: AnswerId,
    pub application_id: ApplicationId,
    pub question_id: QuestionId,
    #[serde(default)]
    pub answer_text: String,
}
