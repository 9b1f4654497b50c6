use rust_decimal::Decimal;
use serde::Serialize;

use super::application::{percentage, score_questions, ScoredQuestion};
use super::domain::{Application, QuestionId, QuestionType};
use super::repository::QuestionnaireStore;

/// Placeholder shown for assigned questions the applicant skipped.
pub const NOT_ANSWERED: &str = "Not answered";

/// Per-question explanation of an application's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionScoreBreakdown {
    pub question_id: QuestionId,
    pub question_text: String,
    pub question_type: QuestionType,
    pub order: i32,
    pub answer: String,
    pub score: Decimal,
    pub max_score: Decimal,
    pub percentage: Decimal,
}

impl From<ScoredQuestion> for QuestionScoreBreakdown {
    fn from(scored: ScoredQuestion) -> Self {
        let ScoredQuestion {
            assignment,
            question,
            answer,
            score,
            max_score,
        } = scored;

        Self {
            question_id: question.id,
            question_text: question.text,
            question_type: question.question_type,
            order: assignment.order,
            answer: answer
                .map(|answer| answer.answer_text)
                .unwrap_or_else(|| NOT_ANSWERED.to_string()),
            score,
            max_score,
            percentage: percentage(score, max_score),
        }
    }
}

pub(crate) fn build_breakdown<S>(
    store: &S,
    application: &Application,
) -> Vec<QuestionScoreBreakdown>
where
    S: QuestionnaireStore + ?Sized,
{
    score_questions(store, application)
        .into_iter()
        .map(QuestionScoreBreakdown::from)
        .collect()
}
