use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::domain::QuestionId;
use super::overrides::effective_points;
use super::repository::QuestionnaireStore;
use super::scorers::score_answer;

/// Fixed score ranges used for the distribution; each upper bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreBand {
    ZeroToTwo,
    ThreeToFour,
    FiveToSix,
    SevenToEight,
    NineToTen,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 5] = [
        ScoreBand::ZeroToTwo,
        ScoreBand::ThreeToFour,
        ScoreBand::FiveToSix,
        ScoreBand::SevenToEight,
        ScoreBand::NineToTen,
    ];

    pub fn for_score(score: Decimal) -> Self {
        if score <= Decimal::TWO {
            ScoreBand::ZeroToTwo
        } else if score <= Decimal::from(4) {
            ScoreBand::ThreeToFour
        } else if score <= Decimal::from(6) {
            ScoreBand::FiveToSix
        } else if score <= Decimal::from(8) {
            ScoreBand::SevenToEight
        } else {
            ScoreBand::NineToTen
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::ZeroToTwo => "0-2",
            ScoreBand::ThreeToFour => "3-4",
            ScoreBand::FiveToSix => "5-6",
            ScoreBand::SevenToEight => "7-8",
            ScoreBand::NineToTen => "9-10",
        }
    }
}

/// How applicants scored on one question across every position it is used in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionPerformanceAnalysis {
    pub question_id: QuestionId,
    pub question_text: String,
    pub total_responses: usize,
    pub average_score: Decimal,
    pub score_distribution: BTreeMap<String, u32>,
    /// Opaque payload from the analysis service; absent whenever enrichment was unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<Value>,
}

fn empty_distribution() -> BTreeMap<String, u32> {
    ScoreBand::ALL
        .iter()
        .map(|band| (band.label().to_string(), 0))
        .collect()
}

/// Bucket and average every recorded answer. `None` for unknown or unanswered questions.
///
/// Each answer is scored under its own application's position. Answers whose application has
/// disappeared still count as responses but are neither bucketed nor added to the total.
pub(crate) fn summarize_question<S>(
    store: &S,
    question_id: QuestionId,
) -> Option<QuestionPerformanceAnalysis>
where
    S: QuestionnaireStore + ?Sized,
{
    let question = store.question(question_id)?;
    let answers = store.answers_for_question(question_id);
    if answers.is_empty() {
        return None;
    }

    let mut score_distribution = empty_distribution();
    let mut total_score = Decimal::ZERO;

    for answer in &answers {
        let Some(application) = store.application(answer.application_id) else {
            continue;
        };

        let table = effective_points(store, &question, application.position_id);
        let score = score_answer(&question, &answer.answer_text, &table);
        total_score = total_score.saturating_add(score);

        *score_distribution
            .entry(ScoreBand::for_score(score).label().to_string())
            .or_insert(0) += 1;
    }

    let total_responses = answers.len();
    let average_score = total_score / Decimal::from(total_responses);

    Some(QuestionPerformanceAnalysis {
        question_id,
        question_text: question.text,
        total_responses,
        average_score,
        score_distribution,
        insight: None,
    })
}
