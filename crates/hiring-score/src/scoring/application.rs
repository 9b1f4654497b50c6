use rust_decimal::Decimal;
use serde::Serialize;

use super::domain::{
    Application, ApplicationAnswer, ApplicationId, PositionId, PositionQuestion, Question,
};
use super::overrides::effective_points;
use super::repository::QuestionnaireStore;
use super::scorers::{max_points, score_answer};

/// Total, maximum and percentage for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationScore {
    pub application_id: ApplicationId,
    pub position_id: PositionId,
    pub total_score: Decimal,
    pub max_score: Decimal,
    pub percentage: Decimal,
}

/// One assigned question evaluated against an application's answer.
#[derive(Debug, Clone)]
pub(crate) struct ScoredQuestion {
    pub assignment: PositionQuestion,
    pub question: Question,
    pub answer: Option<ApplicationAnswer>,
    pub score: Decimal,
    pub max_score: Decimal,
}

/// `score / max * 100`, zero when nothing can be scored.
pub fn percentage(score: Decimal, max_score: Decimal) -> Decimal {
    if max_score > Decimal::ZERO {
        score / max_score * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Adds scores without panicking; totals pin at `Decimal::MAX` instead of overflowing.
pub(crate) fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |total, value| total.saturating_add(value))
}

/// Evaluate every question assigned to the application's position, in assignment order.
///
/// The earliest recorded answer wins if an application answered the same question twice.
/// Assignments pointing at a question that no longer exists are skipped.
pub(crate) fn score_questions<S>(store: &S, application: &Application) -> Vec<ScoredQuestion>
where
    S: QuestionnaireStore + ?Sized,
{
    let answers = store.answers_for_application(application.id);

    store
        .position_questions_for_position(application.position_id)
        .into_iter()
        .filter_map(|assignment| {
            let question = store.question(assignment.question_id)?;
            let table = effective_points(store, &question, application.position_id);
            let answer = answers
                .iter()
                .find(|answer| answer.question_id == assignment.question_id)
                .cloned();
            let score = answer
                .as_ref()
                .map(|answer| score_answer(&question, &answer.answer_text, &table))
                .unwrap_or(Decimal::ZERO);
            let max_score = max_points(&question, &table);

            Some(ScoredQuestion {
                assignment,
                question,
                answer,
                score,
                max_score,
            })
        })
        .collect()
}

pub(crate) fn score_application<S>(store: &S, application: &Application) -> Decimal
where
    S: QuestionnaireStore + ?Sized,
{
    saturating_sum(
        score_questions(store, application)
            .iter()
            .map(|scored| scored.score),
    )
}

pub(crate) fn max_score_for_position<S>(store: &S, position_id: PositionId) -> Decimal
where
    S: QuestionnaireStore + ?Sized,
{
    saturating_sum(
        store
            .position_questions_for_position(position_id)
            .into_iter()
            .filter_map(|assignment| store.question(assignment.question_id))
            .map(|question| {
                let table = effective_points(store, &question, position_id);
                max_points(&question, &table)
            }),
    )
}
