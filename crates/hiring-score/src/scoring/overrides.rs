use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::domain::{OptionId, PositionId, Question};
use super::repository::QuestionnaireStore;

/// Points a single choice option is worth for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectivePoint {
    pub option_id: OptionId,
    pub label: String,
    pub points: Decimal,
    pub overridden: bool,
}

/// Effective point table for a choice question, in option id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PointTable {
    entries: Vec<EffectivePoint>,
}

impl PointTable {
    pub fn new(entries: Vec<EffectivePoint>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[EffectivePoint] {
        &self.entries
    }

    /// Points for the first option whose label equals `answer`, ignoring case.
    pub fn points_for(&self, answer: &str) -> Option<Decimal> {
        let answer = answer.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.label.to_lowercase() == answer)
            .map(|entry| entry.points)
    }

    /// Highest effective value across all options, zero when there are none.
    pub fn max_points(&self) -> Decimal {
        self.entries
            .iter()
            .map(|entry| entry.points)
            .max()
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO)
    }
}

/// Resolves the point table for a (question, position) pair.
///
/// Defaults come from the question's own options; an override row replaces the default for the
/// option it references (by id, never by label) when it carries a value.
pub fn effective_points<S>(store: &S, question: &Question, position_id: PositionId) -> PointTable
where
    S: QuestionnaireStore + ?Sized,
{
    let overrides: HashMap<OptionId, Decimal> = store
        .position_question(position_id, question.id)
        .map(|assignment| {
            store
                .position_question_options(assignment.id)
                .into_iter()
                .filter_map(|row| row.points.map(|points| (row.question_option_id, points)))
                .collect()
        })
        .unwrap_or_default();

    let entries = store
        .options_for_question(question.id)
        .into_iter()
        .map(|option| match overrides.get(&option.id) {
            Some(points) => EffectivePoint {
                option_id: option.id,
                label: option.text,
                points: *points,
                overridden: true,
            },
            None => EffectivePoint {
                option_id: option.id,
                label: option.text,
                points: option.points,
                overridden: false,
            },
        })
        .collect();

    PointTable::new(entries)
}
