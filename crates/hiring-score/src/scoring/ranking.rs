use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::application::{max_score_for_position, percentage, saturating_sum};
use super::breakdown::{build_breakdown, QuestionScoreBreakdown};
use super::domain::{ApplicationId, PositionId};
use super::repository::QuestionnaireStore;

pub const UNKNOWN_CANDIDATE: &str = "Unknown";
pub const DEFAULT_STATUS: &str = "Pending";

/// Standing of one candidate among all applicants for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRanking {
    pub application_id: ApplicationId,
    pub candidate_name: String,
    pub candidate_email: String,
    pub total_score: Decimal,
    pub max_score: Decimal,
    pub percentage: Decimal,
    pub applied_date: DateTime<Utc>,
    pub status: String,
    pub score_breakdown: Vec<QuestionScoreBreakdown>,
}

/// Rank every application for the position by descending percentage.
///
/// The sort is stable: candidates with equal percentages keep the store's fetch order.
pub(crate) fn rank_candidates<S>(store: &S, position_id: PositionId) -> Vec<CandidateRanking>
where
    S: QuestionnaireStore + ?Sized,
{
    let max_score = max_score_for_position(store, position_id);

    let mut rankings: Vec<CandidateRanking> = store
        .applications_for_position(position_id)
        .into_iter()
        .map(|application| {
            let score_breakdown = build_breakdown(store, &application);
            let total_score = saturating_sum(score_breakdown.iter().map(|row| row.score));
            let applicant = application
                .applicant_id
                .and_then(|applicant_id| store.applicant(applicant_id));
            let (candidate_name, candidate_email) = match applicant {
                Some(applicant) => (applicant.full_name, applicant.email),
                None => (UNKNOWN_CANDIDATE.to_string(), String::new()),
            };

            CandidateRanking {
                application_id: application.id,
                candidate_name,
                candidate_email,
                total_score,
                max_score,
                percentage: percentage(total_score, max_score),
                applied_date: application.applied_on,
                status: application
                    .status
                    .filter(|status| !status.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
                score_breakdown,
            }
        })
        .collect();

    rankings.sort_by(|left, right| right.percentage.cmp(&left.percentage));
    rankings
}
