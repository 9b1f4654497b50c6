//! Questionnaire scoring engine.
//!
//! Answers are scored per question type, choice points honour position overrides, and the
//! results roll up into application totals, per-question breakdowns, candidate rankings and
//! question performance summaries. All reads go through [`QuestionnaireStore`].

pub mod analysis;
pub mod application;
pub mod breakdown;
pub mod domain;
pub mod insights;
pub mod memory;
pub mod overrides;
pub mod ranking;
pub mod repository;
pub mod router;
pub mod scorers;
pub mod service;

#[cfg(test)]
mod tests;

pub use analysis::{QuestionPerformanceAnalysis, ScoreBand};
pub use application::{percentage, ApplicationScore};
pub use breakdown::{QuestionScoreBreakdown, NOT_ANSWERED};
pub use domain::{
    AnswerId, Applicant, ApplicantId, Application, ApplicationAnswer, ApplicationId, OptionId,
    PositionId, PositionQuestion, PositionQuestionId, PositionQuestionOption,
    PositionQuestionOptionId, Question, QuestionId, QuestionOption, QuestionType,
};
pub use insights::{
    DisabledInsights, HttpInsightClient, InsightError, InsightProvider, InsightRequest,
};
pub use memory::{InMemoryStore, QuestionnaireSnapshot, SnapshotError};
pub use overrides::{EffectivePoint, PointTable};
pub use ranking::CandidateRanking;
pub use repository::QuestionnaireStore;
pub use router::scoring_router;
pub use service::ScoringService;
