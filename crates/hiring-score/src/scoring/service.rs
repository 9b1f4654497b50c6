use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::analysis::{summarize_question, QuestionPerformanceAnalysis};
use super::application::{self, percentage, ApplicationScore};
use super::breakdown::{build_breakdown, QuestionScoreBreakdown};
use super::domain::{Application, ApplicationId, PositionId, Question, QuestionId};
use super::insights::{InsightError, InsightProvider, InsightRequest};
use super::overrides::{effective_points, PointTable};
use super::ranking::{rank_candidates, CandidateRanking};
use super::repository::QuestionnaireStore;
use super::scorers;
use crate::config::DEFAULT_INSIGHT_TIMEOUT_MS;

/// Facade composing the questionnaire store, the scoring strategies and the optional
/// insight provider.
///
/// Every operation reads fresh data from the store; nothing is cached between calls.
pub struct ScoringService<S, I> {
    store: Arc<S>,
    insights: Arc<I>,
    insight_timeout: Duration,
}

impl<S, I> ScoringService<S, I>
where
    S: QuestionnaireStore + 'static,
    I: InsightProvider + 'static,
{
    pub fn new(store: Arc<S>, insights: Arc<I>) -> Self {
        Self {
            store,
            insights,
            insight_timeout: Duration::from_millis(DEFAULT_INSIGHT_TIMEOUT_MS),
        }
    }

    pub fn with_insight_timeout(mut self, timeout: Duration) -> Self {
        self.insight_timeout = timeout;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn application(&self, application_id: ApplicationId) -> Option<Application> {
        self.store.application(application_id)
    }

    /// Point table for a choice question after position overrides.
    pub fn effective_points(&self, question: &Question, position_id: PositionId) -> PointTable {
        effective_points(self.store.as_ref(), question, position_id)
    }

    /// Score a single answer as it would count towards an application for `position_id`.
    pub fn score_answer(
        &self,
        question: &Question,
        answer: &str,
        position_id: PositionId,
    ) -> Decimal {
        let table = self.effective_points(question, position_id);
        scorers::score_answer(question, answer, &table)
    }

    pub fn max_score_for_question(
        &self,
        question: &Question,
        position_id: PositionId,
    ) -> Decimal {
        let table = self.effective_points(question, position_id);
        scorers::max_points(question, &table)
    }

    /// Sum of the application's answer scores across its position's questions.
    pub fn score_application(&self, application: &Application) -> Decimal {
        let total = application::score_application(self.store.as_ref(), application);
        debug!(application_id = %application.id, %total, "scored application");
        total
    }

    /// Best total any applicant could reach for the position.
    pub fn max_score_for_application(&self, position_id: PositionId) -> Decimal {
        application::max_score_for_position(self.store.as_ref(), position_id)
    }

    /// Score summary for a stored application, `None` if it does not exist.
    pub fn application_score(&self, application_id: ApplicationId) -> Option<ApplicationScore> {
        let application = self.store.application(application_id)?;
        let total_score = self.score_application(&application);
        let max_score = self.max_score_for_application(application.position_id);

        Some(ApplicationScore {
            application_id,
            position_id: application.position_id,
            total_score,
            max_score,
            percentage: percentage(total_score, max_score),
        })
    }

    /// Per-question detail in assignment order; empty when the application does not exist.
    pub fn breakdown(&self, application_id: ApplicationId) -> Vec<QuestionScoreBreakdown> {
        match self.store.application(application_id) {
            Some(application) => build_breakdown(self.store.as_ref(), &application),
            None => {
                debug!(%application_id, "breakdown requested for unknown application");
                Vec::new()
            }
        }
    }

    pub fn rank_candidates(&self, position_id: PositionId) -> Vec<CandidateRanking> {
        let rankings = rank_candidates(self.store.as_ref(), position_id);
        debug!(%position_id, candidates = rankings.len(), "ranked candidates");
        rankings
    }

    /// Score distribution for one question, enriched by the insight provider when it answers
    /// in time. `None` when the question is unknown or has never been answered.
    pub async fn analyze_question(
        &self,
        question_id: QuestionId,
    ) -> Option<QuestionPerformanceAnalysis> {
        let mut analysis = summarize_question(self.store.as_ref(), question_id)?;

        let request = InsightRequest::new(
            question_id,
            analysis.score_distribution.clone(),
            analysis.average_score,
            analysis.total_responses,
        );
        analysis.insight = self.fetch_insight(&request).await;

        Some(analysis)
    }

    async fn fetch_insight(&self, request: &InsightRequest) -> Option<serde_json::Value> {
        let outcome = tokio::time::timeout(
            self.insight_timeout,
            self.insights.analyze_performance(request),
        )
        .await
        .unwrap_or(Err(InsightError::TimedOut(self.insight_timeout)));

        match outcome {
            Ok(payload) => Some(payload),
            Err(InsightError::Disabled) => None,
            Err(err) => {
                warn!(
                    question_id = %request.question_id,
                    error = %err,
                    "question insight unavailable"
                );
                None
            }
        }
    }
}
