use async_trait::async_trait;
use hiring_score::config::ScoringConfig;
use hiring_score::error::AppError;
use hiring_score::scoring::{
    DisabledInsights, HttpInsightClient, InMemoryStore, InsightError, InsightProvider,
    InsightRequest, QuestionnaireSnapshot, ScoringService,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Insight provider selected from configuration.
pub(crate) enum InsightBackend {
    Http(HttpInsightClient),
    Disabled(DisabledInsights),
}

#[async_trait]
impl InsightProvider for InsightBackend {
    async fn analyze_performance(&self, request: &InsightRequest) -> Result<Value, InsightError> {
        match self {
            InsightBackend::Http(client) => client.analyze_performance(request).await,
            InsightBackend::Disabled(disabled) => disabled.analyze_performance(request).await,
        }
    }
}

pub(crate) type AppScoringService = ScoringService<InMemoryStore, InsightBackend>;

pub(crate) fn load_store(config: &ScoringConfig) -> Result<InMemoryStore, AppError> {
    let snapshot = match &config.seed_path {
        Some(path) => {
            let snapshot = QuestionnaireSnapshot::load(path)?;
            info!(
                path = %path.display(),
                questions = snapshot.questions.len(),
                applications = snapshot.applications.len(),
                "loaded questionnaire snapshot"
            );
            snapshot
        }
        None => QuestionnaireSnapshot::default(),
    };

    Ok(InMemoryStore::new(snapshot))
}

pub(crate) fn insight_backend(config: &ScoringConfig) -> Result<InsightBackend, AppError> {
    match &config.insight_url {
        Some(url) => Ok(InsightBackend::Http(HttpInsightClient::new(
            url.clone(),
            config.insight_timeout,
        )?)),
        None => Ok(InsightBackend::Disabled(DisabledInsights)),
    }
}

pub(crate) fn build_scoring_service(config: &ScoringConfig) -> Result<AppScoringService, AppError> {
    let store = load_store(config)?;
    let insights = insight_backend(config)?;
    Ok(
        ScoringService::new(Arc::new(store), Arc::new(insights))
            .with_insight_timeout(config.insight_timeout),
    )
}
