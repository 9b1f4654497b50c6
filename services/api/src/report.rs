use crate::infra::{build_scoring_service, AppScoringService};
use clap::Args;
use hiring_score::config::ScoringConfig;
use hiring_score::error::AppError;
use hiring_score::scoring::{ApplicationId, PositionId, QuestionId};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Questionnaire snapshot to read instead of SCORING_SEED_PATH
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
    /// Analysis service endpoint to use instead of INSIGHT_SERVICE_URL
    #[arg(long)]
    pub(crate) insight_url: Option<String>,
    /// Emit single-line JSON
    #[arg(long)]
    pub(crate) compact: bool,
}

impl ReportArgs {
    fn service(&self) -> Result<AppScoringService, AppError> {
        let mut config = ScoringConfig::from_env()?;
        if let Some(seed) = &self.seed {
            config.seed_path = Some(seed.clone());
        }
        if let Some(url) = &self.insight_url {
            config.insight_url = Some(url.clone());
        }
        build_scoring_service(&config)
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<(), AppError> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, AppError> {
        let rendered = if self.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        };
        rendered.map_err(|err| AppError::Io(err.into()))
    }
}

pub(crate) fn run_score(application_id: u64, args: ReportArgs) -> Result<(), AppError> {
    let service = args.service()?;
    let application_id = ApplicationId(application_id);
    match service.application_score(application_id) {
        Some(score) => args.print(&score),
        None => args.print(&json!({
            "application_id": application_id,
            "error": "application not found",
        })),
    }
}

pub(crate) fn run_breakdown(application_id: u64, args: ReportArgs) -> Result<(), AppError> {
    let service = args.service()?;
    args.print(&service.breakdown(ApplicationId(application_id)))
}

pub(crate) fn run_rank(position_id: u64, args: ReportArgs) -> Result<(), AppError> {
    let service = args.service()?;
    args.print(&service.rank_candidates(PositionId(position_id)))
}

pub(crate) async fn run_analyze(question_id: u64, args: ReportArgs) -> Result<(), AppError> {
    let service = args.service()?;
    let question_id = QuestionId(question_id);
    match service.analyze_question(question_id).await {
        Some(analysis) => args.print(&analysis),
        None => args.print(&json!({ "question_id": question_id, "error": "no data" })),
    }
}
