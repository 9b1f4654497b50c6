use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::domain::QuestionId;

/// Tool name understood by the analysis service.
pub const ANALYZE_PERFORMANCE_TOOL: &str = "analyze-performance";

/// Payload handed to the analysis service for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub question_id: String,
    pub response_distribution: BTreeMap<String, u32>,
    pub average_score: Decimal,
    pub total_responses: usize,
}

impl InsightRequest {
    pub fn new(
        question_id: QuestionId,
        response_distribution: BTreeMap<String, u32>,
        average_score: Decimal,
        total_responses: usize,
    ) -> Self {
        Self {
            question_id: question_id.to_string(),
            response_distribution,
            average_score,
            total_responses,
        }
    }
}

/// Best-effort source of supplementary analysis. Results are never authoritative.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn analyze_performance(&self, request: &InsightRequest) -> Result<Value, InsightError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("insight service is not configured")]
    Disabled,
    #[error("insight transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("insight service returned status {0}")]
    Status(u16),
    #[error("insight payload is malformed: {0}")]
    Malformed(String),
    #[error("insight call exceeded {0:?}")]
    TimedOut(Duration),
}

/// Provider used when no analysis service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledInsights;

#[async_trait]
impl InsightProvider for DisabledInsights {
    async fn analyze_performance(&self, _request: &InsightRequest) -> Result<Value, InsightError> {
        Err(InsightError::Disabled)
    }
}

#[derive(Serialize)]
struct ToolCall<'a> {
    tool: &'static str,
    arguments: &'a InsightRequest,
}

/// JSON-over-HTTP client for the analysis service's tool endpoint.
#[derive(Debug, Clone)]
pub struct HttpInsightClient {
    http_client: Client,
    endpoint: String,
}

impl HttpInsightClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, InsightError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InsightProvider for HttpInsightClient {
    async fn analyze_performance(&self, request: &InsightRequest) -> Result<Value, InsightError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&ToolCall {
                tool: ANALYZE_PERFORMANCE_TOOL,
                arguments: request,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|err| InsightError::Malformed(err.to_string()))?;

        unwrap_tool_result(payload)
    }
}

/// Tool responses carry their JSON as text under `result.contents[0].text`; plain JSON bodies
/// are passed through untouched.
pub(crate) fn unwrap_tool_result(payload: Value) -> Result<Value, InsightError> {
    if let Some(success) = payload.get("success").and_then(Value::as_bool) {
        if !success {
            let message = payload
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("tool call reported failure");
            return Err(InsightError::Malformed(message.to_string()));
        }
    }

    let embedded = payload
        .pointer("/result/contents/0/text")
        .and_then(Value::as_str);

    match embedded {
        Some(text) => {
            serde_json::from_str(text).map_err(|err| InsightError::Malformed(err.to_string()))
        }
        None => Ok(payload),
    }
}
