use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::scoring::domain::{
    AnswerId, Applicant, ApplicantId, Application, ApplicationAnswer, ApplicationId, OptionId,
    PositionId, PositionQuestion, PositionQuestionId, PositionQuestionOption,
    PositionQuestionOptionId, Question, QuestionId, QuestionOption, QuestionType,
};
use crate::scoring::insights::{InsightError, InsightProvider, InsightRequest};
use crate::scoring::memory::{InMemoryStore, QuestionnaireSnapshot};
use crate::scoring::service::ScoringService;
use crate::scoring::DisabledInsights;

pub(super) const BACKEND: PositionId = PositionId(1);
pub(super) const PLATFORM: PositionId = PositionId(2);
pub(super) const EMPTY_POSITION: PositionId = PositionId(3);

pub(super) const GO_LEVEL: QuestionId = QuestionId(1);
pub(super) const SQL_RATING: QuestionId = QuestionId(2);
pub(super) const GO_YEARS: QuestionId = QuestionId(3);
pub(super) const PROJECT_STORY: QuestionId = QuestionId(4);
pub(super) const UNASKED: QuestionId = QuestionId(5);

pub(super) fn dec(value: &str) -> Decimal {
    value.parse().expect("valid decimal literal")
}

pub(super) fn applied_on(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn question(id: QuestionId, text: &str, question_type: &str) -> Question {
    Question {
        id,
        text: text.to_string(),
        question_type: QuestionType::parse(question_type),
        active: true,
    }
}

fn option(id: u64, question_id: QuestionId, text: &str, points: &str) -> QuestionOption {
    QuestionOption {
        id: OptionId(id),
        question_id,
        text: text.to_string(),
        points: dec(points),
    }
}

fn assignment(
    id: u64,
    position_id: PositionId,
    question_id: QuestionId,
    order: i32,
) -> PositionQuestion {
    PositionQuestion {
        id: PositionQuestionId(id),
        position_id,
        question_id,
        order,
    }
}

fn application(
    id: u64,
    position_id: PositionId,
    applicant_id: u64,
    day: u32,
    status: Option<&str>,
) -> Application {
    Application {
        id: ApplicationId(id),
        position_id,
        applicant_id: Some(ApplicantId(applicant_id)),
        applied_on: applied_on(day),
        status: status.map(str::to_string),
    }
}

fn answer(id: u64, application_id: u64, question_id: QuestionId, text: &str) -> ApplicationAnswer {
    ApplicationAnswer {
        id: AnswerId(id),
        application_id: ApplicationId(application_id),
        question_id,
        answer_text: text.to_string(),
    }
}

/// Two positions sharing the Go proficiency question.
///
/// Backend (position 1) asks, in order: Go level (choice, "Advanced" overridden to 10), years
/// of Go experience, SQL rating, and a project story. Platform (position 2) only asks the Go
/// level and keeps the default points.
pub(super) fn snapshot() -> QuestionnaireSnapshot {
    QuestionnaireSnapshot {
        questions: vec![
            question(GO_LEVEL, "Go proficiency", "Choice"),
            question(SQL_RATING, "Rate your SQL skills", "rating"),
            question(GO_YEARS, "Years of experience in Go", "Number"),
            question(PROJECT_STORY, "Describe a project you led", "Text"),
            question(UNASKED, "Anything else we should know?", "Text"),
        ],
        options: vec![
            option(1, GO_LEVEL, "Beginner", "2"),
            option(2, GO_LEVEL, "Advanced", "8"),
        ],
        position_questions: vec![
            assignment(10, BACKEND, GO_YEARS, 2),
            assignment(11, BACKEND, GO_LEVEL, 1),
            assignment(12, BACKEND, SQL_RATING, 3),
            assignment(13, BACKEND, PROJECT_STORY, 4),
            assignment(20, PLATFORM, GO_LEVEL, 1),
        ],
        position_question_options: vec![
            PositionQuestionOption {
                id: PositionQuestionOptionId(1),
                position_question_id: PositionQuestionId(11),
                question_option_id: OptionId(2),
                points: Some(dec("10")),
            },
            PositionQuestionOption {
                id: PositionQuestionOptionId(2),
                position_question_id: PositionQuestionId(11),
                question_option_id: OptionId(1),
                points: None,
            },
            PositionQuestionOption {
                id: PositionQuestionOptionId(3),
                position_question_id: PositionQuestionId(20),
                question_option_id: OptionId(2),
                points: None,
            },
        ],
        applicants: vec![
            Applicant {
                id: ApplicantId(1),
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            },
            Applicant {
                id: ApplicantId(2),
                full_name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
            },
        ],
        applications: vec![
            application(100, BACKEND, 1, 3, Some("Reviewed")),
            application(101, BACKEND, 2, 4, None),
            application(102, BACKEND, 99, 5, Some("Hired")),
            application(200, PLATFORM, 1, 6, None),
        ],
        answers: vec![
            // application 100: 10 + 6 + 8 + 1 = 25 of 40
            answer(1, 100, GO_LEVEL, "advanced"),
            answer(2, 100, SQL_RATING, "4"),
            answer(3, 100, GO_YEARS, "3"),
            answer(4, 100, PROJECT_STORY, "Yes"),
            // application 101: 2 + 10 + 10 + unanswered = 22 of 40
            answer(5, 101, GO_LEVEL, "Beginner"),
            answer(6, 101, SQL_RATING, "5"),
            answer(7, 101, GO_YEARS, "9"),
            // application 102: 10 + 2 + 10 + 0 = 22 of 40
            answer(8, 102, GO_LEVEL, "Advanced"),
            answer(9, 102, SQL_RATING, "6"),
            answer(10, 102, GO_YEARS, "1"),
            answer(11, 102, PROJECT_STORY, ""),
            // application 200 (platform, default points): 8
            answer(12, 200, GO_LEVEL, "Advanced"),
        ],
    }
}

pub(super) fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new(snapshot()))
}

pub(super) fn service() -> ScoringService<InMemoryStore, DisabledInsights> {
    ScoringService::new(store(), Arc::new(DisabledInsights))
}

pub(super) fn service_with<I>(insights: I) -> ScoringService<InMemoryStore, I>
where
    I: InsightProvider + 'static,
{
    ScoringService::new(store(), Arc::new(insights))
        .with_insight_timeout(Duration::from_millis(200))
}

/// Returns a fixed payload and records every request it receives.
#[derive(Default, Clone)]
pub(super) struct RecordingInsights {
    payload: Value,
    requests: Arc<Mutex<Vec<InsightRequest>>>,
}

impl RecordingInsights {
    pub(super) fn returning(payload: Value) -> Self {
        Self {
            payload,
            requests: Arc::default(),
        }
    }

    pub(super) fn requests(&self) -> Vec<InsightRequest> {
        self.requests.lock().expect("insight mutex poisoned").clone()
    }
}

#[async_trait]
impl InsightProvider for RecordingInsights {
    async fn analyze_performance(&self, request: &InsightRequest) -> Result<Value, InsightError> {
        self.requests
            .lock()
            .expect("insight mutex poisoned")
            .push(request.clone());
        Ok(self.payload.clone())
    }
}

pub(super) struct UnavailableInsights;

#[async_trait]
impl InsightProvider for UnavailableInsights {
    async fn analyze_performance(&self, _request: &InsightRequest) -> Result<Value, InsightError> {
        Err(InsightError::Status(503))
    }
}

pub(super) struct StalledInsights;

#[async_trait]
impl InsightProvider for StalledInsights {
    async fn analyze_performance(&self, _request: &InsightRequest) -> Result<Value, InsightError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(Value::Null)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
