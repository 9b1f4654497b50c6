use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::domain::{
    Applicant, ApplicantId, Application, ApplicationAnswer, ApplicationId, PositionId,
    PositionQuestion, PositionQuestionId, PositionQuestionOption, Question, QuestionId,
    QuestionOption,
};
use super::repository::QuestionnaireStore;

/// Serialized questionnaire data, as exported by the administration side of the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireSnapshot {
    pub questions: Vec<Question>,
    pub options: Vec<QuestionOption>,
    pub position_questions: Vec<PositionQuestion>,
    pub position_question_options: Vec<PositionQuestionOption>,
    pub applicants: Vec<Applicant>,
    pub applications: Vec<Application>,
    pub answers: Vec<ApplicationAnswer>,
}

impl QuestionnaireSnapshot {
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(raw).map_err(SnapshotError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("unable to read questionnaire snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed questionnaire snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Store backed by an immutable snapshot. Every collection is kept sorted so reads are
/// deterministic regardless of the order rows were exported in.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: QuestionnaireSnapshot,
}

impl InMemoryStore {
    pub fn new(mut data: QuestionnaireSnapshot) -> Self {
        data.questions.sort_by_key(|question| question.id);
        data.options.sort_by_key(|option| option.id);
        data.position_questions
            .sort_by_key(|assignment| (assignment.order, assignment.id));
        data.position_question_options
            .sort_by_key(|override_row| override_row.id);
        data.applicants.sort_by_key(|applicant| applicant.id);
        data.applications.sort_by_key(|application| application.id);
        data.answers.sort_by_key(|answer| answer.id);
        Self { data }
    }

    pub fn snapshot(&self) -> &QuestionnaireSnapshot {
        &self.data
    }
}

impl From<QuestionnaireSnapshot> for InMemoryStore {
    fn from(value: QuestionnaireSnapshot) -> Self {
        Self::new(value)
    }
}

impl QuestionnaireStore for InMemoryStore {
    fn question(&self, id: QuestionId) -> Option<Question> {
        self.data
            .questions
            .iter()
            .find(|question| question.id == id)
            .cloned()
    }

    fn application(&self, id: ApplicationId) -> Option<Application> {
        self.data
            .applications
            .iter()
            .find(|application| application.id == id)
            .cloned()
    }

    fn applicant(&self, id: ApplicantId) -> Option<Applicant> {
        self.data
            .applicants
            .iter()
            .find(|applicant| applicant.id == id)
            .cloned()
    }

    fn options_for_question(&self, question_id: QuestionId) -> Vec<QuestionOption> {
        self.data
            .options
            .iter()
            .filter(|option| option.question_id == question_id)
            .cloned()
            .collect()
    }

    fn position_question(
        &self,
        position_id: PositionId,
        question_id: QuestionId,
    ) -> Option<PositionQuestion> {
        self.data
            .position_questions
            .iter()
            .filter(|assignment| {
                assignment.position_id == position_id && assignment.question_id == question_id
            })
            .min_by_key(|assignment| assignment.id)
            .cloned()
    }

    fn position_question_options(
        &self,
        position_question_id: PositionQuestionId,
    ) -> Vec<PositionQuestionOption> {
        self.data
            .position_question_options
            .iter()
            .filter(|override_row| override_row.position_question_id == position_question_id)
            .cloned()
            .collect()
    }

    fn position_questions_for_position(&self, position_id: PositionId) -> Vec<PositionQuestion> {
        self.data
            .position_questions
            .iter()
            .filter(|assignment| assignment.position_id == position_id)
            .cloned()
            .collect()
    }

    fn answers_for_application(&self, application_id: ApplicationId) -> Vec<ApplicationAnswer> {
        self.data
            .answers
            .iter()
            .filter(|answer| answer.application_id == application_id)
            .cloned()
            .collect()
    }

    fn answers_for_question(&self, question_id: QuestionId) -> Vec<ApplicationAnswer> {
        self.data
            .answers
            .iter()
            .filter(|answer| answer.question_id == question_id)
            .cloned()
            .collect()
    }

    fn applications_for_position(&self, position_id: PositionId) -> Vec<Application> {
        self.data
            .applications
            .iter()
            .filter(|application| application.position_id == position_id)
            .cloned()
            .collect()
    }
}
