use super::domain::{
    Applicant, ApplicantId, Application, ApplicationAnswer, ApplicationId, PositionId,
    PositionQuestion, PositionQuestionId, PositionQuestionOption, Question, QuestionId,
    QuestionOption,
};

/// Read-only view over questionnaire configuration and submitted applications.
///
/// Lookups never fail: a missing record is `None` and an empty relation is an empty `Vec`.
/// Implementations must return collections in a stable order so rankings and breakdowns are
/// reproducible between runs.
pub trait QuestionnaireStore: Send + Sync {
    fn question(&self, id: QuestionId) -> Option<Question>;

    fn application(&self, id: ApplicationId) -> Option<Application>;

    fn applicant(&self, id: ApplicantId) -> Option<Applicant>;

    fn options_for_question(&self, question_id: QuestionId) -> Vec<QuestionOption>;

    /// Assignment of `question_id` to `position_id`, if any. Lowest id wins on duplicates.
    fn position_question(
        &self,
        position_id: PositionId,
        question_id: QuestionId,
    ) -> Option<PositionQuestion>;

    fn position_question_options(
        &self,
        position_question_id: PositionQuestionId,
    ) -> Vec<PositionQuestionOption>;

    /// Assignments for a position, sorted by `(order, id)`.
    fn position_questions_for_position(&self, position_id: PositionId) -> Vec<PositionQuestion>;

    fn answers_for_application(&self, application_id: ApplicationId) -> Vec<ApplicationAnswer>;

    fn answers_for_question(&self, question_id: QuestionId) -> Vec<ApplicationAnswer>;

    fn applications_for_position(&self, position_id: PositionId) -> Vec<Application>;
}
