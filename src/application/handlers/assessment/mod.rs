//! Assessment entry and submission handlers.

mod begin_assessment;
mod submit_answers;

pub use begin_assessment::{BeginAssessmentHandler, BeginAssessmentQuery, BeginAssessmentResult};
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult};
