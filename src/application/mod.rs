//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
mod store;

pub use handlers::{
    // Assessment handlers
    BeginAssessmentHandler, BeginAssessmentQuery, BeginAssessmentResult,
    SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult,
    // Draft handlers
    DiscardDraftCommand, DiscardDraftHandler, DiscardDraftResult,
    GetDraftHandler, GetDraftQuery,
    RecordAnswerCommand, RecordAnswerHandler,
    ResumeDraftCommand, ResumeDraftHandler, ResumeDraftResult,
    StartDraftCommand, StartDraftHandler, StartDraftResult,
    // Profile handlers
    GetCompletenessHandler, GetCoverageHandler, GetProfileHandler,
};
pub use store::AssessmentStore;
