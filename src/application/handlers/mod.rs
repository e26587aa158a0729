//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Every
//! handler works against one user context, represented by the
//! `KeyValueStore` it is constructed with.

pub mod assessment;
pub mod draft;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_support;

pub use assessment::{
    BeginAssessmentHandler, BeginAssessmentQuery, BeginAssessmentResult, SubmitAnswersCommand,
    SubmitAnswersHandler, SubmitAnswersResult,
};
pub use draft::{
    DiscardDraftCommand, DiscardDraftHandler, DiscardDraftResult, GetDraftHandler, GetDraftQuery,
    RecordAnswerCommand, RecordAnswerHandler, ResumeDraftCommand, ResumeDraftHandler,
    ResumeDraftResult, StartDraftCommand, StartDraftHandler, StartDraftResult,
};
pub use profile::{GetCompletenessHandler, GetCoverageHandler, GetProfileHandler};
